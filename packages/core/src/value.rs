//! The Value type - a tree-shaped document.
//!
//! This is the root data representation of the engine. A document is a
//! `Value` whose top level is one of the two container representations:
//! `Map` (an ordered key→value mapping) or `Record` (a keyed aggregate
//! whose members may be declared without being assigned).
//!
//! # Design Notes
//!
//! - Uses `BTreeMap` for deterministic ordering (important for hashing,
//!   comparison and stable test output)
//! - Uses `i64` for integers (sufficient for most use cases)
//! - `Record` carries a third per-member state ("declared but not yet
//!   assigned") that `Map` has no equivalent of; see [`crate::Record`]

use std::collections::BTreeMap;

use crate::Record;

/// A tree-shaped value addressable by delimiter-separated key paths.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// Absence of a value. Distinct from "key doesn't exist".
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed 64-bit integer.
    Integer(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    String(String),
    /// Ordered sequence of values. Not a traversable container for key
    /// paths; the engine treats it as a leaf.
    Array(Vec<Value>),
    /// Ordered key-value mapping (the Mapping representation).
    Map(BTreeMap<String, Value>),
    /// Keyed aggregate with named members (the Record representation).
    Record(Record),
}

impl Value {
    /// Create a null value.
    pub fn null() -> Self {
        Value::Null
    }

    /// Create an empty map.
    pub fn map() -> Self {
        Value::Map(BTreeMap::new())
    }

    /// Create an empty record.
    pub fn record() -> Self {
        Value::Record(Record::new())
    }

    /// Create an empty array.
    pub fn array() -> Self {
        Value::Array(Vec::new())
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if this value is a map.
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Check if this value is a record.
    pub fn is_record(&self) -> bool {
        matches!(self, Value::Record(_))
    }

    /// Check if this value is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Get the map contents, if this is a map.
    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Get the map contents mutably, if this is a map.
    pub fn as_map_mut(&mut self) -> Option<&mut BTreeMap<String, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Get the record, if this is a record.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Get the record mutably, if this is a record.
    pub fn as_record_mut(&mut self) -> Option<&mut Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Name of this value's runtime shape, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Map(_) => "mapping",
            Value::Record(_) => "record",
        }
    }
}

// Conversion from common types

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(v: BTreeMap<String, Value>) -> Self {
        Value::Map(v)
    }
}

impl From<Record> for Value {
    fn from(v: Record) -> Self {
        Value::Record(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Array(v.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use collection_literals::btree;

    #[test]
    fn type_names() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::from(true).type_name(), "boolean");
        assert_eq!(Value::from(42i64).type_name(), "integer");
        assert_eq!(Value::from(1.5).type_name(), "float");
        assert_eq!(Value::from("x").type_name(), "string");
        assert_eq!(Value::array().type_name(), "array");
        assert_eq!(Value::map().type_name(), "mapping");
        assert_eq!(Value::record().type_name(), "record");
    }

    #[test]
    fn shape_predicates() {
        assert!(Value::Null.is_null());
        assert!(Value::map().is_map());
        assert!(Value::record().is_record());
        assert!(!Value::map().is_record());
        assert!(!Value::record().is_map());
    }

    #[test]
    fn as_map_accessors() {
        let mut v = Value::Map(btree! { "a".into() => Value::from(1) });
        assert_eq!(v.as_map().unwrap().len(), 1);
        v.as_map_mut().unwrap().insert("b".into(), Value::from(2));
        assert_eq!(v.as_map().unwrap().len(), 2);
        assert!(Value::Null.as_map().is_none());
    }

    #[test]
    fn conversions() {
        assert_eq!(Value::from("hello"), Value::String("hello".to_string()));
        assert_eq!(Value::from(7i32), Value::Integer(7));
        assert_eq!(
            Value::from(vec![1i64, 2]),
            Value::Array(vec![Value::Integer(1), Value::Integer(2)])
        );
    }
}
