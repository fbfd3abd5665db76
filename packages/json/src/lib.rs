//! JSON interop for docpath documents.
//!
//! Converts between `serde_json::Value` and [`docpath_core::Value`] so
//! documents can be built from `serde_json::json!` literals and dumped
//! for inspection.
//!
//! Records are one-way: they serialize as JSON objects (declared-but-
//! unset members are skipped, since JSON has no third member state), and
//! parsing never produces a record - JSON objects always come back as
//! maps.

use std::collections::BTreeMap;

use docpath_core::{Error, Result, Value};
use serde_json::Value as JsonValue;

/// Convert a parsed JSON value into a docpath document value.
pub fn to_value(json: JsonValue) -> Value {
    match json {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(b),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Integer(i)
            } else {
                Value::Float(n.as_f64().unwrap_or(0.0))
            }
        }
        JsonValue::String(s) => Value::String(s),
        JsonValue::Array(items) => Value::Array(items.into_iter().map(to_value).collect()),
        JsonValue::Object(entries) => {
            let map: BTreeMap<String, Value> = entries
                .into_iter()
                .map(|(k, v)| (k, to_value(v)))
                .collect();
            Value::Map(map)
        }
    }
}

/// Convert a docpath document value into a JSON value.
///
/// Records become objects with their unset members skipped. Non-finite
/// floats become JSON null, which is what `serde_json` itself does when
/// serializing them leniently.
pub fn from_value(value: &Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Integer(i) => JsonValue::from(*i),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        Value::String(s) => JsonValue::String(s.clone()),
        Value::Array(items) => JsonValue::Array(items.iter().map(from_value).collect()),
        Value::Map(map) => JsonValue::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), from_value(v)))
                .collect(),
        ),
        Value::Record(record) => JsonValue::Object(
            record
                .iter()
                .filter_map(|(name, member)| member.map(|v| (name.to_string(), from_value(v))))
                .collect(),
        ),
    }
}

/// Parse a JSON string into a docpath document value.
pub fn parse_document(json: &str) -> Result<Value> {
    let parsed: JsonValue = serde_json::from_str(json)
        .map_err(|e| Error::invalid_argument(format!("Invalid JSON document: {e}.")))?;
    Ok(to_value(parsed))
}

/// Serialize a docpath document value to a JSON string.
pub fn to_json_string(value: &Value) -> String {
    from_value(value).to_string()
}
