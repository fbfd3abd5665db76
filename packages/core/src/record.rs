//! The Record type - a keyed aggregate with declared members.
//!
//! A `Record` is the struct-like counterpart to `Value::Map`. Its members
//! are addressed dynamically by name, and each member is in one of two
//! states: assigned a value, or *declared but not yet assigned*. The
//! second state is distinct from both "member absent" and `Value::Null`;
//! it models field declarations that exist before any value is written.
//!
//! Membership checks (`contains`) answer "is this a real, addressable
//! member", so a declared-but-unset member counts as present. Reads
//! through `get` answer "is there a usable value here", so the same
//! member reads as `None`.

use std::collections::BTreeMap;

use crate::Value;

/// A keyed aggregate of named members.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    // None = declared but not yet assigned.
    members: BTreeMap<String, Option<Value>>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self {
            members: BTreeMap::new(),
        }
    }

    /// Declare a member without assigning it a value.
    ///
    /// An already-assigned member is left untouched.
    pub fn declare(&mut self, name: impl Into<String>) {
        self.members.entry(name.into()).or_insert(None);
    }

    /// Assign a value to a member, declaring it if needed.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.members.insert(name.into(), Some(value)).flatten()
    }

    /// Read a member's value.
    ///
    /// Returns `None` both when the member is absent and when it is
    /// declared but not yet assigned. Use [`Record::contains`] and
    /// [`Record::is_initialized`] to distinguish the two.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.members.get(name).and_then(|m| m.as_ref())
    }

    /// Read a member's value mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.members.get_mut(name).and_then(|m| m.as_mut())
    }

    /// Check declared membership.
    ///
    /// A declared-but-unset member counts as present.
    pub fn contains(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    /// Check whether a member is declared *and* assigned a value.
    pub fn is_initialized(&self, name: &str) -> bool {
        matches!(self.members.get(name), Some(Some(_)))
    }

    /// Remove a member entirely, returning its value if it had one.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.members.remove(name).flatten()
    }

    /// Strip every member from the record.
    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Names of all declared members, assigned or not.
    pub fn member_names(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    /// Iterate over members; unassigned members yield `None` values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.members.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    /// Number of declared members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the record has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().map(|(k, v)| (k, Some(v))).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_member_is_present_but_uninitialized() {
        let mut record = Record::new();
        record.declare("name");

        assert!(record.contains("name"));
        assert!(!record.is_initialized("name"));
        assert_eq!(record.get("name"), None);
    }

    #[test]
    fn assigned_member_reads_back() {
        let mut record = Record::new();
        record.insert("name", Value::from("Alice"));

        assert!(record.contains("name"));
        assert!(record.is_initialized("name"));
        assert_eq!(record.get("name"), Some(&Value::from("Alice")));
    }

    #[test]
    fn null_is_an_assigned_value() {
        let mut record = Record::new();
        record.insert("maybe", Value::Null);

        assert!(record.is_initialized("maybe"));
        assert_eq!(record.get("maybe"), Some(&Value::Null));
    }

    #[test]
    fn declare_does_not_clobber_assignment() {
        let mut record = Record::new();
        record.insert("x", Value::from(1));
        record.declare("x");
        assert_eq!(record.get("x"), Some(&Value::from(1)));
    }

    #[test]
    fn remove_and_clear() {
        let mut record: Record = [
            ("a".to_string(), Value::from(1)),
            ("b".to_string(), Value::from(2)),
        ]
        .into_iter()
        .collect();

        assert_eq!(record.remove("a"), Some(Value::from(1)));
        assert!(!record.contains("a"));

        record.clear();
        assert!(record.is_empty());
    }

    #[test]
    fn member_names_include_unassigned() {
        let mut record = Record::new();
        record.insert("a", Value::from(1));
        record.declare("b");

        let names: Vec<&str> = record.member_names().collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
