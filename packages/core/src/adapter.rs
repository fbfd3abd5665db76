//! Container adapters - one small capability per representation.
//!
//! The engine never branches on `Value` variants while traversing a key
//! path. Instead the guard selects one of two adapters up front and the
//! traversal goes through this capability interface. The adapters are
//! also the integration point for adjacent helper crates that need to
//! walk containers without re-implementing representation handling.
//!
//! # Object Safety
//!
//! The trait is object-safe: the engine threads `&'static dyn
//! ContainerAdapter` obtained from [`Mode::adapter`].

use crate::{Mode, Value};

/// Operations every container representation supports.
///
/// Mutating methods are defined for containers of the adapter's own
/// representation; handed a value of any other shape they do nothing,
/// and reads report absence. Guarded call paths never hit that case.
pub trait ContainerAdapter: Send + Sync {
    /// The mode this adapter implements.
    fn mode(&self) -> Mode;

    /// Check whether a value is a container of this representation.
    fn is_container(&self, value: &Value) -> bool;

    /// A fresh empty container of this representation.
    fn empty(&self) -> Value;

    /// Check declared membership of a key.
    ///
    /// For records this answers "is this a real, addressable member";
    /// a declared-but-unset member counts as present.
    fn has_key(&self, container: &Value, key: &str) -> bool;

    /// Read the value held at a key.
    ///
    /// Returns `None` for an absent key, a non-container value, or a
    /// record member that is declared but not yet assigned.
    fn get<'a>(&self, container: &'a Value, key: &str) -> Option<&'a Value>;

    /// Read the value held at a key, mutably.
    fn get_mut<'a>(&self, container: &'a mut Value, key: &str) -> Option<&'a mut Value>;

    /// Assign a value at a key, inserting the key if absent.
    fn set(&self, container: &mut Value, key: &str, value: Value);

    /// Remove a key. Absence is ignored.
    fn unset(&self, container: &mut Value, key: &str);

    /// Empty the container's immediate contents in place, preserving its
    /// identity and representation.
    fn clear(&self, container: &mut Value);

    /// Names of all members, in container order.
    fn member_names(&self, container: &Value) -> Vec<String>;

    /// Check whether the member at a key holds a usable value.
    ///
    /// This is the detection hook for the record representation's
    /// declared-but-unset state. Mapping members are always either
    /// present with a value or absent, so the mapping adapter reports
    /// every present member as initialized.
    fn is_initialized(&self, container: &Value, key: &str) -> bool;
}

/// Adapter for the Mapping representation (`Value::Map`).
pub struct MapAdapter;

impl ContainerAdapter for MapAdapter {
    fn mode(&self) -> Mode {
        Mode::Mapping
    }

    fn is_container(&self, value: &Value) -> bool {
        value.is_map()
    }

    fn empty(&self) -> Value {
        Value::map()
    }

    fn has_key(&self, container: &Value, key: &str) -> bool {
        container.as_map().is_some_and(|map| map.contains_key(key))
    }

    fn get<'a>(&self, container: &'a Value, key: &str) -> Option<&'a Value> {
        container.as_map().and_then(|map| map.get(key))
    }

    fn get_mut<'a>(&self, container: &'a mut Value, key: &str) -> Option<&'a mut Value> {
        container.as_map_mut().and_then(|map| map.get_mut(key))
    }

    fn set(&self, container: &mut Value, key: &str, value: Value) {
        if let Some(map) = container.as_map_mut() {
            map.insert(key.to_string(), value);
        }
    }

    fn unset(&self, container: &mut Value, key: &str) {
        if let Some(map) = container.as_map_mut() {
            map.remove(key);
        }
    }

    fn clear(&self, container: &mut Value) {
        if let Some(map) = container.as_map_mut() {
            map.clear();
        }
    }

    fn member_names(&self, container: &Value) -> Vec<String> {
        container
            .as_map()
            .map(|map| map.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn is_initialized(&self, container: &Value, key: &str) -> bool {
        self.has_key(container, key)
    }
}

/// Adapter for the Record representation (`Value::Record`).
pub struct RecordAdapter;

impl ContainerAdapter for RecordAdapter {
    fn mode(&self) -> Mode {
        Mode::Record
    }

    fn is_container(&self, value: &Value) -> bool {
        value.is_record()
    }

    fn empty(&self) -> Value {
        Value::record()
    }

    fn has_key(&self, container: &Value, key: &str) -> bool {
        container
            .as_record()
            .is_some_and(|record| record.contains(key))
    }

    fn get<'a>(&self, container: &'a Value, key: &str) -> Option<&'a Value> {
        container.as_record().and_then(|record| record.get(key))
    }

    fn get_mut<'a>(&self, container: &'a mut Value, key: &str) -> Option<&'a mut Value> {
        container
            .as_record_mut()
            .and_then(|record| record.get_mut(key))
    }

    fn set(&self, container: &mut Value, key: &str, value: Value) {
        if let Some(record) = container.as_record_mut() {
            record.insert(key, value);
        }
    }

    fn unset(&self, container: &mut Value, key: &str) {
        if let Some(record) = container.as_record_mut() {
            record.remove(key);
        }
    }

    fn clear(&self, container: &mut Value) {
        if let Some(record) = container.as_record_mut() {
            record.clear();
        }
    }

    fn member_names(&self, container: &Value) -> Vec<String> {
        container
            .as_record()
            .map(|record| record.member_names().map(String::from).collect())
            .unwrap_or_default()
    }

    fn is_initialized(&self, container: &Value, key: &str) -> bool {
        container
            .as_record()
            .is_some_and(|record| record.is_initialized(key))
    }
}
