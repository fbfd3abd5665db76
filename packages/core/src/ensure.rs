//! Idempotent key initialization: `ensure_key_value` and batch forms.
//!
//! Ensure guarantees a key path exists, computing its default lazily:
//! the default factory runs only when an insertion actually happens,
//! at most once per inserted key. When the key already holds a usable
//! value (including null) the operation is a no-op.
//!
//! The `enforce` flag additionally treats a declared-but-unset record
//! member as absent. The detection goes through the container adapter's
//! `is_initialized` hook, which for mappings always reports initialized,
//! so mapping-mode behavior is unaffected by `enforce`.

use std::fmt;

use log::debug;

use crate::{guard, has_key_value, set_key_value, split_key, Mode, Result, Value};

/// A default for `ensure`: either a literal value or a zero-argument
/// factory invoked lazily on the insertion path.
pub enum DefaultValue {
    /// A literal value, cloned into place on insertion.
    Literal(Value),
    /// A factory invoked at most once per inserted key, and only when
    /// insertion is actually required.
    Factory(Box<dyn Fn() -> Value>),
}

impl DefaultValue {
    /// Create a literal default.
    pub fn literal(value: impl Into<Value>) -> Self {
        DefaultValue::Literal(value.into())
    }

    /// Create a factory default.
    pub fn factory(f: impl Fn() -> Value + 'static) -> Self {
        DefaultValue::Factory(Box::new(f))
    }

    /// Produce the value to insert.
    pub fn produce(&self) -> Value {
        match self {
            DefaultValue::Literal(value) => value.clone(),
            DefaultValue::Factory(f) => f(),
        }
    }
}

impl From<Value> for DefaultValue {
    fn from(value: Value) -> Self {
        DefaultValue::Literal(value)
    }
}

impl fmt::Debug for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            DefaultValue::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}

/// Guarantee that a key path exists, inserting a default if it does not.
pub fn ensure_key_value(
    doc: &mut Value,
    key: &str,
    default: &DefaultValue,
    separator: &str,
    mode: Option<Mode>,
    enforce: bool,
) -> Result<()> {
    ensure_one(doc, key, default, separator, mode, enforce)
}

/// Guarantee that each key in a list exists, all sharing one default.
///
/// Keys are processed in the order given.
pub fn ensure_key_values(
    doc: &mut Value,
    keys: &[&str],
    default: &DefaultValue,
    separator: &str,
    mode: Option<Mode>,
    enforce: bool,
) -> Result<()> {
    for key in keys {
        ensure_one(doc, key, default, separator, mode, enforce)?;
    }
    Ok(())
}

/// Guarantee keys with per-key defaults.
///
/// Entries are processed in the order given; an entry without its own
/// default falls back to `fallback`.
pub fn ensure_key_defaults(
    doc: &mut Value,
    entries: &[(&str, Option<&DefaultValue>)],
    fallback: &DefaultValue,
    separator: &str,
    mode: Option<Mode>,
    enforce: bool,
) -> Result<()> {
    for &(key, default) in entries {
        ensure_one(doc, key, default.unwrap_or(fallback), separator, mode, enforce)?;
    }
    Ok(())
}

fn ensure_one(
    doc: &mut Value,
    key: &str,
    default: &DefaultValue,
    separator: &str,
    mode: Option<Mode>,
    enforce: bool,
) -> Result<()> {
    let mode = guard(doc, key, separator, mode)?;

    if has_key_value(doc, key, separator, Some(mode))? {
        if mode == Mode::Record && enforce && !terminal_initialized(doc, key, separator, mode) {
            debug!("enforcing default for uninitialized member at '{}'", key);
            return set_key_value(doc, key, default.produce(), separator, Some(mode));
        }
        // Existing usable value, including null: no-op.
        return Ok(());
    }

    set_key_value(doc, key, default.produce(), separator, Some(mode))
}

/// Whether the terminal member of an existing key path holds a value.
///
/// Only called after `has_key_value` reported the path present, so every
/// intermediate is a container of the mode.
fn terminal_initialized(doc: &Value, key: &str, separator: &str, mode: Mode) -> bool {
    let adapter = mode.adapter();
    let segments = split_key(key, separator);
    let (last, parents) = segments
        .split_last()
        .expect("key paths have at least one segment");

    let mut current = doc;
    for segment in parents {
        match adapter.get(current, segment) {
            Some(held) if adapter.is_container(held) => current = held,
            _ => return true,
        }
    }
    adapter.is_initialized(current, last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{get_key_value, Record};
    use collection_literals::btree;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn inserts_when_absent() {
        let mut doc = Value::map();
        ensure_key_value(
            &mut doc,
            "role",
            &DefaultValue::literal("guest"),
            ".",
            None,
            false,
        )
        .unwrap();
        assert_eq!(
            get_key_value(&doc, "role", None).unwrap(),
            Some(&Value::from("guest"))
        );
    }

    #[test]
    fn noop_when_present_even_if_null() {
        let mut doc = Value::Map(btree! { "x".into() => Value::Null });
        ensure_key_value(&mut doc, "x", &DefaultValue::literal(99), ".", None, false).unwrap();
        assert_eq!(get_key_value(&doc, "x", None).unwrap(), Some(&Value::Null));
    }

    #[test]
    fn factory_runs_only_on_insertion() {
        let calls = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&calls);
        let default = DefaultValue::factory(move || {
            counter.set(counter.get() + 1);
            Value::from("made")
        });

        let mut doc = Value::Map(btree! { "present".into() => Value::from(1) });

        ensure_key_value(&mut doc, "present", &default, ".", None, false).unwrap();
        assert_eq!(calls.get(), 0, "no insertion, factory must not run");

        ensure_key_value(&mut doc, "missing", &default, ".", None, false).unwrap();
        assert_eq!(calls.get(), 1);
        assert_eq!(
            get_key_value(&doc, "missing", None).unwrap(),
            Some(&Value::from("made"))
        );
    }

    #[test]
    fn shared_default_across_key_list() {
        let mut doc = Value::map();
        ensure_key_values(
            &mut doc,
            &["role", "active"],
            &DefaultValue::literal(true),
            ".",
            None,
            false,
        )
        .unwrap();
        assert_eq!(
            get_key_value(&doc, "role", None).unwrap(),
            Some(&Value::from(true))
        );
        assert_eq!(
            get_key_value(&doc, "active", None).unwrap(),
            Some(&Value::from(true))
        );
    }

    #[test]
    fn per_key_defaults_with_fallback() {
        let mut doc = Value::map();
        let role = DefaultValue::literal("guest");
        ensure_key_defaults(
            &mut doc,
            &[("role", Some(&role)), ("active", None)],
            &DefaultValue::literal(true),
            ".",
            None,
            false,
        )
        .unwrap();
        assert_eq!(
            get_key_value(&doc, "role", None).unwrap(),
            Some(&Value::from("guest"))
        );
        assert_eq!(
            get_key_value(&doc, "active", None).unwrap(),
            Some(&Value::from(true))
        );
    }

    #[test]
    fn nested_paths_materialize() {
        let mut doc = Value::map();
        ensure_key_value(
            &mut doc,
            "settings.theme",
            &DefaultValue::literal("dark"),
            ".",
            None,
            false,
        )
        .unwrap();
        assert!(crate::has_key_value(&doc, "settings.theme", ".", None).unwrap());
    }

    #[test]
    fn enforce_initializes_declared_unset_member() {
        let mut record = Record::new();
        record.declare("name");
        let mut doc = Value::Record(record);

        // Without enforce, declared membership is enough: no-op.
        ensure_key_value(
            &mut doc,
            "name",
            &DefaultValue::literal("anonymous"),
            ".",
            None,
            false,
        )
        .unwrap();
        assert!(!doc.as_record().unwrap().is_initialized("name"));

        // With enforce, the unset member is treated as absent.
        ensure_key_value(
            &mut doc,
            "name",
            &DefaultValue::literal("anonymous"),
            ".",
            None,
            true,
        )
        .unwrap();
        assert_eq!(
            doc.as_record().unwrap().get("name"),
            Some(&Value::from("anonymous"))
        );
    }

    #[test]
    fn enforce_leaves_assigned_member_alone() {
        let mut record = Record::new();
        record.insert("name", Value::from("Ada"));
        let mut doc = Value::Record(record);

        ensure_key_value(
            &mut doc,
            "name",
            &DefaultValue::literal("anonymous"),
            ".",
            None,
            true,
        )
        .unwrap();
        assert_eq!(
            doc.as_record().unwrap().get("name"),
            Some(&Value::from("Ada"))
        );
    }

    #[test]
    fn enforce_is_inert_in_mapping_mode() {
        let mut doc = Value::Map(btree! { "x".into() => Value::Null });
        let before = doc.clone();
        ensure_key_value(&mut doc, "x", &DefaultValue::literal(1), ".", None, true).unwrap();
        assert_eq!(doc, before);
    }

    #[test]
    fn guard_failures_leave_document_untouched() {
        let mut doc = Value::map();
        let before = doc.clone();
        assert!(
            ensure_key_value(&mut doc, "", &DefaultValue::literal(1), ".", None, false).is_err()
        );
        assert_eq!(doc, before);
    }
}
