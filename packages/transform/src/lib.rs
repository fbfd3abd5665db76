//! Map transformation helpers: merge, flatten, expand, pick, omit, clean.
//!
//! These are the flat, single-pass collaborators around the accessor
//! engine. They operate on mapping documents and go through the core's
//! public operations and the Mapping container adapter for anything
//! path-shaped; none of them implement their own representation
//! handling, and the core never calls back into them.

use std::collections::BTreeMap;

use docpath_core::{
    delete_key_values, set_key_value, split_key, Error, Mode, Result, Value,
};

/// Merge `overlay` into `target`, recursing where both sides hold maps.
///
/// Non-map values (and map-vs-non-map collisions) are overwritten by the
/// overlay side. Mutates `target` in place.
pub fn deep_merge(target: &mut Value, overlay: &Value) {
    if let (Value::Map(target_map), Value::Map(overlay_map)) = (&mut *target, overlay) {
        for (key, overlay_value) in overlay_map {
            match target_map.get_mut(key) {
                Some(existing) if existing.is_map() && overlay_value.is_map() => {
                    deep_merge(existing, overlay_value);
                }
                _ => {
                    target_map.insert(key.clone(), overlay_value.clone());
                }
            }
        }
    } else {
        *target = overlay.clone();
    }
}

/// Flatten a nested mapping into a one-level mapping with
/// separator-joined keys.
///
/// Empty nested maps are kept as leaves so no entries are lost.
pub fn flatten(doc: &Value, separator: &str) -> Result<Value> {
    let map = require_map(doc)?;
    let mut out = BTreeMap::new();
    flatten_into(map, separator, "", &mut out);
    Ok(Value::Map(out))
}

fn flatten_into(
    map: &BTreeMap<String, Value>,
    separator: &str,
    prefix: &str,
    out: &mut BTreeMap<String, Value>,
) {
    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}{separator}{key}")
        };
        match value {
            Value::Map(inner) if !inner.is_empty() => flatten_into(inner, separator, &path, out),
            other => {
                out.insert(path, other.clone());
            }
        }
    }
}

/// Rebuild a nested mapping from a flattened one (the inverse of
/// [`flatten`]). Each flat key is written through the engine, so nested
/// containers materialize the usual way.
pub fn expand(flat: &Value, separator: &str) -> Result<Value> {
    let map = require_map(flat)?;
    let mut out = Value::map();
    for (key, value) in map {
        set_key_value(&mut out, key, value.clone(), separator, Some(Mode::Mapping))?;
    }
    Ok(out)
}

/// Copy only the given key paths into a new mapping document.
///
/// Paths that do not resolve are skipped.
pub fn pick(doc: &Value, keys: &[&str], separator: &str) -> Result<Value> {
    require_map(doc)?;
    let mut out = Value::map();
    for key in keys {
        let segments = split_key(key, separator);
        if let Some(value) = lookup(doc, &segments) {
            set_key_value(&mut out, key, value.clone(), separator, Some(Mode::Mapping))?;
        }
    }
    Ok(out)
}

/// Copy the document with the given key paths removed.
pub fn omit(doc: &Value, keys: &[&str], separator: &str) -> Result<Value> {
    require_map(doc)?;
    let mut out = doc.clone();
    delete_key_values(&mut out, keys, separator, Some(Mode::Mapping), false)?;
    Ok(out)
}

/// Copy the document with null, empty-string and empty-container entries
/// dropped, recursively. Zeroes and `false` are kept.
pub fn clean(value: &Value) -> Value {
    match value {
        Value::Map(map) => Value::Map(
            map.iter()
                .filter_map(|(key, held)| {
                    let cleaned = clean(held);
                    (!is_blank(&cleaned)).then(|| (key.clone(), cleaned))
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(clean)
                .filter(|item| !is_blank(item))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Map(map) => map.is_empty(),
        _ => false,
    }
}

fn require_map(doc: &Value) -> Result<&BTreeMap<String, Value>> {
    doc.as_map().ok_or_else(|| {
        Error::invalid_argument(format!(
            "Document must be a mapping (found {}).",
            doc.type_name()
        ))
    })
}

/// Walk a pre-split path through the Mapping adapter.
fn lookup<'a>(doc: &'a Value, segments: &[String]) -> Option<&'a Value> {
    let adapter = Mode::Mapping.adapter();
    let (last, parents) = segments.split_last()?;
    let mut current = doc;
    for segment in parents {
        match adapter.get(current, segment) {
            Some(held) if adapter.is_container(held) => current = held,
            _ => return None,
        }
    }
    adapter.get(current, last)
}
