//! Non-mutating lookups: `get_key_value` and `has_key_value`.

use crate::{guard, split_key, Mode, Result, Value, DEFAULT_SEPARATOR};

/// Read the value held directly under a single key.
///
/// This is the single-segment primitive: the key is looked up literally,
/// with no separator traversal. Returns `None` when the key or member is
/// absent, and also when a record member is declared but not yet
/// assigned.
pub fn get_key_value<'a>(doc: &'a Value, key: &str, mode: Option<Mode>) -> Result<Option<&'a Value>> {
    let mode = guard(doc, key, DEFAULT_SEPARATOR, mode)?;
    Ok(mode.adapter().get(doc, key))
}

/// Check whether a complete key path resolves to an existing entry.
///
/// Walks the full multi-segment path. Returns `false` the moment any
/// intermediate segment is absent or not a container of the resolved
/// mode; returns `true` only when the terminal segment is a declared
/// member of the final container. For records, presence means declared
/// membership: a declared-but-unset member reports `true`.
///
/// Never mutates the document.
pub fn has_key_value(doc: &Value, key: &str, separator: &str, mode: Option<Mode>) -> Result<bool> {
    let mode = guard(doc, key, separator, mode)?;
    let adapter = mode.adapter();
    let segments = split_key(key, separator);
    let (last, parents) = segments
        .split_last()
        .expect("key paths have at least one segment");

    let mut current = doc;
    for segment in parents {
        match adapter.get(current, segment) {
            Some(held) if adapter.is_container(held) => current = held,
            _ => return Ok(false),
        }
    }

    Ok(adapter.has_key(current, last))
}
