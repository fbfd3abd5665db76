//! Path-based assignment: `set_key_value` and the sibling `set_value`.

use crate::{guard, resolve_path, split_key, Mode, Result, Value};

/// Assign a value at a key path, creating intermediate containers of the
/// resolved mode as needed.
///
/// A single-segment key is assigned directly into the document. A
/// multi-segment key resolves the slot for the parent of the last segment
/// and writes through it. The document is mutated in place.
pub fn set_key_value(
    doc: &mut Value,
    key: &str,
    value: Value,
    separator: &str,
    mode: Option<Mode>,
) -> Result<()> {
    let mode = guard(doc, key, separator, mode)?;
    let segments = split_key(key, separator);

    if segments.len() == 1 {
        mode.adapter().set(doc, key, value);
        return Ok(());
    }

    let mut slot = resolve_path(doc, &segments, mode);
    slot.set(value);
    Ok(())
}

/// Assign a value into a caller-held target.
///
/// With `Some(key)` this is exactly [`set_key_value`]. A `None` key is
/// the documented convenience meaning "replace the whole target value";
/// no guard runs in that case since no key path is interpreted.
pub fn set_value(
    target: &mut Value,
    key: Option<&str>,
    value: Value,
    separator: &str,
    mode: Option<Mode>,
) -> Result<()> {
    match key {
        None => {
            *target = value;
            Ok(())
        }
        Some(key) => set_key_value(target, key, value, separator, mode),
    }
}
