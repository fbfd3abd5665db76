//! Path-based removal: plain keys, key batches, and wildcard clears.
//!
//! Three key forms are handled per key, in this order:
//!
//! 1. the global wildcard `"*"` clears the entire document in place;
//! 2. a local wildcard (`"meta.*"`) empties the container addressed by
//!    the path before the wildcard, if it currently holds one;
//! 3. a plain path unsets its terminal key.
//!
//! Strict mode requires the addressed key to exist before removal;
//! wildcard keys are exempt from the plain-key check (the local form
//! checks its target path instead).

use log::debug;

use crate::key::{classify_key, KeyForm};
use crate::{guard, has_key_value, resolve_path, split_key, Error, Mode, Result, Value};

/// Remove the entry at a key path.
///
/// In non-strict mode, deleting an absent key is a no-op. In strict mode
/// an absent key fails with `InvalidArgument` before anything is touched
/// for that key.
pub fn delete_key_value(
    doc: &mut Value,
    key: &str,
    separator: &str,
    mode: Option<Mode>,
    strict: bool,
) -> Result<()> {
    delete_one(doc, key, separator, mode, strict)
}

/// Remove a batch of key paths.
///
/// Keys are processed strictly left-to-right against the current,
/// possibly already-mutated, document; later keys may observe containers
/// created or cleared by earlier ones. A strict-mode failure aborts the
/// remainder of the batch with keys processed so far left applied; there
/// is no rollback.
pub fn delete_key_values(
    doc: &mut Value,
    keys: &[&str],
    separator: &str,
    mode: Option<Mode>,
    strict: bool,
) -> Result<()> {
    for key in keys {
        delete_one(doc, key, separator, mode, strict)?;
    }
    Ok(())
}

fn delete_one(
    doc: &mut Value,
    key: &str,
    separator: &str,
    mode: Option<Mode>,
    strict: bool,
) -> Result<()> {
    let mode = guard(doc, key, separator, mode)?;
    let adapter = mode.adapter();
    let form = classify_key(key, separator);

    if strict && form == KeyForm::Plain && !has_key_value(doc, key, separator, Some(mode))? {
        return Err(Error::invalid_argument(format!(
            "Key '{key}' does not exist."
        )));
    }

    match form {
        KeyForm::Global => {
            debug!("clearing entire {} document", mode);
            adapter.clear(doc);
            Ok(())
        }
        KeyForm::Local { target } => {
            if strict && !has_key_value(doc, target, separator, Some(mode))? {
                return Err(Error::invalid_argument(format!(
                    "Key '{target}' does not exist."
                )));
            }
            let segments = split_key(target, separator);
            let mut slot = resolve_path(doc, &segments, mode);
            match slot.get_mut() {
                // Only a container of the resolved mode is cleared; its
                // identity and representation are preserved.
                Some(held) if adapter.is_container(held) => {
                    debug!("clearing {} container at '{}'", mode, target);
                    adapter.clear(held);
                }
                // Absent or non-container target: documented no-op, even
                // when a strict check just passed against a non-container
                // value at this exact path.
                _ => {}
            }
            Ok(())
        }
        KeyForm::Plain => {
            let segments = split_key(key, separator);
            let mut slot = resolve_path(doc, &segments, mode);
            slot.unset();
            Ok(())
        }
    }
}
