//! Path resolution and the Slot handle.
//!
//! `resolve_path` walks a key path's non-terminal segments, lazily
//! materializing intermediate containers of the resolved mode, and
//! returns a [`Slot`]: a (container, terminal key) handle borrowed from
//! the original document's internal structure. All terminal mutation goes
//! through the slot, so it is visible on the document the caller holds.

use log::trace;

use crate::{Mode, Value};

/// A mutable handle on the container that holds (or will hold) a key
/// path's terminal segment.
pub struct Slot<'doc, 'key> {
    container: &'doc mut Value,
    key: &'key str,
    mode: Mode,
}

impl Slot<'_, '_> {
    /// The terminal segment this slot addresses.
    pub fn key(&self) -> &str {
        self.key
    }

    /// The mode the slot's container was resolved under.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Check declared membership of the terminal key.
    pub fn exists(&self) -> bool {
        self.mode.adapter().has_key(self.container, self.key)
    }

    /// Read the terminal value.
    pub fn get(&self) -> Option<&Value> {
        self.mode.adapter().get(self.container, self.key)
    }

    /// Read the terminal value mutably.
    pub fn get_mut(&mut self) -> Option<&mut Value> {
        self.mode.adapter().get_mut(self.container, self.key)
    }

    /// Assign the terminal value.
    pub fn set(&mut self, value: Value) {
        self.mode.adapter().set(self.container, self.key, value);
    }

    /// Remove the terminal key. Absence is ignored.
    pub fn unset(&mut self) {
        self.mode.adapter().unset(self.container, self.key);
    }
}

/// Resolve a key path to the slot for its terminal segment.
///
/// For every non-terminal segment: if the current container lacks the
/// key, or the value stored there is not a container of `mode`, it is
/// replaced with a fresh empty container of `mode` before descending.
/// The walk descends by mutable reference, never by copy, so the
/// returned slot points into `doc` itself.
///
/// The caller must have guarded `doc`: its top level is a container of
/// `mode`, and `segments` is non-empty (any non-empty key splits into at
/// least one segment).
pub fn resolve_path<'doc, 'key>(
    doc: &'doc mut Value,
    segments: &'key [String],
    mode: Mode,
) -> Slot<'doc, 'key> {
    let (last, parents) = segments
        .split_last()
        .expect("key paths have at least one segment");

    Slot {
        container: descend(doc, parents, mode),
        key: last,
        mode,
    }
}

/// Walk the non-terminal segments, materializing as needed.
fn descend<'doc>(container: &'doc mut Value, parents: &[String], mode: Mode) -> &'doc mut Value {
    let adapter = mode.adapter();
    match parents {
        [] => container,
        [segment, rest @ ..] => {
            let holds_container = adapter
                .get(container, segment)
                .is_some_and(|held| adapter.is_container(held));
            if !holds_container {
                trace!(
                    "materializing intermediate {} container at '{}'",
                    mode,
                    segment
                );
                adapter.set(container, segment, adapter.empty());
            }
            let child = adapter
                .get_mut(container, segment)
                .expect("intermediate container was just materialized");
            descend(child, rest, mode)
        }
    }
}
