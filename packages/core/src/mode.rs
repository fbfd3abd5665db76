//! The Mode tag - which container representation governs a key path.
//!
//! Mode is resolved once per top-level call (explicit override or
//! inferred from the document's runtime shape by the guard) and threaded
//! explicitly through every traversal. It is never re-detected mid-walk.

use std::fmt;

use crate::adapter::{ContainerAdapter, MapAdapter, RecordAdapter};
use crate::Value;

static MAP_ADAPTER: MapAdapter = MapAdapter;
static RECORD_ADAPTER: RecordAdapter = RecordAdapter;

/// Which of the two container representations governs a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Ordered key→value mapping (`Value::Map`).
    Mapping,
    /// Keyed aggregate with named members (`Value::Record`).
    Record,
}

impl Mode {
    /// Infer the mode from a document's runtime shape.
    ///
    /// Returns `None` for values that are neither representation.
    pub fn infer(doc: &Value) -> Option<Mode> {
        match doc {
            Value::Map(_) => Some(Mode::Mapping),
            Value::Record(_) => Some(Mode::Record),
            _ => None,
        }
    }

    /// Check whether a value's shape matches this mode.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Mode::Mapping => value.is_map(),
            Mode::Record => value.is_record(),
        }
    }

    /// The container adapter implementing this mode's operations.
    pub fn adapter(&self) -> &'static dyn ContainerAdapter {
        match self {
            Mode::Mapping => &MAP_ADAPTER,
            Mode::Record => &RECORD_ADAPTER,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Mapping => write!(f, "mapping"),
            Mode::Record => write!(f, "record"),
        }
    }
}
