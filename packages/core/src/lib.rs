//! docpath core: a path-based document accessor engine.
//!
//! The engine reads, writes, checks existence of, deletes, and lazily
//! default-initializes values inside a hierarchical document addressed by
//! delimiter-separated key paths (`"user.address.city"`). A document is
//! either a [`Value::Map`] (ordered key→value mapping) or a
//! [`Value::Record`] (keyed aggregate whose members may be declared
//! without being assigned); the engine treats both uniformly through the
//! [`ContainerAdapter`] capability while preserving the correct
//! representation at every traversed level.
//!
//! # The four operations
//!
//! - **get/has** ([`get_key_value`], [`has_key_value`]) - non-mutating
//!   lookups
//! - **set** ([`set_key_value`]) - assignment with lazy creation of
//!   intermediate containers
//! - **delete** ([`delete_key_value`], [`delete_key_values`]) - removal
//!   of one key, a batch, or wildcard clears (`"*"`, `"meta.*"`)
//! - **ensure** ([`ensure_key_value`] and batch forms) - idempotent
//!   initialization with lazily computed defaults
//!
//! Every operation first resolves which [`Mode`] governs the document
//! (explicit override or inferred shape) via [`guard`], then - when
//! mutation is needed - resolves a [`Slot`] through [`resolve_path`] and
//! performs its terminal logic through that handle.
//!
//! # Example
//!
//! ```rust
//! use docpath_core::{get_key_value, has_key_value, set_key_value, Value};
//!
//! let mut doc = Value::map();
//! set_key_value(&mut doc, "user.name", Value::from("Bob"), ".", None).unwrap();
//!
//! assert!(has_key_value(&doc, "user.name", ".", None).unwrap());
//! let user = doc.as_map().unwrap().get("user").unwrap();
//! assert_eq!(get_key_value(user, "name", None).unwrap(), Some(&Value::from("Bob")));
//! ```
//!
//! # Concurrency
//!
//! Execution is single-threaded, synchronous and CPU-bound. The document
//! is caller-owned; Rust's borrow rules give every call exclusive access
//! for its duration. Batch operations are explicitly sequential because
//! later entries may observe containers created or cleared by earlier
//! ones.

mod adapter;
mod delete;
mod ensure;
mod error;
mod guard;
mod key;
mod mode;
mod read;
mod record;
mod slot;
mod value;
mod write;

pub use adapter::{ContainerAdapter, MapAdapter, RecordAdapter};
pub use delete::{delete_key_value, delete_key_values};
pub use ensure::{ensure_key_defaults, ensure_key_value, ensure_key_values, DefaultValue};
pub use error::{Error, Result};
pub use guard::guard;
pub use key::{split_key, DEFAULT_SEPARATOR, WILDCARD};
pub use mode::Mode;
pub use read::{get_key_value, has_key_value};
pub use record::Record;
pub use slot::{resolve_path, Slot};
pub use value::Value;
pub use write::{set_key_value, set_value};
