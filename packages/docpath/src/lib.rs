//! docpath: a path-based document accessor engine.
//!
//! One crate pulling the family together: the core accessor engine plus
//! its JSON interop, map transformation, and templating companions. All
//! data access happens through the same delimiter-separated key paths
//! (`"user.address.city"`) over mapping or record documents.
//!
//! ```rust
//! use docpath::{set_key_value, Value};
//!
//! let mut doc = Value::map();
//! set_key_value(&mut doc, "user.name", Value::from("Bob"), ".", None).unwrap();
//! assert_eq!(docpath::json::to_json_string(&doc), r#"{"user":{"name":"Bob"}}"#);
//! ```

pub use docpath_core::*;

pub use docpath_json as json;
pub use docpath_template as template;
pub use docpath_transform as transform;
