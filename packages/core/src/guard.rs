//! The guard - precondition checks and mode resolution.
//!
//! Every top-level operation runs the guard before touching the document,
//! so precondition failures are guaranteed to leave the document
//! untouched.

use crate::{Error, Mode, Result, Value};

/// Validate a key/separator pair and resolve which mode governs the
/// document.
///
/// - Fails if `key` or `separator` is empty.
/// - With `mode` unset, infers the mode from the document's runtime
///   shape; a document that is neither a mapping nor a record cannot be
///   traversed and fails here.
/// - With `mode` set, requires the document's top-level shape to match
///   it, naming expected vs. actual shape on mismatch.
///
/// No side effects.
pub fn guard(doc: &Value, key: &str, separator: &str, mode: Option<Mode>) -> Result<Mode> {
    if key.is_empty() {
        return Err(Error::invalid_argument("Key must be a non-empty string."));
    }
    if separator.is_empty() {
        return Err(Error::invalid_argument(
            "Separator must be a non-empty string.",
        ));
    }

    match mode {
        Some(mode) if mode.matches(doc) => Ok(mode),
        Some(mode) => Err(Error::invalid_argument(format!(
            "Document does not match the requested {} mode (found {}).",
            mode,
            doc.type_name()
        ))),
        None => Mode::infer(doc).ok_or_else(|| {
            Error::invalid_argument(format!(
                "Document must be a mapping or a record (found {}).",
                doc.type_name()
            ))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_key_rejected() {
        let err = guard(&Value::map(), "", ".", None).unwrap_err();
        assert!(err.to_string().contains("Key must be a non-empty string."));
    }

    #[test]
    fn empty_separator_rejected() {
        let err = guard(&Value::map(), "a", "", None).unwrap_err();
        assert!(err
            .to_string()
            .contains("Separator must be a non-empty string."));
    }

    #[test]
    fn mode_inferred_from_shape() {
        assert_eq!(guard(&Value::map(), "a", ".", None).unwrap(), Mode::Mapping);
        assert_eq!(
            guard(&Value::record(), "a", ".", None).unwrap(),
            Mode::Record
        );
    }

    #[test]
    fn explicit_mode_validated() {
        assert_eq!(
            guard(&Value::map(), "a", ".", Some(Mode::Mapping)).unwrap(),
            Mode::Mapping
        );

        let err = guard(&Value::map(), "a", ".", Some(Mode::Record)).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("record"));
        assert!(message.contains("mapping"));
    }

    #[test]
    fn non_container_document_rejected() {
        let err = guard(&Value::from(42), "a", ".", None).unwrap_err();
        assert!(err.to_string().contains("integer"));

        let err = guard(&Value::Null, "a", ".", Some(Mode::Mapping)).unwrap_err();
        assert!(err.to_string().contains("null"));
    }
}
