//! Error types for the accessor engine.
//!
//! The engine has a single semantic error kind. Precondition violations
//! (empty key, empty separator, mode/shape mismatch) and strict-mode
//! existence failures all surface as `InvalidArgument` with a
//! human-readable message. Callers assert on message content, never on
//! structured codes.

use thiserror::Error;

/// Result type alias for accessor operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the accessor engine.
#[derive(Debug, Error)]
pub enum Error {
    /// A precondition or strict-mode existence check failed.
    ///
    /// The guard runs before any traversal or mutation, so when this is
    /// returned from a guard check the document is untouched. Strict
    /// deletes are the one data-dependent case: in a batch, keys processed
    /// before the failing one remain applied.
    #[error("{message}")]
    InvalidArgument {
        /// Description of what was invalid.
        message: String,
    },
}

impl Error {
    /// Create an invalid-argument error.
    #[inline]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            message: message.into(),
        }
    }
}
