//! Model error types.

use thiserror::Error;

/// Error raised when a raw record cannot become a [`crate::Document`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModelError {
    /// Document ids are never empty once loaded.
    #[error("Document id is empty")]
    EmptyId,

    /// The document body was valid JSON but not an object.
    #[error("Document '{id}' is not a JSON object (found {found})")]
    NotAnObject {
        /// Id of the offending document.
        id: String,
        /// JSON kind that was found instead.
        found: &'static str,
    },

    /// The document body was not valid JSON at all.
    #[error("Document '{id}' has an unreadable body: {reason}")]
    InvalidBody {
        /// Id of the offending document.
        id: String,
        /// Parser message.
        reason: String,
    },
}

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
