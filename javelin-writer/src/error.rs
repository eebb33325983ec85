//! Error types for writer construction and rendering.

use thiserror::Error;

/// Result type for writer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced while building or rendering a writer tree.
///
/// Structural violations are caller contract errors and are reported as
/// early as the builder can see them; they are not recoverable within the
/// core. Sink failures abort the render immediately and partial output
/// already written is not retracted.
#[derive(Debug, Error)]
pub enum Error {
    /// A field with the same name was already added to the class.
    #[error("duplicate field '{field}' on class '{class}'")]
    DuplicateField { class: String, field: String },

    /// A parameter with the same name was already added to the method or
    /// constructor.
    #[error("duplicate parameter '{parameter}' on '{owner}'")]
    DuplicateParameter { owner: String, parameter: String },

    /// A qualified name could not be derived from a dotted string.
    #[error("invalid class name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// A snippet's placeholders and type arguments do not line up.
    #[error("malformed snippet '{format}': {reason}")]
    Snippet { format: String, reason: String },

    /// The underlying output target refused a write.
    #[error("write to output sink failed")]
    Sink(#[from] std::io::Error),
}
