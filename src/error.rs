//! Error types for folio library.

use thiserror::Error;

/// Result type alias for folio operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while parsing or renumbering a document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Line text contains a line break.
    #[error("text must admit no newline character: {0:?}")]
    Validation(String),

    /// The number of computed page numbers differs from the number of lines.
    #[error("inconsistent number of rows: new numbers={actual}, original={expected}")]
    ShapeMismatch {
        /// Number of lines in the sequence
        expected: usize,
        /// Number of computed page numbers
        actual: usize,
    },

    /// The user declined to continue after order-disturbing lines were found.
    #[error("renumbering cancelled, no changes made")]
    Cancelled,

    /// Error during rendering (JSON reports).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Whether this is the deliberate no-op outcome rather than a failure.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }
}
