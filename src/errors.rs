//! Error types for paste conversion
//!
//! Almost nothing in the pipeline can fail: the HTML parser is forgiving and
//! unexpected markup is skipped rather than rejected. What remains are the
//! conditions a caller has to surface to the user.

use std::string::FromUtf8Error;
use thiserror::Error;

/// Result type alias for paste operations
pub type PasteResult<T> = Result<T, PasteError>;

/// Error types for paste operations
#[derive(Debug, Error)]
pub enum PasteError {
    /// The parsed document has no `<body>` to work on
    #[error("Pasted content could not be parsed into a document body")]
    MissingBody,

    /// Writing the cleaned tree back out failed
    #[error("Failed to serialize cleaned HTML: {0}")]
    Serialize(#[from] std::io::Error),

    /// Serialized output was not valid UTF-8
    #[error("Serialized HTML is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Buffer selection does not address the buffer's text
    #[error("Selection {start}..{end} is not valid for a buffer of {len} bytes")]
    InvalidSelection { start: usize, end: usize, len: usize },

    /// Options failed validation in the builder
    #[error("Invalid parse options: {0}")]
    InvalidOptions(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for PasteError {
    fn from(error: anyhow::Error) -> Self {
        PasteError::Other(error.to_string())
    }
}

impl PasteError {
    /// Whether the error came from the pasted content itself rather than from
    /// the caller's buffer or options
    #[must_use]
    pub fn is_content_error(&self) -> bool {
        matches!(
            self,
            PasteError::MissingBody | PasteError::Serialize(_) | PasteError::Utf8(_)
        )
    }
}
