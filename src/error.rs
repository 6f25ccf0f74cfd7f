//! Unified error types for chatview.
//!
//! Parsing chat text never fails: unrecognised lines and impossible
//! timestamps are dropped silently. Errors only come from the edges of the
//! library, i.e. reading export files, discovering them on disk, and writing
//! rendered output.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatview operations.
///
/// # Example
///
/// ```rust
/// use chatview::error::Result;
/// use chatview::Message;
///
/// fn load() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatviewError>;

/// The error type for all fallible chatview operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatviewError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The export file doesn't exist or isn't valid UTF-8
    /// - Permission denied
    /// - The output file cannot be created
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// UTF-8 encoding error while converting rendered output to a string.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A directory was searched for chat exports and none were found.
    #[error("No chat exports (*.txt) found in {}", dir.display())]
    NoChatFiles {
        /// The directory that was searched
        dir: PathBuf,
    },

    /// A format name (export or output) was not recognised.
    #[error("Unknown format '{value}'. Expected one of: {expected}")]
    InvalidFormat {
        /// The value that was provided
        value: String,
        /// Comma-separated list of accepted names
        expected: String,
    },
}

impl From<std::string::FromUtf8Error> for ChatviewError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatviewError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatviewError {
    /// Creates a "no chat files" error for the searched directory.
    pub fn no_chat_files(dir: impl Into<PathBuf>) -> Self {
        ChatviewError::NoChatFiles { dir: dir.into() }
    }

    /// Creates an unknown-format error.
    pub fn invalid_format(value: impl Into<String>, expected: &[&str]) -> Self {
        ChatviewError::InvalidFormat {
            value: value.into(),
            expected: expected.join(", "),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatviewError::Io(_))
    }

    /// Returns `true` if no chat exports were found.
    pub fn is_no_chat_files(&self) -> bool {
        matches!(self, ChatviewError::NoChatFiles { .. })
    }

    /// Returns `true` if this is an unknown-format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatviewError::InvalidFormat { .. })
    }
}
