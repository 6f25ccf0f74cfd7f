//! Output format selection.
//!
//! These types carry no CLI framework dependencies and can be used from
//! library code directly.
//!
//! # Example
//!
//! ```rust
//! use chatview::format::{OutputFormat, to_format_string};
//! use chatview::config::OutputConfig;
//! use chatview::parser::parse;
//!
//! let messages = parse("15/01/2024, 21:05 - Alice: Hello!");
//! let text = to_format_string(&messages, OutputFormat::Text, &OutputConfig::new())?;
//! assert!(text.contains("Alice"));
//!
//! let format = OutputFormat::from_path("chat.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//! # Ok::<(), chatview::ChatviewError>(())
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Message;
use crate::config::OutputConfig;
use crate::core::output;
use crate::error::ChatviewError;

/// Output format for rendered chats.
///
/// - [`Text`](OutputFormat::Text) - Readable transcript grouped by date
/// - [`Json`](OutputFormat::Json) - Structured array
/// - [`Jsonl`](OutputFormat::Jsonl) - One JSON object per line
/// - [`Csv`](OutputFormat::Csv) - Semicolon-delimited table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Plain text transcript (default)
    #[default]
    Text,

    /// JSON array of messages
    Json,

    /// JSON Lines - one JSON object per line
    Jsonl,

    /// CSV with semicolon delimiter
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "txt", "json", "jsonl", "ndjson", "csv"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[
            OutputFormat::Text,
            OutputFormat::Json,
            OutputFormat::Jsonl,
            OutputFormat::Csv,
        ]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text/plain",
            OutputFormat::Json => "application/json",
            OutputFormat::Jsonl => "application/x-ndjson",
            OutputFormat::Csv => "text/csv",
        }
    }

    /// Detects format from a file path based on its extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChatviewError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        ext.parse()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ChatviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ChatviewError::invalid_format(s, Self::all_names())),
        }
    }
}

/// Writes messages to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    messages: &[Message],
    path: impl AsRef<Path>,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), ChatviewError> {
    match format {
        OutputFormat::Text => output::write_text(messages, path),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => output::write_csv(messages, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => output::write_json(messages, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => output::write_jsonl(messages, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Converts messages to a string in the specified format.
#[allow(unused_variables)]
pub fn to_format_string(
    messages: &[Message],
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String, ChatviewError> {
    match format {
        OutputFormat::Text => Ok(output::to_text(messages)),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => output::to_csv(messages, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => output::to_json(messages, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => output::to_jsonl(messages, config),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

#[allow(dead_code)]
fn missing_feature(format: OutputFormat) -> ChatviewError {
    let feature = match format {
        OutputFormat::Csv => "csv-output",
        OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        OutputFormat::Text => "default",
    };
    let hint = format!("a format enabled by the '{feature}' feature");
    ChatviewError::invalid_format(format.extension(), &[hint.as_str()])
}
