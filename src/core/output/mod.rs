//! Output format writers.
//!
//! This module provides writers for different output formats:
//! - [`write_text`] / [`to_text`] - Readable transcript grouped by date (always available)
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of messages - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines (one JSON per line) - requires `json-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatview::Result<()> {
//! use chatview::config::OutputConfig;
//! use chatview::core::output::{to_text, write_csv, write_json, write_jsonl};
//! use chatview::parser::parse;
//!
//! let messages = parse("15/01/2024, 21:05 - Alice: Hello!");
//! let config = OutputConfig::new().with_display();
//!
//! write_csv(&messages, "output.csv", &config)?;
//! write_json(&messages, "output.json", &config)?;
//! write_jsonl(&messages, "output.jsonl", &config)?;
//!
//! println!("{}", to_text(&messages));
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;
mod text_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
pub use text_writer::{END_OF_CHAT, NO_MATCHES, to_text, write_text};

#[cfg(any(feature = "csv-output", feature = "json-output"))]
use serde::Serialize;

#[cfg(any(feature = "csv-output", feature = "json-output"))]
use crate::{ExportFormat, Message, config::OutputConfig, core::display};

/// Timestamp layout used by structured writers.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Flat record shared by the structured writers.
/// Display fields are only set when enabled in `OutputConfig`.
#[cfg(any(feature = "csv-output", feature = "json-output"))]
#[derive(Debug, Serialize)]
struct OutputRecord {
    timestamp: String,
    sender: String,
    body: String,
    format: ExportFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    initials: Option<String>,
}

#[cfg(any(feature = "csv-output", feature = "json-output"))]
impl OutputRecord {
    fn from_message(msg: &Message, config: &OutputConfig) -> Self {
        Self {
            timestamp: msg.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            sender: msg.sender.clone(),
            body: msg.body.clone(),
            format: msg.format,
            color: config
                .include_display
                .then(|| display::sender_color(&msg.sender)),
            initials: config
                .include_display
                .then(|| display::initials(&msg.sender)),
        }
    }
}
