//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::OutputRecord;
use crate::Message;
use crate::config::OutputConfig;
use crate::error::ChatviewError;

/// Writes messages to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"timestamp": "2024-01-15 21:05:00", "sender": "Alice", "body": "Hello", "format": "android"}
/// ]
/// ```
pub fn write_json(
    messages: &[Message],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<(), ChatviewError> {
    let json = to_json(messages, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts messages to a pretty-printed JSON array.
pub fn to_json(messages: &[Message], config: &OutputConfig) -> Result<String, ChatviewError> {
    let records: Vec<OutputRecord> = messages
        .iter()
        .map(|m| OutputRecord::from_message(m, config))
        .collect();

    Ok(serde_json::to_string_pretty(&records)?)
}
