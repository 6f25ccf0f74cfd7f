//! JSON Lines (JSONL) output writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::OutputRecord;
use crate::Message;
use crate::config::OutputConfig;
use crate::error::ChatviewError;

/// Writes messages to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"timestamp":"2024-01-15 21:05:00","sender":"Alice","body":"Hello","format":"android"}
/// ```
pub fn write_jsonl(
    messages: &[Message],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<(), ChatviewError> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for msg in messages {
        let record = OutputRecord::from_message(msg, config);
        serde_json::to_writer(&mut writer, &record)?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts messages to a JSONL string.
pub fn to_jsonl(messages: &[Message], config: &OutputConfig) -> Result<String, ChatviewError> {
    let mut out = String::new();

    for msg in messages {
        let record = OutputRecord::from_message(msg, config);
        out.push_str(&serde_json::to_string(&record)?);
        out.push('\n');
    }

    Ok(out)
}
