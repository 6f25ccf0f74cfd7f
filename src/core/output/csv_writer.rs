//! CSV output writer.

use std::fs::File;
use std::path::Path;

use super::OutputRecord;
use crate::Message;
use crate::config::OutputConfig;
use crate::error::ChatviewError;

/// Writes messages to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Timestamp`, `Sender`, `Body`, `Format` (`android` or `ios`)
///   - With display attributes: `Color`, `Initials` appended
/// - Encoding: UTF-8
pub fn write_csv(
    messages: &[Message],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<(), ChatviewError> {
    let file = File::create(output_path)?;
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(file);
    write_records(&mut writer, messages, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts messages to a CSV string.
///
/// Same format as [`write_csv`], but returns a String instead of writing to a file.
pub fn to_csv(messages: &[Message], config: &OutputConfig) -> Result<String, ChatviewError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());
    write_records(&mut writer, messages, config)?;

    let bytes = writer
        .into_inner()
        .map_err(|e| ChatviewError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

fn write_records<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    messages: &[Message],
    config: &OutputConfig,
) -> Result<(), ChatviewError> {
    writer.write_record(build_header(config))?;

    for msg in messages {
        writer.write_record(build_record(&OutputRecord::from_message(msg, config)))?;
    }

    Ok(())
}

/// Build CSV header based on output configuration.
fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = vec!["Timestamp", "Sender", "Body", "Format"];

    if config.include_display {
        header.push("Color");
        header.push("Initials");
    }

    header
}

/// Build CSV record for a single message.
fn build_record(record: &OutputRecord) -> Vec<String> {
    let mut fields = vec![
        record.timestamp.clone(),
        record.sender.clone(),
        record.body.clone(),
        record.format.as_str().to_string(),
    ];

    if let Some(color) = record.color {
        fields.push(color.to_string());
    }
    if let Some(ref initials) = record.initials {
        fields.push(initials.clone());
    }

    fields
}
