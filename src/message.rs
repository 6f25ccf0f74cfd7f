//! Message type produced by the chat log parser.
//!
//! Every [`Message`] carries a valid timestamp: lines whose date or time
//! cannot be built are dropped by the parser instead of being represented
//! with a placeholder.
//!
//! # Examples
//!
//! ```
//! use chatview::{ExportFormat, Message};
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 15)
//!     .unwrap()
//!     .and_hms_opt(21, 5, 0)
//!     .unwrap();
//! let msg = Message::new(ts, "Alice", "Hello!", ExportFormat::Android);
//!
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.body(), "Hello!");
//! assert_eq!(msg.format(), ExportFormat::Android);
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::ChatviewError;

/// The export convention a message line was written in.
///
/// | Variant | Shape | Clock |
/// |---------|-------|-------|
/// | [`Android`](ExportFormat::Android) | `15/01/2024, 21:05 - Alice: Hi` | 24-hour |
/// | [`Ios`](ExportFormat::Ios) | `[15/01/2024, 9:05:30 PM] Alice: Hi` | 12-hour with seconds |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Un-bracketed, 24-hour clock, no seconds.
    #[serde(alias = "a")]
    Android,

    /// Bracketed, 12-hour clock with seconds and AM/PM marker.
    #[serde(alias = "iphone", alias = "b")]
    Ios,
}

impl ExportFormat {
    /// Returns all formats in scan order.
    pub fn all() -> &'static [ExportFormat] {
        &[ExportFormat::Android, ExportFormat::Ios]
    }

    /// Returns the canonical lowercase name, as used in structured output.
    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Android => "android",
            ExportFormat::Ios => "ios",
        }
    }

    /// Returns all accepted names including aliases.
    pub fn all_names() -> &'static [&'static str] {
        &["android", "a", "ios", "iphone", "b"]
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Android => write!(f, "Android"),
            ExportFormat::Ios => write!(f, "iOS"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ChatviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "android" | "a" => Ok(ExportFormat::Android),
            "ios" | "iphone" | "b" => Ok(ExportFormat::Ios),
            _ => Err(ChatviewError::invalid_format(s, Self::all_names())),
        }
    }
}

/// A single chat message recovered from an export line.
///
/// `sender` is the display name exactly as exported, trimmed of
/// surrounding whitespace. `body` is verbatim and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    /// When the message was sent, in the exporting device's local time.
    pub timestamp: NaiveDateTime,

    /// Display name of the author.
    pub sender: String,

    /// Message text up to the end of its line.
    pub body: String,

    /// Which export grammar recognised the line.
    pub format: ExportFormat,
}

impl Message {
    /// Creates a message from its parts.
    pub fn new(
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
        body: impl Into<String>,
        format: ExportFormat,
    ) -> Self {
        Self {
            timestamp,
            sender: sender.into(),
            body: body.into(),
            format,
        }
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the calendar date the message was sent on.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the export format the message was parsed from.
    pub fn format(&self) -> ExportFormat {
        self.format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_message_accessors() {
        let msg = Message::new(ts(2024, 6, 15, 12, 30, 0), "Alice", "Hi", ExportFormat::Ios);
        assert_eq!(msg.sender(), "Alice");
        assert_eq!(msg.body(), "Hi");
        assert_eq!(msg.format(), ExportFormat::Ios);
        assert_eq!(msg.date(), NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        assert_eq!(msg.timestamp(), ts(2024, 6, 15, 12, 30, 0));
    }

    #[test]
    fn test_export_format_from_str() {
        assert_eq!("android".parse::<ExportFormat>().unwrap(), ExportFormat::Android);
        assert_eq!("A".parse::<ExportFormat>().unwrap(), ExportFormat::Android);
        assert_eq!("iOS".parse::<ExportFormat>().unwrap(), ExportFormat::Ios);
        assert_eq!("iphone".parse::<ExportFormat>().unwrap(), ExportFormat::Ios);
        assert!("signal".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_export_format_display() {
        assert_eq!(ExportFormat::Android.to_string(), "Android");
        assert_eq!(ExportFormat::Ios.to_string(), "iOS");
    }

    #[test]
    fn test_message_serialization() {
        let msg = Message::new(ts(2024, 1, 15, 9, 5, 0), "Bob", "Hey", ExportFormat::Android);
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"sender\":\"Bob\""));
        assert!(json.contains("\"format\":\"android\""));
        assert!(json.contains("2024-01-15T09:05:00"));

        let parsed: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, msg);
    }

    #[test]
    fn test_export_format_name_matches_serde() {
        for &format in ExportFormat::all() {
            let json = serde_json::to_string(&format).unwrap();
            assert_eq!(json, format!("\"{}\"", format.as_str()));
            assert_eq!(format.as_str().parse::<ExportFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_export_format_deserialize_alias() {
        let format: ExportFormat = serde_json::from_str("\"iphone\"").unwrap();
        assert_eq!(format, ExportFormat::Ios);
    }
}
