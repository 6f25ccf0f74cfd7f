//! # Chatview
//!
//! A Rust library for reading WhatsApp TXT chat exports and turning them
//! into a sorted, filterable message stream.
//!
//! ## Overview
//!
//! Two export conventions are recognised, and may be mixed in one file:
//! - **Android** - `15/01/2024, 21:05 - Sender: Message` (24-hour clock)
//! - **iOS** - `[15/01/2024, 9:05:30 PM] Sender: Message` (12-hour clock)
//!
//! Parsing is total: lines that match neither convention, and lines whose
//! date or time does not exist, are skipped. Messages come back newest first.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatview::prelude::*;
//!
//! let export = "\
//! 15/01/2024, 21:05 - Alice: Dinner at 8?
//! this continuation line is ignored
//! [15/01/2024, 9:10:00 PM] Bob: Sounds good
//! 32/01/2024, 10:00 - Alice: invalid date, skipped";
//!
//! let messages = ChatLogParser::new().parse_str(export);
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages[0].sender, "Bob");
//!
//! let config = FilterConfig::new().with_search("dinner");
//! let shown = apply_filters(messages, &config);
//! assert_eq!(shown.len(), 1);
//! assert_eq!(initials(&shown[0].sender), "A");
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - the chat log parser ([`parse`](parser::parse),
//!   [`ChatLogParser`](parser::ChatLogParser), [`normalize_export`](parser::normalize_export))
//! - [`message`] - [`Message`] and [`ExportFormat`]
//! - [`config`] - [`ParserConfig`](config::ParserConfig), [`OutputConfig`](config::OutputConfig)
//! - [`core`] - filtering, display attributes and output writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) dispatch
//! - [`discovery`] - locating exports in a directory
//! - [`error`] - [`ChatviewError`], [`Result`]
//! - [`prelude`] - convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod discovery;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;

// Re-export the main types at the crate root for convenience
pub use error::{ChatviewError, Result};
pub use message::{ExportFormat, Message};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatview::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{ExportFormat, Message};

    pub use crate::error::{ChatviewError, Result};

    pub use crate::parser::{ChatLogParser, ParseReport, normalize_export, parse, parse_file};

    pub use crate::config::{OutputConfig, ParserConfig};

    pub use crate::core::display::{ColorScheme, group_by_date, initials, sender_color};
    pub use crate::core::filter::{FilterConfig, FilterSummary, apply_filters, distinct_senders};

    pub use crate::format::{OutputFormat, to_format_string, write_to_format};

    pub use crate::discovery::discover_chat_files;
}
