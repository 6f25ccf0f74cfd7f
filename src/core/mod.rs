//! Presentation-side processing of parsed messages.
//!
//! This module contains:
//! - [`filter`] - Sender, search and limit filtering
//! - [`display`] - Sender colours, initials and date grouping
//! - [`output`] - Format writers (text, CSV, JSON, JSONL)

pub mod display;
pub mod filter;
pub mod output;

// Re-export main types for convenience
pub use display::{ColorScheme, DateGroup, group_by_date, initials, sender_color};
pub use filter::{FilterConfig, FilterSummary, apply_filters, distinct_senders};

pub use crate::Message;

pub use output::{to_text, write_text};
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
