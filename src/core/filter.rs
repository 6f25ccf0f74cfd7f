//! Filter parsed messages by sender and body text.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for filtering message collections.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Senders | [`with_senders`](FilterConfig::with_senders) | Messages from any of the listed senders |
//! | Search | [`with_search`](FilterConfig::with_search) | Case-insensitive substring of the body |
//! | Limit | [`with_limit`](FilterConfig::with_limit) | Keep at most N messages |
//!
//! # Example
//!
//! ```
//! use chatview::core::filter::{FilterConfig, apply_filters, distinct_senders};
//! use chatview::parser::parse;
//!
//! let messages = parse("\
//! 15/01/2024, 10:02 - Bob: see you at LUNCH
//! 15/01/2024, 10:01 - Alice: lunch?
//! 15/01/2024, 10:00 - Alice: morning");
//!
//! assert_eq!(distinct_senders(&messages), ["Alice", "Bob"]);
//!
//! let config = FilterConfig::new().with_search("lunch");
//! let filtered = apply_filters(messages, &config);
//! assert_eq!(filtered.len(), 2);
//! ```
//!
//! # Behavior Notes
//!
//! - Sender matching is exact: names are shown as exported
//! - Search is case-insensitive over the body only
//! - Filters are combined with AND logic, then the limit is applied

use std::collections::BTreeSet;
use std::fmt;

use crate::Message;

/// Default number of messages to keep.
pub const DEFAULT_LIMIT: usize = 1000;

/// Smallest limit offered by the viewer.
pub const MIN_LIMIT: usize = 100;

/// Largest limit offered by the viewer.
pub const MAX_LIMIT: usize = 20_000;

/// Configuration for filtering messages.
///
/// An empty configuration lets every message through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Keep only messages from these senders; `None` keeps all.
    pub senders: Option<BTreeSet<String>>,

    /// Keep only messages whose body contains this text (case-insensitive).
    pub search: Option<String>,

    /// Keep at most this many messages.
    pub limit: Option<usize>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to the given senders.
    ///
    /// An empty list selects nobody, mirroring a viewer where every sender
    /// has been deselected.
    #[must_use]
    pub fn with_senders<I, S>(mut self, senders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.senders = Some(senders.into_iter().map(Into::into).collect());
        self
    }

    /// Adds one sender to the selection.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.senders
            .get_or_insert_with(BTreeSet::new)
            .insert(sender.into());
        self
    }

    /// Sets the body search text.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Sets the maximum number of messages to keep.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.senders.is_some() || self.has_search() || self.limit.is_some()
    }

    /// Returns `true` if a non-empty search is set.
    pub fn has_search(&self) -> bool {
        self.search.as_deref().is_some_and(|s| !s.is_empty())
    }

    fn matches(&self, msg: &Message, needle: Option<&str>) -> bool {
        if let Some(ref senders) = self.senders {
            if !senders.contains(&msg.sender) {
                return false;
            }
        }

        match needle {
            Some(needle) => msg.body.to_lowercase().contains(needle),
            None => true,
        }
    }
}

/// Returns the distinct sender names, sorted.
pub fn distinct_senders(messages: &[Message]) -> Vec<String> {
    messages
        .iter()
        .map(|m| m.sender.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Filters messages, preserving their order.
///
/// Sender and search filters are applied first; the limit then truncates
/// the survivors.
pub fn apply_filters(messages: Vec<Message>, config: &FilterConfig) -> Vec<Message> {
    if !config.is_active() {
        return messages;
    }

    let needle = config
        .search
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);
    let limit = config.limit.unwrap_or(usize::MAX);

    messages
        .into_iter()
        .filter(|msg| config.matches(msg, needle.as_deref()))
        .take(limit)
        .collect()
}

/// Counts before and after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSummary {
    /// Messages recovered by the parser
    pub parsed: usize,
    /// Messages left after filtering
    pub shown: usize,
}

impl FilterSummary {
    /// Creates a new summary.
    pub fn new(parsed: usize, shown: usize) -> Self {
        Self { parsed, shown }
    }
}

impl fmt::Display for FilterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parsed {} messages. Showing {} after filters.",
            self.parsed, self.shown
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExportFormat;
    use chrono::NaiveDate;

    fn make_msg(sender: &str, body: &str, minute: u32) -> Message {
        let ts = NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, minute, 0)
            .unwrap();
        Message::new(ts, sender, body, ExportFormat::Android)
    }

    fn sample() -> Vec<Message> {
        vec![
            make_msg("Alice", "Hello", 3),
            make_msg("Bob", "Hi there", 2),
            make_msg("alice", "HELLO again", 1),
        ]
    }

    #[test]
    fn test_no_filters_is_passthrough() {
        let config = FilterConfig::new();
        assert!(!config.is_active());
        assert_eq!(apply_filters(sample(), &config), sample());
    }

    #[test]
    fn test_filter_by_sender_is_exact() {
        let config = FilterConfig::new().with_sender("Alice");
        let filtered = apply_filters(sample(), &config);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].body, "Hello");
    }

    #[test]
    fn test_filter_by_several_senders() {
        let config = FilterConfig::new().with_senders(["Alice", "Bob"]);
        assert_eq!(apply_filters(sample(), &config).len(), 2);
    }

    #[test]
    fn test_empty_sender_selection_selects_nobody() {
        let config = FilterConfig::new().with_senders(Vec::<String>::new());
        assert!(apply_filters(sample(), &config).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let config = FilterConfig::new().with_search("hello");
        let filtered = apply_filters(sample(), &config);
        assert_eq!(filtered.len(), 2);

        let config = FilterConfig::new().with_search("ÉTÉ");
        let messages = vec![make_msg("Zoé", "bel été", 0)];
        assert_eq!(apply_filters(messages, &config).len(), 1);
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let config = FilterConfig::new().with_search("");
        assert!(!config.is_active());
        assert_eq!(apply_filters(sample(), &config).len(), 3);
    }

    #[test]
    fn test_limit_applies_after_filters() {
        let config = FilterConfig::new().with_search("hello").with_limit(1);
        let filtered = apply_filters(sample(), &config);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].sender, "Alice");
    }

    #[test]
    fn test_distinct_senders_sorted() {
        assert_eq!(distinct_senders(&sample()), ["Alice", "Bob", "alice"]);
        assert!(distinct_senders(&[]).is_empty());
    }

    #[test]
    fn test_summary_display() {
        assert_eq!(
            FilterSummary::new(10, 3).to_string(),
            "Parsed 10 messages. Showing 3 after filters."
        );
    }
}
