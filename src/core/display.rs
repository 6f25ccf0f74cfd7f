//! Display attributes derived from messages: sender colours, avatar
//! initials, and date grouping.
//!
//! All functions here are pure and deterministic, so a sender always gets
//! the same colour across runs and machines.
//!
//! # Example
//!
//! ```
//! use chatview::core::display::{initials, sender_color, PALETTE};
//!
//! assert_eq!(initials("Alice Marie Smith"), "AS");
//! assert!(PALETTE.contains(&sender_color("Alice")));
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use sha2::{Digest, Sha256};

use crate::Message;

/// Background colours assigned to senders.
pub const PALETTE: [&str; 6] = [
    "#f0f8ff", "#e6ffe6", "#fff0f5", "#fffdd0", "#e0ffff", "#f5f5dc",
];

/// Colour used for highlighted senders.
pub const HIGHLIGHT_COLOR: &str = "#ffffcc";

/// Maps sender names to colours.
///
/// A sender whose trimmed, lowercased name contains a highlight needle gets
/// that highlight's colour. Everyone else is hashed into the palette with
/// SHA-256, read as a big-endian integer modulo the palette size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScheme {
    /// Colours to hash senders into.
    pub palette: Vec<String>,

    /// `(needle, colour)` overrides, checked in order.
    pub highlights: Vec<(String, String)>,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            palette: PALETTE.iter().map(|c| (*c).to_string()).collect(),
            highlights: vec![("reshmi".to_string(), HIGHLIGHT_COLOR.to_string())],
        }
    }
}

impl ColorScheme {
    /// Creates the default scheme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the palette.
    #[must_use]
    pub fn with_palette<I, S>(mut self, palette: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.palette = palette.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a highlight: senders containing `needle` get `color`.
    ///
    /// The needle is matched against the lowercased name, so pass it in
    /// lowercase.
    #[must_use]
    pub fn with_highlight(mut self, needle: impl Into<String>, color: impl Into<String>) -> Self {
        self.highlights.push((needle.into(), color.into()));
        self
    }

    /// Returns the colour for a sender, or `None` with an empty palette and
    /// no matching highlight.
    pub fn color_for(&self, sender: &str) -> Option<&str> {
        let clean = sender.trim().to_lowercase();
        if let Some((_, color)) = self
            .highlights
            .iter()
            .find(|(needle, _)| clean.contains(needle.as_str()))
        {
            return Some(color);
        }

        palette_index(sender, self.palette.len()).map(|i| self.palette[i].as_str())
    }
}

/// Returns the default colour for a sender.
pub fn sender_color(sender: &str) -> &'static str {
    let clean = sender.trim().to_lowercase();
    if clean.contains("reshmi") {
        return HIGHLIGHT_COLOR;
    }
    palette_index(sender, PALETTE.len()).map_or(PALETTE[0], |i| PALETTE[i])
}

/// Index of `sender` in a palette of `len` colours.
fn palette_index(sender: &str, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let digest = Sha256::digest(sender.as_bytes());
    let modulus = len as u64;
    let rem = digest
        .iter()
        .fold(0u64, |acc, &byte| (acc * 256 + u64::from(byte)) % modulus);
    usize::try_from(rem).ok()
}

/// Avatar initials: first letter of the first and last word, uppercased.
///
/// Single-word names use their first letter; blank names give an empty
/// string.
///
/// ```
/// use chatview::core::display::initials;
///
/// assert_eq!(initials("alice"), "A");
/// assert_eq!(initials("  bob  van dyke "), "BD");
/// assert_eq!(initials(""), "");
/// ```
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let Some(first) = words.next() else {
        return String::new();
    };

    let mut out: String = first.chars().take(1).flat_map(char::to_uppercase).collect();
    if let Some(last) = words.last() {
        out.extend(last.chars().take(1).flat_map(char::to_uppercase));
    }
    out
}

/// Formats a timestamp as a 12-hour clock reading, e.g. `09:05 PM`.
pub fn display_time(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%I:%M %p").to_string()
}

/// A run of consecutive messages sent on the same calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateGroup<'a> {
    /// The shared date.
    pub date: NaiveDate,
    /// Messages in their original order.
    pub messages: Vec<&'a Message>,
}

impl DateGroup<'_> {
    /// Section header label, e.g. `15 Jan 2024`.
    pub fn label(&self) -> String {
        self.date.format("%d %b %Y").to_string()
    }
}

/// Groups consecutive messages by calendar date.
///
/// Only adjacent messages are merged, so an unsorted input can produce the
/// same date more than once.
pub fn group_by_date(messages: &[Message]) -> Vec<DateGroup<'_>> {
    let mut groups: Vec<DateGroup<'_>> = Vec::new();

    for msg in messages {
        match groups.last_mut() {
            Some(group) if group.date == msg.date() => group.messages.push(msg),
            _ => groups.push(DateGroup {
                date: msg.date(),
                messages: vec![msg],
            }),
        }
    }

    groups
}
