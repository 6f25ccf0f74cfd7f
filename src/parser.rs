//! WhatsApp TXT chat log parser.
//!
//! Two export conventions are recognised:
//!
//! - Android: `15/01/2024, 21:05 - Sender: Message`
//! - iOS: `[15/01/2024, 9:05:30 PM] Sender: Message`
//!
//! Both grammars are scanned independently over the whole text and their
//! matches are unioned, so concatenated exports from different devices parse
//! without format detection. Lines matching neither grammar (continuation
//! lines, system notices, blank lines) are dropped, as are matches whose date
//! or time does not exist on the calendar. Parsing never fails.
//!
//! The result is ordered newest first. The sort is stable over the
//! concatenation of all Android matches followed by all iOS matches, each in
//! text order, so equal timestamps keep that order.
//!
//! # Example
//!
//! ```rust
//! use chatview::parser::parse;
//!
//! let text = "15/01/2024, 9:05 - Alice: Morning!\n\
//!             [15/01/2024, 9:06:10 PM] Bob: Evening: late reply\n";
//!
//! let messages = parse(text);
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages[0].sender, "Bob");
//! assert_eq!(messages[0].body, "Evening: late reply");
//! assert_eq!(messages[1].sender, "Alice");
//! ```

use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use log::{debug, trace};
use regex::{Captures, Regex};

use crate::config::ParserConfig;
use crate::error::Result;
use crate::message::{ExportFormat, Message};

static ANDROID_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ExportFormat::Android.pattern()).unwrap());

static IOS_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ExportFormat::Ios.pattern()).unwrap());

impl ExportFormat {
    /// Returns the line pattern for this export format.
    fn pattern(self) -> &'static str {
        match self {
            // 15/01/2024, 21:05 - Sender: Message
            ExportFormat::Android => {
                r"(?P<day>[0-9]{2})/(?P<month>[0-9]{2})/(?P<year>[0-9]{4}), (?P<hour>[0-9]{1,2}):(?P<minute>[0-9]{2}) - (?P<sender>.*?): (?P<body>.*)"
            }
            // [15/01/2024, 9:05:30 PM] Sender: Message
            ExportFormat::Ios => {
                r"\[(?P<day>[0-9]{2})/(?P<month>[0-9]{2})/(?P<year>[0-9]{4}), (?P<hour>[0-9]{1,2}):(?P<minute>[0-9]{2}):(?P<second>[0-9]{2}) (?P<meridiem>[APMapm]{2})\] (?P<sender>.*?): (?P<body>.*)"
            }
        }
    }

    fn regex(self) -> &'static Regex {
        match self {
            ExportFormat::Android => &ANDROID_LINE,
            ExportFormat::Ios => &IOS_LINE,
        }
    }
}

/// Outcome of a parse, with the number of candidates that were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Recovered messages, newest first.
    pub messages: Vec<Message>,

    /// Lines that matched a grammar, valid or not.
    pub candidates: usize,

    /// Candidates discarded because their timestamp was invalid.
    pub dropped: usize,
}

impl ParseReport {
    /// Returns `true` if no messages were recovered.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Parses an already normalised export into messages, newest first.
///
/// This is a pure function: the same input always produces the same output
/// and no input is an error.
///
/// ```rust
/// use chatview::parser::parse;
///
/// assert!(parse("").is_empty());
/// assert!(parse("just some text").is_empty());
/// assert!(parse("32/13/2024, 10:00 - Alice: bad date").is_empty());
/// ```
pub fn parse(content: &str) -> Vec<Message> {
    parse_with_report(content).messages
}

/// Like [`parse`], but also reports how many candidates were dropped.
pub fn parse_with_report(content: &str) -> ParseReport {
    scan_formats(content, ExportFormat::all())
}

/// Reads an export from disk, normalises it and parses it.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Vec<Message>> {
    ChatLogParser::new().parse(path)
}

/// Cleans export artefacts that break fixed-width matching.
///
/// - U+202F NARROW NO-BREAK SPACE becomes a regular space
/// - U+200E LEFT-TO-RIGHT MARK is removed
/// - CRLF and lone CR line endings become LF
///
/// Returns the input unchanged (borrowed) when there is nothing to clean.
///
/// ```rust
/// use chatview::parser::normalize_export;
///
/// let raw = "[15/01/2024, 9:05:30\u{202f}PM] \u{200e}Alice: Hi\r\n";
/// assert_eq!(normalize_export(raw), "[15/01/2024, 9:05:30 PM] Alice: Hi\n");
/// ```
pub fn normalize_export(raw: &str) -> Cow<'_, str> {
    if !raw.contains(&['\u{202F}', '\u{200E}', '\r'][..]) {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\u{202F}' => out.push(' '),
            '\u{200E}' => {}
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push('\n');
            }
            _ => out.push(c),
        }
    }

    Cow::Owned(out)
}

/// Parser for WhatsApp TXT exports.
///
/// Unlike the free [`parse`] function, this applies [`normalize_export`]
/// first (unless disabled) and can be restricted to a single grammar.
///
/// # Example
///
/// ```rust,no_run
/// use chatview::parser::ChatLogParser;
///
/// let parser = ChatLogParser::new();
/// let messages = parser.parse("WhatsApp Chat with Alice.txt")?;
/// # Ok::<(), chatview::ChatviewError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChatLogParser {
    config: ParserConfig,
}

impl ChatLogParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Reads an export file as UTF-8 and parses it.
    pub fn parse(&self, path: impl AsRef<Path>) -> Result<Vec<Message>> {
        Ok(self.report_file(path)?.messages)
    }

    /// Reads an export file and reports dropped candidates.
    pub fn report_file(&self, path: impl AsRef<Path>) -> Result<ParseReport> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        debug!("Read {} bytes from {}", content.len(), path.display());
        Ok(self.report(&content))
    }

    /// Parses export text held in memory.
    pub fn parse_str(&self, content: &str) -> Vec<Message> {
        self.report(content).messages
    }

    /// Parses export text and reports dropped candidates.
    pub fn report(&self, content: &str) -> ParseReport {
        let content = if self.config.normalize_input {
            normalize_export(content)
        } else {
            Cow::Borrowed(content)
        };

        // Scan order is fixed so ties do not depend on configuration order.
        let formats: Vec<ExportFormat> = ExportFormat::all()
            .iter()
            .copied()
            .filter(|format| self.config.is_enabled(*format))
            .collect();

        scan_formats(&content, &formats)
    }
}

fn scan_formats(content: &str, formats: &[ExportFormat]) -> ParseReport {
    let mut messages = Vec::new();
    let mut candidates = 0;

    for &format in formats {
        let before = messages.len();
        let found = scan(content, format, &mut messages);
        debug!(
            "{} grammar: {} candidates, {} kept",
            format,
            found,
            messages.len() - before
        );
        candidates += found;
    }

    // Stable: equal timestamps keep discovery order.
    messages.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let dropped = candidates - messages.len();
    if dropped > 0 {
        debug!("Dropped {} candidates with invalid timestamps", dropped);
    }

    ParseReport {
        messages,
        candidates,
        dropped,
    }
}

/// Appends every valid match of one grammar; returns the number of matches.
fn scan(content: &str, format: ExportFormat, out: &mut Vec<Message>) -> usize {
    let mut candidates = 0;

    for caps in format.regex().captures_iter(content) {
        candidates += 1;
        match build_message(format, &caps) {
            Some(msg) => out.push(msg),
            None => trace!("Dropping {} candidate: {:?}", format, &caps[0]),
        }
    }

    candidates
}

fn build_message(format: ExportFormat, caps: &Captures<'_>) -> Option<Message> {
    let timestamp = build_timestamp(format, caps)?;
    let sender = caps.name("sender").map_or("", |m| m.as_str().trim());
    let body = caps.name("body").map_or("", |m| m.as_str());

    Some(Message::new(timestamp, sender, body, format))
}

/// Builds the timestamp of a candidate, or `None` if it does not exist.
fn build_timestamp(format: ExportFormat, caps: &Captures<'_>) -> Option<NaiveDateTime> {
    let year: i32 = caps.name("year")?.as_str().parse().ok()?;
    if year < 1 {
        return None;
    }
    let date = NaiveDate::from_ymd_opt(year, field(caps, "month")?, field(caps, "day")?)?;

    let hour = field(caps, "hour")?;
    let minute = field(caps, "minute")?;

    let time = match format {
        ExportFormat::Android => NaiveTime::from_hms_opt(hour, minute, 0)?,
        ExportFormat::Ios => {
            let hour = to_24_hour(hour, caps.name("meridiem")?.as_str())?;
            NaiveTime::from_hms_opt(hour, minute, field(caps, "second")?)?
        }
    };

    Some(date.and_time(time))
}

fn field(caps: &Captures<'_>, name: &str) -> Option<u32> {
    caps.name(name)?.as_str().parse().ok()
}

/// Converts a 12-hour clock reading to 24-hour.
fn to_24_hour(hour: u32, meridiem: &str) -> Option<u32> {
    if !(1..=12).contains(&hour) {
        return None;
    }
    let pm = match meridiem.to_ascii_lowercase().as_str() {
        "am" => false,
        "pm" => true,
        _ => return None,
    };

    Some(match (hour, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, false) => h,
        (h, true) => h + 12,
    })
}
