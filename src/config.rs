//! Configuration types for parsing and output.
//!
//! These are plain builder structs with no CLI framework dependencies.
//!
//! # Example
//!
//! ```rust
//! use chatview::config::ParserConfig;
//! use chatview::parser::ChatLogParser;
//! use chatview::ExportFormat;
//!
//! let config = ParserConfig::new()
//!     .only(ExportFormat::Ios)
//!     .with_normalize_input(true);
//!
//! let parser = ChatLogParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

use crate::message::ExportFormat;

/// Configuration for [`ChatLogParser`](crate::parser::ChatLogParser).
///
/// Both export grammars are enabled by default and input is normalised
/// (narrow no-break spaces, left-to-right marks, CRLF line endings) before
/// scanning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Clean export artefacts before scanning (default: true)
    pub normalize_input: bool,

    /// Grammars to scan for (default: all)
    pub formats: Vec<ExportFormat>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            normalize_input: true,
            formats: ExportFormat::all().to_vec(),
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables input normalisation.
    #[must_use]
    pub fn with_normalize_input(mut self, enabled: bool) -> Self {
        self.normalize_input = enabled;
        self
    }

    /// Sets the grammars to scan for.
    #[must_use]
    pub fn with_formats(mut self, formats: impl IntoIterator<Item = ExportFormat>) -> Self {
        self.formats = formats.into_iter().collect();
        self
    }

    /// Restricts scanning to a single grammar.
    #[must_use]
    pub fn only(self, format: ExportFormat) -> Self {
        self.with_formats([format])
    }

    /// Returns `true` if the given grammar is scanned.
    pub fn is_enabled(&self, format: ExportFormat) -> bool {
        self.formats.contains(&format)
    }
}

/// Configuration for structured output (JSON, JSONL, CSV).
///
/// # Example
///
/// ```rust
/// use chatview::config::OutputConfig;
///
/// let config = OutputConfig::new().with_display();
/// assert!(config.include_display);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Add sender colour and initials to each record (default: false)
    pub include_display: bool,
}

impl OutputConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Includes display attributes (colour, initials).
    #[must_use]
    pub fn with_display(mut self) -> Self {
        self.include_display = true;
        self
    }
}
