//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::ExportFormat;
use crate::core::filter::{DEFAULT_LIMIT, MAX_LIMIT, MIN_LIMIT};

/// View WhatsApp chat exports (Android and iOS) as a filtered,
/// newest-first transcript.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatview")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatview \"WhatsApp Chat with Alice.txt\"
    chatview chats/ --list
    chatview chat.txt --sender Alice --sender Bob -q dinner
    chatview chat.txt -f json --display -o chat.json
    chatview chat.txt --only ios --list-senders")]
pub struct Args {
    /// Chat export file, or a directory to take the first export from
    #[arg(default_value = ".")]
    pub input: PathBuf,

    /// Show only messages from this sender (repeatable)
    #[arg(short, long = "sender", value_name = "NAME")]
    pub senders: Vec<String>,

    /// Show only messages whose text contains this (case-insensitive)
    #[arg(short = 'q', long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Maximum number of messages to show
    #[arg(short = 'n', long, default_value_t = DEFAULT_LIMIT, value_parser = parse_limit)]
    pub limit: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Include sender colour and initials in structured output
    #[arg(long)]
    pub display: bool,

    /// Only recognise one export format (android or ios)
    #[arg(long, value_name = "FORMAT")]
    pub only: Option<ExportFormat>,

    /// List chat exports found in the input directory and exit
    #[arg(long)]
    pub list: bool,

    /// List the distinct senders and exit
    #[arg(long)]
    pub list_senders: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Log filter implied by the verbosity flag.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn parse_limit(s: &str) -> Result<usize, String> {
    let limit: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    if (MIN_LIMIT..=MAX_LIMIT).contains(&limit) {
        Ok(limit)
    } else {
        Err(format!("must be between {MIN_LIMIT} and {MAX_LIMIT}"))
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Readable transcript grouped by date
    #[default]
    Text,

    /// JSON array of messages
    Json,

    /// JSON Lines - one JSON object per line
    Jsonl,

    /// CSV with semicolon delimiter
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Text => crate::format::OutputFormat::Text,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
        }
    }
}
