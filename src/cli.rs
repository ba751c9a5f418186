//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`ExportFormat`] - record table export format options
//!
//! The CLI is a thin presentation layer: it parses one transcript, prints an
//! analysis report, and optionally exports the record table. All actual work
//! happens in the library modules.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Parse a WhatsApp chat export and print conversation statistics.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --user Alice
    chatlens chat.txt --stop-words stopwords.txt --sentiment
    chatlens chat.txt --after 2024-01-01 --before 2024-06-30
    chatlens chat.txt --export records.csv
    chatlens chat.txt --export records.jsonl --format jsonl")]
pub struct Args {
    /// Path to the exported transcript (TXT)
    pub input: String,

    /// Restrict the analysis to one participant
    #[arg(short, long, value_name = "USER")]
    pub user: Option<String>,

    /// Ignore records before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Ignore records after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Stop-word list for the common-words table (one word per line)
    #[arg(long, value_name = "FILE")]
    pub stop_words: Option<String>,

    /// Include a sentiment summary in the report
    #[arg(long)]
    pub sentiment: bool,

    /// Write the parsed record table to this file
    #[arg(short, long, value_name = "FILE")]
    pub export: Option<String>,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// How many top words to report
    #[arg(long, value_name = "N", default_value_t = 20)]
    pub top_words: usize,

    /// How many busiest participants to report
    #[arg(long, value_name = "N", default_value_t = 5)]
    pub top_users: usize,
}

/// Record table export formats.
///
/// # Example
///
/// ```rust
/// use chatlens::cli::ExportFormat;
///
/// let format = ExportFormat::Jsonl;
/// println!("Extension: {}", format.extension()); // "jsonl"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// JSON array of rows
    Json,

    /// JSON Lines - one row per line
    Jsonl,
}

impl ExportFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl"]
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "CSV"),
            ExportFormat::Json => write!(f, "JSON"),
            ExportFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "jsonl" | "ndjson" => Ok(ExportFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                ExportFormat::all_names().join(", ")
            )),
        }
    }
}
