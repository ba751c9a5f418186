//! # Chatlens
//!
//! A Rust library for parsing WhatsApp chat exports into structured records
//! and computing descriptive conversation statistics.
//!
//! ## Overview
//!
//! Chatlens takes one exported conversation transcript (the dated-line TXT
//! format WhatsApp produces) and turns it into an ordered sequence of
//! [`MessageRecord`]s: timestamped, attributed to a sender or flagged as a
//! system notification, with calendar features derived once per record. On
//! top of that sequence the [`analysis`] module answers the questions an
//! analyst asks of a chat: totals, busiest participants, word and emoji
//! frequencies, activity timelines and heatmaps, sentiment.
//!
//! The parser is deliberately forgiving: headers with impossible dates yield
//! records with absent timestamps, unrecognized input yields an empty
//! sequence, and nothing per-line ever aborts a run.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::analysis::{Selection, stats::fetch_stats};
//! use chatlens::parser::TranscriptParser;
//!
//! let transcript = "\
//! 01/01/24, 09:05 am - Alice: Hello there
//! 01/01/24, 09:06 am - Bob: Hi Alice, look at https://example.com
//! 01/01/24, 09:07 am - Alice added Charlie
//! ";
//!
//! let records = TranscriptParser::new().parse_str(transcript);
//! assert_eq!(records.len(), 3);
//!
//! let stats = fetch_stats(&records, &Selection::Overall);
//! assert_eq!(stats.messages, 3);
//! assert_eq!(stats.links, 1);
//!
//! let alice = fetch_stats(&records, &Selection::user("Alice"));
//! assert_eq!(alice.messages, 1);
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — transcript parsing
//!   - [`TranscriptParser`](parser::TranscriptParser) — segmentation and attribution
//!   - [`parser::timestamp`] — header recognition and normalization
//! - [`record`] — [`MessageRecord`], the central record type
//! - [`features`] — calendar/time feature derivation
//! - [`analysis`] — read-only aggregate queries over the record sequence
//! - [`config`] — caller-supplied resources ([`StopWords`](config::StopWords))
//! - [`output`] — record table export (CSV, JSON, JSONL)
//! - [`cli`] — CLI types (requires the `cli` feature)
//! - [`error`] — unified error types ([`ChatlensError`], [`Result`])
//! - [`prelude`] — convenient re-exports

pub mod analysis;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod output;
pub mod parser;
pub mod record;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use record::{GROUP_NOTIFICATION, MessageRecord};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Core record type
    pub use crate::record::{GROUP_NOTIFICATION, MessageRecord};

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Parser
    pub use crate::parser::TranscriptParser;

    // Feature derivation
    pub use crate::features::{TimeFeatures, period_label};

    // Analysis resources
    pub use crate::config::StopWords;

    // Selection and filtering
    pub use crate::analysis::{FilterConfig, Selection, apply_filters, select};

    // Aggregate queries
    pub use crate::analysis::emoji::{emoji_counts, extract_emojis};
    pub use crate::analysis::sentiment::{
        LexiconScorer, PolarityScorer, SentimentLabel, SentimentSummary, sentiment_summary,
    };
    pub use crate::analysis::stats::{
        ChatStats, MEDIA_OMITTED, UserActivity, fetch_stats, find_urls, most_busy_users,
    };
    pub use crate::analysis::timeline::{
        ActivityHeatmap, MonthlyCount, activity_heatmap, daily_timeline, hourly_activity,
        month_activity, monthly_timeline, week_activity,
    };
    pub use crate::analysis::words::{most_common_words, word_frequencies};

    // Output (file writers and string converters)
    #[cfg(feature = "csv-output")]
    pub use crate::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::output::{to_json, to_jsonl, write_json, write_jsonl};

    // CLI types
    #[cfg(feature = "cli")]
    pub use crate::cli::ExportFormat;
}
