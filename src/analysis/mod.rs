//! Aggregate views over the parsed record sequence.
//!
//! Every query in this module is read-only: it takes `&[MessageRecord]`,
//! optionally narrows it to one participant through a [`Selection`], and
//! returns freshly-built result values. The record sequence itself is never
//! mutated, so several analyses can share one parse, concurrently if the
//! caller wants.
//!
//! # Modules
//!
//! - [`filter`] - record filtering by user and date range
//! - [`stats`] - message/word/media/link totals and busy-user ranking
//! - [`words`] - word-frequency tables against a stop-word list
//! - [`emoji`] - emoji frequency
//! - [`timeline`] - monthly/daily timelines, activity maps, heatmap pivot
//! - [`sentiment`] - polarity scoring and label summary
//!
//! # Example
//!
//! ```rust
//! use chatlens::analysis::{Selection, stats::fetch_stats};
//! use chatlens::parser::TranscriptParser;
//!
//! let records = TranscriptParser::new().parse_str(
//!     "01/01/24, 09:05 am - Alice: Hello there\n\
//!      01/01/24, 09:06 am - Bob: Hi\n",
//! );
//!
//! let overall = fetch_stats(&records, &Selection::Overall);
//! assert_eq!(overall.messages, 2);
//!
//! let alice = fetch_stats(&records, &Selection::user("Alice"));
//! assert_eq!(alice.messages, 1);
//! ```

pub mod emoji;
pub mod filter;
pub mod sentiment;
pub mod stats;
pub mod timeline;
pub mod words;

use std::fmt;

use crate::MessageRecord;

pub use filter::{FilterConfig, apply_filters};

/// Which participant's records an analysis runs over.
///
/// `Overall` scans the full table; `User` narrows to rows whose `user`
/// column equals the given name exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// The whole conversation.
    #[default]
    Overall,
    /// One participant, matched by exact name.
    User(String),
}

impl Selection {
    /// Convenience constructor for a participant selection.
    pub fn user(name: impl Into<String>) -> Self {
        Selection::User(name.into())
    }

    /// Returns `true` if the record falls inside this selection.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        match self {
            Selection::Overall => true,
            Selection::User(name) => record.sender == *name,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Overall => write!(f, "Overall"),
            Selection::User(name) => write!(f, "{name}"),
        }
    }
}

/// Returns a filtered view of the records for a selection.
///
/// The view borrows from the original sequence; nothing is copied or
/// mutated, so other consumers can keep using the full table.
pub fn select<'a>(records: &'a [MessageRecord], selection: &Selection) -> Vec<&'a MessageRecord> {
    records.iter().filter(|r| selection.matches(r)).collect()
}
