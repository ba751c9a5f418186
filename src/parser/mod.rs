//! WhatsApp transcript parser.
//!
//! This module turns one exported conversation transcript into an ordered
//! `Vec<MessageRecord>`:
//!
//! 1. [`timestamp`] recognizes every dated line header and normalizes its
//!    whitespace.
//! 2. [`segment`] cuts the raw text at those headers and attributes each
//!    fragment to a sender (or to the notification sentinel).
//! 3. Each record derives its calendar fields once, at construction.
//!
//! Parsing is a pure function over the input string: no global state, one
//! synchronous pass, linear in transcript length. Per-line problems never
//! abort the run; a header with an impossible date simply yields a record
//! with an absent timestamp.
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::TranscriptParser;
//!
//! let records = TranscriptParser::new()
//!     .parse_str("01/01/24, 09:05 am - Alice: Hello there");
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].sender(), "Alice");
//! assert_eq!(records[0].body(), "Hello there");
//! assert_eq!(records[0].year(), Some(2024));
//! ```

pub mod timestamp;

mod segment;

use std::fs;
use std::path::Path;

use crate::MessageRecord;
use crate::error::Result;

use segment::{Attribution, split_fragments, split_sender_body};

/// Parser for WhatsApp TXT transcript exports.
///
/// The parser is stateless; construct once and reuse freely, including from
/// multiple threads. Each call operates on its own view of the input and
/// produces an independent record sequence.
///
/// # Example
///
/// ```rust,no_run
/// use chatlens::parser::TranscriptParser;
///
/// let parser = TranscriptParser::new();
/// let records = parser.parse("whatsapp_chat.txt".as_ref())?;
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TranscriptParser;

impl TranscriptParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Reads and parses a transcript file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::Io`](crate::ChatlensError::Io) if the file
    /// cannot be read or is not valid UTF-8. Content-level problems never
    /// error; see [`parse_str`](Self::parse_str).
    pub fn parse(&self, path: &Path) -> Result<Vec<MessageRecord>> {
        let content = fs::read_to_string(path)?;
        Ok(self.parse_str(&content))
    }

    /// Parses transcript content from a string.
    ///
    /// Infallible by design: a transcript with no recognized headers
    /// produces an empty sequence, and a header with an unparseable date
    /// produces a record with an absent timestamp. The returned sequence
    /// preserves transcript order, with exactly one record per recognized
    /// header.
    pub fn parse_str(&self, content: &str) -> Vec<MessageRecord> {
        split_fragments(content)
            .into_iter()
            .map(|fragment| {
                let ts = fragment.timestamp.parse();
                match split_sender_body(fragment.text) {
                    Attribution::Message { sender, body } => {
                        MessageRecord::with_timestamp(sender, body, ts)
                    }
                    Attribution::Notification { body } => MessageRecord::notification(body, ts),
                }
            })
            .collect()
    }
}
