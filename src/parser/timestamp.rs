//! Timestamp prefix recognition and normalization.
//!
//! WhatsApp exports prefix every entry with a dated line header such as
//! `30/05/25, 12:30 pm - `. This module owns the prefix pattern, the
//! whitespace normalization applied before date parsing, and the strict
//! parse into a [`NaiveDateTime`].
//!
//! Exports produced on different devices swap ordinary spaces for
//! non-breaking (U+00A0) or narrow no-break (U+202F) spaces, most often
//! between the time and the am/pm marker. The pattern matches those via
//! `\s`, and [`normalize_spaces`] rewrites them to ASCII spaces so a single
//! chrono format string covers every variant.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

/// Pattern for the dated line header, e.g. `30/05/25, 12:30 pm - `.
///
/// Accepts 1-2 digit day and month, 2-or-4-digit year, 1-2 digit hour,
/// 2 digit minute, case-insensitive am/pm, and Unicode whitespace in place
/// of ordinary spaces. The trailing `" - "` separates the header from the
/// entry text.
pub const TIMESTAMP_PATTERN: &str =
    r"\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}\s*[apAP][mM]\s*-\s";

/// chrono format the normalized header must satisfy to yield a timestamp.
///
/// Two-digit years only: a 4-digit year passes the recognizer but fails
/// this strict parse, producing an absent timestamp for that record.
const TIMESTAMP_FORMAT: &str = "%d/%m/%y, %I:%M %p - ";

static TIMESTAMP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(TIMESTAMP_PATTERN).unwrap());

/// Returns the compiled timestamp prefix regex.
pub(crate) fn timestamp_regex() -> &'static Regex {
    &TIMESTAMP_RE
}

/// A recognized timestamp prefix and its normalized form.
///
/// Ephemeral: exists only while the transcript is being segmented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampMatch {
    /// The matched prefix exactly as it appears in the transcript.
    pub raw: String,
    /// The prefix with U+00A0 and U+202F rewritten to ASCII spaces.
    pub normalized: String,
}

impl TimestampMatch {
    pub(crate) fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            normalized: normalize_spaces(raw),
        }
    }

    /// Parses the normalized prefix into a timestamp.
    ///
    /// Returns `None` when the prefix matched the pattern but is not a
    /// valid date-time under the expected format (day 32, month 13, a
    /// 4-digit year). Parsing failures never abort the surrounding
    /// transcript processing.
    pub fn parse(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.normalized, TIMESTAMP_FORMAT).ok()
    }
}

/// Rewrites non-breaking (U+00A0) and narrow no-break (U+202F) spaces to
/// ASCII spaces.
pub fn normalize_spaces(s: &str) -> String {
    s.replace(['\u{202f}', '\u{a0}'], " ")
}

/// Returns every timestamp prefix in the text, in transcript order.
pub fn find_timestamps(text: &str) -> Vec<TimestampMatch> {
    TIMESTAMP_RE
        .find_iter(text)
        .map(|m| TimestampMatch::new(m.as_str()))
        .collect()
}
