//! Transcript segmentation and sender/body attribution.
//!
//! The raw export is cut at every recognized timestamp prefix: the text
//! between two consecutive prefixes is the body fragment paired with the
//! first of them. Any preamble before the first prefix is discarded, so the
//! number of emitted records always equals the number of recognized
//! prefixes.
//!
//! Within a fragment, the sender is whatever precedes the first `":"`
//! followed by whitespace, matched non-greedily. Fragments without such a
//! delimiter have no human author and become group notifications.
//!
//! The delimiter match is deliberately naive: a body that itself contains
//! `": "` before the real delimiter is mis-split, and the remaining parts
//! are rejoined with single spaces (dropping the matched delimiters). This
//! reproduces the long-standing behavior analysts already rely on; see
//! DESIGN.md before "fixing" it.

use once_cell::sync::Lazy;
use regex::Regex;

use super::timestamp::{TimestampMatch, timestamp_regex};

/// Non-greedy sender delimiter: shortest leading run of any characters
/// (newlines included) up to a `":"` followed by one whitespace character.
static SENDER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)(.+?):\s").unwrap());

/// A fragment of transcript text paired with its timestamp prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Fragment<'a> {
    pub timestamp: TimestampMatch,
    pub text: &'a str,
}

/// Cuts the transcript at every timestamp prefix.
///
/// Fragment *i* is the text between the end of prefix *i* and the start of
/// prefix *i+1* (or the end of input). The preamble before the first prefix
/// is discarded. Returns one fragment per recognized prefix; unrecognized
/// input yields an empty list.
pub(crate) fn split_fragments(text: &str) -> Vec<Fragment<'_>> {
    let matches: Vec<_> = timestamp_regex().find_iter(text).collect();

    matches
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let end = matches.get(i + 1).map_or(text.len(), |next| next.start());
            Fragment {
                timestamp: TimestampMatch::new(m.as_str()),
                text: &text[m.end()..end],
            }
        })
        .collect()
}

/// The sender/body attribution of one fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Attribution {
    /// A human-authored message: sender name and trimmed body.
    Message { sender: String, body: String },
    /// A system/service line with no human author; trimmed text.
    Notification { body: String },
}

/// Splits a fragment into sender and body at the first `":"` + whitespace.
///
/// Splitting keeps every capture, exactly like splitting on a pattern with
/// one capture group: `["", sender, between, more, ..., tail]`. When at
/// least one delimiter matched, the first capture is the sender and the
/// remaining parts are rejoined with single spaces and trimmed. Otherwise
/// the whole fragment is a notification.
pub(crate) fn split_sender_body(fragment: &str) -> Attribution {
    let parts = split_with_captures(fragment);

    if parts.len() > 2 {
        Attribution::Message {
            sender: parts[1].clone(),
            body: parts[2..].join(" ").trim().to_string(),
        }
    } else {
        Attribution::Notification {
            body: parts[0].trim().to_string(),
        }
    }
}

/// Split on [`SENDER_RE`] keeping the capture groups, mirroring a
/// capture-preserving regex split: text before each match, the match's
/// capture, and finally the tail after the last match.
fn split_with_captures(fragment: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut last = 0;

    for caps in SENDER_RE.captures_iter(fragment) {
        let whole = caps.get(0).unwrap();
        parts.push(fragment[last..whole.start()].to_string());
        parts.push(caps[1].to_string());
        last = whole.end();
    }

    parts.push(fragment[last..].to_string());
    parts
}
