//! Conversation totals and busy-user ranking.
//!
//! The totals mirror what an analyst asks first: how many messages, how many
//! words, how many media attachments, how many shared links. All four are
//! computed in one pass over the selected rows, counting every row including
//! notifications (attribution filtering is the word-frequency module's job).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::Selection;
use crate::MessageRecord;

/// Placeholder body WhatsApp substitutes for omitted attachments.
///
/// Compared against the trimmed record body.
pub const MEDIA_OMITTED: &str = "<Media omitted>";

/// URL matcher for the link totals.
static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"https?://[^\s<>"'\)\]\}]+"#).unwrap());

/// Aggregate totals for a selection of the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ChatStats {
    /// Number of records in the selection.
    pub messages: usize,
    /// Total whitespace-separated words across all bodies.
    pub words: usize,
    /// Number of media placeholder messages.
    pub media: usize,
    /// Total URLs found across all bodies.
    pub links: usize,
}

/// One entry of the busy-user ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserActivity {
    /// Participant name (or the notification sentinel).
    pub user: String,
    /// Number of messages sent.
    pub count: usize,
    /// Share of the whole conversation, percent rounded to 2 decimals.
    pub percent: f64,
}

/// Computes message/word/media/link totals for a selection.
///
/// # Example
///
/// ```rust
/// use chatlens::analysis::{Selection, stats::fetch_stats};
/// use chatlens::MessageRecord;
///
/// let records = vec![
///     MessageRecord::new("Alice", "check https://example.com"),
///     MessageRecord::new("Alice", "<Media omitted>"),
/// ];
///
/// let stats = fetch_stats(&records, &Selection::Overall);
/// assert_eq!(stats.messages, 2);
/// assert_eq!(stats.words, 4);
/// assert_eq!(stats.media, 1);
/// assert_eq!(stats.links, 1);
/// ```
pub fn fetch_stats(records: &[MessageRecord], selection: &Selection) -> ChatStats {
    let mut stats = ChatStats::default();

    for record in records.iter().filter(|r| selection.matches(r)) {
        stats.messages += 1;
        stats.words += record.body.split_whitespace().count();
        if record.body == MEDIA_OMITTED {
            stats.media += 1;
        }
        stats.links += find_urls(&record.body).len();
    }

    stats
}

/// Returns every URL in the text, in order.
pub fn find_urls(text: &str) -> Vec<&str> {
    URL_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Ranks participants by message count over the whole conversation.
///
/// Returns every participant (notifications included, like any other row),
/// sorted by count descending with name as the tie-breaker. The `percent`
/// field is each participant's share of all records, rounded to 2 decimals.
/// Callers wanting a leaderboard view take the first `top_n` entries.
pub fn most_busy_users(records: &[MessageRecord], top_n: usize) -> Vec<UserActivity> {
    use std::collections::HashMap;

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.sender.as_str()).or_default() += 1;
    }

    let total = records.len();
    let mut ranking: Vec<UserActivity> = counts
        .into_iter()
        .map(|(user, count)| UserActivity {
            user: user.to_string(),
            count,
            percent: round2(count as f64 / total as f64 * 100.0),
        })
        .collect();

    ranking.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.user.cmp(&b.user)));
    ranking.truncate(top_n);
    ranking
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
