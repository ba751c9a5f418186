//! Word-frequency tables for common-word ranking and word-cloud data.
//!
//! Frequencies are computed over human-authored, non-media rows only:
//! notification rows and media placeholders would otherwise dominate every
//! table. Tokens are lowercased whitespace splits of the body; the caller
//! supplies the stop-word list (see [`StopWords`](crate::config::StopWords)).

use std::collections::HashMap;

use super::Selection;
use super::stats::MEDIA_OMITTED;
use crate::MessageRecord;
use crate::config::StopWords;

/// A word and how often it occurred.
pub type WordCount = (String, usize);

/// Full word-frequency table for a selection, sorted by count descending
/// (ties break alphabetically).
///
/// This is the data behind a word cloud; rendering is out of scope here.
pub fn word_frequencies(
    records: &[MessageRecord],
    selection: &Selection,
    stop_words: &StopWords,
) -> Vec<WordCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    let rows = records
        .iter()
        .filter(|r| selection.matches(r))
        .filter(|r| !r.is_notification() && r.body != MEDIA_OMITTED);

    for record in rows {
        for word in record.body.to_lowercase().split_whitespace() {
            if !stop_words.contains(word) {
                *counts.entry(word.to_string()).or_default() += 1;
            }
        }
    }

    let mut table: Vec<WordCount> = counts.into_iter().collect();
    table.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    table
}

/// The `limit` most common words for a selection.
///
/// # Example
///
/// ```rust
/// use chatlens::analysis::{Selection, words::most_common_words};
/// use chatlens::config::StopWords;
/// use chatlens::MessageRecord;
///
/// let records = vec![
///     MessageRecord::new("Alice", "coffee tomorrow?"),
///     MessageRecord::new("Bob", "coffee sounds good"),
/// ];
/// let stop = StopWords::from_text("the a sounds")?;
///
/// let top = most_common_words(&records, &Selection::Overall, &stop, 20);
/// assert_eq!(top[0], ("coffee".to_string(), 2));
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn most_common_words(
    records: &[MessageRecord],
    selection: &Selection,
    stop_words: &StopWords,
    limit: usize,
) -> Vec<WordCount> {
    let mut table = word_frequencies(records, selection, stop_words);
    table.truncate(limit);
    table
}
