//! Emoji frequency analysis.
//!
//! Extraction is a per-character membership test against the Unicode emoji
//! set, expressed as a compiled character-class pattern. Characters that are
//! emoji only with a variation selector (digits, `#`, text-style hearts) are
//! deliberately outside the class; `Emoji_Presentation` covers the glyphs
//! people actually read as emoji.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::Selection;
use crate::MessageRecord;

/// Single emoji-presentation characters.
static EMOJI_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{Emoji_Presentation}").unwrap());

/// Returns every emoji character in the text, in order, one entry each.
///
/// # Example
///
/// ```rust
/// use chatlens::analysis::emoji::extract_emojis;
///
/// assert_eq!(extract_emojis("deal 🤝 done 🎉"), vec!["🤝", "🎉"]);
/// assert!(extract_emojis("no emoji here").is_empty());
/// ```
pub fn extract_emojis(text: &str) -> Vec<&str> {
    EMOJI_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Emoji frequency table for a selection, sorted by count descending
/// (ties break by codepoint).
///
/// Every row of the selection is scanned, notifications included.
pub fn emoji_counts(records: &[MessageRecord], selection: &Selection) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for record in records.iter().filter(|r| selection.matches(r)) {
        for emoji in extract_emojis(&record.body) {
            *counts.entry(emoji).or_default() += 1;
        }
    }

    let mut table: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(emoji, count)| (emoji.to_string(), count))
        .collect();
    table.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    table
}
