//! Message sentiment scoring and summary.
//!
//! The sentiment model itself is an external capability behind the
//! [`PolarityScorer`] trait: given text, return a polarity in `[-1, 1]`.
//! This module owns everything around it: the fixed classification
//! thresholds (above `0.1` positive, below `-0.1` negative, neutral in
//! between) and the per-selection summary.
//!
//! [`LexiconScorer`] is the built-in scorer: a lightweight word-list
//! approach with intensifier and negation handling. Swap in anything
//! heavier by implementing the trait.

use std::collections::HashSet;
use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;

use super::Selection;
use crate::MessageRecord;
use crate::error::{ChatlensError, Result};

/// External sentiment capability: text in, polarity in `[-1, 1]` out.
pub trait PolarityScorer {
    /// Scores one message body.
    fn polarity(&self, text: &str) -> f32;
}

/// Classification of a polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Applies the fixed thresholds: `> 0.1` positive, `< -0.1` negative,
    /// neutral otherwise.
    pub fn classify(polarity: f32) -> Self {
        if polarity > 0.1 {
            SentimentLabel::Positive
        } else if polarity < -0.1 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "Positive"),
            SentimentLabel::Negative => write!(f, "Negative"),
            SentimentLabel::Neutral => write!(f, "Neutral"),
        }
    }
}

/// One scored message row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageSentiment {
    /// Participant name (or the notification sentinel).
    pub user: String,
    /// The message body that was scored.
    pub message: String,
    /// Polarity in `[-1, 1]`.
    pub polarity: f32,
    /// Classified label.
    pub label: SentimentLabel,
}

/// Sentiment summary for a selection: per-message scores plus label counts.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SentimentSummary {
    /// Every scored message, in transcript order.
    pub messages: Vec<MessageSentiment>,
    /// Number of messages labeled positive.
    pub positive: usize,
    /// Number of messages labeled negative.
    pub negative: usize,
    /// Number of messages labeled neutral.
    pub neutral: usize,
}

/// Scores every record in a selection and tallies the labels.
///
/// # Example
///
/// ```rust
/// use chatlens::analysis::{Selection, sentiment::{LexiconScorer, sentiment_summary}};
/// use chatlens::MessageRecord;
///
/// let records = vec![
///     MessageRecord::new("Alice", "this is great, I love it"),
///     MessageRecord::new("Bob", "terrible, I hate mondays"),
/// ];
///
/// let summary = sentiment_summary(&records, &Selection::Overall, &LexiconScorer::new());
/// assert_eq!(summary.positive, 1);
/// assert_eq!(summary.negative, 1);
/// ```
pub fn sentiment_summary(
    records: &[MessageRecord],
    selection: &Selection,
    scorer: &dyn PolarityScorer,
) -> SentimentSummary {
    let mut summary = SentimentSummary::default();

    for record in records.iter().filter(|r| selection.matches(r)) {
        let polarity = scorer.polarity(&record.body).clamp(-1.0, 1.0);
        let label = SentimentLabel::classify(polarity);

        match label {
            SentimentLabel::Positive => summary.positive += 1,
            SentimentLabel::Negative => summary.negative += 1,
            SentimentLabel::Neutral => summary.neutral += 1,
        }

        summary.messages.push(MessageSentiment {
            user: record.sender.clone(),
            message: record.body.clone(),
            polarity,
            label,
        });
    }

    summary
}

// ============================================================================
// Built-in lexicon scorer
// ============================================================================

static POSITIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "good", "great", "excellent", "wonderful", "fantastic", "amazing", "awesome",
        "love", "happy", "joy", "pleased", "delighted", "satisfied", "perfect",
        "beautiful", "brilliant", "outstanding", "superb", "best", "better",
        "positive", "success", "successful", "win", "winner", "winning",
        "enjoy", "pleasant", "comfortable", "excited", "exciting", "thrilled",
        "like", "liked", "favorite", "prefer", "thanks", "congrats", "nice",
    ]
    .iter()
    .copied()
    .collect()
});

static NEGATIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "bad", "terrible", "awful", "horrible", "poor", "worst", "worse",
        "hate", "angry", "sad", "upset", "disappointed", "unhappy",
        "fail", "failure", "failed", "problem", "issue", "wrong", "error",
        "difficult", "hard", "struggle", "struggling", "broken",
        "pain", "painful", "hurt", "damage", "damaged", "disaster",
        "negative", "loss", "lose", "losing", "lost", "annoying", "boring",
    ]
    .iter()
    .copied()
    .collect()
});

static INTENSIFIERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["very", "extremely", "absolutely", "really", "incredibly", "highly", "totally"]
        .iter()
        .copied()
        .collect()
});

static NEGATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["not", "no", "never", "nothing", "nobody", "neither", "nor", "none"]
        .iter()
        .copied()
        .collect()
});

/// Lightweight word-list polarity scorer.
///
/// Counts positive and negative lexicon hits with a 1.5x boost after an
/// intensifier and a sign flip after a negation, then normalizes the balance
/// to `[-1, 1]`. Text without any lexicon hit scores `0.0`.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl LexiconScorer {
    /// Creates a scorer over the built-in English lexicon.
    pub fn new() -> Self {
        Self {
            positive: POSITIVE_WORDS.iter().map(|w| (*w).to_string()).collect(),
            negative: NEGATIVE_WORDS.iter().map(|w| (*w).to_string()).collect(),
        }
    }

    /// Creates a scorer over caller-supplied word lists.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::EmptyResource`] if either list is empty;
    /// an empty lexicon would silently label everything neutral.
    pub fn with_lexicon<I, S>(positive: I, negative: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let positive: HashSet<String> = positive
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        let negative: HashSet<String> = negative
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();

        if positive.is_empty() || negative.is_empty() {
            return Err(ChatlensError::empty_resource("sentiment lexicon"));
        }

        Ok(Self { positive, negative })
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f32 {
        let words: Vec<String> = text
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric() && c != '\'')
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        let mut positive_score = 0.0f32;
        let mut negative_score = 0.0f32;

        for (i, word) in words.iter().enumerate() {
            let is_positive = self.positive.contains(word);
            let is_negative = self.negative.contains(word);
            if !is_positive && !is_negative {
                continue;
            }

            let mut weight = 1.0;
            let mut negated = false;

            if i > 0 {
                let prev = words[i - 1].as_str();
                if INTENSIFIERS.contains(prev) {
                    weight = 1.5;
                }
                if NEGATIONS.contains(prev) {
                    negated = true;
                }
                // "really not good": look one further back for the negation
                if i > 1 && INTENSIFIERS.contains(prev) && NEGATIONS.contains(words[i - 2].as_str())
                {
                    negated = true;
                }
            }

            // A negation flips the word's contribution.
            if is_positive != negated {
                positive_score += weight;
            } else {
                negative_score += weight;
            }
        }

        let total = positive_score + negative_score;
        if total == 0.0 {
            0.0
        } else {
            (positive_score - negative_score) / total
        }
    }
}
