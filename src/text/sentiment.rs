//! Rule-based sentiment classification

use super::lexicon::{count_present, NEGATIVE_TERMS, POSITIVE_TERMS};
use crate::analysis::result::Sentiment;

/// Classify sentiment of (lowercased) text
///
/// Counts hits from two fixed five-word lexicons. Ties resolve to neutral,
/// including the zero-hit case.
pub fn classify(lower_text: &str) -> Sentiment {
    let positive = count_present(lower_text, POSITIVE_TERMS);
    let negative = count_present(lower_text, NEGATIVE_TERMS);

    if positive > negative {
        Sentiment::Positive
    } else if negative > positive {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}
