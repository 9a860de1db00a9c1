//! Fixed lexicons used by the heuristic text scorer
//!
//! These word lists are deliberate placeholders for a learned text
//! classifier. Matching is case-insensitive substring matching against the
//! lowercased input; each term counts once regardless of how often it occurs.

/// Clickbait indicator terms (-10 per term present)
pub const CLICKBAIT_TERMS: &[&str] = &[
    "miracle",
    "cure",
    "shocking",
    "you won't believe",
    "doctors hate",
    "secret",
];

/// Absolutist terms (-15 when more than two are present)
pub const ABSOLUTIST_TERMS: &[&str] = &["never", "always", "all", "everyone", "nobody", "impossible"];

/// Urgency / emotional-manipulation terms (-5 per term present)
pub const URGENCY_TERMS: &[&str] = &["urgent", "act now", "limited time", "exclusive", "breaking"];

/// Medical-claim terms (-20 when present without "study" or "research")
pub const MEDICAL_TERMS: &[&str] = &["cure", "treat", "heal", "prevent", "guaranteed"];

/// Positive sentiment terms
pub const POSITIVE_TERMS: &[&str] = &["good", "great", "excellent", "amazing", "wonderful"];

/// Negative sentiment terms
pub const NEGATIVE_TERMS: &[&str] = &["bad", "terrible", "awful", "horrible", "worst"];

/// Count how many lexicon terms occur in the (lowercased) text
///
/// Presence-based: a term occurring multiple times still counts once.
pub fn count_present(lower_text: &str, terms: &[&str]) -> usize {
    terms.iter().filter(|term| lower_text.contains(*term)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_present_counts_terms_not_occurrences() {
        // "cure" twice still counts as one term
        assert_eq!(count_present("cure the cure", CLICKBAIT_TERMS), 1);
    }

    #[test]
    fn test_count_present_multiple_terms() {
        assert_eq!(
            count_present("a shocking secret miracle", CLICKBAIT_TERMS),
            3
        );
    }

    #[test]
    fn test_count_present_empty_text() {
        assert_eq!(count_present("", CLICKBAIT_TERMS), 0);
    }

    #[test]
    fn test_multi_word_term_matches() {
        assert_eq!(count_present("you won't believe this", CLICKBAIT_TERMS), 1);
    }
}
