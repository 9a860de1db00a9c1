//! Heuristic text credibility scoring
//!
//! Deterministic, stateless, rule-based analysis standing in for a learned
//! text classifier. All matching happens on the lowercased input.
//!
//! # Example
//!
//! ```
//! use verascore::config::AnalysisConfig;
//! use verascore::scorer::TextAnalyzer;
//! use verascore::text::scorer::HeuristicTextScorer;
//!
//! let scorer = HeuristicTextScorer::new(&AnalysisConfig::default());
//! let result = scorer.analyze("Miracle cure discovered! Doctors hate this one trick!");
//! assert!(result.score < 50);
//! ```

use super::lexicon::{
    count_present, ABSOLUTIST_TERMS, CLICKBAIT_TERMS, MEDICAL_TERMS, URGENCY_TERMS,
};
use super::sentiment;
use crate::analysis::result::TextAnalysisResult;
use crate::config::AnalysisConfig;
use crate::scorer::TextAnalyzer;

/// Contradiction patterns: ordered word pairs that must both occur, in order,
/// anywhere in the text. Each match subtracts 10 and appends the fixed label.
const CONTRADICTION_PATTERNS: &[(&str, &str, &str)] = &[
    ("never", "always", "Contradictory statements"),
    ("all", "none", "Contradictory statements"),
];

/// Rule-based text scorer
///
/// Starts from the configured base score and subtracts penalties for
/// clickbait, absolutist, urgency, and unsubstantiated medical language,
/// plus contradiction patterns. The final score is clamped to [0, 100].
#[derive(Debug, Clone)]
pub struct HeuristicTextScorer {
    base_score: i32,
    max_reasons: usize,
    max_claims: usize,
}

impl HeuristicTextScorer {
    /// Create a scorer from analysis configuration
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            base_score: config.base_score,
            max_reasons: config.max_reasons,
            max_claims: config.max_claims,
        }
    }

    /// Build the summary string embedding the final score and risk band
    fn summarize(score: i32) -> String {
        let mut summary = format!("Text analysis completed. Score: {}/100. ", score);
        summary.push_str(if score < 40 {
            "High risk of misinformation detected."
        } else if score < 70 {
            "Moderate risk detected."
        } else {
            "Low risk - content appears credible."
        });
        summary
    }
}

impl TextAnalyzer for HeuristicTextScorer {
    /// Score text for credibility
    ///
    /// Empty input is valid and yields the base result (base score, neutral
    /// sentiment, no reasons). This function has no I/O and never fails.
    fn analyze(&self, text: &str) -> TextAnalysisResult {
        let lower = text.to_lowercase();

        let mut score = self.base_score;
        let mut reasons = Vec::new();
        let mut claims = Vec::new();
        let mut contradictions = Vec::new();

        let clickbait_count = count_present(&lower, CLICKBAIT_TERMS);
        if clickbait_count > 0 {
            score -= clickbait_count as i32 * 10;
            reasons.push(format!("Detected {} clickbait indicator(s)", clickbait_count));
            claims.push("Contains clickbait language".to_string());
        }

        let absolutist_count = count_present(&lower, ABSOLUTIST_TERMS);
        if absolutist_count > 2 {
            score -= 15;
            reasons.push("Contains extreme/absolute claims".to_string());
            claims.push("Uses absolute language".to_string());
        }

        let urgency_count = count_present(&lower, URGENCY_TERMS);
        if urgency_count > 0 {
            score -= urgency_count as i32 * 5;
            reasons.push("Contains emotional manipulation language".to_string());
        }

        let medical_count = count_present(&lower, MEDICAL_TERMS);
        if medical_count > 0 && !lower.contains("study") && !lower.contains("research") {
            score -= 20;
            reasons.push("Medical claims without cited research".to_string());
            claims.push("Unsubstantiated medical claims".to_string());
        }

        let sentiment = sentiment::classify(&lower);

        for (first, second, label) in CONTRADICTION_PATTERNS {
            if ordered_pair(&lower, first, second) {
                contradictions.push((*label).to_string());
                score -= 10;
            }
        }

        let score = score.clamp(0, 100);

        log::debug!(
            "Text scoring: {} chars, score={}, clickbait={}, absolutist={}, urgency={}, medical={}",
            text.len(),
            score,
            clickbait_count,
            absolutist_count,
            urgency_count,
            medical_count
        );

        claims.truncate(self.max_claims);
        reasons.truncate(self.max_reasons);

        TextAnalysisResult {
            score: score as u8,
            sentiment,
            claims,
            contradictions,
            summary: Self::summarize(score),
            reasons,
        }
    }
}

/// True if `first` occurs in the text and `second` occurs after it ends
///
/// The first occurrence of `first` is sufficient: any later occurrence would
/// only leave less text for `second` to appear in.
fn ordered_pair(lower_text: &str, first: &str, second: &str) -> bool {
    match lower_text.find(first) {
        Some(idx) => lower_text[idx + first.len()..].contains(second),
        None => false,
    }
}
