//! Multi-modal score fusion and explainability
//!
//! Combines per-modality analysis results into a single credibility score
//! plus an explainability breakdown.
//!
//! # Fusion rule
//!
//! - Both modalities present: `round(0.6 * text + 0.4 * visual)` with
//!   round-half-to-even rounding (documented, see [`round_half_even`])
//! - Only one present: that modality's score
//! - Neither present: 50 (neutral default)

use super::result::{Explainability, FusedResult, ImageAnalysisResult, TextAnalysisResult};
use crate::config::AnalysisConfig;

/// Number of reasons surfaced in the explainability breakdown
const TOP_REASONS: usize = 3;

/// Combines text and image analysis results into a fused credibility score
#[derive(Debug, Clone)]
pub struct FusionEngine {
    text_weight: f64,
    visual_weight: f64,
}

impl FusionEngine {
    /// Create a fusion engine from analysis configuration
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            text_weight: config.text_weight,
            visual_weight: config.visual_weight,
        }
    }

    /// Fuse per-modality results into a combined result
    ///
    /// Reasons are concatenated text-first, without deduplication or
    /// truncation; the explainability block carries the first three. Each
    /// contribution is the modality's score, or 0 when absent.
    pub fn fuse(
        &self,
        text: Option<&TextAnalysisResult>,
        image: Option<&ImageAnalysisResult>,
    ) -> FusedResult {
        let credibility_score = self.credibility_score(
            text.map(|t| t.score),
            image.map(|i| i.score),
        );

        let mut reasons: Vec<String> = Vec::new();
        if let Some(t) = text {
            reasons.extend(t.reasons.iter().cloned());
        }
        if let Some(i) = image {
            reasons.extend(i.reasons.iter().cloned());
        }

        let explainability = Explainability {
            top_reasons: reasons.iter().take(TOP_REASONS).cloned().collect(),
            text_contribution: text.map_or(0, |t| t.score),
            visual_contribution: image.map_or(0, |i| i.score),
        };

        log::debug!(
            "Fusion: text={:?}, visual={:?} -> credibility={}",
            text.map(|t| t.score),
            image.map(|i| i.score),
            credibility_score
        );

        FusedResult {
            text_score: text.map(|t| t.score),
            visual_score: image.map(|i| i.score),
            sentiment: text.map(|t| t.sentiment),
            claims: text.map_or_else(Vec::new, |t| t.claims.clone()),
            contradictions: text.map_or_else(Vec::new, |t| t.contradictions.clone()),
            summary: text.map_or_else(String::new, |t| t.summary.clone()),
            reasons,
            manipulation_probability: image.map(|i| i.manipulation_probability),
            matches: image.map_or_else(Vec::new, |i| i.matches.clone()),
            ocr_text: image.map(|i| i.ocr_text.clone()),
            credibility_score,
            explainability,
        }
    }

    /// Apply the weighted fusion rule
    fn credibility_score(&self, text_score: Option<u8>, visual_score: Option<u8>) -> u8 {
        match (text_score, visual_score) {
            (Some(t), Some(v)) => {
                let weighted =
                    self.text_weight * f64::from(t) + self.visual_weight * f64::from(v);
                round_half_even(weighted).clamp(0, 100) as u8
            }
            (Some(t), None) => t,
            (None, Some(v)) => v,
            // Neutral default when nothing was analyzed
            (None, None) => 50,
        }
    }
}

/// Round to the nearest integer, halves to the nearest even integer
///
/// Banker's rounding matches the observed behavior of the fusion formula and
/// avoids the systematic upward bias of round-half-up on .5 boundary scores.
fn round_half_even(value: f64) -> i64 {
    let floor = value.floor();
    let fraction = value - floor;
    let floor = floor as i64;

    if fraction > 0.5 {
        floor + 1
    } else if fraction < 0.5 {
        floor
    } else if floor % 2 == 0 {
        floor
    } else {
        floor + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::result::Sentiment;

    fn text_result(score: u8, reasons: Vec<&str>) -> TextAnalysisResult {
        TextAnalysisResult {
            score,
            sentiment: Sentiment::Neutral,
            claims: vec!["claim".to_string()],
            contradictions: vec![],
            summary: "summary".to_string(),
            reasons: reasons.into_iter().map(String::from).collect(),
        }
    }

    fn image_result(score: u8, reasons: Vec<&str>) -> ImageAnalysisResult {
        ImageAnalysisResult {
            score,
            manipulation_probability: 0.2,
            matches: vec![],
            ocr_text: "ocr".to_string(),
            reasons: reasons.into_iter().map(String::from).collect(),
        }
    }

    fn engine() -> FusionEngine {
        FusionEngine::new(&AnalysisConfig::default())
    }

    #[test]
    fn test_fusion_both_modalities() {
        let fused = engine().fuse(
            Some(&text_result(80, vec![])),
            Some(&image_result(60, vec![])),
        );
        // 0.6 * 80 + 0.4 * 60 = 72
        assert_eq!(fused.credibility_score, 72);
        assert_eq!(fused.text_score, Some(80));
        assert_eq!(fused.visual_score, Some(60));
    }

    #[test]
    fn test_fusion_text_only() {
        let fused = engine().fuse(Some(&text_result(80, vec![])), None);
        assert_eq!(fused.credibility_score, 80);
        assert_eq!(fused.visual_score, None);
        assert_eq!(fused.manipulation_probability, None);
        assert_eq!(fused.ocr_text, None);
        assert_eq!(fused.explainability.visual_contribution, 0);
    }

    #[test]
    fn test_fusion_image_only() {
        let fused = engine().fuse(None, Some(&image_result(60, vec![])));
        assert_eq!(fused.credibility_score, 60);
        assert_eq!(fused.text_score, None);
        assert_eq!(fused.sentiment, None);
        assert!(fused.summary.is_empty());
        assert_eq!(fused.explainability.text_contribution, 0);
    }

    #[test]
    fn test_fusion_neither_is_neutral() {
        let fused = engine().fuse(None, None);
        assert_eq!(fused.credibility_score, 50);
        assert!(fused.reasons.is_empty());
        assert!(fused.explainability.top_reasons.is_empty());
    }

    #[test]
    fn test_reasons_concatenate_text_first() {
        let fused = engine().fuse(
            Some(&text_result(70, vec!["t1", "t2"])),
            Some(&image_result(50, vec!["i1", "i2"])),
        );
        assert_eq!(fused.reasons, vec!["t1", "t2", "i1", "i2"]);
        assert_eq!(fused.explainability.top_reasons, vec!["t1", "t2", "i1"]);
    }

    #[test]
    fn test_reasons_not_deduplicated() {
        let fused = engine().fuse(
            Some(&text_result(70, vec!["same"])),
            Some(&image_result(50, vec!["same"])),
        );
        assert_eq!(fused.reasons, vec!["same", "same"]);
    }

    #[test]
    fn test_round_half_even() {
        assert_eq!(round_half_even(72.4), 72);
        assert_eq!(round_half_even(72.6), 73);
        // Halves go to the even neighbor
        assert_eq!(round_half_even(72.5), 72);
        assert_eq!(round_half_even(73.5), 74);
        assert_eq!(round_half_even(0.5), 0);
    }

    #[test]
    fn test_banker_rounding_on_boundary_scores() {
        // text 75, visual 69: 0.6*75 + 0.4*69 = 72.6 -> 73
        let fused = engine().fuse(
            Some(&text_result(75, vec![])),
            Some(&image_result(69, vec![])),
        );
        assert_eq!(fused.credibility_score, 73);

        // text 45, visual 50: 0.6*45 + 0.4*50 = 47.0
        let fused = engine().fuse(
            Some(&text_result(45, vec![])),
            Some(&image_result(50, vec![])),
        );
        assert_eq!(fused.credibility_score, 47);
    }
}
