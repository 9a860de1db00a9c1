//! Analysis result types

use serde::{Deserialize, Serialize};

/// Sentiment classification of analyzed text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// More positive-lexicon hits than negative
    Positive,
    /// More negative-lexicon hits than positive
    Negative,
    /// Tied counts, including no hits at all
    Neutral,
}

/// Result of text credibility analysis
///
/// Produced by [`TextAnalyzer::analyze`](crate::scorer::TextAnalyzer::analyze).
/// The score is always clamped to [0, 100]; `claims` and `reasons` hold at
/// most five entries each, insertion order preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAnalysisResult {
    /// Credibility score (0-100, higher = more credible)
    pub score: u8,

    /// Rule-based sentiment classification
    pub sentiment: Sentiment,

    /// Claims detected in the text (at most 5)
    pub claims: Vec<String>,

    /// Contradictory statement patterns detected
    pub contradictions: Vec<String>,

    /// Human-readable summary embedding the score and risk band
    pub summary: String,

    /// Explanations for the scoring decisions (at most 5)
    pub reasons: Vec<String>,
}

/// A reference image matched against the input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceMatch {
    /// Label of the matched reference image
    pub source_label: String,

    /// URL of the matched reference image
    pub reference_url: String,

    /// Match confidence (0.0-1.0), derived from Hamming distance:
    /// `1 - distance/64`
    pub confidence: f32,
}

/// Result of image credibility analysis
///
/// Produced by [`ImageAnalyzer::analyze`](crate::scorer::ImageAnalyzer::analyze).
/// The score is always clamped to [0, 100] and the manipulation probability
/// to [0.0, 1.0]. A decode failure or internal fault yields the degraded
/// shape (score 0, probability 1.0) rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAnalysisResult {
    /// Credibility score (0-100, higher = more credible)
    pub score: u8,

    /// Estimated probability that the image was digitally altered (0.0-1.0)
    pub manipulation_probability: f32,

    /// Matched reference sources, best first (at most 3)
    pub matches: Vec<SourceMatch>,

    /// OCR text passed through from the OCR collaborator (empty if none)
    pub ocr_text: String,

    /// Explanations for the scoring decisions (at most 5)
    pub reasons: Vec<String>,
}

impl ImageAnalysisResult {
    /// Construct the degraded fail-safe result
    ///
    /// Used for decode failures and unexpected internal faults: score 0,
    /// manipulation probability 1.0, no matches, a single explanatory reason.
    /// Biasing failures toward suspicion keeps bad input from scoring as
    /// credible content.
    pub fn degraded(reason: impl Into<String>, ocr_text: Option<&str>) -> Self {
        Self {
            score: 0,
            manipulation_probability: 1.0,
            matches: vec![],
            ocr_text: ocr_text.unwrap_or("").to_string(),
            reasons: vec![reason.into()],
        }
    }
}

/// Explainability breakdown attached to a fused result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explainability {
    /// First three reasons from the text-then-image concatenation
    pub top_reasons: Vec<String>,

    /// Text score contribution (0 if text was absent)
    pub text_contribution: u8,

    /// Visual score contribution (0 if image was absent)
    pub visual_contribution: u8,
}

/// Combined multi-modal analysis result
///
/// Flat union of the per-modality results plus the fused credibility score,
/// shaped for transport as a single key-value record. Constructed fresh per
/// request; nothing here is shared or cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusedResult {
    /// Text score if text was analyzed
    pub text_score: Option<u8>,

    /// Visual score if an image was analyzed
    pub visual_score: Option<u8>,

    /// Sentiment of the text, if text was analyzed
    pub sentiment: Option<Sentiment>,

    /// Claims detected in the text
    pub claims: Vec<String>,

    /// Contradictions detected in the text
    pub contradictions: Vec<String>,

    /// Text analysis summary (empty if no text)
    pub summary: String,

    /// Concatenated reasons, text first then image (not truncated)
    pub reasons: Vec<String>,

    /// Manipulation probability, if an image was analyzed
    pub manipulation_probability: Option<f32>,

    /// Matched reference sources from image analysis
    pub matches: Vec<SourceMatch>,

    /// OCR text, if an image was analyzed
    pub ocr_text: Option<String>,

    /// Fused credibility score (0-100)
    pub credibility_score: u8,

    /// Explainability breakdown
    pub explainability: Explainability,
}
