//! Model-backed implementations of the scorer traits
//!
//! These wrap an [`OnnxModel`] behind the same [`TextAnalyzer`] and
//! [`ImageAnalyzer`] contracts the heuristic scorers implement. Inference
//! failures degrade to the fail-safe result shapes, like every other failure
//! in the pipeline.

use super::onnx_model::OnnxModel;
use crate::analysis::result::{ImageAnalysisResult, Sentiment, TextAnalysisResult};
use crate::io::ImageInput;
use crate::scorer::{ImageAnalyzer, TextAnalyzer};

/// Model-backed text scorer
#[derive(Debug)]
pub struct ModelTextScorer {
    model: OnnxModel,
}

impl ModelTextScorer {
    /// Wrap a loaded model
    pub fn new(model: OnnxModel) -> Self {
        Self { model }
    }
}

impl TextAnalyzer for ModelTextScorer {
    fn analyze(&self, text: &str) -> TextAnalysisResult {
        // Byte-frequency features are a placeholder until the tokenizer lands
        let features: Vec<f32> = text.bytes().map(|b| f32::from(b) / 255.0).collect();

        match self.model.infer(&features) {
            Ok(score) => TextAnalysisResult {
                score: score.clamp(0.0, 100.0).round() as u8,
                sentiment: Sentiment::Neutral,
                claims: vec![],
                contradictions: vec![],
                summary: format!("Model-based text analysis completed. Score: {:.0}/100.", score),
                reasons: vec!["Model-based credibility estimate".to_string()],
            },
            Err(e) => {
                log::warn!("Model text scoring failed, returning degraded result: {}", e);
                TextAnalysisResult {
                    score: 0,
                    sentiment: Sentiment::Neutral,
                    claims: vec![],
                    contradictions: vec![],
                    summary: "Text analysis failed.".to_string(),
                    reasons: vec![format!("Error analyzing text: {}", e)],
                }
            }
        }
    }
}

/// Model-backed image scorer
#[derive(Debug)]
pub struct ModelImageScorer {
    model: OnnxModel,
}

impl ModelImageScorer {
    /// Wrap a loaded model
    pub fn new(model: OnnxModel) -> Self {
        Self { model }
    }
}

impl ImageAnalyzer for ModelImageScorer {
    fn analyze(&self, input: &ImageInput, ocr_text: Option<&str>) -> ImageAnalysisResult {
        let small = input.pixels().thumbnail(16, 16).to_luma8();
        let features: Vec<f32> = small.pixels().map(|p| f32::from(p.0[0]) / 255.0).collect();

        match self.model.infer(&features) {
            Ok(score) => ImageAnalysisResult {
                score: score.clamp(0.0, 100.0).round() as u8,
                manipulation_probability: 1.0 - score.clamp(0.0, 100.0) / 100.0,
                matches: vec![],
                ocr_text: ocr_text.unwrap_or("").to_string(),
                reasons: vec!["Model-based credibility estimate".to_string()],
            },
            Err(e) => {
                log::warn!("Model image scoring failed, returning degraded result: {}", e);
                ImageAnalysisResult::degraded(format!("Error analyzing image: {}", e), ocr_text)
            }
        }
    }
}
