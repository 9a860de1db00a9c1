//! Heuristic image credibility scoring
//!
//! Pixel-level heuristics standing in for learned manipulation-detection
//! models, combined with perceptual-hash reference matching. Every failure
//! mode converges to a degraded-but-valid result; this component never
//! propagates an error to its caller.

use image::GrayImage;

use crate::analysis::result::ImageAnalysisResult;
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::io::ImageInput;
use crate::matching::matcher::ReferenceMatcher;
use crate::matching::store::ReferenceStore;
use crate::scorer::ImageAnalyzer;

use super::blur::laplacian_variance;
use super::color::saturation_stddev;
use super::edges::edge_density;
use super::metadata::metadata_issue;

/// Rule-based image scorer
///
/// Starts from the configured base score and applies blur, manipulation,
/// metadata, and reference-matching adjustments. The score is clamped to
/// [0, 100] and the manipulation probability to [0.0, 1.0].
#[derive(Debug, Clone)]
pub struct HeuristicImageScorer {
    matcher: ReferenceMatcher,
    base_score: i32,
    blur_variance_threshold: f64,
    min_edge_density: f64,
    max_edge_density: f64,
    saturation_std_threshold: f64,
    max_reasons: usize,
}

impl HeuristicImageScorer {
    /// Create a scorer from analysis configuration and an injected
    /// reference store
    pub fn new(config: &AnalysisConfig, references: ReferenceStore) -> Self {
        Self {
            matcher: ReferenceMatcher::new(references, config),
            base_score: config.base_score,
            blur_variance_threshold: config.blur_variance_threshold,
            min_edge_density: config.min_edge_density,
            max_edge_density: config.max_edge_density,
            saturation_std_threshold: config.saturation_std_threshold,
            max_reasons: config.max_reasons,
        }
    }

    /// Count manipulation indicators (0, 1, or 2)
    ///
    /// 1. Edge density outside the plausible band
    /// 2. Suspiciously uniform saturation channel
    fn manipulation_indicators(&self, input: &ImageInput, gray: &GrayImage) -> u32 {
        let mut indicators = 0;

        let density = edge_density(gray);
        if density < self.min_edge_density || density > self.max_edge_density {
            log::debug!(
                "Edge density {:.4} outside [{}, {}]",
                density,
                self.min_edge_density,
                self.max_edge_density
            );
            indicators += 1;
        }

        let rgb = input.pixels().to_rgb8();
        let saturation_std = saturation_stddev(&rgb);
        if saturation_std < self.saturation_std_threshold {
            log::debug!(
                "Saturation std-dev {:.2} below {}",
                saturation_std,
                self.saturation_std_threshold
            );
            indicators += 1;
        }

        indicators
    }

    /// Scoring pipeline; failures here are caught by `analyze` and turned
    /// into the degraded result
    fn run(&self, input: &ImageInput, ocr_text: Option<&str>) -> Result<ImageAnalysisResult, AnalysisError> {
        let (width, height) = (input.pixels().width(), input.pixels().height());
        if width == 0 || height == 0 {
            return Err(AnalysisError::InvalidInput("image has zero pixels".to_string()));
        }

        let mut score = self.base_score;
        let mut manipulation_probability = 0.0f64;
        let mut reasons = Vec::new();

        // Grayscale feeds both the blur and edge heuristics; convert once
        let gray = input.pixels().to_luma8();

        // 1. Blur check
        let variance = laplacian_variance(&gray);
        if variance < self.blur_variance_threshold {
            score -= 10;
            manipulation_probability += 0.1;
            reasons.push("Image appears blurry or low quality".to_string());
        }

        // 2. Manipulation indicators
        let indicators = self.manipulation_indicators(input, &gray);
        if indicators > 0 {
            manipulation_probability += 0.2 * f64::from(indicators);
            score -= 15 * indicators as i32;
            reasons.push(format!(
                "Detected {} potential manipulation indicator(s)",
                indicators
            ));
        }

        // 3. Metadata check
        if metadata_issue(input.raw_bytes()) {
            score -= 10;
            manipulation_probability += 0.15;
            reasons.push("Metadata inconsistencies detected".to_string());
        }

        // 4. Reference matching
        let matches = self.matcher.find_matches(input.pixels());
        if matches.is_empty() {
            reasons.push("No matching sources found".to_string());
        } else {
            score += 10;
            reasons.push(format!("Found {} matching source(s)", matches.len()));
        }

        let manipulation_probability = manipulation_probability.clamp(0.0, 1.0);
        let score = score.clamp(0, 100);

        log::debug!(
            "Image scoring: {}x{}, score={}, probability={:.3}, variance={:.1}, indicators={}",
            width,
            height,
            score,
            manipulation_probability,
            variance,
            indicators
        );

        reasons.truncate(self.max_reasons);

        Ok(ImageAnalysisResult {
            score: score as u8,
            // Three decimals is plenty for transport and keeps the value stable
            manipulation_probability: ((manipulation_probability * 1000.0).round() / 1000.0) as f32,
            matches,
            ocr_text: ocr_text.unwrap_or("").to_string(),
            reasons,
        })
    }
}

impl ImageAnalyzer for HeuristicImageScorer {
    /// Score a decoded image for credibility
    ///
    /// Never fails: any internal fault is converted into the degraded result
    /// (score 0, probability 1.0) with an explanatory reason.
    fn analyze(&self, input: &ImageInput, ocr_text: Option<&str>) -> ImageAnalysisResult {
        match self.run(input, ocr_text) {
            Ok(result) => result,
            Err(e) => {
                log::warn!("Image analysis failed, returning degraded result: {}", e);
                ImageAnalysisResult::degraded(format!("Error analyzing image: {}", e), ocr_text)
            }
        }
    }
}
