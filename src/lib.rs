//! # Verascore
//!
//! A multi-signal content credibility scoring engine for misinformation
//! detection pipelines, producing 0-100 credibility scores with supporting
//! evidence.
//!
//! ## Features
//!
//! - **Text Scoring**: Rule-based lexical analysis (clickbait, absolutist,
//!   urgency, and medical-claim lexicons) with sentiment and contradiction
//!   detection
//! - **Image Scoring**: Pixel-level heuristics (Laplacian blur, Canny edge
//!   density, saturation uniformity) plus EXIF metadata checks
//! - **Reference Matching**: Perceptual average-hash nearest-neighbor search
//!   against a read-only reference image set
//! - **Fusion**: Weighted multi-modal credibility score with explainability
//!   breakdown
//! - **Model Backends**: Optional ONNX-backed scorers (Phase 2, `ml` feature)
//!
//! ## Quick Start
//!
//! ```
//! use verascore::{AnalysisConfig, AnalysisEngine, ReferenceStore};
//!
//! let engine = AnalysisEngine::new(AnalysisConfig::default(), ReferenceStore::empty())?;
//!
//! let result = engine.analyze_text("Miracle cure discovered! Doctors hate this one trick!");
//! assert!(result.score < 50);
//! assert!(!result.reasons.is_empty());
//! # Ok::<(), verascore::AnalysisError>(())
//! ```
//!
//! ## Architecture
//!
//! The scoring pipeline follows this flow:
//!
//! ```text
//! Text Input  → Text Scorer  ─┐
//!                             ├→ Fusion → Credibility Score + Explainability
//! Image Input → Image Scorer ─┘
//!                 └── Reference Matcher (average hash, Hamming distance)
//! ```
//!
//! Every component is stateless with respect to request data; the only shared
//! state is the read-only [`ReferenceStore`], injected at construction and
//! safe for unlimited concurrent readers.
//!
//! ## Fail-safe policy
//!
//! No failure crosses the scoring boundary as an error. Decode failures,
//! missing capabilities, and unexpected internal faults all resolve to a
//! valid result with a conservative (high-risk) score and an explanatory
//! reason. A scoring system should never crash its caller, and bad input
//! should be flagged, not silently passed through.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod io;
pub mod matching;
pub mod scorer;
pub mod text;
pub mod visual;

#[cfg(feature = "ml")]
pub mod ml;

// Re-export main types
pub use analysis::fusion::FusionEngine;
pub use analysis::result::{
    Explainability, FusedResult, ImageAnalysisResult, Sentiment, SourceMatch, TextAnalysisResult,
};
pub use config::{AnalysisConfig, ScorerBackend};
pub use error::AnalysisError;
pub use io::ImageInput;
pub use matching::store::ReferenceStore;
pub use scorer::{ImageAnalyzer, TextAnalyzer};

use text::scorer::HeuristicTextScorer;
use visual::scorer::HeuristicImageScorer;

/// Multi-modal content analysis engine
///
/// Owns the configured scorer backends, the fusion engine, and (through the
/// image scorer) the injected read-only reference store. Construct once at
/// startup and share freely: all analysis methods take `&self`, each call is
/// independent, and results are constructed fresh per request.
pub struct AnalysisEngine {
    text: Box<dyn TextAnalyzer>,
    image: Box<dyn ImageAnalyzer>,
    fusion: FusionEngine,
}

impl AnalysisEngine {
    /// Create an engine from configuration and an injected reference store
    ///
    /// The reference store should be loaded once at process start (see
    /// [`ReferenceStore::load_dir`]); it is never mutated afterward.
    ///
    /// # Errors
    ///
    /// Returns an error only when a configured model backend fails to load
    /// (`ml` feature). The heuristic backends cannot fail to construct.
    ///
    /// # Example
    ///
    /// ```
    /// use verascore::{AnalysisConfig, AnalysisEngine, ReferenceStore};
    ///
    /// let references = ReferenceStore::load_dir("samples")?;
    /// let engine = AnalysisEngine::new(AnalysisConfig::default(), references)?;
    /// # Ok::<(), verascore::AnalysisError>(())
    /// ```
    pub fn new(config: AnalysisConfig, references: ReferenceStore) -> Result<Self, AnalysisError> {
        let text: Box<dyn TextAnalyzer> = match config.text_backend {
            ScorerBackend::Heuristic => Box::new(HeuristicTextScorer::new(&config)),
            #[cfg(feature = "ml")]
            ScorerBackend::Model => Box::new(ml::ModelTextScorer::new(ml::OnnxModel::load(
                &config.model_path,
            )?)),
        };

        let image: Box<dyn ImageAnalyzer> = match config.image_backend {
            ScorerBackend::Heuristic => Box::new(HeuristicImageScorer::new(&config, references)),
            #[cfg(feature = "ml")]
            ScorerBackend::Model => Box::new(ml::ModelImageScorer::new(ml::OnnxModel::load(
                &config.model_path,
            )?)),
        };

        Ok(Self {
            text,
            image,
            fusion: FusionEngine::new(&config),
        })
    }

    /// Score text for credibility
    ///
    /// Empty input is valid and yields the base result. Never fails.
    pub fn analyze_text(&self, text: &str) -> TextAnalysisResult {
        self.text.analyze(text)
    }

    /// Score a decoded image for credibility
    ///
    /// `ocr_text` is an optional pre-extracted OCR string from an external
    /// collaborator; it is passed through to the result. Never fails: all
    /// failure modes resolve to the degraded result shape.
    pub fn analyze_image(&self, input: &ImageInput, ocr_text: Option<&str>) -> ImageAnalysisResult {
        self.image.analyze(input, ocr_text)
    }

    /// Decode and score an image from raw container bytes
    ///
    /// Undecodable bytes yield the degraded result (score 0, manipulation
    /// probability 1.0, reason "Failed to load image") rather than an error.
    pub fn analyze_image_bytes(&self, bytes: &[u8], ocr_text: Option<&str>) -> ImageAnalysisResult {
        match ImageInput::from_bytes(bytes) {
            Ok(input) => self.image.analyze(&input, ocr_text),
            Err(e) => {
                log::warn!("Image decode failed, returning degraded result: {}", e);
                ImageAnalysisResult::degraded("Failed to load image", ocr_text)
            }
        }
    }

    /// Decode and score an image file
    ///
    /// An unreadable or undecodable file yields the degraded result rather
    /// than an error, matching [`AnalysisEngine::analyze_image_bytes`].
    pub fn analyze_image_file(
        &self,
        path: impl AsRef<std::path::Path>,
        ocr_text: Option<&str>,
    ) -> ImageAnalysisResult {
        match ImageInput::from_file(path) {
            Ok(input) => self.image.analyze(&input, ocr_text),
            Err(e) => {
                log::warn!("Image load failed, returning degraded result: {}", e);
                ImageAnalysisResult::degraded("Failed to load image", ocr_text)
            }
        }
    }

    /// Multi-modal analysis: score text and/or image and fuse the results
    ///
    /// Text that is absent or only whitespace is skipped; an absent image is
    /// skipped. With neither modality present the fused credibility score is
    /// the neutral default of 50.
    pub fn analyze(
        &self,
        text: Option<&str>,
        image: Option<&ImageInput>,
        ocr_text: Option<&str>,
    ) -> FusedResult {
        let text_result = text
            .filter(|t| !t.trim().is_empty())
            .map(|t| self.text.analyze(t));
        let image_result = image.map(|i| self.image.analyze(i, ocr_text));

        self.fusion.fuse(text_result.as_ref(), image_result.as_ref())
    }
}
