//! Pluggable scorer backends
//!
//! The scoring heuristics are deliberate stand-ins for learned models. These
//! traits are the seam that keeps the result contracts stable regardless of
//! which backend runs: the heuristic implementations are the default, and a
//! model-backed variant lives behind the `ml` feature. Backends are selected
//! through [`AnalysisConfig`](crate::config::AnalysisConfig).
//!
//! Implementations must be stateless with respect to request data: `analyze`
//! takes `&self`, and the same input must always produce the same output.

use crate::analysis::result::{ImageAnalysisResult, TextAnalysisResult};
use crate::io::ImageInput;

/// Text credibility scorer
pub trait TextAnalyzer: Send + Sync {
    /// Score text for credibility
    ///
    /// Must accept any string, including the empty string, and always return
    /// a fully populated result; failures degrade, they do not propagate.
    fn analyze(&self, text: &str) -> TextAnalysisResult;
}

/// Image credibility scorer
pub trait ImageAnalyzer: Send + Sync {
    /// Score a decoded image for credibility
    ///
    /// `ocr_text` is pre-extracted by an external OCR collaborator and passed
    /// through to the result. Must always return a fully populated result;
    /// failures degrade, they do not propagate.
    fn analyze(&self, input: &ImageInput, ocr_text: Option<&str>) -> ImageAnalysisResult;
}
