//! ONNX model loading and inference

/// ONNX model for model-backed credibility scoring
#[derive(Debug)]
pub struct OnnxModel {
    // TODO: wire up ort session loading once the scoring models are trained
}

impl OnnxModel {
    /// Load an ONNX model from file
    pub fn load(path: &str) -> Result<Self, crate::error::AnalysisError> {
        log::debug!("Loading ONNX model from: {}", path);
        Err(crate::error::AnalysisError::NotImplemented(
            "ONNX model loading not yet implemented".to_string(),
        ))
    }

    /// Run inference on a feature vector
    ///
    /// # Returns
    ///
    /// Credibility score in [0.0, 100.0]
    pub fn infer(&self, features: &[f32]) -> Result<f32, crate::error::AnalysisError> {
        log::debug!("Running ONNX inference on {} features", features.len());
        Err(crate::error::AnalysisError::NotImplemented(
            "ONNX inference not yet implemented".to_string(),
        ))
    }
}
