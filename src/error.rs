//! Error types for the content scoring engine

use std::fmt;

/// Errors that can occur during content analysis
///
/// These errors stay internal to the crate for the most part: the public
/// scoring surface converts every failure into a degraded-but-valid result
/// (see the crate docs on the fail-safe policy). `Result` only appears on
/// construction-time operations such as reference store loading and explicit
/// image decoding.
#[derive(Debug, Clone)]
pub enum AnalysisError {
    /// Invalid input parameters
    InvalidInput(String),

    /// Image decoding error
    DecodingError(String),

    /// Processing error during analysis
    ProcessingError(String),

    /// Feature not yet implemented
    NotImplemented(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AnalysisError::DecodingError(msg) => write!(f, "Decoding error: {}", msg),
            AnalysisError::ProcessingError(msg) => write!(f, "Processing error: {}", msg),
            AnalysisError::NotImplemented(msg) => write!(f, "Not implemented: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {}
