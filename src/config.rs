//! Configuration parameters for content analysis

/// Scorer backend selection
///
/// The heuristic backends are deterministic rule-based stand-ins for learned
/// models. A model-backed variant is available behind the `ml` feature and
/// preserves the same result contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScorerBackend {
    /// Rule-based heuristic scoring (default)
    Heuristic,

    /// ONNX model-backed scoring (requires ml feature)
    #[cfg(feature = "ml")]
    Model,
}

/// Analysis configuration parameters
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    // Scoring
    /// Baseline score both scorers start from (default: 50)
    pub base_score: i32,

    /// Backend used for text scoring (default: Heuristic)
    pub text_backend: ScorerBackend,

    /// Backend used for image scoring (default: Heuristic)
    pub image_backend: ScorerBackend,

    // Image heuristics
    /// Laplacian variance below this is treated as blurry (default: 100.0)
    /// Higher variance = sharper image
    pub blur_variance_threshold: f64,

    /// Edge density below this counts as a manipulation indicator (default: 0.05)
    pub min_edge_density: f64,

    /// Edge density above this counts as a manipulation indicator (default: 0.5)
    pub max_edge_density: f64,

    /// Saturation standard deviation (0-255 scale) below this counts as a
    /// manipulation indicator (default: 10.0)
    pub saturation_std_threshold: f64,

    // Reference matching
    /// Maximum Hamming distance for a reference image to count as a match
    /// (default: 10, out of 64 hash bits)
    pub max_hash_distance: u32,

    /// Maximum number of source matches returned (default: 3)
    pub max_matches: usize,

    // Fusion
    /// Weight of the text score in the fused credibility score (default: 0.6)
    pub text_weight: f64,

    /// Weight of the visual score in the fused credibility score (default: 0.4)
    pub visual_weight: f64,

    // Output caps
    /// Maximum number of reasons per result (default: 5)
    pub max_reasons: usize,

    /// Maximum number of claims per text result (default: 5)
    pub max_claims: usize,

    // ML refinement
    /// Path to the ONNX model used by the Model backend (requires ml feature)
    #[cfg(feature = "ml")]
    pub model_path: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            base_score: 50,
            text_backend: ScorerBackend::Heuristic,
            image_backend: ScorerBackend::Heuristic,
            blur_variance_threshold: 100.0,
            min_edge_density: 0.05,
            max_edge_density: 0.5,
            saturation_std_threshold: 10.0,
            max_hash_distance: 10,
            max_matches: 3,
            text_weight: 0.6,
            visual_weight: 0.4,
            max_reasons: 5,
            max_claims: 5,
            #[cfg(feature = "ml")]
            model_path: String::new(),
        }
    }
}
