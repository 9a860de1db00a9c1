//! Model-backed scorer backends (Phase 2)
//!
//! Optional ONNX model inference replacing the heuristic scorers. The result
//! contracts are identical to the heuristic backends; only the scoring
//! mechanism changes.

pub mod backend;
pub mod onnx_model;

pub use backend::{ModelImageScorer, ModelTextScorer};
pub use onnx_model::OnnxModel;
