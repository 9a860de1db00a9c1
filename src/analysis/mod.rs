//! Analysis and result aggregation modules
//!
//! Combines per-modality scoring results into the final analysis:
//! - Result types
//! - Score fusion and explainability

pub mod fusion;
pub mod result;
