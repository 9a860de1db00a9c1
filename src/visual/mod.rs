//! Visual analysis modules
//!
//! Pixel-level heuristic credibility analysis of decoded images:
//! - Blur detection (Laplacian variance)
//! - Edge density (Canny)
//! - Saturation uniformity
//! - EXIF metadata presence check
//! - Heuristic scoring

pub mod blur;
pub mod color;
pub mod edges;
pub mod metadata;
pub mod scorer;
