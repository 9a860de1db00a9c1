//! Edge density measurement
//!
//! Canny edge density is used as a cheap manipulation cue: natural
//! photographs land in a broad middle band, while implausibly sparse or
//! dense edge maps suggest synthetic or heavily processed content.

use image::GrayImage;
use imageproc::edges::canny;

/// Canny hysteresis thresholds
const CANNY_LOW: f32 = 50.0;
const CANNY_HIGH: f32 = 150.0;

/// Fraction of pixels classified as edges by the Canny detector
///
/// Returns a value in [0.0, 1.0]. A zero-pixel image returns 0.0.
pub fn edge_density(gray: &GrayImage) -> f64 {
    let (width, height) = gray.dimensions();
    let total = u64::from(width) * u64::from(height);
    if total == 0 {
        return 0.0;
    }

    let edges = canny(gray, CANNY_LOW, CANNY_HIGH);
    let edge_pixels = edges.pixels().filter(|p| p.0[0] > 0).count();

    edge_pixels as f64 / total as f64
}
