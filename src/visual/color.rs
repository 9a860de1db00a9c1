//! Color-based manipulation cues
//!
//! Saturation uniformity: natural photographs show spread in the HSV
//! saturation channel; a suspiciously uniform channel (std-dev below ~10 on
//! the 0-255 scale) is counted as a manipulation indicator.

use image::RgbImage;

/// Standard deviation of the HSV saturation channel on the 0-255 scale
///
/// Saturation per pixel follows the OpenCV convention:
/// `S = 255 * (max - min) / max`, with `S = 0` for black pixels.
/// Returns the population standard deviation; a zero-pixel image returns 0.0.
pub fn saturation_stddev(rgb: &RgbImage) -> f64 {
    let total = u64::from(rgb.width()) * u64::from(rgb.height());
    if total == 0 {
        return 0.0;
    }

    let mut sum = 0.0f64;
    let mut sum_sq = 0.0f64;

    for pixel in rgb.pixels() {
        let [r, g, b] = pixel.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);

        let saturation = if max == 0 {
            0.0
        } else {
            255.0 * f64::from(max - min) / f64::from(max)
        };

        sum += saturation;
        sum_sq += saturation * saturation;
    }

    let mean = sum / total as f64;
    let variance = (sum_sq / total as f64 - mean * mean).max(0.0);
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_solid_color_is_uniform() {
        let solid = RgbImage::from_pixel(32, 32, Rgb([200, 50, 50]));
        assert_eq!(saturation_stddev(&solid), 0.0);
    }

    #[test]
    fn test_grayscale_content_is_uniform() {
        // Any gray pixel has zero saturation regardless of brightness
        let gray = RgbImage::from_fn(32, 32, |x, _| {
            let v = (x * 8) as u8;
            Rgb([v, v, v])
        });
        assert_eq!(saturation_stddev(&gray), 0.0);
    }

    #[test]
    fn test_mixed_saturation_has_spread() {
        // Half fully saturated, half gray: std-dev = half the range
        let mixed = RgbImage::from_fn(32, 32, |x, _| {
            if x < 16 {
                Rgb([255, 0, 0])
            } else {
                Rgb([128, 128, 128])
            }
        });
        let std = saturation_stddev(&mixed);
        assert!((std - 127.5).abs() < 0.1, "expected ~127.5, got {}", std);
    }
}
