//! Blur detection via Laplacian variance
//!
//! The variance of the Laplacian response is a standard sharpness proxy:
//! sharp images have strong second-derivative structure, blurry images do
//! not. Higher variance = sharper image.

use image::GrayImage;

/// Compute the variance of the Laplacian of a grayscale image
///
/// Applies the 4-neighbor Laplacian kernel
///
/// ```text
/// 0  1  0
/// 1 -4  1
/// 0  1  0
/// ```
///
/// over interior pixels and returns the population variance of the
/// responses. Images smaller than 3x3 have no interior and return 0.0,
/// which the scorer treats as maximally blurry.
pub fn laplacian_variance(gray: &GrayImage) -> f64 {
    let (width, height) = gray.dimensions();
    if width < 3 || height < 3 {
        return 0.0;
    }

    let count = u64::from(width - 2) * u64::from(height - 2);
    let mut sum = 0.0f64;
    let mut sum_sq = 0.0f64;

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let center = f64::from(gray.get_pixel(x, y).0[0]);
            let response = f64::from(gray.get_pixel(x, y - 1).0[0])
                + f64::from(gray.get_pixel(x, y + 1).0[0])
                + f64::from(gray.get_pixel(x - 1, y).0[0])
                + f64::from(gray.get_pixel(x + 1, y).0[0])
                - 4.0 * center;
            sum += response;
            sum_sq += response * response;
        }
    }

    let mean = sum / count as f64;
    sum_sq / count as f64 - mean * mean
}
