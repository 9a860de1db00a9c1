//! Perceptual average-hash fingerprinting
//!
//! An average hash reduces an image to a 64-bit fingerprint: downsample to
//! 8x8 grayscale, then set one bit per pixel depending on whether it is above
//! the mean. Two visually similar images produce fingerprints with a small
//! Hamming distance.

use image::imageops::FilterType;
use image::DynamicImage;
use serde::{Deserialize, Serialize};

/// Hash grid edge length (8x8 = 64 bits)
const HASH_SIZE: u32 = 8;

/// 64-bit perceptual image fingerprint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageHash(pub u64);

impl ImageHash {
    /// Number of differing bits between two fingerprints
    ///
    /// # Example
    ///
    /// ```
    /// use verascore::matching::hash::ImageHash;
    ///
    /// assert_eq!(ImageHash(0b1010).distance(ImageHash(0b1010)), 0);
    /// assert_eq!(ImageHash(0b1010).distance(ImageHash(0b0101)), 4);
    /// ```
    pub fn distance(self, other: ImageHash) -> u32 {
        (self.0 ^ other.0).count_ones()
    }
}

/// Compute the 8x8 average hash of an image
///
/// # Algorithm
///
/// 1. Downsample to 8x8 grayscale
/// 2. Compute the mean pixel value
/// 3. Set bit i if pixel i is strictly above the mean
///
/// Deterministic for identical pixel input.
pub fn average_hash(image: &DynamicImage) -> ImageHash {
    let small = image
        .resize_exact(HASH_SIZE, HASH_SIZE, FilterType::Triangle)
        .to_luma8();

    let sum: u64 = small.pixels().map(|p| u64::from(p.0[0])).sum();
    let mean = sum as f64 / f64::from(HASH_SIZE * HASH_SIZE);

    let mut bits = 0u64;
    for (i, pixel) in small.pixels().enumerate() {
        if f64::from(pixel.0[0]) > mean {
            bits |= 1 << i;
        }
    }

    ImageHash(bits)
}
