//! Image decoding into the scorer input type

use std::path::Path;

use image::DynamicImage;

use crate::error::AnalysisError;

/// Decoded image input for the image scorer
///
/// Holds the decoded pixels plus, when available, the raw container bytes.
/// The raw bytes are what the metadata check reads EXIF from; pixels alone
/// carry no metadata. Input constructed from bare pixels therefore reports a
/// metadata issue, consistent with "missing EXIF is suspicious".
#[derive(Debug, Clone)]
pub struct ImageInput {
    pixels: DynamicImage,
    raw: Option<Vec<u8>>,
}

impl ImageInput {
    /// Decode an image from its raw container bytes (PNG, JPEG, ...)
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::DecodingError` if the bytes are not a
    /// decodable image. The engine-level entry points convert this into the
    /// degraded "Failed to load image" result instead of surfacing it.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AnalysisError> {
        let pixels = image::load_from_memory(bytes)
            .map_err(|e| AnalysisError::DecodingError(format!("Failed to decode image: {}", e)))?;

        log::debug!(
            "Decoded image: {}x{}, {} byte(s)",
            pixels.width(),
            pixels.height(),
            bytes.len()
        );

        Ok(Self {
            pixels,
            raw: Some(bytes.to_vec()),
        })
    }

    /// Decode an image file
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::DecodingError` if the file cannot be read or
    /// decoded.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AnalysisError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            AnalysisError::DecodingError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_bytes(&bytes)
    }

    /// Wrap already-decoded pixels supplied by an external collaborator
    ///
    /// No raw bytes are available, so the metadata check will flag an issue.
    pub fn from_pixels(pixels: DynamicImage) -> Self {
        Self { pixels, raw: None }
    }

    /// Decoded pixel data
    pub fn pixels(&self) -> &DynamicImage {
        &self.pixels
    }

    /// Raw container bytes, if the input came from an encoded image
    pub fn raw_bytes(&self) -> Option<&[u8]> {
        self.raw.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_from_bytes_roundtrip() {
        let img = RgbImage::from_pixel(10, 10, Rgb([1, 2, 3]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();

        let input = ImageInput::from_bytes(&bytes).unwrap();
        assert_eq!(input.pixels().width(), 10);
        assert!(input.raw_bytes().is_some());
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        let err = ImageInput::from_bytes(b"not an image").unwrap_err();
        assert!(err.to_string().contains("Decoding error"));
    }

    #[test]
    fn test_from_file_missing_path() {
        let err = ImageInput::from_file("/nonexistent/image.png").unwrap_err();
        assert!(matches!(err, AnalysisError::DecodingError(_)));
    }

    #[test]
    fn test_from_pixels_has_no_raw_bytes() {
        let input = ImageInput::from_pixels(DynamicImage::ImageRgb8(RgbImage::from_pixel(
            4,
            4,
            Rgb([0, 0, 0]),
        )));
        assert!(input.raw_bytes().is_none());
    }
}
