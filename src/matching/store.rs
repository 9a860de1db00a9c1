//! Read-only reference image store
//!
//! The store holds the perceptual hashes of a fixed set of reference images.
//! It is loaded once at startup, never mutated afterward, and safe for any
//! number of concurrent readers. Callers construct it explicitly and inject
//! it into the engine; there is no ambient global lookup.

use std::fs;
use std::path::Path;

use image::DynamicImage;

use super::hash::{average_hash, ImageHash};
use crate::error::AnalysisError;

/// A single reference image entry: label, URL, and precomputed hash
///
/// Hashes are computed once at load time; reference images never change, so
/// the pixels themselves are not retained.
#[derive(Debug, Clone)]
pub struct ReferenceEntry {
    /// Human-readable source label
    pub label: String,

    /// URL the match points back to
    pub url: String,

    /// Precomputed average hash
    pub hash: ImageHash,
}

/// Immutable set of reference images for source matching
#[derive(Debug, Clone, Default)]
pub struct ReferenceStore {
    entries: Vec<ReferenceEntry>,
}

impl ReferenceStore {
    /// Create an empty store (matching always returns no sources)
    pub fn empty() -> Self {
        Self { entries: vec![] }
    }

    /// Build a store from already-decoded images
    ///
    /// Entry order is preserved and used to break ties between equally
    /// distant matches.
    pub fn from_images<I, S, T>(images: I) -> Self
    where
        I: IntoIterator<Item = (S, T, DynamicImage)>,
        S: Into<String>,
        T: Into<String>,
    {
        let entries = images
            .into_iter()
            .map(|(label, url, image)| ReferenceEntry {
                label: label.into(),
                url: url.into(),
                hash: average_hash(&image),
            })
            .collect();
        Self { entries }
    }

    /// Load reference images from a directory
    ///
    /// Accepts PNG and JPEG files; other files are ignored. Entries are
    /// ordered by filename so tie-breaking is stable across platforms.
    /// Labels and URLs are derived from the filename. Undecodable images are
    /// skipped with a warning.
    ///
    /// A missing or empty directory yields an empty store, not an error:
    /// absence of reference data means "no evidence found", which the matcher
    /// reports as zero matches.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::ProcessingError` only if the directory exists
    /// but cannot be read (e.g. permission denied).
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, AnalysisError> {
        let dir = dir.as_ref();

        if !dir.exists() {
            log::warn!("Reference directory {} does not exist, matching disabled", dir.display());
            return Ok(Self::empty());
        }

        let read = fs::read_dir(dir).map_err(|e| {
            AnalysisError::ProcessingError(format!(
                "Cannot read reference directory {}: {}",
                dir.display(),
                e
            ))
        })?;

        let mut paths: Vec<_> = read
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| {
                        let ext = ext.to_ascii_lowercase();
                        ext == "png" || ext == "jpg" || ext == "jpeg"
                    })
                    .unwrap_or(false)
            })
            .collect();
        paths.sort();

        let mut entries = Vec::with_capacity(paths.len());
        for path in paths {
            let image = match image::open(&path) {
                Ok(image) => image,
                Err(e) => {
                    log::warn!("Skipping undecodable reference image {}: {}", path.display(), e);
                    continue;
                }
            };

            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("unknown")
                .to_string();

            entries.push(ReferenceEntry {
                label: format!("Sample image: {}", name),
                url: format!("/samples/{}", name),
                hash: average_hash(&image),
            });
        }

        log::debug!("Loaded {} reference image(s) from {}", entries.len(), dir.display());
        Ok(Self { entries })
    }

    /// Reference entries in insertion order
    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    /// Number of reference images in the store
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the store holds no reference images
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
