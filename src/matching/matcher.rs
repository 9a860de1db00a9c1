//! Hamming-distance nearest-neighbor matching
//!
//! Compares the average hash of an input image against every reference hash
//! in the injected store and returns the closest matches as ranked
//! [`SourceMatch`] records.

use image::DynamicImage;

use super::hash::average_hash;
use super::store::ReferenceStore;
use crate::analysis::result::SourceMatch;
use crate::config::AnalysisConfig;

/// Total hash bits; confidence is `1 - distance/64`
const HASH_BITS: f32 = 64.0;

/// Nearest-neighbor matcher over a read-only reference store
#[derive(Debug, Clone)]
pub struct ReferenceMatcher {
    store: ReferenceStore,
    max_distance: u32,
    max_matches: usize,
}

impl ReferenceMatcher {
    /// Create a matcher over an injected reference store
    pub fn new(store: ReferenceStore, config: &AnalysisConfig) -> Self {
        Self {
            store,
            max_distance: config.max_hash_distance,
            max_matches: config.max_matches,
        }
    }

    /// Find reference images matching the input
    ///
    /// A reference matches when its Hamming distance to the input hash is
    /// strictly below the configured maximum. Matches are sorted by ascending
    /// distance (descending confidence); ties keep store insertion order.
    /// At most `max_matches` entries are returned.
    ///
    /// An empty store yields an empty result, never an error.
    pub fn find_matches(&self, image: &DynamicImage) -> Vec<SourceMatch> {
        if self.store.is_empty() {
            return vec![];
        }

        let input_hash = average_hash(image);

        let mut scored: Vec<(u32, SourceMatch)> = self
            .store
            .entries()
            .iter()
            .filter_map(|entry| {
                let distance = input_hash.distance(entry.hash);
                if distance < self.max_distance {
                    Some((
                        distance,
                        SourceMatch {
                            source_label: entry.label.clone(),
                            reference_url: entry.url.clone(),
                            confidence: 1.0 - distance as f32 / HASH_BITS,
                        },
                    ))
                } else {
                    None
                }
            })
            .collect();

        // Stable sort keeps insertion order for equal distances
        scored.sort_by_key(|(distance, _)| *distance);
        scored.truncate(self.max_matches);

        log::debug!(
            "Reference matching: {} candidate(s) of {} reference(s)",
            scored.len(),
            self.store.len()
        );

        scored.into_iter().map(|(_, m)| m).collect()
    }
}
