//! Reference image matching modules
//!
//! Perceptual-hash nearest-neighbor search against a fixed reference set:
//! - 8x8 average hash fingerprinting
//! - Read-only reference store, loaded once
//! - Hamming-distance matcher

pub mod hash;
pub mod matcher;
pub mod store;
