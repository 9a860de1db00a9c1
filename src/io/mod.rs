//! Image I/O modules
//!
//! Image decoding into the scorer input type using the `image` crate.

pub mod decoder;

pub use decoder::ImageInput;
