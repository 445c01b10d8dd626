//! Node stems: owned runs of bits carved out of key bit-images.

pub mod stem;

pub use stem::Stem;
