//! Query and insertion keys.

pub mod bit_key;

pub use bit_key::BitKey;
