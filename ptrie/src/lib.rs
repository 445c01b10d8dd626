//! A bit-indexed Patricia trie with exact and closest-spelling search.
//!
//! Keys are byte strings, examined one bit at a time (most significant bit first) with a zero
//! terminator appended. Every distinct key owns a bucket of records kept in insertion order.
//! Searches report how many bits, nodes and whole keys they compared, so the cost of a lookup can
//! be compared against other indexes.

pub mod iter;
pub mod keys;
mod node;
pub mod partials;
pub mod search;
pub mod spell;
pub mod stats;
pub mod tree;
pub mod utils;

pub use keys::BitKey;
pub use node::Bucket;
pub use partials::Stem;
pub use search::SearchResult;
pub use spell::edit_distance;
pub use stats::{SearchStats, TreeStats, TreeStatsTrait};
pub use tree::PatriciaTree;
pub use utils::bits::{count_bit_comparisons, get_bit};

/// A record that knows the key it is indexed under.
pub trait Keyed {
    fn key(&self) -> &[u8];
}

impl<T: Keyed + ?Sized> Keyed for &T {
    fn key(&self) -> &[u8] {
        (**self).key()
    }
}

impl Keyed for String {
    fn key(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Keyed for Vec<u8> {
    fn key(&self) -> &[u8] {
        self
    }
}
