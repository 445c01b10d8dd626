//! Exact-key lookup.

use crate::keys::BitKey;
use crate::node::Bucket;
use crate::stats::SearchStats;
use crate::tree::PatriciaTree;
use crate::utils::bits::{matching_bits, BitSource};

/// Records found for a query, borrowed from the tree, plus the comparisons it took to find them.
#[derive(Debug)]
pub struct SearchResult<'a, R> {
    pub records: Vec<&'a R>,
    pub stats: SearchStats,
}

impl<'a, R> SearchResult<'a, R> {
    pub(crate) fn empty(stats: SearchStats) -> Self {
        Self {
            records: Vec::new(),
            stats,
        }
    }

    pub(crate) fn from_bucket(bucket: Option<&'a Bucket<R>>, stats: SearchStats) -> Self {
        Self {
            records: bucket.map(|b| b.records.iter().collect()).unwrap_or_default(),
            stats,
        }
    }

    /// Number of matching records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R> PatriciaTree<R> {
    /// All records stored under exactly `key`, in insertion order, with comparison counts.
    ///
    /// A miss is an empty result, never an error.
    #[inline]
    pub fn search_exact<K>(&self, key: K) -> SearchResult<'_, R>
    where
        K: Into<BitKey>,
    {
        self.search_exact_k(&key.into())
    }

    pub fn search_exact_k(&self, key: &BitKey) -> SearchResult<'_, R> {
        let mut stats = SearchStats::default();
        let bucket = self.find_bucket(key, &mut stats);
        SearchResult::from_bucket(bucket, stats)
    }

    /// The records stored under `key`, without counting comparisons.
    pub fn get<K>(&self, key: K) -> Option<&[R]>
    where
        K: Into<BitKey>,
    {
        self.find_bucket(&key.into(), &mut SearchStats::default())
            .map(Bucket::records)
    }

    pub fn contains_key<K>(&self, key: K) -> bool
    where
        K: Into<BitKey>,
    {
        self.get(key).is_some()
    }

    /// Walks the query's bit-image down the tree. A node is entered only when every earlier stem
    /// matched in full; the walk succeeds when the image is used up exactly at the end of a stem
    /// whose bucket was stored under the same key.
    pub(crate) fn find_bucket(&self, key: &BitKey, stats: &mut SearchStats) -> Option<&Bucket<R>> {
        let total_bits = key.bit_len();
        let mut depth = 0;
        let mut current = self.root.as_deref();

        while let Some(node) = current {
            stats.node_comps += 1;

            let matched = matching_bits(key, depth, &node.stem, || stats.bit_comps += 1);
            if matched < node.stem_bits() {
                return None;
            }

            depth += node.stem_bits();
            if depth == total_bits {
                let bucket = node.stored()?;
                stats.string_comps += 1;
                return (bucket.key() == key.key_bytes()).then_some(bucket);
            }

            current = node.child(key.bit(depth));
        }
        None
    }
}
