//! Closest-spelling search.
//!
//! When a query misses, the tree is walked as far as the query's bits agree with it. Every key
//! stored at or beneath the last node reached is a candidate, and the one with the smallest edit
//! distance to the query wins. Candidates are scored in pre-order, so among equally distant keys the
//! first one met is kept.

use tracing::debug;

use crate::iter::KeysIter;
use crate::keys::BitKey;
use crate::node::Node;
use crate::search::SearchResult;
use crate::stats::SearchStats;
use crate::tree::PatriciaTree;
use crate::utils::bits::{matching_bits, BitSource};

/// Levenshtein distance over bytes, with unit cost for insertion, deletion and substitution.
pub fn edit_distance(a: &[u8], b: &[u8]) -> usize {
    let width = b.len() + 1;
    let mut table = vec![0usize; (a.len() + 1) * width];

    for (j, cell) in table.iter_mut().take(width).enumerate() {
        *cell = j;
    }
    for i in 1..=a.len() {
        table[i * width] = i;
        for j in 1..=b.len() {
            let substitute = table[(i - 1) * width + j - 1] + usize::from(a[i - 1] != b[j - 1]);
            let delete = table[(i - 1) * width + j] + 1;
            let insert = table[i * width + j - 1] + 1;
            table[i * width + j] = substitute.min(delete).min(insert);
        }
    }
    table[a.len() * width + b.len()]
}

impl<R> PatriciaTree<R> {
    /// Exact matches for `key` if there are any, otherwise the records of the closest stored key.
    ///
    /// On a miss the reported bit and node counts cover only the closest-node walk, while the
    /// string count keeps the exact attempt's comparison and adds one per scored candidate.
    #[inline]
    pub fn search_spell<K>(&self, key: K) -> SearchResult<'_, R>
    where
        K: Into<BitKey>,
    {
        self.search_spell_k(&key.into())
    }

    pub fn search_spell_k(&self, key: &BitKey) -> SearchResult<'_, R> {
        let exact = self.search_exact_k(key);
        if !exact.is_empty() {
            return exact;
        }

        let mut stats = exact.stats;
        stats.reset_traversal();

        let Some(closest) = self.closest_node(key, &mut stats) else {
            return SearchResult::empty(stats);
        };

        let mut best: Option<(usize, Vec<u8>)> = None;
        for candidate in KeysIter::new(Some(closest)) {
            stats.string_comps += 1;
            let distance = edit_distance(key.key_bytes(), &candidate);
            if best.as_ref().map_or(true, |(d, _)| distance < *d) {
                best = Some((distance, candidate));
            }
        }

        let Some((distance, best_key)) = best else {
            return SearchResult::empty(stats);
        };
        debug!(
            query = %String::from_utf8_lossy(key.key_bytes()),
            closest = %String::from_utf8_lossy(&best_key),
            distance,
            "no exact match, using closest key"
        );

        // The final lookup is bookkeeping only and is not reported.
        let bucket = self.find_bucket(&BitKey::new_from_vec(best_key), &mut SearchStats::default());
        SearchResult::from_bucket(bucket, stats)
    }

    /// The keys a spelling search for `key` would score, in the order it scores them.
    pub fn closest_keys<K>(&self, key: K) -> Vec<Vec<u8>>
    where
        K: Into<BitKey>,
    {
        let key = key.into();
        let closest = self.closest_node(&key, &mut SearchStats::default());
        KeysIter::new(closest).collect()
    }

    /// The deepest node whose stem the query reached. The walk stops inside the first stem that
    /// disagrees with the query, at the node where the query's bits run out, or at the last node
    /// before a missing branch.
    pub(crate) fn closest_node(&self, key: &BitKey, stats: &mut SearchStats) -> Option<&Node<R>> {
        let total_bits = key.bit_len();
        let mut depth = 0;
        let mut current = self.root.as_deref();
        let mut closest = current;

        while let Some(node) = current {
            stats.node_comps += 1;
            closest = Some(node);

            let matched = matching_bits(key, depth, &node.stem, || stats.bit_comps += 1);
            if matched < node.stem_bits() {
                break;
            }

            depth += node.stem_bits();
            if depth >= total_bits {
                break;
            }
            current = node.child(key.bit(depth));
        }
        closest
    }
}
