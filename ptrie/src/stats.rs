//! Search counters and structural statistics.
//!
//! [`SearchStats`] are reported with every search result. They count work done by the search,
//! not anything that steers it, and are deterministic for a given tree and query.
//!
//! [`TreeStats`] summarise the shape of a whole tree and are useful when comparing the trie with
//! an unindexed scan, or when checking that teardown released every node.

use std::fmt;

use crate::node::Node;

/// Comparison counters for one search.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Individual bits compared between the query and node stems.
    pub bit_comps: usize,
    /// Nodes entered.
    pub node_comps: usize,
    /// Whole-key comparisons (content checks and candidate scoring).
    pub string_comps: usize,
}

impl SearchStats {
    /// Clears the traversal counters, keeping the string comparison count.
    pub fn reset_traversal(&mut self) {
        self.bit_comps = 0;
        self.node_comps = 0;
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "b{} n{} s{}",
            self.bit_comps, self.node_comps, self.string_comps
        )
    }
}

pub trait TreeStatsTrait {
    fn get_tree_stats(&self) -> TreeStats;
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TreeStats {
    pub num_nodes: usize,
    pub num_inner_nodes: usize,
    pub num_leaves: usize,
    /// Nodes carrying a non-empty bucket, i.e. distinct keys.
    pub num_keys: usize,
    pub num_records: usize,
    pub total_stem_bits: usize,
    pub max_height: usize,
}

pub(crate) fn update_tree_stats<R>(tree_stats: &mut TreeStats, node: &Node<R>, height: usize) {
    tree_stats.num_nodes += 1;
    if node.is_leaf() {
        tree_stats.num_leaves += 1;
    } else {
        tree_stats.num_inner_nodes += 1;
    }
    if let Some(bucket) = node.stored() {
        tree_stats.num_keys += 1;
        tree_stats.num_records += bucket.len();
    }
    tree_stats.total_stem_bits += node.stem_bits();
    tree_stats.max_height = tree_stats.max_height.max(height);
}
