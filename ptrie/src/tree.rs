//! Bit-indexed Patricia trie.
//!
//! This module contains [`PatriciaTree`], its insertion algorithm and teardown. Lookups live in
//! [`crate::search`] and [`crate::spell`].

use tracing::trace;

use crate::iter::{Iter, KeysIter};
use crate::keys::BitKey;
use crate::node::{split, Bucket, Child, Node};
use crate::partials::Stem;
use crate::stats::{update_tree_stats, TreeStats, TreeStatsTrait};
use crate::utils::bits::{matching_bits, BitSource};
use crate::Keyed;

/// A binary radix tree over key bit-images, mapping each distinct key to a bucket of records.
///
/// Every node holds a run of bits (its stem) and up to two children chosen by the next bit after
/// the stem. Keys are stored with a zero terminator, so every distinct key ends at its own node.
///
/// ## Examples
///
/// ```rust
/// use ptrie::PatriciaTree;
///
/// let mut tree = PatriciaTree::new();
/// tree.insert("cat", 1);
/// tree.insert("cat", 2);
/// tree.insert("bat", 3);
///
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree.get("cat"), Some(&[1, 2][..]));
///
/// // "hat" is not stored; the closest spelling is returned instead.
/// let found = tree.search_spell("hat");
/// assert_eq!(found.records, vec![&3]);
/// ```
pub struct PatriciaTree<R> {
    pub(crate) root: Child<R>,
    num_keys: usize,
}

impl<R> Default for PatriciaTree<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> PatriciaTree<R> {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self {
            root: None,
            num_keys: 0,
        }
    }

    /// Number of distinct keys. Records sharing a key count once.
    pub fn len(&self) -> usize {
        self.num_keys
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Add `record` to the bucket for `key`, creating the key if needed.
    #[inline]
    pub fn insert<K>(&mut self, key: K, record: R)
    where
        K: Into<BitKey>,
    {
        self.insert_k(&key.into(), record)
    }

    /// Insert using a key reference.
    pub fn insert_k(&mut self, key: &BitKey, record: R) {
        let total_bits = key.bit_len();
        let mut depth = 0;
        let mut slot = &mut self.root;

        loop {
            let Some(node) = slot else {
                // Empty tree, or an empty branch below a fully matched node.
                let stem = Stem::new(key.as_bytes(), depth, total_bits - depth);
                *slot = Some(Box::new(Node::new_leaf(stem, Bucket::new(key, record))));
                self.num_keys += 1;
                return;
            };

            let matched = matching_bits(key, depth, &node.stem, || {});
            if matched < node.stem_bits() {
                trace!(depth, matched, stem_bits = node.stem_bits(), "splitting node");
                split(node, matched, key, depth, record);
                self.num_keys += 1;
                return;
            }

            depth += node.stem_bits();
            if depth >= total_bits {
                node.bucket
                    .get_or_insert_with(|| Bucket::empty(key))
                    .push(record);
                return;
            }

            slot = &mut node.children[key.bit(depth) as usize];
        }
    }

    /// Pre-order iterator over `(key, records)` for every stored key.
    pub fn iter(&self) -> Iter<'_, R> {
        Iter::new(self.root.as_deref())
    }

    /// Owned copies of every stored key, in [`iter`](Self::iter) order.
    pub fn keys(&self) -> KeysIter<'_, R> {
        KeysIter::new(self.root.as_deref())
    }

    /// Release every node bottom-up, handing each stored record to `on_record`.
    ///
    /// Returns the number of nodes released.
    pub fn destroy<F>(mut self, on_record: F) -> usize
    where
        F: FnMut(R),
    {
        let root = self.root.take();
        self.num_keys = 0;
        teardown(root, on_record)
    }

    pub fn print_tree(&self) {
        let Some(root) = self.root.as_deref() else {
            eprintln!("[]");
            return;
        };
        PatriciaTree::print_tree_recurse(root, 0, None);
    }

    fn print_tree_recurse(node: &Node<R>, depth: usize, branch: Option<u8>) {
        let indent = "  ".repeat(depth);
        let branch = branch.map_or_else(|| "root".to_string(), |b| b.to_string());
        let key = node
            .stored()
            .map(|b| format!(" key {:?} x{}", String::from_utf8_lossy(b.key()), b.len()))
            .unwrap_or_default();
        eprintln!("{indent}({branch}) {:?}{key}", node.stem);
        for bit in 0..=1u8 {
            if let Some(child) = node.child(bit) {
                PatriciaTree::print_tree_recurse(child, depth + 1, Some(bit));
            }
        }
    }

    fn get_tree_stats_recurse(node: &Node<R>, tree_stats: &mut TreeStats, height: usize) {
        update_tree_stats(tree_stats, node, height);
        for bit in 0..=1u8 {
            if let Some(child) = node.child(bit) {
                PatriciaTree::get_tree_stats_recurse(child, tree_stats, height + 1);
            }
        }
    }
}

impl<R: Keyed> PatriciaTree<R> {
    /// Index every record under the key it reports. Returns how many records were inserted.
    pub fn build_index<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = R>,
    {
        let mut inserted = 0;
        for record in records {
            let key = BitKey::new_from_slice(record.key());
            self.insert_k(&key, record);
            inserted += 1;
        }
        inserted
    }
}

impl<R: Keyed> Extend<R> for PatriciaTree<R> {
    fn extend<I: IntoIterator<Item = R>>(&mut self, iter: I) {
        self.build_index(iter);
    }
}

impl<R: Keyed> FromIterator<R> for PatriciaTree<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        let mut tree = PatriciaTree::new();
        tree.build_index(iter);
        tree
    }
}

impl<R> TreeStatsTrait for PatriciaTree<R> {
    fn get_tree_stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        if let Some(root) = self.root.as_deref() {
            PatriciaTree::get_tree_stats_recurse(root, &mut stats, 1);
        }
        stats
    }
}

impl<R> Drop for PatriciaTree<R> {
    fn drop(&mut self) {
        teardown(self.root.take(), std::mem::drop);
    }
}

// Post-order release with an explicit stack: both subtrees are gone before their parent's stem and
// bucket are released, and no call stack grows with the depth of the trie.
fn teardown<R, F>(root: Child<R>, mut on_record: F) -> usize
where
    F: FnMut(R),
{
    let mut released = 0;
    let mut stack: Vec<(Box<Node<R>>, bool)> = root.into_iter().map(|n| (n, false)).collect();

    while let Some((mut node, expanded)) = stack.pop() {
        if !expanded {
            let [left, right] = node.take_children();
            stack.push((node, true));
            if let Some(right) = right {
                stack.push((right, false));
            }
            if let Some(left) = left {
                stack.push((left, false));
            }
            continue;
        }

        if let Some(bucket) = node.bucket.take() {
            bucket.records.into_iter().for_each(&mut on_record);
        }
        released += 1;
    }
    released
}
