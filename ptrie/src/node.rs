use crate::keys::BitKey;
use crate::partials::Stem;
use crate::utils::bits::BitSource;

/// Records stored under one key, in insertion order, together with the key they were stored under.
pub struct Bucket<R> {
    pub(crate) key: Box<[u8]>,
    pub(crate) records: Vec<R>,
}

impl<R> Bucket<R> {
    pub(crate) fn new(key: &BitKey, record: R) -> Self {
        Self {
            key: Box::from(key.key_bytes()),
            records: vec![record],
        }
    }

    pub(crate) fn empty(key: &BitKey) -> Self {
        Self {
            key: Box::from(key.key_bytes()),
            records: Vec::new(),
        }
    }

    #[inline]
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    #[inline]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub(crate) fn push(&mut self, record: R) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub(crate) type Child<R> = Option<Box<Node<R>>>;

pub(crate) struct Node<R> {
    pub(crate) stem: Stem,
    pub(crate) children: [Child<R>; 2],
    pub(crate) bucket: Option<Bucket<R>>,
}

impl<R> Node<R> {
    #[inline]
    pub(crate) fn new_leaf(stem: Stem, bucket: Bucket<R>) -> Self {
        Self {
            stem,
            children: [None, None],
            bucket: Some(bucket),
        }
    }

    #[inline]
    pub(crate) fn new_inner(stem: Stem) -> Self {
        Self {
            stem,
            children: [None, None],
            bucket: None,
        }
    }

    /// The bucket, if this node terminates a key and holds at least one record.
    #[inline]
    pub(crate) fn stored(&self) -> Option<&Bucket<R>> {
        self.bucket.as_ref().filter(|b| !b.is_empty())
    }

    #[inline]
    pub(crate) fn child(&self, bit: u8) -> Option<&Node<R>> {
        self.children[bit as usize].as_deref()
    }

    pub(crate) fn num_children(&self) -> usize {
        self.children.iter().filter(|c| c.is_some()).count()
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.num_children() == 0
    }

    pub(crate) fn stem_bits(&self) -> usize {
        self.stem.bit_len()
    }

    pub(crate) fn take_children(&mut self) -> [Child<R>; 2] {
        [self.children[0].take(), self.children[1].take()]
    }
}

/// Splits `node` at `matched` bits into its stem.
///
/// A new internal node holding the common prefix takes over the slot `node` refers to. The old
/// node keeps its allocation, has its stem cut down to the remaining suffix, and hangs off the new
/// node by its first remaining bit. The key inserted at `depth` either terminates at the new node or
/// gets a fresh leaf on the other branch.
pub(crate) fn split<R>(
    node: &mut Box<Node<R>>,
    matched: usize,
    key: &BitKey,
    depth: usize,
    record: R,
) {
    debug_assert!(matched < node.stem_bits());

    let common = node.stem.prefix(matched);
    let suffix = node.stem.suffix(matched);

    let mut old = std::mem::replace(node, Box::new(Node::new_inner(common)));
    old.stem = suffix;
    let old_bit = old.stem.bit(0);

    let split_depth = depth + matched;
    let remaining = key.bit_len() - split_depth;
    if remaining == 0 {
        node.bucket = Some(Bucket::new(key, record));
    } else {
        let leaf = Node::new_leaf(
            Stem::new(key.as_bytes(), split_depth, remaining),
            Bucket::new(key, record),
        );
        let new_bit = key.bit(split_depth);
        debug_assert_ne!(new_bit, old_bit);
        node.children[new_bit as usize] = Some(Box::new(leaf));
    }
    node.children[old_bit as usize] = Some(old);
}
