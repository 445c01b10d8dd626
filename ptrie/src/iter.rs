use crate::node::Node;

/// Pre-order walk (node, then its 0-branch, then its 1-branch) over every stored key beneath a
/// node, yielding the key and its records.
pub struct Iter<'a, R> {
    // Right children are pushed before left ones so the 0-branch is visited first.
    stack: Vec<&'a Node<R>>,
}

impl<'a, R> Iter<'a, R> {
    pub(crate) fn new(node: Option<&'a Node<R>>) -> Self {
        Self {
            stack: node.into_iter().collect(),
        }
    }
}

impl<'a, R> Iterator for Iter<'a, R> {
    type Item = (&'a [u8], &'a [R]);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = self.stack.pop()?;
            if let Some(right) = node.child(1) {
                self.stack.push(right);
            }
            if let Some(left) = node.child(0) {
                self.stack.push(left);
            }
            if let Some(bucket) = node.stored() {
                return Some((bucket.key(), bucket.records()));
            }
        }
    }
}

/// Owned copies of the stored keys, in the same order as [`Iter`].
///
/// The copies share nothing with the tree, so the collected keys outlive any later mutation.
pub struct KeysIter<'a, R> {
    inner: Iter<'a, R>,
}

impl<'a, R> KeysIter<'a, R> {
    pub(crate) fn new(node: Option<&'a Node<R>>) -> Self {
        Self {
            inner: Iter::new(node),
        }
    }
}

impl<R> Iterator for KeysIter<'_, R> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key.to_vec())
    }
}
