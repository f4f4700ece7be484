use std::{cmp::Ordering, iter::FusedIterator};

use super::{node::Node, rbt_traits::KeyComparator};

/// In-order iterator. Holds the path of nodes whose left subtree has been
/// visited but which have not been yielded yet.
#[derive(Clone, Debug)]
pub struct Iter<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(super) fn new(root: Option<&'a Node<K, V>>, len: usize) -> Self {
        let mut it = Self {
            stack: Vec::new(),
            remaining: len,
        };
        it.push_left(root);
        it
    }

    fn push_left(&mut self, mut node: Option<&'a Node<K, V>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.stack.pop()?;
        self.push_left(n.right.as_deref());
        self.remaining -= 1;
        Some((&n.key, &n.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Reverse in-order iterator, mirror image of `Iter`.
#[derive(Clone, Debug)]
pub struct RevIter<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> RevIter<'a, K, V> {
    pub(super) fn new(root: Option<&'a Node<K, V>>, len: usize) -> Self {
        let mut it = Self {
            stack: Vec::new(),
            remaining: len,
        };
        it.push_right(root);
        it
    }

    fn push_right(&mut self, mut node: Option<&'a Node<K, V>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.right.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for RevIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.stack.pop()?;
        self.push_right(n.left.as_deref());
        self.remaining -= 1;
        Some((&n.key, &n.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for RevIter<'_, K, V> {}
impl<K, V> FusedIterator for RevIter<'_, K, V> {}

/// Ascending iterator over the entries with keys in `[lo, hi]`.
pub struct Range<'a, K, V, C> {
    stack: Vec<&'a Node<K, V>>,
    key_comp: &'a C,
    hi: &'a K,
}

impl<'a, K, V, C: KeyComparator<K>> Range<'a, K, V, C> {
    pub(super) fn new(root: Option<&'a Node<K, V>>, key_comp: &'a C, lo: &K, hi: &'a K) -> Self {
        let mut it = Self {
            stack: Vec::new(),
            key_comp,
            hi,
        };

        // seek to the first key >= lo
        let mut node = root;
        while let Some(n) = node {
            if key_comp.compare(lo, &n.key) == Ordering::Greater {
                node = n.right.as_deref();
            } else {
                it.stack.push(n);
                node = n.left.as_deref();
            }
        }
        it
    }

    fn push_left(&mut self, mut node: Option<&'a Node<K, V>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K, V, C: KeyComparator<K>> Iterator for Range<'a, K, V, C> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.stack.pop()?;
        if self.key_comp.compare(&n.key, self.hi) == Ordering::Greater {
            self.stack.clear();
            return None;
        }
        self.push_left(n.right.as_deref());
        Some((&n.key, &n.value))
    }
}

impl<K, V, C: KeyComparator<K>> FusedIterator for Range<'_, K, V, C> {}

#[cfg(test)]
mod tests {
    use crate::rbt_base::DefaultRbt;

    fn tree() -> DefaultRbt<i32, String> {
        let mut tree = DefaultRbt::new();
        for k in [50, 20, 80, 10, 30, 70, 90, 60, 40] {
            tree.put(k, k.to_string());
        }
        tree
    }

    #[test]
    fn iter_ascending_and_exact_size() {
        let tree = tree();
        let it = tree.iter();
        assert_eq!(it.len(), 9);
        let keys: Vec<_> = it.map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![10, 20, 30, 40, 50, 60, 70, 80, 90]);

        let mut it = tree.iter();
        it.next();
        it.next();
        assert_eq!(it.len(), 7);
    }

    #[test]
    fn iter_rev_descending() {
        let tree = tree();
        let keys: Vec<_> = tree.iter_rev().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![90, 80, 70, 60, 50, 40, 30, 20, 10]);
        assert_eq!(tree.values().next().map(String::as_str), Some("10"));
    }

    #[test]
    fn range_is_inclusive() {
        let tree = tree();
        let keys: Vec<_> = tree.range(&25, &70).map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![30, 40, 50, 60, 70]);
        assert_eq!(tree.range_count(&25, &70), 5);

        let keys: Vec<_> = tree.range(&10, &10).map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![10]);
        assert_eq!(tree.range_count(&10, &10), 1);

        assert_eq!(tree.range(&91, &100).count(), 0);
        assert_eq!(tree.range(&70, &25).count(), 0);
        assert_eq!(tree.range_count(&70, &25), 0);
        assert_eq!(tree.range(&0, &1000).count(), 9);
    }
}
