use std::{cmp::Ordering, mem};

use super::{
    node::{self, Color, Link, Node},
    rbt::Rbt,
    rbt_traits::{KeyComparator, RbtParams},
};

/// Remove the smallest node below `h`. Returns the new subtree root together
/// with the removed entry.
fn delete_min_descend<K, V>(mut h: Box<Node<K, V>>) -> (Link<K, V>, K, V) {
    if h.left.is_none() {
        let Node {
            key, value, right, ..
        } = *h;
        return (right, key, value);
    }

    if !node::is_red(&h.left) && !node::is_red_left(&h.left) {
        h = node::move_red_left(h);
    }

    // move_red_left always leaves a left child in place
    let Some(left) = h.left.take() else {
        let Node {
            key, value, right, ..
        } = *h;
        return (right, key, value);
    };
    let (left, key, value) = delete_min_descend(left);
    h.left = left;
    (Some(node::balance(h)), key, value)
}

/// Mirror of `delete_min_descend`.
fn delete_max_descend<K, V>(mut h: Box<Node<K, V>>) -> (Link<K, V>, K, V) {
    if node::is_red(&h.left) {
        h = node::rotate_right(h);
    }

    if h.right.is_none() {
        let Node {
            key, value, left, ..
        } = *h;
        return (left, key, value);
    }

    if !node::is_red(&h.right) && !node::is_red_left(&h.right) {
        h = node::move_red_right(h);
    }

    let Some(right) = h.right.take() else {
        let Node {
            key, value, left, ..
        } = *h;
        return (left, key, value);
    };
    let (right, key, value) = delete_max_descend(right);
    h.right = right;
    (Some(node::balance(h)), key, value)
}

/// Erase
impl<T: RbtParams> Rbt<T> {
    /// Remove and return the smallest entry, or None if the tree is empty.
    pub fn delete_min(&mut self) -> Option<(T::KeyType, T::ValueType)> {
        let Some(mut root) = self.root_.take() else {
            log::debug!("Rbt::delete_min on empty rbt");
            return None;
        };
        log::debug!("Rbt::delete_min on rbt size {}", root.size);

        if !node::is_red(&root.left) && !node::is_red(&root.right) {
            root.color = Color::Red;
        }

        let (mut root, key, value) = delete_min_descend(root);
        if let Some(root) = root.as_mut() {
            root.color = Color::Black;
        }
        self.root_ = root;

        self.self_verify();
        Some((key, value))
    }

    /// Remove and return the largest entry, or None if the tree is empty.
    pub fn delete_max(&mut self) -> Option<(T::KeyType, T::ValueType)> {
        let Some(mut root) = self.root_.take() else {
            log::debug!("Rbt::delete_max on empty rbt");
            return None;
        };
        log::debug!("Rbt::delete_max on rbt size {}", root.size);

        if !node::is_red(&root.left) && !node::is_red(&root.right) {
            root.color = Color::Red;
        }

        let (mut root, key, value) = delete_max_descend(root);
        if let Some(root) = root.as_mut() {
            root.color = Color::Black;
        }
        self.root_ = root;

        self.self_verify();
        Some((key, value))
    }

    /// Returns true iff `key` was present and has been removed.
    pub fn delete(&mut self, key: &T::KeyType) -> bool {
        self.remove(key).is_some()
    }

    /// Remove `key`, returning the stored entry.
    pub fn remove(&mut self, key: &T::KeyType) -> Option<(T::KeyType, T::ValueType)> {
        log::debug!("Rbt::remove({:?}) on rbt size {}", key, self.size());

        // the descent reshapes the tree on the way down; absent keys must
        // never reach it
        if !self.contains(key) {
            log::debug!("Could not find key {:?} to remove.", key);
            return None;
        }

        let mut root = self.root_.take()?;
        if !node::is_red(&root.left) && !node::is_red(&root.right) {
            root.color = Color::Red;
        }

        let mut removed = None;
        let mut root = self.delete_descend(root, key, &mut removed);
        if let Some(root) = root.as_mut() {
            root.color = Color::Black;
        }
        self.root_ = root;

        debug_assert!(removed.is_some());
        self.self_verify();
        removed
    }

    /// Delete `key` from the subtree rooted at `h`. The key must be present.
    /// The removed entry is written to `removed`.
    fn delete_descend(
        &self,
        mut h: Box<Node<T::KeyType, T::ValueType>>,
        key: &T::KeyType,
        removed: &mut Option<(T::KeyType, T::ValueType)>,
    ) -> Link<T::KeyType, T::ValueType> {
        if self.key_comp().compare(key, &h.key) == Ordering::Less {
            if !node::is_red(&h.left) && !node::is_red_left(&h.left) {
                h = node::move_red_left(h);
            }
            h.left = h
                .left
                .take()
                .and_then(|left| self.delete_descend(left, key, removed));
        } else {
            if node::is_red(&h.left) {
                h = node::rotate_right(h);
            }

            if self.key_comp().compare(key, &h.key) == Ordering::Equal && h.right.is_none() {
                let Node {
                    key: k, value: v, ..
                } = *h;
                *removed = Some((k, v));
                return None;
            }

            if !node::is_red(&h.right) && !node::is_red_left(&h.right) {
                h = node::move_red_right(h);
            }

            if self.key_comp().compare(key, &h.key) == Ordering::Equal {
                // replace with the successor taken from the right subtree
                if let Some(right) = h.right.take() {
                    let (right, min_key, min_value) = delete_min_descend(right);
                    h.right = right;
                    let k = mem::replace(&mut h.key, min_key);
                    let v = mem::replace(&mut h.value, min_value);
                    *removed = Some((k, v));
                }
            } else {
                h.right = h
                    .right
                    .take()
                    .and_then(|right| self.delete_descend(right, key, removed));
            }
        }

        Some(node::balance(h))
    }
}

#[cfg(test)]
mod tests {
    use crate::rbt_base::{DefaultRbt, Rbt, VerifiedRbtConfig};

    fn scenario_tree() -> Rbt<VerifiedRbtConfig<i32, i32>> {
        let mut tree = Rbt::new();
        for k in [5, 3, 8, 1, 4, 7, 9, 2, 6, 0] {
            tree.put(k, k);
        }
        tree
    }

    #[test]
    fn delete_min_drains_ascending() {
        let mut tree = scenario_tree();
        for expected in 0..10 {
            let (k, v) = tree.delete_min().unwrap();
            assert_eq!((k, v), (expected, expected));
            assert_eq!(tree.size(), 9 - expected as usize);
            assert!(tree.verify());
        }
        assert!(tree.is_empty());
        assert!(tree.delete_min().is_none());
    }

    #[test]
    fn delete_max_drains_descending() {
        let mut tree = scenario_tree();
        for expected in (0..10).rev() {
            let (k, _) = tree.delete_max().unwrap();
            assert_eq!(k, expected);
            assert!(tree.verify());
        }
        assert!(tree.delete_max().is_none());
    }

    #[test]
    fn delete_absent_key_is_noop() {
        let mut tree = scenario_tree();
        let before: Vec<_> = tree.keys().copied().collect();
        let height = tree.height();
        assert!(!tree.delete(&42));
        assert!(!tree.delete(&-1));
        assert_eq!(tree.keys().copied().collect::<Vec<_>>(), before);
        assert_eq!(tree.height(), height);
        assert!(tree.verify());

        let mut empty = DefaultRbt::<&str, ()>::new();
        assert!(!empty.delete(&"z"));
        assert!(empty.is_empty());
    }

    #[test]
    fn delete_inner_node_uses_successor() {
        let mut tree = scenario_tree();
        let root_key = tree.root_.as_ref().unwrap().key;
        assert_eq!(tree.remove(&root_key), Some((root_key, root_key)));
        assert!(!tree.contains(&root_key));
        assert_eq!(tree.size(), 9);
        assert!(tree.verify());

        for k in [0, 9, 4, 5, 3] {
            assert!(tree.delete(&k) || k == root_key);
            assert!(tree.verify());
        }
    }

    #[test]
    fn delete_only_node() {
        let mut tree = DefaultRbt::new();
        tree.put(1, "one");
        assert_eq!(tree.remove(&1), Some((1, "one")));
        assert!(tree.is_empty());
        assert_eq!(tree.height(), -1);
    }
}
