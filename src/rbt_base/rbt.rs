use std::{cmp::Ordering, mem};

use super::{
    iter::{Iter, Range, RevIter},
    node::{self, Color, Link, Node},
    rbt_traits::{Dumper, KeyComparator, RbtParams},
};

/// Left-leaning red-black tree keyed by `T::KeyType`. Every node carries the
/// size of its subtree, so rank and select run in logarithmic time as well.
pub struct Rbt<T: RbtParams> {
    pub(super) root_: Link<T::KeyType, T::ValueType>,
    key_comp: T::KeyCompareType,
    dumper: Option<T::DumperType>,
}

/// Construction
impl<T: RbtParams> Rbt<T> {
    pub fn new() -> Self
    where
        T::KeyCompareType: Default,
    {
        Self::with_comparator(T::KeyCompareType::default())
    }

    pub fn with_comparator(key_comp: T::KeyCompareType) -> Self {
        Self {
            root_: None,
            key_comp,
            dumper: None,
        }
    }

    /// Attach the dumper used by `preorder`.
    pub fn with_dumper(mut self, dumper: T::DumperType) -> Self {
        self.dumper = Some(dumper);
        self
    }

    pub fn set_dumper(&mut self, dumper: Option<T::DumperType>) {
        self.dumper = dumper;
    }

    pub fn key_comp(&self) -> &T::KeyCompareType {
        &self.key_comp
    }

    pub fn clear(&mut self) {
        self.root_ = None;
    }
}

impl<T: RbtParams> Default for Rbt<T>
where
    T::KeyCompareType: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Access Functions to the item count
impl<T: RbtParams> Rbt<T> {
    pub fn size(&self) -> usize {
        node::size(&self.root_)
    }

    pub fn is_empty(&self) -> bool {
        self.root_.is_none()
    }

    /// Number of edges on the longest root-to-leaf path, -1 for an empty tree.
    pub fn height(&self) -> isize {
        Self::height_descend(&self.root_)
    }

    fn height_descend(link: &Link<T::KeyType, T::ValueType>) -> isize {
        match link {
            None => -1,
            Some(n) => 1 + Self::height_descend(&n.left).max(Self::height_descend(&n.right)),
        }
    }
}

/// Lookup
impl<T: RbtParams> Rbt<T> {
    fn find(&self, key: &T::KeyType) -> Option<&Node<T::KeyType, T::ValueType>> {
        let mut n = self.root_.as_deref();
        while let Some(node) = n {
            match self.key_comp.compare(key, &node.key) {
                Ordering::Less => n = node.left.as_deref(),
                Ordering::Greater => n = node.right.as_deref(),
                Ordering::Equal => return Some(node),
            }
        }
        None
    }

    pub fn get(&self, key: &T::KeyType) -> Option<&T::ValueType> {
        self.find(key).map(|n| &n.value)
    }

    pub fn get_key_value(&self, key: &T::KeyType) -> Option<(&T::KeyType, &T::ValueType)> {
        self.find(key).map(|n| (&n.key, &n.value))
    }

    pub fn get_mut(&mut self, key: &T::KeyType) -> Option<&mut T::ValueType> {
        let mut n = self.root_.as_deref_mut();
        while let Some(node) = n {
            match self.key_comp.compare(key, &node.key) {
                Ordering::Less => n = node.left.as_deref_mut(),
                Ordering::Greater => n = node.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.value),
            }
        }
        None
    }

    pub fn contains(&self, key: &T::KeyType) -> bool {
        self.find(key).is_some()
    }

    /// Smallest entry, or None on an empty tree.
    pub fn first(&self) -> Option<(&T::KeyType, &T::ValueType)> {
        let mut n = self.root_.as_deref()?;
        while let Some(left) = n.left.as_deref() {
            n = left;
        }
        Some((&n.key, &n.value))
    }

    /// Largest entry, or None on an empty tree.
    pub fn last(&self) -> Option<(&T::KeyType, &T::ValueType)> {
        let mut n = self.root_.as_deref()?;
        while let Some(right) = n.right.as_deref() {
            n = right;
        }
        Some((&n.key, &n.value))
    }

    pub fn min(&self) -> Option<&T::KeyType> {
        self.first().map(|(k, _)| k)
    }

    pub fn max(&self) -> Option<&T::KeyType> {
        self.last().map(|(k, _)| k)
    }

    /// Largest key less than or equal to `key`.
    pub fn floor(&self, key: &T::KeyType) -> Option<&T::KeyType> {
        self.floor_descend(self.root_.as_deref(), key).map(|n| &n.key)
    }

    fn floor_descend<'a>(
        &self,
        node: Option<&'a Node<T::KeyType, T::ValueType>>,
        key: &T::KeyType,
    ) -> Option<&'a Node<T::KeyType, T::ValueType>> {
        let n = node?;
        match self.key_comp.compare(key, &n.key) {
            Ordering::Equal => Some(n),
            Ordering::Less => self.floor_descend(n.left.as_deref(), key),
            Ordering::Greater => self.floor_descend(n.right.as_deref(), key).or(Some(n)),
        }
    }

    /// Smallest key greater than or equal to `key`.
    pub fn ceiling(&self, key: &T::KeyType) -> Option<&T::KeyType> {
        self.ceiling_descend(self.root_.as_deref(), key).map(|n| &n.key)
    }

    fn ceiling_descend<'a>(
        &self,
        node: Option<&'a Node<T::KeyType, T::ValueType>>,
        key: &T::KeyType,
    ) -> Option<&'a Node<T::KeyType, T::ValueType>> {
        let n = node?;
        match self.key_comp.compare(key, &n.key) {
            Ordering::Equal => Some(n),
            Ordering::Greater => self.ceiling_descend(n.right.as_deref(), key),
            Ordering::Less => self.ceiling_descend(n.left.as_deref(), key).or(Some(n)),
        }
    }
}

/// Order statistics
impl<T: RbtParams> Rbt<T> {
    /// Number of keys strictly less than `key`. `key` need not be present.
    pub fn rank(&self, key: &T::KeyType) -> usize {
        let mut rank = 0;
        let mut n = self.root_.as_deref();
        while let Some(node) = n {
            match self.key_comp.compare(key, &node.key) {
                Ordering::Less => n = node.left.as_deref(),
                Ordering::Greater => {
                    rank += 1 + node::size(&node.left);
                    n = node.right.as_deref();
                }
                Ordering::Equal => return rank + node::size(&node.left),
            }
        }
        rank
    }

    /// Key of the given 0-based rank.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.size()`.
    pub fn select(&self, index: usize) -> &T::KeyType {
        match self.try_select(index) {
            Some(key) => key,
            None => panic!(
                "select index {} out of range for rbt of size {}",
                index,
                self.size()
            ),
        }
    }

    pub fn try_select(&self, index: usize) -> Option<&T::KeyType> {
        self.select_entry(index).map(|(k, _)| k)
    }

    pub fn select_entry(&self, mut index: usize) -> Option<(&T::KeyType, &T::ValueType)> {
        if index >= self.size() {
            return None;
        }

        let mut n = self.root_.as_deref();
        while let Some(node) = n {
            let left_size = node::size(&node.left);
            match index.cmp(&left_size) {
                Ordering::Less => n = node.left.as_deref(),
                Ordering::Greater => {
                    index -= left_size + 1;
                    n = node.right.as_deref();
                }
                Ordering::Equal => return Some((&node.key, &node.value)),
            }
        }
        None
    }

    /// Number of keys in `[lo, hi]`.
    pub fn range_count(&self, lo: &T::KeyType, hi: &T::KeyType) -> usize {
        if self.key_comp.compare(lo, hi) == Ordering::Greater {
            return 0;
        }
        let count = self.rank(hi) - self.rank(lo);
        if self.contains(hi) {
            count + 1
        } else {
            count
        }
    }
}

/// Insertion
impl<T: RbtParams> Rbt<T> {
    /// Insert or overwrite. Equal keys keep their node; only the value is
    /// replaced.
    pub fn put(&mut self, key: T::KeyType, value: T::ValueType) {
        self.insert(key, value);
    }

    /// Like `put`, returning the value that was replaced, if any.
    pub fn insert(&mut self, key: T::KeyType, value: T::ValueType) -> Option<T::ValueType> {
        log::debug!("Rbt::insert({:?}) on rbt size {}", key, self.size());

        let root = self.root_.take();
        let (mut root, replaced) = self.insert_descend(root, key, value);
        root.color = Color::Black;
        self.root_ = Some(root);

        self.self_verify();
        replaced
    }

    /// Descend to the insertion point, then fix up every node on the way
    /// back to the root.
    fn insert_descend(
        &self,
        node: Link<T::KeyType, T::ValueType>,
        key: T::KeyType,
        value: T::ValueType,
    ) -> (Box<Node<T::KeyType, T::ValueType>>, Option<T::ValueType>) {
        let Some(mut h) = node else {
            return (Node::new_leaf(key, value), None);
        };

        let replaced = match self.key_comp.compare(&key, &h.key) {
            Ordering::Less => {
                let (left, replaced) = self.insert_descend(h.left.take(), key, value);
                h.left = Some(left);
                replaced
            }
            Ordering::Greater => {
                let (right, replaced) = self.insert_descend(h.right.take(), key, value);
                h.right = Some(right);
                replaced
            }
            Ordering::Equal => Some(mem::replace(&mut h.value, value)),
        };

        (node::fix_up(h), replaced)
    }
}

/// Traversal
impl<T: RbtParams> Rbt<T> {
    /// Entries in ascending key order.
    pub fn iter(&self) -> Iter<'_, T::KeyType, T::ValueType> {
        Iter::new(self.root_.as_deref(), self.size())
    }

    /// Entries in descending key order.
    pub fn iter_rev(&self) -> RevIter<'_, T::KeyType, T::ValueType> {
        RevIter::new(self.root_.as_deref(), self.size())
    }

    pub fn keys(&self) -> impl Iterator<Item = &T::KeyType> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &T::ValueType> + '_ {
        self.iter().map(|(_, v)| v)
    }

    /// Entries with keys in `[lo, hi]`, ascending.
    pub fn range<'a>(
        &'a self,
        lo: &T::KeyType,
        hi: &'a T::KeyType,
    ) -> Range<'a, T::KeyType, T::ValueType, T::KeyCompareType> {
        Range::new(self.root_.as_deref(), &self.key_comp, lo, hi)
    }

    /// Visit root, left subtree, right subtree, handing every pair to the
    /// configured dumper. Does nothing without one.
    pub fn preorder(&self) {
        if let Some(dumper) = self.dumper.as_ref() {
            self.preorder_with(|k, v| dumper.dump(k, v));
        }
    }

    pub fn preorder_with<F>(&self, mut visit: F)
    where
        F: FnMut(&T::KeyType, &T::ValueType),
    {
        Self::preorder_descend(self.root_.as_deref(), &mut visit);
    }

    fn preorder_descend<F>(node: Option<&Node<T::KeyType, T::ValueType>>, visit: &mut F)
    where
        F: FnMut(&T::KeyType, &T::ValueType),
    {
        let Some(n) = node else {
            return;
        };
        visit(&n.key, &n.value);
        Self::preorder_descend(n.left.as_deref(), visit);
        Self::preorder_descend(n.right.as_deref(), visit);
    }
}

/// Debug
impl<T: RbtParams> Rbt<T> {
    fn print_node(
        f: &mut std::fmt::Formatter<'_>,
        node: &Node<T::KeyType, T::ValueType>,
        side: &str,
        depth: usize,
    ) -> std::fmt::Result {
        for _ in 0..depth {
            write!(f, "  ")?;
        }
        writeln!(
            f,
            "{}{:?} color {:?} size {}",
            side, node.key, node.color, node.size
        )?;

        if let Some(left) = node.left.as_deref() {
            Self::print_node(f, left, "L ", depth + 1)?;
        }
        if let Some(right) = node.right.as_deref() {
            Self::print_node(f, right, "R ", depth + 1)?;
        }
        Ok(())
    }
}

/// Display
impl<T: RbtParams> std::fmt::Debug for Rbt<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(root) = self.root_.as_deref() {
            Self::print_node(f, root, "", 0)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::rbt_base::{DefaultRbt, ReverseRbtConfig};

    use super::Rbt;

    fn scenario_tree() -> DefaultRbt<i32, i32> {
        let mut tree = DefaultRbt::new();
        for k in [5, 3, 8, 1, 4, 7, 9, 2, 6, 0] {
            tree.put(k, k);
        }
        tree
    }

    #[test]
    fn order_queries() {
        let tree = scenario_tree();
        assert_eq!(tree.size(), 10);
        assert_eq!(tree.min(), Some(&0));
        assert_eq!(tree.max(), Some(&9));
        assert_eq!(tree.rank(&6), 6);
        assert_eq!(*tree.select(3), 3);
        assert_eq!(tree.floor(&-1), None);
        assert_eq!(tree.ceiling(&10), None);
        assert_eq!(tree.floor(&4), Some(&4));
        assert_eq!(tree.ceiling(&4), Some(&4));
        assert!(tree.verify());
    }

    #[test]
    fn floor_and_ceiling_between_keys() {
        let mut tree = DefaultRbt::new();
        for k in (0..20).map(|k| k * 10) {
            tree.put(k, ());
        }
        assert_eq!(tree.floor(&55), Some(&50));
        assert_eq!(tree.ceiling(&55), Some(&60));
        assert_eq!(tree.floor(&1000), Some(&190));
        assert_eq!(tree.ceiling(&-3), Some(&0));
        assert_eq!(tree.rank(&55), 6);
        assert_eq!(tree.rank(&-3), 0);
        assert_eq!(tree.rank(&1000), 20);
    }

    #[test]
    fn empty_tree() {
        let tree = DefaultRbt::<i32, i32>::new();
        assert!(tree.is_empty());
        assert_eq!(tree.size(), 0);
        assert_eq!(tree.height(), -1);
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);
        assert_eq!(tree.floor(&1), None);
        assert_eq!(tree.ceiling(&1), None);
        assert_eq!(tree.rank(&1), 0);
        assert_eq!(tree.try_select(0), None);
        assert_eq!(tree.iter().count(), 0);
        assert_eq!(format!("{:?}", tree), "");
    }

    #[test]
    fn overwrite_keeps_size() {
        let mut tree = DefaultRbt::<&str, i32>::new();
        tree.put("a", 1);
        assert_eq!(tree.insert("a", 2), Some(1));
        assert_eq!(tree.get(&"a"), Some(&2));
        assert_eq!(tree.size(), 1);

        *tree.get_mut(&"a").unwrap() += 40;
        assert_eq!(tree.get(&"a"), Some(&42));
        assert!(tree.get_mut(&"b").is_none());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn select_past_end_panics() {
        let tree = scenario_tree();
        tree.select(tree.size());
    }

    #[test]
    fn preorder_visits_root_first() {
        let mut tree = DefaultRbt::new();
        for k in 1..=3 {
            tree.put(k, k * 100);
        }
        let mut seen = Vec::new();
        tree.preorder_with(|k, v| seen.push((*k, *v)));
        assert_eq!(seen, vec![(2, 200), (1, 100), (3, 300)]);
    }

    #[test]
    fn reverse_comparator_orders_descending() {
        let mut tree = Rbt::<ReverseRbtConfig<i64, ()>>::new();
        for k in [3, -1, 7, 0, 12] {
            tree.put(k, ());
        }
        assert_eq!(tree.min(), Some(&12));
        assert_eq!(tree.max(), Some(&-1));
        assert_eq!(tree.keys().copied().collect::<Vec<_>>(), vec![12, 7, 3, 0, -1]);
        assert_eq!(tree.floor(&5), Some(&7));
        assert!(tree.is_bst());
    }

    #[test]
    fn debug_prints_structure() {
        let mut tree = DefaultRbt::new();
        for k in 1..=3 {
            tree.put(k, ());
        }
        let dump = format!("{:?}", tree);
        assert_eq!(
            dump,
            "2 color Black size 3\n  L 1 color Black size 1\n  R 3 color Black size 1\n"
        );
    }
}
