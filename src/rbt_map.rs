use crate::rbt_base::{
    iter::Iter,
    rbt::Rbt,
    rbt_traits::{KeyComparator, RbtParams},
    DefaultRbtConfig,
};

pub struct RbtMap<T: RbtParams> {
    _tree: Rbt<T>,
}

impl<T: RbtParams> RbtMap<T> {
    pub fn is_empty(&self) -> bool {
        self._tree.is_empty()
    }

    pub fn len(&self) -> usize {
        self._tree.size()
    }

    pub fn contains_key(&self, key: &T::KeyType) -> bool {
        self._tree.contains(key)
    }

    pub fn insert(&mut self, key: T::KeyType, value: T::ValueType) -> Option<T::ValueType> {
        self._tree.insert(key, value)
    }

    pub fn get(&self, key: &T::KeyType) -> Option<&T::ValueType> {
        self._tree.get(key)
    }

    pub fn get_mut(&mut self, key: &T::KeyType) -> Option<&mut T::ValueType> {
        self._tree.get_mut(key)
    }

    pub fn remove(&mut self, key: &T::KeyType) -> Option<T::ValueType> {
        self._tree.remove(key).map(|(_, v)| v)
    }

    pub fn first_key_value(&self) -> Option<(&T::KeyType, &T::ValueType)> {
        self._tree.first()
    }

    pub fn last_key_value(&self) -> Option<(&T::KeyType, &T::ValueType)> {
        self._tree.last()
    }

    pub fn pop_first(&mut self) -> Option<(T::KeyType, T::ValueType)> {
        self._tree.delete_min()
    }

    pub fn pop_last(&mut self) -> Option<(T::KeyType, T::ValueType)> {
        self._tree.delete_max()
    }

    /// Number of keys strictly less than `key`.
    pub fn rank(&self, key: &T::KeyType) -> usize {
        self._tree.rank(key)
    }

    /// Entry at the given 0-based position in key order.
    pub fn select(&self, index: usize) -> Option<(&T::KeyType, &T::ValueType)> {
        self._tree.select_entry(index)
    }

    pub fn iter(&self) -> Iter<'_, T::KeyType, T::ValueType> {
        self._tree.iter()
    }

    pub fn clear(&mut self) {
        self._tree.clear();
    }

    pub fn tree(&self) -> &Rbt<T> {
        &self._tree
    }

    pub fn new() -> Self
    where
        T::KeyCompareType: Default,
    {
        Self { _tree: Rbt::new() }
    }

    pub fn with_comparator(key_comp: T::KeyCompareType) -> Self {
        Self {
            _tree: Rbt::with_comparator(key_comp),
        }
    }
}

impl<T: RbtParams> Default for RbtMap<T>
where
    T::KeyCompareType: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RbtParams> std::fmt::Debug for RbtMap<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<T: RbtParams> Extend<(T::KeyType, T::ValueType)> for RbtMap<T> {
    fn extend<I: IntoIterator<Item = (T::KeyType, T::ValueType)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<T: RbtParams> FromIterator<(T::KeyType, T::ValueType)> for RbtMap<T>
where
    T::KeyCompareType: Default,
{
    fn from_iter<I: IntoIterator<Item = (T::KeyType, T::ValueType)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<'a, T: RbtParams> IntoIterator for &'a RbtMap<T> {
    type Item = (&'a T::KeyType, &'a T::ValueType);
    type IntoIter = Iter<'a, T::KeyType, T::ValueType>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: RbtParams> PartialEq for RbtMap<T>
where
    T::ValueType: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().zip(other.iter()).all(|((k1, v1), (k2, v2))| {
                self._tree.key_comp().compare(k1, k2).is_eq() && v1 == v2
            })
    }
}

pub type DefaultRbtMap<K, V> = RbtMap<DefaultRbtConfig<K, V>>;
