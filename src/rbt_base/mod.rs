mod deletion;
pub mod iter;
mod node;
pub mod rbt;
pub mod rbt_traits;
mod tree_stats;
pub mod verify;

use self::rbt_traits::{KeyComparator, LogDumper, _Rbt};
use std::{cmp::Ordering, fmt::Debug, marker::PhantomData};

pub use self::{rbt::Rbt, tree_stats::TreeStats, verify::Violations};

#[derive(Debug)]
pub struct DefaultKeyComparator<T> {
    _t: PhantomData<T>,
}

impl<T> Clone for DefaultKeyComparator<T> {
    fn clone(&self) -> Self {
        Self { _t: PhantomData }
    }
}

impl<T> Default for DefaultKeyComparator<T> {
    fn default() -> Self {
        Self { _t: PhantomData }
    }
}

impl<T> KeyComparator<T> for DefaultKeyComparator<T>
where
    T: Ord + Debug,
{
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        lhs.cmp(rhs)
    }
}

/// Orders keys from largest to smallest.
#[derive(Debug)]
pub struct ReverseKeyComparator<T> {
    _t: PhantomData<T>,
}

impl<T> Clone for ReverseKeyComparator<T> {
    fn clone(&self) -> Self {
        Self { _t: PhantomData }
    }
}

impl<T> Default for ReverseKeyComparator<T> {
    fn default() -> Self {
        Self { _t: PhantomData }
    }
}

impl<T> KeyComparator<T> for ReverseKeyComparator<T>
where
    T: Ord + Debug,
{
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        rhs.cmp(lhs)
    }
}

pub type DefaultRbtConfig<K, V> = _Rbt<K, V, DefaultKeyComparator<K>, LogDumper>;
pub type ReverseRbtConfig<K, V> = _Rbt<K, V, ReverseKeyComparator<K>, LogDumper>;
pub type VerifiedRbtConfig<K, V> = _Rbt<K, V, DefaultKeyComparator<K>, LogDumper, true>;

pub type DefaultRbt<K, V> = Rbt<DefaultRbtConfig<K, V>>;
