use std::cmp::Ordering;
use std::fmt::Debug;
use std::marker::PhantomData;

// Traits bound
pub trait KeyComparator<T>: Clone + Debug {
    /// Three-way comparison of two keys. Must be a total order and must not
    /// change over the lifetime of a tree.
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering;

    fn less(&self, lhs: &T, rhs: &T) -> bool {
        self.compare(lhs, rhs) == Ordering::Less
    }
}

/// Receives every key/value pair visited by `Rbt::preorder`.
pub trait Dumper<K, V> {
    fn dump(&self, key: &K, value: &V);
}

/// Dumps pairs through the `log` facade at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogDumper;

impl<K: Debug, V: Debug> Dumper<K, V> for LogDumper {
    fn dump(&self, key: &K, value: &V) {
        log::debug!("({:?}, {:?})", key, value);
    }
}

pub trait RbtParams {
    type KeyType: Debug;
    type ValueType: Debug;
    type KeyCompareType: KeyComparator<Self::KeyType>;
    type DumperType: Dumper<Self::KeyType, Self::ValueType>;
    const SELF_VERIFY: bool;
}

pub struct _Rbt<TKey, TValue, TCompare, TDumper, const SELF_VERIFY: bool = false> {
    _phantom_key: PhantomData<TKey>,
    _phantom_value: PhantomData<TValue>,
    _phantom_compare: PhantomData<TCompare>,
    _phantom_dumper: PhantomData<TDumper>,
}

impl<TKey, TValue, TCompare, TDumper, const SELF_VERIFY: bool> Clone
    for _Rbt<TKey, TValue, TCompare, TDumper, SELF_VERIFY>
{
    fn clone(&self) -> Self {
        Self {
            _phantom_key: PhantomData,
            _phantom_value: PhantomData,
            _phantom_compare: PhantomData,
            _phantom_dumper: PhantomData,
        }
    }
}

impl<TKey, TValue, TCompare, TDumper, const SELF_VERIFY: bool> Debug
    for _Rbt<TKey, TValue, TCompare, TDumper, SELF_VERIFY>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("_Rbt")
            .field("self_verify", &SELF_VERIFY)
            .finish()
    }
}

impl<
        TKey: Debug,
        TValue: Debug,
        TCompare: KeyComparator<TKey>,
        TDumper: Dumper<TKey, TValue>,
        const SELF_VERIFY: bool,
    > RbtParams for _Rbt<TKey, TValue, TCompare, TDumper, SELF_VERIFY>
{
    type KeyType = TKey;
    type ValueType = TValue;
    type KeyCompareType = TCompare;
    type DumperType = TDumper;
    const SELF_VERIFY: bool = SELF_VERIFY;
}
