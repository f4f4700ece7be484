//! An ordered key-value index built on a left-leaning red-black tree.
//!
//! Every node tracks the size of its subtree, which makes rank and select
//! logarithmic alongside the usual lookup, floor/ceiling and deletion.

pub mod rbt_base;
pub mod rbt_map;
