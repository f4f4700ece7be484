use std::cmp::Ordering;

use bitmask_enum::bitmask;

use super::{
    node::{self, Node},
    rbt::Rbt,
    rbt_traits::{KeyComparator, RbtParams},
};

/// Structural properties a tree can fail. An empty mask means the tree is
/// well formed.
#[bitmask(u8)]
pub enum Violations {
    // keys out of symmetric order
    Order = 1,
    // cached subtree size disagrees with the real population
    Size = 2,
    RightRed = 4,
    DoubleRed = 8,
    // root-to-leaf paths differ in black link count
    BlackBalance = 16,
    RedRoot = 32,
}

/// Invariant checkers. Read-only, meant for tests and self verification.
impl<T: RbtParams> Rbt<T> {
    pub fn is_bst(&self) -> bool {
        self.is_bst_descend(self.root_.as_deref(), None, None)
    }

    fn is_bst_descend<'a>(
        &self,
        node: Option<&'a Node<T::KeyType, T::ValueType>>,
        min: Option<&'a T::KeyType>,
        max: Option<&'a T::KeyType>,
    ) -> bool {
        let Some(n) = node else {
            return true;
        };
        if let Some(min) = min {
            if self.key_comp().compare(&n.key, min) != Ordering::Greater {
                return false;
            }
        }
        if let Some(max) = max {
            if self.key_comp().compare(&n.key, max) != Ordering::Less {
                return false;
            }
        }
        self.is_bst_descend(n.left.as_deref(), min, Some(&n.key))
            && self.is_bst_descend(n.right.as_deref(), Some(&n.key), max)
    }

    pub fn is_size_consistent(&self) -> bool {
        Self::is_size_consistent_descend(self.root_.as_deref())
    }

    fn is_size_consistent_descend(node: Option<&Node<T::KeyType, T::ValueType>>) -> bool {
        let Some(n) = node else {
            return true;
        };
        n.size == 1 + node::size(&n.left) + node::size(&n.right)
            && Self::is_size_consistent_descend(n.left.as_deref())
            && Self::is_size_consistent_descend(n.right.as_deref())
    }

    /// No red right links and no two red links in a row.
    pub fn is_23(&self) -> bool {
        self.check_23().is_none()
    }

    fn check_23(&self) -> Violations {
        let mut violations = Violations::none();
        Self::check_23_descend(self.root_.as_deref(), true, &mut violations);
        violations
    }

    fn check_23_descend(
        node: Option<&Node<T::KeyType, T::ValueType>>,
        is_root: bool,
        violations: &mut Violations,
    ) {
        let Some(n) = node else {
            return;
        };
        if node::is_red(&n.right) {
            *violations = *violations | Violations::RightRed;
        }
        if !is_root && n.is_red() && node::is_red(&n.left) {
            *violations = *violations | Violations::DoubleRed;
        }
        Self::check_23_descend(n.left.as_deref(), false, violations);
        Self::check_23_descend(n.right.as_deref(), false, violations);
    }

    /// Every root-to-leaf path has the same number of black links.
    pub fn is_balanced(&self) -> bool {
        let mut black = 0;
        let mut n = self.root_.as_deref();
        while let Some(x) = n {
            if !x.is_red() {
                black += 1;
            }
            n = x.left.as_deref();
        }
        Self::is_balanced_descend(self.root_.as_deref(), black)
    }

    fn is_balanced_descend(
        node: Option<&Node<T::KeyType, T::ValueType>>,
        mut black: usize,
    ) -> bool {
        let Some(n) = node else {
            return black == 0;
        };
        if !n.is_red() {
            match black.checked_sub(1) {
                Some(b) => black = b,
                None => return false,
            }
        }
        Self::is_balanced_descend(n.left.as_deref(), black)
            && Self::is_balanced_descend(n.right.as_deref(), black)
    }

    /// Run every checker and collect what failed.
    pub fn check(&self) -> Violations {
        let mut violations = self.check_23();
        if !self.is_bst() {
            violations = violations | Violations::Order;
        }
        if !self.is_size_consistent() {
            violations = violations | Violations::Size;
        }
        if !self.is_balanced() {
            violations = violations | Violations::BlackBalance;
        }
        if node::is_red(&self.root_) {
            violations = violations | Violations::RedRoot;
        }
        violations
    }

    pub fn verify(&self) -> bool {
        self.check().is_none()
    }

    pub(super) fn self_verify(&self) {
        if T::SELF_VERIFY && cfg!(debug_assertions) {
            let violations = self.check();
            debug_assert!(
                violations.is_none(),
                "rbt invariants violated: {:#08b}",
                violations.bits()
            );
        }
    }
}
