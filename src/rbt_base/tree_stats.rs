use super::{node::Node, rbt::Rbt, rbt_traits::RbtParams};

/// Shape summary of a tree, computed on demand by `Rbt::stats`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub size: usize,
    pub height: isize,
    /// black links on any root-to-leaf path
    pub black_height: usize,
    pub red_links: usize,
}

impl TreeStats {
    /// Nodes reached through a red link, i.e. nodes that are the second key
    /// of a 3-node.
    pub fn three_nodes(&self) -> usize {
        self.red_links
    }

    /// Nodes of the equivalent 2-3 tree.
    pub fn nodes_23(&self) -> usize {
        self.size - self.red_links
    }

    pub fn red_ratio(&self) -> f64 {
        if self.size == 0 {
            0.0
        } else {
            self.red_links as f64 / self.size as f64
        }
    }
}

impl<T: RbtParams> Rbt<T> {
    pub fn stats(&self) -> TreeStats {
        let mut black_height = 0;
        let mut n = self.root_.as_deref();
        while let Some(x) = n {
            if !x.is_red() {
                black_height += 1;
            }
            n = x.left.as_deref();
        }

        TreeStats {
            size: self.size(),
            height: self.height(),
            black_height,
            red_links: count_red(self.root_.as_deref()),
        }
    }
}

fn count_red<K, V>(node: Option<&Node<K, V>>) -> usize {
    let Some(n) = node else {
        return 0;
    };
    usize::from(n.is_red()) + count_red(n.left.as_deref()) + count_red(n.right.as_deref())
}
