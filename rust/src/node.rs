//! Node construction and the height/balance utilities.
//!
//! Heights are cached on every node and recomputed eagerly, children first,
//! whenever a node's child links change. Readers never recurse.

use crate::types::{Link, Node};

// ============================================================================
// FREE UTILITIES OVER LINKS
// ============================================================================

/// Cached height of a subtree; an absent subtree has height 0.
#[inline]
pub(crate) fn height<K>(link: &Link<K>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

/// `height(left) - height(right)`; an absent subtree has balance 0.
#[inline]
pub(crate) fn balance_factor<K>(link: &Link<K>) -> isize {
    link.as_ref().map_or(0, |node| node.balance_factor())
}

// ============================================================================
// NODE IMPLEMENTATION
// ============================================================================

impl<K> Node<K> {
    /// Creates a new leaf node with height 1.
    pub(crate) fn leaf(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
            height: 1,
        })
    }

    /// Recompute the cached height from the children's cached heights.
    #[inline]
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    #[inline]
    pub(crate) fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    /// Leftmost (minimum) key of this subtree.
    pub(crate) fn min_key(&self) -> &K {
        let mut current = self;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        &current.key
    }

    /// Rightmost (maximum) key of this subtree.
    pub(crate) fn max_key(&self) -> &K {
        let mut current = self;
        while let Some(right) = current.right.as_deref() {
            current = right;
        }
        &current.key
    }
}
