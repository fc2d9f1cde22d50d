//! Construction and initialization logic for AvlTree.
//!
//! This module contains construction, bulk loading, and the standard trait
//! implementations that create or reset a tree.

use crate::types::{AvlTree, RotationStats};

impl<K> AvlTree<K> {
    /// Create an empty AVL tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTree;
    ///
    /// let tree = AvlTree::<i32>::new();
    /// assert!(tree.is_empty());
    /// ```
    pub const fn new() -> Self {
        Self {
            root: None,
            len: 0,
            stats: RotationStats {
                left_left: 0,
                right_right: 0,
                left_right: 0,
                right_left: 0,
            },
        }
    }

    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clear all keys from the tree and reset the rotation counters.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
        self.stats = RotationStats::default();
    }

    /// Rebalancing steps performed since construction or the last `clear`.
    pub fn rotation_stats(&self) -> RotationStats {
        self.stats
    }
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Structural equality: same keys in the same shape with the same heights.
/// Rotation counters are not compared.
impl<K: PartialEq> PartialEq for AvlTree<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.root == other.root
    }
}

impl<K: Eq> Eq for AvlTree<K> {}

impl<K: Ord> FromIterator<K> for AvlTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = AvlTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for AvlTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord, const N: usize> From<[K; N]> for AvlTree<K> {
    fn from(keys: [K; N]) -> Self {
        keys.into_iter().collect()
    }
}
