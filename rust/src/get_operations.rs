//! GET operations for AvlTree.
//!
//! Read-only lookups. Each one is a single descent from the root, so the
//! cost is bounded by the tree height.

use std::cmp::Ordering;

use crate::node::height;
use crate::types::{AvlTree, Node};

impl<K: Ord> AvlTree<K> {
    // ============================================================================
    // PUBLIC GET OPERATIONS
    // ============================================================================

    /// Get a reference to the stored key equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTree;
    ///
    /// let tree: AvlTree<&str> = ["C", "B", "E"].into_iter().collect();
    /// assert_eq!(tree.get(&"B"), Some(&"B"));
    /// assert_eq!(tree.get(&"Z"), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&K> {
        self.find_node(key).map(|node| &node.key)
    }

    /// Check if key exists in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&2));
    /// ```
    pub fn contains(&self, key: &K) -> bool {
        self.find_node(key).is_some()
    }

    /// Number of edges walked from the root to `key`, if present.
    pub fn depth_of(&self, key: &K) -> Option<usize> {
        let mut current = self.root.as_deref();
        let mut depth = 0;
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(depth),
            };
            depth += 1;
        }
        None
    }

    fn find_node(&self, key: &K) -> Option<&Node<K>> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(node),
            };
        }
        None
    }
}

impl<K> AvlTree<K> {
    /// Returns the smallest key in the tree.
    pub fn first(&self) -> Option<&K> {
        self.root.as_deref().map(Node::min_key)
    }

    /// Returns the largest key in the tree.
    pub fn last(&self) -> Option<&K> {
        self.root.as_deref().map(Node::max_key)
    }

    /// Returns the key stored at the root.
    pub fn root_key(&self) -> Option<&K> {
        self.root.as_ref().map(|node| &node.key)
    }

    /// Height of the tree: 0 when empty, 1 for a single node.
    pub fn height(&self) -> usize {
        height(&self.root)
    }
}
