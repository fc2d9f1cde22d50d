//! Iterator and traversal implementations for AvlTree.
//!
//! This module contains the lazy in-order iterators (borrowing and owning)
//! and the eager traversals that collect a fresh sequence on every call.

use std::iter::FusedIterator;

use crate::types::{AvlTree, Link, Node};

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

/// Borrowing in-order iterator over the keys of an [`AvlTree`].
///
/// Keeps the unvisited left spine on an explicit stack, so it never holds
/// more than `height` entries.
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

/// Owning in-order iterator over the keys of an [`AvlTree`].
pub struct IntoIter<K> {
    stack: Vec<Box<Node<K>>>,
    remaining: usize,
}

// ============================================================================
// AVLTREE TRAVERSAL METHODS
// ============================================================================

impl<K> AvlTree<K> {
    /// Returns an iterator over all keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self)
    }

    /// In-order traversal: all keys in strictly ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTree;
    ///
    /// let tree: AvlTree<i32> = [30, 10, 20].into_iter().collect();
    /// assert_eq!(tree.inorder(), vec![&10, &20, &30]);
    /// ```
    pub fn inorder(&self) -> Vec<&K> {
        self.iter().collect()
    }

    /// Pre-order traversal (node, left, right). Shows the tree's shape.
    pub fn preorder(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<K>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            keys.push(&node.key);
            if let Some(right) = node.right.as_deref() {
                stack.push(right);
            }
            if let Some(left) = node.left.as_deref() {
                stack.push(left);
            }
        }
        keys
    }

    /// Post-order traversal (left, right, node).
    pub fn postorder(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len);
        collect_postorder(&self.root, &mut keys);
        keys
    }
}

fn collect_postorder<'a, K>(link: &'a Link<K>, keys: &mut Vec<&'a K>) {
    if let Some(node) = link {
        collect_postorder(&node.left, keys);
        collect_postorder(&node.right, keys);
        keys.push(&node.key);
    }
}

// ============================================================================
// ITER IMPLEMENTATION
// ============================================================================

impl<'a, K> Iter<'a, K> {
    fn new(tree: &'a AvlTree<K>) -> Self {
        let mut iter = Self {
            stack: Vec::with_capacity(tree.height()),
            remaining: tree.len,
        };
        iter.push_left_spine(tree.root.as_deref());
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Node<K>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

impl<'a, K> IntoIterator for &'a AvlTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// INTOITER IMPLEMENTATION
// ============================================================================

impl<K> IntoIter<K> {
    fn push_left_spine(&mut self, mut current: Link<K>) {
        while let Some(mut node) = current {
            current = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let Node { key, right, .. } = *node;
        self.push_left_spine(right);
        self.remaining -= 1;
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for IntoIter<K> {}

impl<K> FusedIterator for IntoIter<K> {}

impl<K> IntoIterator for AvlTree<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(mut self) -> Self::IntoIter {
        let mut iter = IntoIter {
            stack: Vec::with_capacity(self.height()),
            remaining: self.len,
        };
        iter.push_left_spine(self.root.take());
        iter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters() -> AvlTree<char> {
        ['C', 'B', 'E', 'A', 'D', 'H', 'G', 'F'].into_iter().collect()
    }

    #[test]
    fn test_inorder_is_sorted() {
        let tree = letters();
        assert_eq!(
            tree.inorder(),
            vec![&'A', &'B', &'C', &'D', &'E', &'F', &'G', &'H']
        );
    }

    #[test]
    fn test_preorder_shows_shape() {
        let tree = letters();
        assert_eq!(
            tree.preorder(),
            vec![&'C', &'B', &'A', &'E', &'D', &'G', &'F', &'H']
        );
    }

    #[test]
    fn test_postorder() {
        let tree = letters();
        assert_eq!(
            tree.postorder(),
            vec![&'A', &'B', &'D', &'F', &'H', &'G', &'E', &'C']
        );
    }

    #[test]
    fn test_traversals_are_restartable() {
        let tree: AvlTree<i32> = (0..50).rev().collect();
        let first = tree.inorder();
        let second = tree.inorder();
        assert_eq!(first, second);
        assert_eq!(tree.iter().count(), 50);
        assert_eq!(tree.iter().count(), 50);
    }

    #[test]
    fn test_iter_reports_exact_size() {
        let tree: AvlTree<i32> = (0..10).collect();
        let mut iter = tree.iter();
        assert_eq!(iter.len(), 10);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 8);
        assert_eq!(iter.by_ref().count(), 8);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_borrowing_for_loop() {
        let tree: AvlTree<i32> = [3, 1, 2].into_iter().collect();
        let mut seen = Vec::new();
        for key in &tree {
            seen.push(*key);
        }
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn test_into_iter_yields_owned_keys_in_order() {
        let tree: AvlTree<String> = ["pear", "apple", "fig"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let keys: Vec<String> = tree.into_iter().collect();
        assert_eq!(keys, vec!["apple", "fig", "pear"]);
    }

    #[test]
    fn test_empty_traversals() {
        let tree: AvlTree<i32> = AvlTree::new();
        assert!(tree.inorder().is_empty());
        assert!(tree.preorder().is_empty());
        assert!(tree.postorder().is_empty());
        assert_eq!(tree.into_iter().next(), None);
    }
}
