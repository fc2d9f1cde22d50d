//! DELETE operations for AvlTree.
//!
//! Removal follows the same descend-then-rebalance shape as insertion. A node
//! with two children takes its in-order successor's key and the successor is
//! unlinked from the right subtree instead, so the physical removal always
//! happens at a node with at most one child. Unlike insertion, every ancestor
//! on the way back up may need a rotation.

use std::cmp::Ordering;

use crate::error::{AvlTreeError, ModifyResult};
use crate::node::balance_factor;
use crate::rotation::rebalance_with;
use crate::types::{AvlTree, Link, Node, Rebalance, RemoveResult, RotationStats};

impl<K: Ord> AvlTree<K> {
    /// Remove a key from the tree.
    ///
    /// Returns `true` if the key was present. Removing an absent key is a
    /// no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTree;
    ///
    /// let mut tree: AvlTree<i32> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
    /// assert!(tree.remove(&70));
    /// assert!(!tree.remove(&999));
    /// assert_eq!(tree.inorder(), vec![&20, &30, &40, &50, &60, &80]);
    /// ```
    pub fn remove(&mut self, key: &K) -> bool {
        self.take(key).is_some()
    }

    /// Remove a key from the tree and return the stored key.
    pub fn take(&mut self, key: &K) -> Option<K> {
        let RemoveResult { link, removed } = remove_node(self.root.take(), key, &mut self.stats);
        self.root = link;
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Remove and return the smallest key.
    pub fn pop_first(&mut self) -> Option<K> {
        let root = self.root.take()?;
        let (rest, min) = take_min(root, &mut self.stats);
        self.root = rest;
        self.len -= 1;
        Some(min)
    }

    /// Remove and return the largest key.
    pub fn pop_last(&mut self) -> Option<K> {
        let root = self.root.take()?;
        let (rest, max) = take_max(root, &mut self.stats);
        self.root = rest;
        self.len -= 1;
        Some(max)
    }

    /// Remove with invariant validation before and after.
    ///
    /// Unlike [`remove`](Self::remove), an absent key is reported as
    /// [`AvlTreeError::KeyNotFound`].
    pub fn try_remove(&mut self, key: &K) -> ModifyResult<()> {
        self.validate_for_operation("remove")?;

        if !self.remove(key) {
            return Err(AvlTreeError::KeyNotFound);
        }

        self.validate_for_operation("remove")
    }
}

/// Remove `key` from the subtree at `link`, returning the replacement link.
pub(crate) fn remove_node<K: Ord>(
    link: Link<K>,
    key: &K,
    stats: &mut RotationStats,
) -> RemoveResult<K> {
    let Some(mut node) = link else {
        return RemoveResult {
            link: None,
            removed: None,
        };
    };

    let removed = match key.cmp(&node.key) {
        Ordering::Less => {
            let result = remove_node(node.left.take(), key, stats);
            node.left = result.link;
            result.removed
        }
        Ordering::Greater => {
            let result = remove_node(node.right.take(), key, stats);
            node.right = result.link;
            result.removed
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => {
                let Node { key, .. } = *node;
                return RemoveResult {
                    link: None,
                    removed: Some(key),
                };
            }
            (Some(child), None) | (None, Some(child)) => {
                let Node { key, .. } = *node;
                return RemoveResult {
                    link: Some(child),
                    removed: Some(key),
                };
            }
            (Some(left), Some(right)) => {
                node.left = Some(left);
                let (rest, successor) = take_min(right, stats);
                node.right = rest;
                Some(std::mem::replace(&mut node.key, successor))
            }
        },
    };

    if removed.is_none() {
        // Key not on this path; the subtree is unchanged.
        return RemoveResult {
            link: Some(node),
            removed: None,
        };
    }

    RemoveResult {
        link: Some(rebalance_after_removal(node, stats)),
        removed,
    }
}

/// Unlink the leftmost node of a subtree, rebalancing on the way back up.
/// Returns the remaining subtree and the detached key.
pub(crate) fn take_min<K>(mut node: Box<Node<K>>, stats: &mut RotationStats) -> (Link<K>, K) {
    match node.left.take() {
        None => {
            let Node { key, right, .. } = *node;
            (right, key)
        }
        Some(left) => {
            let (rest, min) = take_min(left, stats);
            node.left = rest;
            (Some(rebalance_after_removal(node, stats)), min)
        }
    }
}

/// Unlink the rightmost node of a subtree. Mirror of [`take_min`].
pub(crate) fn take_max<K>(mut node: Box<Node<K>>, stats: &mut RotationStats) -> (Link<K>, K) {
    match node.right.take() {
        None => {
            let Node { key, left, .. } = *node;
            (left, key)
        }
        Some(right) => {
            let (rest, max) = take_max(right, stats);
            node.right = rest;
            (Some(rebalance_after_removal(node, stats)), max)
        }
    }
}

/// Recompute the height of `node` and repair it if a removal below left it
/// unbalanced. The heavy child's own balance picks single vs double rotation.
fn rebalance_after_removal<K>(mut node: Box<Node<K>>, stats: &mut RotationStats) -> Box<Node<K>> {
    node.update_height();
    let case = removal_case(
        node.balance_factor(),
        balance_factor(&node.left),
        balance_factor(&node.right),
    );
    rebalance_with(node, case, stats)
}

fn removal_case(balance: isize, left_balance: isize, right_balance: isize) -> Option<Rebalance> {
    if balance > 1 {
        if left_balance >= 0 {
            Some(Rebalance::LeftLeft)
        } else {
            Some(Rebalance::LeftRight)
        }
    } else if balance < -1 {
        if right_balance <= 0 {
            Some(Rebalance::RightRight)
        } else {
            Some(Rebalance::RightLeft)
        }
    } else {
        None
    }
}
