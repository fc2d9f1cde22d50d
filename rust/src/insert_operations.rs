//! INSERT operations for AvlTree.
//!
//! Insertion descends by key comparison, attaches a new leaf, then rebalances
//! each ancestor while the recursion unwinds. Every level hands its
//! (possibly rotated) subtree root back to the caller, which stores it into
//! the link it came from.

use std::cmp::Ordering;

use crate::error::{AvlTreeError, ModifyResult};
use crate::rotation::rebalance_with;
use crate::types::{AvlTree, Link, Node, Rebalance, RotationStats};

impl<K: Ord> AvlTree<K> {
    /// Insert a key into the tree.
    ///
    /// Returns `true` if the key was added, `false` if it was already present.
    /// A duplicate leaves the tree untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert!(tree.insert(5));
    /// assert!(!tree.insert(5));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool {
        let (root, outcome) = insert_node(self.root.take(), key, &mut self.stats);
        self.root = Some(root);
        let inserted = outcome.is_some();
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Insert with invariant validation before and after.
    ///
    /// Unlike [`insert`](Self::insert), a duplicate key is reported as
    /// [`AvlTreeError::DuplicateKey`].
    pub fn try_insert(&mut self, key: K) -> ModifyResult<()> {
        self.validate_for_operation("insert")?;

        if !self.insert(key) {
            return Err(AvlTreeError::DuplicateKey);
        }

        self.validate_for_operation("insert")
    }
}

/// Insert `key` into the subtree at `link`.
///
/// Returns the new subtree root and, if a node was added, the direction
/// taken at that root: `Less`/`Greater` for a descent into the left/right
/// child, `Equal` when the root itself is the new leaf. `None` means the key
/// was already present and nothing changed.
pub(crate) fn insert_node<K: Ord>(
    link: Link<K>,
    key: K,
    stats: &mut RotationStats,
) -> (Box<Node<K>>, Option<Ordering>) {
    let mut node = match link {
        None => return (Node::leaf(key), Some(Ordering::Equal)),
        Some(node) => node,
    };

    let went = key.cmp(&node.key);
    let child_went = match went {
        Ordering::Less => {
            let (child, child_went) = insert_node(node.left.take(), key, stats);
            node.left = Some(child);
            child_went
        }
        Ordering::Greater => {
            let (child, child_went) = insert_node(node.right.take(), key, stats);
            node.right = Some(child);
            child_went
        }
        Ordering::Equal => return (node, None),
    };

    let Some(child_went) = child_went else {
        return (node, None);
    };

    node.update_height();
    let case = insertion_case(node.balance_factor(), child_went);
    (rebalance_with(node, case, stats), Some(went))
}

/// Pick the repair case for a node whose balance is `balance` after the new
/// key went `child_went` relative to the heavy child's key.
fn insertion_case(balance: isize, child_went: Ordering) -> Option<Rebalance> {
    match (balance, child_went) {
        (b, Ordering::Less) if b > 1 => Some(Rebalance::LeftLeft),
        (b, Ordering::Greater) if b > 1 => Some(Rebalance::LeftRight),
        (b, Ordering::Greater) if b < -1 => Some(Rebalance::RightRight),
        (b, Ordering::Less) if b < -1 => Some(Rebalance::RightLeft),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(keys: &[i32]) -> AvlTree<i32> {
        let mut tree = AvlTree::new();
        for &k in keys {
            tree.insert(k);
        }
        tree
    }

    #[test]
    fn test_first_insert_creates_leaf_root() {
        let tree = tree_of(&[42]);
        assert_eq!(tree.root_key(), Some(&42));
        assert_eq!(tree.height(), 1);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_ascending_inserts_trigger_right_right() {
        let tree = tree_of(&[10, 20, 30]);
        assert_eq!(tree.structure(), vec![(&20, 2), (&10, 1), (&30, 1)]);
        assert_eq!(tree.rotation_stats().right_right, 1);
        assert_eq!(tree.rotation_stats().total_cases(), 1);
    }

    #[test]
    fn test_descending_inserts_trigger_left_left() {
        let tree = tree_of(&[30, 20, 10]);
        assert_eq!(tree.structure(), vec![(&20, 2), (&10, 1), (&30, 1)]);
        assert_eq!(tree.rotation_stats().left_left, 1);
    }

    #[test]
    fn test_zigzag_inserts_trigger_left_right() {
        let tree = tree_of(&[30, 10, 20]);
        assert_eq!(tree.structure(), vec![(&20, 2), (&10, 1), (&30, 1)]);
        assert_eq!(tree.rotation_stats().left_right, 1);
        assert_eq!(tree.rotation_stats().total_rotations(), 2);
    }

    #[test]
    fn test_zigzag_inserts_trigger_right_left() {
        let tree = tree_of(&[10, 30, 20]);
        assert_eq!(tree.structure(), vec![(&20, 2), (&10, 1), (&30, 1)]);
        assert_eq!(tree.rotation_stats().right_left, 1);
    }

    #[test]
    fn test_duplicate_insert_is_noop() {
        let mut tree = tree_of(&[2, 1, 3]);
        let before = tree.clone();
        assert!(!tree.insert(1));
        assert!(!tree.insert(3));
        assert_eq!(tree, before);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_rebalance_deep_in_tree() {
        // 50 root, then a left-left chain below 30 forces a rotation at 30, not 50.
        let tree = tree_of(&[50, 30, 70, 20, 10]);
        assert_eq!(
            tree.structure(),
            vec![(&50, 3), (&20, 2), (&10, 1), (&30, 1), (&70, 1)]
        );
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_insertion_case_selection() {
        assert_eq!(insertion_case(2, Ordering::Less), Some(Rebalance::LeftLeft));
        assert_eq!(insertion_case(2, Ordering::Greater), Some(Rebalance::LeftRight));
        assert_eq!(insertion_case(-2, Ordering::Greater), Some(Rebalance::RightRight));
        assert_eq!(insertion_case(-2, Ordering::Less), Some(Rebalance::RightLeft));
        assert_eq!(insertion_case(1, Ordering::Less), None);
        assert_eq!(insertion_case(-1, Ordering::Greater), None);
        assert_eq!(insertion_case(0, Ordering::Equal), None);
    }

    #[test]
    fn test_try_insert_reports_duplicate() {
        let mut tree = tree_of(&[1, 2]);
        assert_eq!(tree.try_insert(3), Ok(()));
        assert_eq!(tree.try_insert(2), Err(AvlTreeError::DuplicateKey));
        assert_eq!(tree.len(), 3);
    }
}
