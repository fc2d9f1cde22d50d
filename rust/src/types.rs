//! Core types and data structures for AvlTree.
//!
//! This module contains the tree handle, the node type, the owned child link,
//! and the bookkeeping types used to report rebalancing.

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

/// Owned reference to a subtree, or `None` for an absent child.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// AVL tree with a set-like API.
///
/// An AVL tree is a self-balancing binary search tree: for every node the
/// heights of its two subtrees differ by at most one, which bounds the tree
/// height to roughly `1.44 * log2(n)`. Every mutation restores that bound on
/// the way back up from the edited position, so search, insertion and
/// deletion all run in O(log n).
///
/// # Type Parameters
///
/// * `K` - Key type that must implement `Ord`
///
/// # Examples
///
/// ```
/// use avltree::AvlTree;
///
/// let mut tree = AvlTree::new();
/// tree.insert(10);
/// tree.insert(20);
/// tree.insert(30);
///
/// assert!(tree.contains(&20));
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.inorder(), vec![&10, &20, &30]);
///
/// // Ascending inserts were rebalanced: 20 is now the root.
/// assert_eq!(tree.root_key(), Some(&20));
/// ```
///
/// # Performance Characteristics
///
/// - **Insertion**: O(log n)
/// - **Lookup**: O(log n)
/// - **Deletion**: O(log n)
/// - **Iteration**: O(n)
#[derive(Debug, Clone)]
pub struct AvlTree<K> {
    /// The root node of the tree.
    pub(crate) root: Link<K>,
    /// Number of keys stored.
    pub(crate) len: usize,
    /// Rotations performed since construction or the last `clear`.
    pub(crate) stats: RotationStats,
}

/// A single tree node. Owns both of its subtrees exclusively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
    /// Cached height of the subtree rooted here; a leaf has height 1.
    pub(crate) height: usize,
}

// ============================================================================
// REBALANCING BOOKKEEPING
// ============================================================================

/// Which of the four imbalance cases a rebalancing step repaired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rebalance {
    /// Left child is left-heavy or even: one right rotation.
    LeftLeft,
    /// Right child is right-heavy or even: one left rotation.
    RightRight,
    /// Left child is right-heavy: left rotation on the child, then right rotation.
    LeftRight,
    /// Right child is left-heavy: right rotation on the child, then left rotation.
    RightLeft,
}

impl Rebalance {
    /// Number of single rotations this case performs.
    pub fn rotation_count(self) -> usize {
        match self {
            Rebalance::LeftLeft | Rebalance::RightRight => 1,
            Rebalance::LeftRight | Rebalance::RightLeft => 2,
        }
    }

    /// Short conventional name ("LL", "RR", "LR", "RL").
    pub fn as_str(self) -> &'static str {
        match self {
            Rebalance::LeftLeft => "LL",
            Rebalance::RightRight => "RR",
            Rebalance::LeftRight => "LR",
            Rebalance::RightLeft => "RL",
        }
    }
}

impl std::fmt::Display for Rebalance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-case counts of the rebalancing steps a tree has performed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RotationStats {
    pub left_left: usize,
    pub right_right: usize,
    pub left_right: usize,
    pub right_left: usize,
}

impl RotationStats {
    pub(crate) fn record(&mut self, case: Rebalance) {
        match case {
            Rebalance::LeftLeft => self.left_left += 1,
            Rebalance::RightRight => self.right_right += 1,
            Rebalance::LeftRight => self.left_right += 1,
            Rebalance::RightLeft => self.right_left += 1,
        }
    }

    /// Count for a single case.
    pub fn count(&self, case: Rebalance) -> usize {
        match case {
            Rebalance::LeftLeft => self.left_left,
            Rebalance::RightRight => self.right_right,
            Rebalance::LeftRight => self.left_right,
            Rebalance::RightLeft => self.right_left,
        }
    }

    /// Total number of rebalancing steps, whatever the case.
    pub fn total_cases(&self) -> usize {
        self.left_left + self.right_right + self.left_right + self.right_left
    }

    /// Total number of single rotations (double-rotation cases count twice).
    pub fn total_rotations(&self) -> usize {
        self.left_left + self.right_right + 2 * (self.left_right + self.right_left)
    }

    /// Counts accumulated since `earlier` was taken.
    pub fn since(&self, earlier: &RotationStats) -> RotationStats {
        RotationStats {
            left_left: self.left_left.saturating_sub(earlier.left_left),
            right_right: self.right_right.saturating_sub(earlier.right_right),
            left_right: self.left_right.saturating_sub(earlier.left_right),
            right_left: self.right_left.saturating_sub(earlier.right_left),
        }
    }
}

/// Outcome of removing from a subtree: the replacement link and the key
/// that was detached, if any.
pub(crate) struct RemoveResult<K> {
    pub(crate) link: Link<K>,
    pub(crate) removed: Option<K>,
}
