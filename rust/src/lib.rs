//! AVL tree implementation in Rust with a set-like API.
//!
//! This crate provides a self-balancing binary search tree that keeps every
//! node's subtree heights within one of each other, supporting insertion,
//! deletion, lookup and ordered traversal in O(log n).
//!
//! Nodes own their children through `Box`, with no parent pointers. Every
//! mutation is a recursive descent that hands the (possibly rotated) subtree
//! root back to its caller, which stores it into the link it came from.
//!
//! ```
//! use avltree::{AvlTree, Rebalance};
//!
//! let mut tree = AvlTree::new();
//! for key in [10, 20, 30] {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.preorder(), vec![&20, &10, &30]);
//! assert_eq!(tree.rotation_stats().count(Rebalance::RightRight), 1);
//!
//! tree.remove(&20);
//! assert_eq!(tree.inorder(), vec![&10, &30]);
//! assert!(tree.check_invariants());
//! ```

mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod node;
mod rotation;
mod types;
mod validation;

pub use error::{AvlTreeError, ModifyResult, TreeResult};
pub use iteration::{IntoIter, Iter};
pub use types::{AvlTree, Rebalance, RotationStats};
