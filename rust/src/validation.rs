//! Validation and debugging utilities for AvlTree.
//!
//! This module contains invariant checking (ordering, balance, cached heights,
//! size bookkeeping), structural dumps and test helpers.

use crate::error::{AvlTreeError, TreeResult};
use crate::types::{AvlTree, Link};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<K: Ord> AvlTree<K> {
    /// Check if the tree maintains its AVL invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    ///
    /// Verifies, for every node: keys strictly inside the bounds set by its
    /// ancestors, cached height equal to `1 + max(child heights)`, and balance
    /// factor in `-1..=1`. Also checks that the stored length matches the
    /// number of reachable nodes.
    pub fn check_invariants_detailed(&self) -> TreeResult<()> {
        let summary = check_subtree(&self.root, None, None, 0)?;

        if summary.count != self.len {
            return Err(AvlTreeError::corrupted_tree(
                "Length",
                &format!("{} nodes in tree vs recorded length {}", summary.count, self.len),
            ));
        }

        Ok(())
    }

    /// Alias for check_invariants_detailed (for test compatibility).
    pub fn validate(&self) -> TreeResult<()> {
        self.check_invariants_detailed()
    }

    /// Check if tree is in a valid state for operations
    pub fn validate_for_operation(&self, operation: &str) -> TreeResult<()> {
        self.check_invariants_detailed().map_err(|e| {
            AvlTreeError::data_integrity(operation, &format!("Validation for {}: {}", operation, e))
        })
    }
}

/// What a checked subtree reports to its parent.
struct SubtreeSummary {
    height: usize,
    count: usize,
}

/// Recursively check a subtree whose keys must lie strictly between `lower`
/// and `upper`.
fn check_subtree<K: Ord>(
    link: &Link<K>,
    lower: Option<&K>,
    upper: Option<&K>,
    depth: usize,
) -> TreeResult<SubtreeSummary> {
    let Some(node) = link else {
        return Ok(SubtreeSummary { height: 0, count: 0 });
    };

    if lower.is_some_and(|min| node.key <= *min) || upper.is_some_and(|max| node.key >= *max) {
        return Err(AvlTreeError::corrupted_tree(
            "Ordering",
            &format!("node at depth {} is outside its ancestors' key range", depth),
        ));
    }

    let left = check_subtree(&node.left, lower, Some(&node.key), depth + 1)?;
    let right = check_subtree(&node.right, Some(&node.key), upper, depth + 1)?;

    let expected_height = 1 + left.height.max(right.height);
    if node.height != expected_height {
        return Err(AvlTreeError::corrupted_tree(
            "Height",
            &format!(
                "node at depth {} caches height {} but subtree height is {}",
                depth, node.height, expected_height
            ),
        ));
    }

    let balance = left.height as isize - right.height as isize;
    if !(-1..=1).contains(&balance) {
        return Err(AvlTreeError::corrupted_tree(
            "Balance",
            &format!("node at depth {} has balance factor {}", depth, balance),
        ));
    }

    Ok(SubtreeSummary {
        height: expected_height,
        count: left.count + right.count + 1,
    })
}

// ============================================================================
// DEBUGGING AND TESTING UTILITIES
// ============================================================================

impl<K> AvlTree<K> {
    /// Pre-order keys paired with their cached heights (for testing/debugging).
    ///
    /// Two trees with equal `structure()` have the same shape.
    pub fn structure(&self) -> Vec<(&K, usize)> {
        let mut out = Vec::with_capacity(self.len);
        collect_structure(&self.root, &mut out);
        out
    }

    /// Upper bound on the height of an AVL tree holding `n` keys:
    /// `1.44 * log2(n + 2) - 0.328`.
    pub fn max_height_for(n: usize) -> f64 {
        1.44 * ((n + 2) as f64).log2() - 0.328
    }

    /// Renders the tree sideways, one node per line (for debugging).
    pub fn render(&self) -> String
    where
        K: std::fmt::Debug,
    {
        let mut out = String::new();
        render_node(&self.root, 0, &mut out);
        out
    }

    /// Prints the tree structure for debugging.
    pub fn print_tree(&self)
    where
        K: std::fmt::Debug,
    {
        println!("Tree structure:");
        print!("{}", self.render());
    }
}

fn collect_structure<'a, K>(link: &'a Link<K>, out: &mut Vec<(&'a K, usize)>) {
    if let Some(node) = link {
        out.push((&node.key, node.height));
        collect_structure(&node.left, out);
        collect_structure(&node.right, out);
    }
}

fn render_node<K: std::fmt::Debug>(link: &Link<K>, depth: usize, out: &mut String) {
    let Some(node) = link else {
        return;
    };
    render_node(&node.right, depth + 1, out);
    out.push_str(&format!(
        "{}{:?} [h={}, bf={}]\n",
        "    ".repeat(depth),
        node.key,
        node.height,
        node.balance_factor()
    ));
    render_node(&node.left, depth + 1, out);
}
