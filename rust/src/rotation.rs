//! Rotation primitives and the shared rebalancing step.
//!
//! Both rotations take ownership of a subtree root and hand back the new one.
//! The caller stores the result into whichever link (left, right or root)
//! the old subtree came from.

use crate::types::{Node, Rebalance, RotationStats};

/// Rotate right around `y`, lifting its left child.
///
/// ```text
///         y                x
///        / \              / \
///       x   T3    =>    T1   y
///      / \                  / \
///    T1   T2              T2   T3
/// ```
pub(crate) fn rotate_right<K>(mut y: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut x) = y.left.take() else {
        // No left child: nothing to lift.
        return y;
    };
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

/// Rotate left around `x`, lifting its right child. Mirror of [`rotate_right`].
pub(crate) fn rotate_left<K>(mut x: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut y) = x.right.take() else {
        return x;
    };
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}

/// Apply one of the four repair cases to `node`.
pub(crate) fn apply<K>(mut node: Box<Node<K>>, case: Rebalance) -> Box<Node<K>> {
    match case {
        Rebalance::LeftLeft => rotate_right(node),
        Rebalance::RightRight => rotate_left(node),
        Rebalance::LeftRight => {
            node.left = node.left.take().map(rotate_left);
            rotate_right(node)
        }
        Rebalance::RightLeft => {
            node.right = node.right.take().map(rotate_right);
            rotate_left(node)
        }
    }
}

/// Apply `case` if there is one and record it.
pub(crate) fn rebalance_with<K>(
    node: Box<Node<K>>,
    case: Option<Rebalance>,
    stats: &mut RotationStats,
) -> Box<Node<K>> {
    match case {
        Some(case) => {
            stats.record(case);
            apply(node, case)
        }
        None => node,
    }
}
