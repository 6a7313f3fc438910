//! Rebalancing engine.
//!
//! Every function takes ownership of a subtree root and returns the root that
//! replaces it. The caller stores the result back into the parent slot.

use tracing::trace;

use crate::node::{height, update_height, Node};

/// Largest height difference tolerated between two sibling subtrees.
pub(crate) const ALLOWED_IMBALANCE: i32 = 1;

/// Restores the AVL condition at `node` and refreshes its cached height.
/// The heights of the two subtrees must not differ by more than
/// `ALLOWED_IMBALANCE + 1`, which always holds after a single insert or remove
/// below `node`.
pub(crate) fn balance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let left_height = height(&node.left);
    let right_height = height(&node.right);
    debug_assert!(left_height <= right_height + ALLOWED_IMBALANCE + 1);
    debug_assert!(right_height <= left_height + ALLOWED_IMBALANCE + 1);

    if left_height - right_height > ALLOWED_IMBALANCE {
        let outer_is_taller = match &node.left {
            Some(left) => height(&left.left) >= height(&left.right),
            None => true,
        };
        if outer_is_taller {
            rotate_with_left_child(node)
        } else {
            double_with_left_child(node)
        }
    } else if right_height - left_height > ALLOWED_IMBALANCE {
        let outer_is_taller = match &node.right {
            Some(right) => height(&right.right) >= height(&right.left),
            None => true,
        };
        if outer_is_taller {
            rotate_with_right_child(node)
        } else {
            double_with_right_child(node)
        }
    } else {
        update_height(&mut node);
        node
    }
}

/// Single rotation, left case: the left child `k1` replaces `k2` as subtree
/// root and `k2` becomes its right child.
///
/// ```text
///       k2          k1
///      /  \        /  \
///     k1   C  ->  A    k2
///    /  \             /  \
///   A    B           B    C
/// ```
pub(crate) fn rotate_with_left_child<T>(mut k2: Box<Node<T>>) -> Box<Node<T>> {
    let mut k1 = match k2.left.take() {
        None => return k2,
        Some(k1) => k1,
    };
    k2.left = k1.right.take();
    update_height(&mut k2);
    k1.right = Some(k2);
    update_height(&mut k1);
    trace!(height = k1.height, "single rotation with left child");
    k1
}

/// Single rotation, right case. Mirror of [`rotate_with_left_child`].
///
/// ```text
///     k2              k1
///    /  \            /  \
///   A    k1   ->    k2   C
///       /  \       /  \
///      B    C     A    B
/// ```
pub(crate) fn rotate_with_right_child<T>(mut k2: Box<Node<T>>) -> Box<Node<T>> {
    let mut k1 = match k2.right.take() {
        None => return k2,
        Some(k1) => k1,
    };
    k2.right = k1.left.take();
    update_height(&mut k2);
    k1.left = Some(k2);
    update_height(&mut k1);
    trace!(height = k1.height, "single rotation with right child");
    k1
}

/// Double rotation, left case: rotates the left child with its right child,
/// then `k3` with its new left child.
pub(crate) fn double_with_left_child<T>(mut k3: Box<Node<T>>) -> Box<Node<T>> {
    if let Some(left) = k3.left.take() {
        k3.left = Some(rotate_with_right_child(left));
    }
    trace!("double rotation with left child");
    rotate_with_left_child(k3)
}

/// Double rotation, right case: rotates the right child with its left child,
/// then `k3` with its new right child.
pub(crate) fn double_with_right_child<T>(mut k3: Box<Node<T>>) -> Box<Node<T>> {
    if let Some(right) = k3.right.take() {
        k3.right = Some(rotate_with_left_child(right));
    }
    trace!("double rotation with right child");
    rotate_with_right_child(k3)
}
