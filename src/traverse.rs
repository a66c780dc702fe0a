//! Traversal algorithms over a [`Tree`][crate::tree::Tree].
//!
//! Each traversal is a pure function over a root reference (as returned by
//! [`Tree::root`][crate::tree::Tree::root]) producing the values of the
//! subtree as an eagerly built `Vec`. An absent root is an empty subtree and
//! yields an empty `Vec`.
//!
//! The depth-first orders use an explicit stack rather than recursion, so a
//! degenerate tree (one long chain) can be traversed without risking call
//! stack exhaustion.
//!
//! # Examples
//!
//! ```
//! use bst_traverse::traverse;
//! use bst_traverse::tree::Tree;
//!
//! let mut tree = Tree::with_root(10);
//! for value in [5, 12, 11, 13] {
//!     tree.insert(value)?;
//! }
//!
//! assert_eq!(traverse::pre_order(tree.root()), [&10, &5, &12, &11, &13]);
//! assert_eq!(traverse::in_order(tree.root()), [&5, &10, &11, &12, &13]);
//! assert_eq!(traverse::post_order(tree.root()), [&5, &11, &13, &12, &10]);
//! assert_eq!(traverse::level_order(tree.root()), [&10, &5, &12, &11, &13]);
//! # Ok::<(), bst_traverse::error::DuplicateValue<i32>>(())
//! ```

use std::collections::VecDeque;

use crate::tree::Node;

/// Walks the subtree depth first, emitting each node before either of its
/// subtrees: node, left subtree, right subtree. The root value comes first.
pub fn pre_order<T>(root: Option<&Node<T>>) -> Vec<&T> {
    let mut values = Vec::new();
    let mut stack: Vec<&Node<T>> = root.into_iter().collect();

    while let Some(node) = stack.pop() {
        values.push(node.value());
        // Right is pushed first so left is popped (and emitted) first.
        if let Some(right) = node.right() {
            stack.push(right);
        }
        if let Some(left) = node.left() {
            stack.push(left);
        }
    }

    values
}

/// Walks the subtree depth first, emitting each node between its subtrees:
/// left subtree, node, right subtree.
///
/// Over a valid BST this produces the values in ascending sorted order -
/// that is the defining guarantee of in-order traversal.
///
/// # Examples
///
/// ```
/// use bst_traverse::traverse::in_order;
/// use bst_traverse::tree::Tree;
///
/// let mut tree = Tree::new();
/// for value in [4, 1, 9, 6] {
///     tree.insert(value)?;
/// }
///
/// assert_eq!(in_order(tree.root()), [&1, &4, &6, &9]);
/// # Ok::<(), bst_traverse::error::DuplicateValue<i32>>(())
/// ```
pub fn in_order<T>(root: Option<&Node<T>>) -> Vec<&T> {
    let mut values = Vec::new();
    let mut stack: Vec<&Node<T>> = Vec::new();
    let mut current = root;

    while current.is_some() || !stack.is_empty() {
        // Run down the left spine, deferring each node until its left
        // subtree has been emitted.
        while let Some(node) = current {
            stack.push(node);
            current = node.left();
        }

        let node = stack.pop().expect("loop condition implies a deferred node");
        values.push(node.value());
        current = node.right();
    }

    values
}

/// Walks the subtree depth first, emitting each node after both of its
/// subtrees: left subtree, right subtree, node. The root value comes last.
pub fn post_order<T>(root: Option<&Node<T>>) -> Vec<&T> {
    // Post-order (left, right, node) is the reverse of a mirrored pre-order
    // (node, right, left), which needs only the one stack.
    let mut values = Vec::new();
    let mut stack: Vec<&Node<T>> = root.into_iter().collect();

    while let Some(node) = stack.pop() {
        values.push(node.value());
        if let Some(left) = node.left() {
            stack.push(left);
        }
        if let Some(right) = node.right() {
            stack.push(right);
        }
    }

    values.reverse();
    values
}

/// Walks the subtree breadth first: all nodes at one depth are emitted
/// before any node at the next, left before right within a level.
///
/// # Examples
///
/// ```
/// use bst_traverse::traverse::level_order;
/// use bst_traverse::tree::Tree;
///
/// let mut tree = Tree::with_root(10);
/// for value in [5, 12, 2, 7] {
///     tree.insert(value)?;
/// }
///
/// assert_eq!(level_order(tree.root()), [&10, &5, &12, &2, &7]);
/// # Ok::<(), bst_traverse::error::DuplicateValue<i32>>(())
/// ```
pub fn level_order<T>(root: Option<&Node<T>>) -> Vec<&T> {
    let mut values = Vec::new();
    let mut queue: VecDeque<&Node<T>> = root.into_iter().collect();

    while let Some(node) = queue.pop_front() {
        values.push(node.value());
        if let Some(left) = node.left() {
            queue.push_back(left);
        }
        if let Some(right) = node.right() {
            queue.push_back(right);
        }
    }

    values
}


#[cfg(test)]
mod quicktests {
    use super::*;
    use crate::tree::Tree;

    fn build(values: &[i8]) -> Tree<i8> {
        let mut tree = Tree::new();
        for &value in values {
            // Duplicates in the random input are rejected, which is fine -
            // the tree ends up holding the distinct values.
            let _ = tree.insert(value);
        }
        tree
    }

    quickcheck::quickcheck! {
        fn in_order_is_strictly_ascending(values: Vec<i8>) -> bool {
            let tree = build(&values);
            let in_order = in_order(tree.root());

            in_order.windows(2).all(|pair| pair[0] < pair[1])
        }
    }

    quickcheck::quickcheck! {
        fn every_order_emits_each_node_exactly_once(values: Vec<i8>) -> bool {
            let tree = build(&values);
            let mut expected: Vec<&i8> = in_order(tree.root());
            expected.sort();

            let orders = vec![
                pre_order(tree.root()),
                post_order(tree.root()),
                level_order(tree.root()),
            ];
            orders.into_iter().all(|mut order| {
                order.sort();
                order == expected
            })
        }
    }

    quickcheck::quickcheck! {
        fn pre_order_starts_and_post_order_ends_with_root(values: Vec<i8>) -> bool {
            let tree = build(&values);
            let root = match tree.root() {
                Some(root) => root,
                None => return true,
            };

            pre_order(tree.root()).first() == Some(&root.value())
                && post_order(tree.root()).last() == Some(&root.value())
        }
    }
}
