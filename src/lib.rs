//! This crate exposes an unbalanced Binary Search Tree (BST) along with the
//! classic traversal algorithms over it, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure storing ordered values. BSTs are
//! typically defined recursively using the notion of a `Node`. A `Node` holds
//! a value and sometimes has child `Node`s. The most important invariants of
//! a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The tree here is deliberately unbalanced - nodes land wherever the
//! insertion order puts them and are never rotated. That makes the shape of
//! the tree (and therefore every traversal output) a pure function of the
//! insertion sequence. Duplicate values are rejected rather than stored or
//! overwritten.
//!
//! ## Traversals
//!
//! Four traversal orders are provided in [`traverse`], each producing the
//! tree's values as a flat sequence:
//!
//! * [`pre_order`][traverse::pre_order] - a node before either subtree.
//! * [`in_order`][traverse::in_order] - left subtree, node, right subtree.
//!   Over a valid BST this yields the values in ascending sorted order.
//! * [`post_order`][traverse::post_order] - both subtrees before the node.
//! * [`level_order`][traverse::level_order] - breadth first, shallowest
//!   level first, left before right within a level.
//!
//! ```
//! use bst_traverse::traverse;
//! use bst_traverse::tree::Tree;
//!
//! let mut tree = Tree::with_root(2);
//! tree.insert(1)?;
//! tree.insert(3)?;
//!
//! assert_eq!(traverse::in_order(tree.root()), [&1, &2, &3]);
//! assert_eq!(traverse::level_order(tree.root()), [&2, &1, &3]);
//! # Ok::<(), bst_traverse::error::DuplicateValue<i32>>(())
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod traverse;
pub mod tree;
