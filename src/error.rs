//! Error types for tree operations.

use thiserror::Error;

/// Error returned by [`Tree::insert`][crate::tree::Tree::insert] when the
/// value being inserted is already present somewhere in the tree.
///
/// The rejected value is handed back to the caller, who may want it since
/// insertion takes values by move.
///
/// # Examples
///
/// ```
/// use bst_traverse::error::DuplicateValue;
/// use bst_traverse::tree::Tree;
///
/// let mut tree = Tree::with_root(7);
/// assert_eq!(tree.insert(7), Err(DuplicateValue(7)));
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("value already exists in the tree")]
pub struct DuplicateValue<T>(pub T);
