//! An unbalanced BST storing a set of ordered values. Nodes are placed by
//! comparison at insertion time and never moved afterwards, so the tree's
//! shape is determined entirely by the order values arrive in.
//!
//! # Examples
//!
//! ```
//! use bst_traverse::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//!
//! tree.insert(2)?;
//! tree.insert(1)?;
//! tree.insert(3)?;
//! assert_eq!(tree.len(), 3);
//!
//! // Inserting an existing value fails and returns the value.
//! assert!(tree.insert(3).is_err());
//! assert_eq!(tree.len(), 3);
//! # Ok::<(), bst_traverse::error::DuplicateValue<i32>>(())
//! ```

use std::cmp::Ordering;

use crate::error::DuplicateValue;

/// A `Node` holds one inserted value and owns up to two children. Children
/// are only reachable by shared reference from outside this module, so the
/// BST invariant cannot be broken by callers.
#[derive(Debug, Clone)]
pub struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// This node's left child, holding the root of the subtree of lesser
    /// values.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// This node's right child, holding the root of the subtree of greater
    /// values.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    fn insert(&mut self, value: T) -> Result<(), DuplicateValue<T>>
    where
        T: Ord,
    {
        match value.cmp(&self.value) {
            Ordering::Less => match self.left.as_deref_mut() {
                Some(left) => left.insert(value),
                None => {
                    self.left = Some(Box::new(Node::new(value)));
                    Ok(())
                }
            },
            Ordering::Equal => Err(DuplicateValue(value)),
            Ordering::Greater => match self.right.as_deref_mut() {
                Some(right) => right.insert(value),
                None => {
                    self.right = Some(Box::new(Node::new(value)));
                    Ok(())
                }
            },
        }
    }

    fn len(&self) -> usize {
        let left_len = self.left().map_or(0, Node::len);
        let right_len = self.right().map_or(0, Node::len);
        1 + left_len + right_len
    }

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    fn height(&self) -> usize {
        let left_height = self.left().map_or(0, Node::height);
        let right_height = self.right().map_or(0, Node::height);
        left_height.max(right_height) + 1
    }
}

/// An unbalanced Binary Search Tree. Values can be inserted and the
/// resulting structure walked via the functions in
/// [`traverse`][crate::traverse].
#[derive(Debug, Clone)]
pub struct Tree<T> {
    root: Option<Box<Node<T>>>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Generates a new `Tree` seeded with a single root value.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_traverse::tree::Tree;
    ///
    /// let tree = Tree::with_root(5);
    /// assert_eq!(tree.root().map(|n| n.value()), Some(&5));
    /// ```
    pub fn with_root(value: T) -> Self {
        Self {
            root: Some(Box::new(Node::new(value))),
        }
    }

    /// The root node of this tree, if any. This is the reference the
    /// traversal functions in [`traverse`][crate::traverse] take.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Inserts the given value into the tree, keeping the BST invariant.
    ///
    /// Inserting into an empty tree establishes the root. Note that this is
    /// decided by whether a root node exists, never by inspecting the root's
    /// value - a seeded root is not replaced by later inserts.
    ///
    /// On success exactly one new leaf node exists and nothing else has
    /// moved. If the value is already present anywhere in the tree, the
    /// insert fails with [`DuplicateValue`] and the tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_traverse::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.insert(1), Ok(()));
    /// assert_eq!(tree.insert(2), Ok(()));
    /// assert!(tree.insert(1).is_err());
    /// ```
    pub fn insert(&mut self, value: T) -> Result<(), DuplicateValue<T>>
    where
        T: Ord,
    {
        match self.root.as_deref_mut() {
            Some(root) => root.insert(value),
            None => {
                self.root = Some(Box::new(Node::new(value)));
                Ok(())
            }
        }
    }

    /// Whether this tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes in this tree.
    pub fn len(&self) -> usize {
        self.root().map_or(0, Node::len)
    }

    /// The length of the longest path from the root to a leaf, counted in
    /// nodes. An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }
}
