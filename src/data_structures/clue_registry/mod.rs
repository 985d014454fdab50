//! Clue Registry Implementation
//!
//! This module provides the ordered set of clues the player has collected,
//! backed by an unbalanced binary search tree keyed by clue text.
//! Keys compare byte-wise (the ordering of `str`), which makes the ordering
//! strict and case-sensitive.

mod node;

use std::cmp::Ordering;

use node::ClueNode;

/// Ordered set of distinct clue texts.
///
/// Key features:
/// * Insert-only: clues are never removed once collected
/// * Duplicate inserts leave the tree untouched
/// * Lazy, restartable in-order iteration in ascending order
#[derive(Debug, Default)]
pub struct ClueRegistry {
    /// The root node of the tree
    root: Option<Box<ClueNode>>,

    /// Number of clues stored
    len: usize,
}

impl ClueRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of clues in the registry.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether no clue has been collected yet.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Checks if a clue is already in the registry.
    ///
    /// # Arguments
    ///
    /// * `text` - The clue text to search for.
    pub fn contains(&self, text: &str) -> bool {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match text.cmp(node.text.as_str()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Inserts a clue as a new leaf unless an equal clue is already present.
    ///
    /// # Arguments
    ///
    /// * `text` - The clue text to insert.
    ///
    /// # Returns
    ///
    /// `true` if the clue was inserted, `false` if it was already present.
    pub fn insert_if_absent<T>(&mut self, text: T) -> bool
    where
        T: AsRef<str> + Into<String>,
    {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match text.as_ref().cmp(node.text.as_str()) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }

        *slot = Some(Box::new(ClueNode::new(text.into())));
        self.len += 1;
        true
    }

    /// Returns the number of levels in the tree (0 for an empty registry).
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending: Vec<(&ClueNode, usize)> =
            self.root.as_deref().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            pending.extend(node.left.as_deref().map(|left| (left, depth + 1)));
            pending.extend(node.right.as_deref().map(|right| (right, depth + 1)));
        }
        height
    }

    /// Returns an in-order iterator over the clues, in ascending order.
    ///
    /// The iterator is lazy and borrows the registry; calling `iter` again
    /// starts a fresh traversal from the smallest clue.
    pub fn iter(&self) -> InOrder<'_> {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }
}

impl Drop for ClueRegistry {
    // Unlinks nodes one at a time so a degenerate tree is not dropped recursively
    fn drop(&mut self) {
        let mut pending: Vec<Box<ClueNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<'a> IntoIterator for &'a ClueRegistry {
    type Item = &'a str;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Extend<T> for ClueRegistry
where
    T: AsRef<str> + Into<String>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for text in iter {
            self.insert_if_absent(text);
        }
    }
}

impl<T> FromIterator<T> for ClueRegistry
where
    T: AsRef<str> + Into<String>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

/// In-order iterator over a [`ClueRegistry`].
///
/// Holds the path of nodes whose left subtree has been visited but which
/// have not been yielded yet.
#[derive(Debug)]
pub struct InOrder<'a> {
    stack: Vec<&'a ClueNode>,
}

impl<'a> InOrder<'a> {
    fn push_left_spine(&mut self, mut node: Option<&'a ClueNode>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(node.text.as_str())
    }
}
