//! Node implementation for the clue registry.
//!
//! Each node owns one clue text and its two subtrees.

/// A node in the clue registry's binary search tree.
///
/// Every text in `left` sorts before `text`, every text in `right` after it.
#[derive(Debug)]
pub struct ClueNode {
    /// The clue text, used as the ordering key
    pub text: String,

    /// Subtree of clues that sort before this one
    pub left: Option<Box<ClueNode>>,

    /// Subtree of clues that sort after this one
    pub right: Option<Box<ClueNode>>,
}

impl ClueNode {
    /// Creates a new leaf node.
    pub fn new(text: String) -> Self {
        Self {
            text,
            left: None,
            right: None,
        }
    }
}
