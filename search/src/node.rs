//! Search node and substitution types.

use ladder_kernel::word::Word;

/// A single-letter substitution that turns one word into an adjacent word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Substitution {
    /// Zero-based character position.
    pub position: usize,
    /// Letter previously at `position`.
    pub from: char,
    /// Letter now at `position`.
    pub to: char,
}

/// An immutable node in the breadth-first search tree.
///
/// Nodes form a tree through `parent_id`; the ladder ending at a node is
/// recovered with [`crate::search::reconstruct_path`]. Node ids are assigned
/// in creation order starting at 0 (the start word), so a node's id is also
/// its index in [`crate::search::SearchResult::nodes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LadderNode {
    /// Monotonic node identifier (creation order).
    pub node_id: u64,
    /// Parent node ID (`None` for the start word).
    pub parent_id: Option<u64>,
    /// The word reached by this node.
    pub word: Word,
    /// Ladder steps from the start word (start = 0).
    pub depth: u32,
    /// The substitution applied to the parent's word (`None` for the start word).
    pub substitution: Option<Substitution>,
}

impl LadderNode {
    /// The root node for `start`.
    #[must_use]
    pub fn root(start: Word) -> Self {
        Self {
            node_id: 0,
            parent_id: None,
            word: start,
            depth: 0,
            substitution: None,
        }
    }
}
