//! Breadth-first frontier with visited-set loop detection.
//!
//! Uses a `BTreeSet<Word>` visited set (not `HashSet`) so that any
//! iteration at serialization boundaries is deterministic.

use std::collections::{BTreeSet, VecDeque};

use ladder_kernel::word::Word;

use crate::node::LadderNode;

/// First-in first-out frontier manager.
///
/// Maintains:
/// - A `VecDeque` of nodes awaiting expansion (oldest first)
/// - A `BTreeSet<Word>` of every word ever pushed
///
/// A word is marked visited when it is pushed, not when it is popped. That is
/// what guarantees each word is finalized into at most one ladder.
#[derive(Debug)]
pub struct BreadthFirstFrontier {
    queue: VecDeque<LadderNode>,
    visited: BTreeSet<Word>,
    high_water: u64,
}

impl BreadthFirstFrontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            visited: BTreeSet::new(),
            high_water: 0,
        }
    }

    /// Push a node onto the back of the frontier and mark its word visited.
    ///
    /// Returns `false` if the word was already visited (node not added).
    pub fn push(&mut self, node: LadderNode) -> bool {
        if !self.visited.insert(node.word.clone()) {
            return false;
        }
        self.queue.push_back(node);
        let size = self.queue.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
        true
    }

    /// Mark a word visited without enqueuing it.
    ///
    /// Used for the goal word, which terminates the search instead of being
    /// expanded. Returns `false` if it was already visited.
    pub fn mark_visited(&mut self, word: &Word) -> bool {
        self.visited.insert(word.clone())
    }

    /// Pop the oldest node.
    #[must_use]
    pub fn pop(&mut self) -> Option<LadderNode> {
        self.queue.pop_front()
    }

    /// Check if a word has been visited.
    #[must_use]
    pub fn is_visited(&self, word: &Word) -> bool {
        self.visited.contains(word)
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of visited words.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

impl Default for BreadthFirstFrontier {
    fn default() -> Self {
        Self::new()
    }
}
