//! `Ladder`: the result of a successful search.

use std::collections::BTreeSet;
use std::fmt;

use ladder_kernel::word::Word;

/// Why a word sequence is not a valid ladder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LadderDefect {
    /// The sequence has no words.
    Empty,
    /// Words at `index` and `index + 1` have different lengths.
    LengthChanged { index: usize },
    /// Words at `index` and `index + 1` are not exactly one substitution apart.
    NotAdjacent { index: usize },
    /// The word at `index` already appeared earlier.
    RepeatedWord { index: usize, word: String },
}

impl fmt::Display for LadderDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "ladder is empty"),
            Self::LengthChanged { index } => {
                write!(f, "length changes between steps {index} and {}", index + 1)
            }
            Self::NotAdjacent { index } => write!(
                f,
                "steps {index} and {} are not one substitution apart",
                index + 1
            ),
            Self::RepeatedWord { index, word } => {
                write!(f, "word {word:?} repeats at step {index}")
            }
        }
    }
}

impl std::error::Error for LadderDefect {}

/// An ordered, acyclic sequence of words where neighbors differ in one position.
///
/// Ladders built by the search engine are valid by construction; ladders
/// built with [`Ladder::from_words`] are checked with [`Ladder::verify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ladder {
    words: Vec<Word>,
}

impl Ladder {
    /// A zero-step ladder (`start == end`).
    #[must_use]
    pub fn singleton(word: Word) -> Self {
        Self { words: vec![word] }
    }

    /// Build a ladder from an arbitrary word sequence, verifying it.
    ///
    /// # Errors
    ///
    /// Returns the first [`LadderDefect`] found.
    pub fn from_words(words: Vec<Word>) -> Result<Self, LadderDefect> {
        let ladder = Self { words };
        ladder.verify()?;
        Ok(ladder)
    }

    pub(crate) fn from_path_unchecked(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Check every ladder invariant.
    ///
    /// # Errors
    ///
    /// Returns the first [`LadderDefect`] in step order.
    pub fn verify(&self) -> Result<(), LadderDefect> {
        if self.words.is_empty() {
            return Err(LadderDefect::Empty);
        }
        let mut seen: BTreeSet<&Word> = BTreeSet::new();
        for (index, word) in self.words.iter().enumerate() {
            if !seen.insert(word) {
                return Err(LadderDefect::RepeatedWord {
                    index,
                    word: word.as_str().to_string(),
                });
            }
        }
        for (index, pair) in self.words.windows(2).enumerate() {
            match pair[0].hamming_distance(&pair[1]) {
                None => return Err(LadderDefect::LengthChanged { index }),
                Some(1) => {}
                Some(_) => return Err(LadderDefect::NotAdjacent { index }),
            }
        }
        Ok(())
    }

    /// Words from start to end inclusive.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words (at least 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false` for ladders produced by the engine.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of substitutions (`len() - 1`).
    #[must_use]
    pub fn steps(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    #[must_use]
    pub fn start(&self) -> Option<&Word> {
        self.words.first()
    }

    #[must_use]
    pub fn end(&self) -> Option<&Word> {
        self.words.last()
    }
}

impl fmt::Display for Ladder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}
