//! `Word`: the node type of the ladder graph.
//!
//! A `Word` is always case-normalized (lowercase), trimmed, and non-empty.
//! Words are built only by [`Word::parse`] and
//! [`Word::with_substitution`], both of which check these invariants. Length and positions are measured in Unicode
//! scalar values, not bytes.

use std::fmt;

/// Typed failure for word normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    /// The input was empty after trimming.
    Empty,
    /// The input contains whitespace between non-whitespace characters.
    InteriorWhitespace { raw: String },
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "word is empty"),
            Self::InteriorWhitespace { raw } => {
                write!(f, "word contains interior whitespace: {raw:?}")
            }
        }
    }
}

impl std::error::Error for WordError {}

/// An immutable, lowercase, non-empty word.
///
/// Ordering is lexicographic over the normalized text, which is what the
/// visited set and node summaries rely on for deterministic iteration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    len: usize,
}

impl Word {
    /// Normalize raw input into a `Word`: trim, then lowercase.
    ///
    /// # Errors
    ///
    /// Returns [`WordError::Empty`] if nothing remains after trimming, or
    /// [`WordError::InteriorWhitespace`] if the trimmed text contains whitespace.
    pub fn parse(raw: &str) -> Result<Self, WordError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(WordError::InteriorWhitespace {
                raw: trimmed.to_string(),
            });
        }
        let text = trimmed.to_lowercase();
        let len = text.chars().count();
        Ok(Self { text, len })
    }

    /// The word with the character at `position` replaced by `letter`.
    ///
    /// Returns `None` if `position` is out of range, or if `letter` is
    /// whitespace or not lowercase, since the result would not be a `Word`.
    #[must_use]
    pub fn with_substitution(&self, position: usize, letter: char) -> Option<Word> {
        if position >= self.len
            || letter.is_whitespace()
            || letter.to_lowercase().ne(std::iter::once(letter))
        {
            return None;
        }
        let text = self
            .text
            .chars()
            .enumerate()
            .map(|(i, c)| if i == position { letter } else { c })
            .collect();
        Some(Self {
            text,
            len: self.len,
        })
    }

    /// The normalized text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of characters (never zero).
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; provided for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The characters of the word, in order.
    #[must_use]
    pub fn chars(&self) -> Vec<char> {
        self.text.chars().collect()
    }

    /// Number of positions at which `self` and `other` differ.
    ///
    /// Returns `None` when the lengths differ (no Hamming distance exists).
    #[must_use]
    pub fn hamming_distance(&self, other: &Word) -> Option<usize> {
        if self.len != other.len {
            return None;
        }
        Some(
            self.text
                .chars()
                .zip(other.text.chars())
                .filter(|(a, b)| a != b)
                .count(),
        )
    }

    /// True if `other` is exactly one substitution away.
    #[must_use]
    pub fn is_adjacent(&self, other: &Word) -> bool {
        self.hamming_distance(other) == Some(1)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
