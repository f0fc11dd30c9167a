//! Substitution alphabet for neighbor generation.
//!
//! Letters are stored sorted and de-duplicated, so iterating an `Alphabet`
//! always yields letters in ascending order. Neighbor generation depends on
//! that order for deterministic tie-breaking between equal-length ladders.

use std::fmt;

/// Typed failure for alphabet construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    /// No letters were supplied.
    Empty,
    /// A letter is not lowercase (words are lowercase, so it could never match).
    NotLowercase { letter: char },
    /// A letter is whitespace.
    Whitespace,
    /// A character is not alphabetic (a digit, punctuation, or symbol).
    NotALetter { letter: char },
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "alphabet has no letters"),
            Self::NotLowercase { letter } => {
                write!(f, "alphabet letter {letter:?} is not lowercase")
            }
            Self::Whitespace => write!(f, "alphabet contains whitespace"),
            Self::NotALetter { letter } => write!(f, "alphabet entry {letter:?} is not a letter"),
        }
    }
}

impl std::error::Error for AlphabetError {}

/// A sorted, de-duplicated, non-empty set of lowercase letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from arbitrary letters.
    ///
    /// # Errors
    ///
    /// Returns [`AlphabetError`] if the set is empty or holds whitespace, a
    /// non-alphabetic character, or a letter that changes under lowercasing.
    pub fn new(letters: impl IntoIterator<Item = char>) -> Result<Self, AlphabetError> {
        let mut letters: Vec<char> = letters.into_iter().collect();
        for &letter in &letters {
            if letter.is_whitespace() {
                return Err(AlphabetError::Whitespace);
            }
            if !letter.is_alphabetic() {
                return Err(AlphabetError::NotALetter { letter });
            }
            if letter.to_lowercase().ne(std::iter::once(letter)) {
                return Err(AlphabetError::NotLowercase { letter });
            }
        }
        letters.sort_unstable();
        letters.dedup();
        if letters.is_empty() {
            return Err(AlphabetError::Empty);
        }
        Ok(Self { letters })
    }

    /// The English lowercase alphabet `a..=z`.
    #[must_use]
    pub fn latin_lowercase() -> Self {
        Self {
            letters: ('a'..='z').collect(),
        }
    }

    /// Letters in ascending order.
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always `false`; an alphabet is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::latin_lowercase()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
