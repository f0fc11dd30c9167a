//! Word Validity Oracle contract.
//!
//! The search engine never enumerates a dictionary; it only asks whether a
//! candidate word is valid. Any membership source can back the oracle: an
//! in-memory set, a file-backed lexicon, or a remote service.

use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;

use ladder_kernel::word::Word;

/// Failure reported by an oracle that could not answer a membership query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleError {
    /// Human-readable cause (e.g., the underlying I/O error).
    pub detail: String,
}

impl OracleError {
    /// Wrap the cause of a failed membership query.
    #[must_use]
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for OracleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "oracle failure: {}", self.detail)
    }
}

impl std::error::Error for OracleError {}

/// Dictionary membership capability.
///
/// # Contract
///
/// - Queries receive normalized words (see [`Word::parse`]).
/// - Answers must be stable for the duration of one search; the engine
///   caches nothing but assumes a repeated query would return the same value.
/// - An `Err` aborts the search; the engine does not retry.
pub trait WordOracle {
    /// Return whether `word` is a valid dictionary word.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError`] if the answer cannot be determined.
    fn contains(&self, word: &Word) -> Result<bool, OracleError>;
}

impl<T: WordOracle + ?Sized> WordOracle for &T {
    fn contains(&self, word: &Word) -> Result<bool, OracleError> {
        (**self).contains(word)
    }
}

impl WordOracle for BTreeSet<String> {
    fn contains(&self, word: &Word) -> Result<bool, OracleError> {
        Ok(BTreeSet::contains(self, word.as_str()))
    }
}

impl<S: BuildHasher> WordOracle for HashSet<String, S> {
    fn contains(&self, word: &Word) -> Result<bool, OracleError> {
        Ok(HashSet::contains(self, word.as_str()))
    }
}
