//! Search policy types.

use ladder_kernel::alphabet::Alphabet;
use ladder_kernel::proof::canon::{canonical_json_bytes, CanonError};
use ladder_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::error::LadderError;

/// Search budgets and substitution alphabet.
///
/// The default policy is unbounded with the `a..=z` alphabet, under which the
/// engine is an exhaustive breadth-first search: it returns a shortest
/// ladder whenever one exists. Finite budgets are an opt-in caller concern;
/// when they bite, the search reports a budget termination rather than
/// claiming no ladder exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Letters tried at each position.
    pub alphabet: Alphabet,
    /// Hard cap on node expansions (frontier pops).
    pub max_expansions: u64,
    /// Maximum ladder steps; nodes at this depth are not expanded.
    pub max_depth: u32,
}

impl SearchPolicy {
    /// Validate the policy before search.
    ///
    /// # Errors
    ///
    /// Returns [`LadderError::InvalidPolicy`] if `max_expansions` is zero, which
    /// would make every non-trivial search fail without looking at a word.
    pub fn validate(&self) -> Result<(), LadderError> {
        if self.max_expansions == 0 {
            return Err(LadderError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Canonical JSON projection, bound into search graph metadata.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "alphabet": self.alphabet.to_string(),
            "max_depth": self.max_depth,
            "max_expansions": self.max_expansions,
        })
    }

    /// `canonical_hash(SearchPolicy, canonical_json(self))`.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonical serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = canonical_json_bytes(&self.to_json_value())?;
        Ok(canonical_hash(HashDomain::SearchPolicy, &bytes))
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::latin_lowercase(),
            max_expansions: u64::MAX,
            max_depth: u32::MAX,
        }
    }
}
