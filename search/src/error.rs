//! Typed search errors.
//!
//! `LadderError` covers pre-flight failures (no search step taken) and the
//! caller-facing form of an oracle failure or a budget cut-off. Inside
//! [`crate::search::search`], both are first recorded as a
//! [`crate::graph::TerminationReason`] so the audit trail survives; only
//! [`crate::search::SearchResult::into_outcome`] converts them into `Err`.

use crate::graph::TerminationReason;

/// Typed failure for a ladder search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LadderError {
    /// Start and end words have different lengths; no ladder can exist.
    LengthMismatch { start_len: usize, end_len: usize },
    /// The oracle could not answer for `word`; the search was aborted.
    OracleFailure { word: String, detail: String },
    /// The search policy is unusable.
    InvalidPolicy { detail: String },
    /// A policy budget stopped the search before it was exhaustive, so the
    /// absence of a ladder is not established.
    BudgetExhausted { reason: TerminationReason },
}

impl std::fmt::Display for LadderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthMismatch { start_len, end_len } => write!(
                f,
                "start and end words must have the same length (got {start_len} and {end_len})"
            ),
            Self::OracleFailure { word, detail } => {
                write!(f, "oracle failed while checking {word:?}: {detail}")
            }
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
            Self::BudgetExhausted { reason } => {
                write!(f, "search stopped by budget ({}) before it was exhaustive", reason.tag())
            }
        }
    }
}

impl std::error::Error for LadderError {}
