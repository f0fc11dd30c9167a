//! Harness runner: one ladder query in, one verifiable report out.
//!
//! The runner uses ONLY search-crate and kernel APIs: `Word::parse`,
//! `search`, `canonical_json_bytes`, `canonical_hash`. It implements no
//! search logic itself.
//!
//! # Pipeline
//!
//! ```text
//! Word::parse(start, end) → search(oracle, policy, bindings)
//!   → graph canonical JSON → graph digest
//!   → report canonical JSON (digest basis) → report digest
//! ```

use std::fmt;

use ladder_kernel::proof::canon::canonical_json_bytes;
use ladder_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use ladder_kernel::word::{Word, WordError};
use ladder_search::contract::WordOracle;
use ladder_search::error::LadderError;
use ladder_search::graph::TerminationReason;
use ladder_search::ladder::Ladder;
use ladder_search::policy::SearchPolicy;
use ladder_search::search::{search, MetadataBindings};

use crate::lexicon::{Lexicon, LEXICON_ORACLE_ID};

/// Which query endpoint a word belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::End => write!(f, "end"),
        }
    }
}

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// An input word could not be normalized.
    InvalidWord {
        endpoint: Endpoint,
        error: WordError,
    },
    /// Pre-flight search failure (length mismatch, invalid policy).
    Search(LadderError),
    /// Canonical JSON serialization failed.
    CanonFailed { detail: String },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord { endpoint, error } => write!(f, "invalid {endpoint} word: {error}"),
            Self::Search(err) => write!(f, "{err}"),
            Self::CanonFailed { detail } => write!(f, "canonical JSON failed: {detail}"),
        }
    }
}

impl std::error::Error for RunError {}

impl From<LadderError> for RunError {
    fn from(err: LadderError) -> Self {
        Self::Search(err)
    }
}

/// The packaged result of one query.
///
/// `report_bytes` is the digest basis: a canonical JSON projection binding
/// the endpoints, the ladder, the termination reason and every digest.
#[derive(Debug, Clone)]
pub struct LadderReport {
    pub start: Word,
    pub end: Word,
    /// The shortest ladder, if one was found.
    pub ladder: Option<Ladder>,
    /// Why the search stopped.
    pub termination: TerminationReason,
    /// Canonical JSON of the search graph.
    pub graph_bytes: Vec<u8>,
    /// `canonical_hash(SearchGraph, graph_bytes)`.
    pub graph_digest: ContentHash,
    /// Oracle binding recorded in the graph metadata.
    pub bindings: MetadataBindings,
    /// Digest of the search policy used.
    pub policy_digest: String,
    /// Canonical JSON digest basis.
    pub report_bytes: Vec<u8>,
    /// `canonical_hash(QueryReport, report_bytes)`.
    pub digest: ContentHash,
}

impl LadderReport {
    /// True if a ladder was found.
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.ladder.is_some()
    }
}

/// Run one query against a lexicon.
///
/// Raw words are normalized with [`Word::parse`]; the lexicon digest is bound
/// into the search graph metadata.
///
/// # Errors
///
/// Returns [`RunError`] for unparsable words, pre-flight search failures, or
/// serialization failures. Oracle-level outcomes are reported in
/// [`LadderReport::termination`], not as errors.
pub fn run_query(
    lexicon: &Lexicon,
    start: &str,
    end: &str,
    policy: &SearchPolicy,
) -> Result<LadderReport, RunError> {
    let bindings = lexicon_bindings(lexicon);
    run_with_oracle(lexicon, &bindings, start, end, policy)
}

/// Metadata bindings for a lexicon-backed search.
#[must_use]
pub fn lexicon_bindings(lexicon: &Lexicon) -> MetadataBindings {
    MetadataBindings {
        oracle_id: LEXICON_ORACLE_ID.into(),
        oracle_digest: Some(lexicon.digest().as_str().to_string()),
    }
}

/// Run one query against any oracle.
///
/// # Errors
///
/// See [`run_query`].
pub fn run_with_oracle(
    oracle: &dyn WordOracle,
    bindings: &MetadataBindings,
    start: &str,
    end: &str,
    policy: &SearchPolicy,
) -> Result<LadderReport, RunError> {
    let start = Word::parse(start).map_err(|error| RunError::InvalidWord {
        endpoint: Endpoint::Start,
        error,
    })?;
    let end = Word::parse(end).map_err(|error| RunError::InvalidWord {
        endpoint: Endpoint::End,
        error,
    })?;

    let result = search(&start, &end, oracle, policy, bindings)?;

    let graph_bytes = result
        .graph
        .to_canonical_json_bytes()
        .map_err(|e| RunError::CanonFailed {
            detail: e.to_string(),
        })?;
    let graph_digest = canonical_hash(HashDomain::SearchGraph, &graph_bytes);
    let metadata = &result.graph.metadata;

    tracing::info!(
        start = %start,
        end = %end,
        termination = metadata.termination_reason.tag(),
        steps = ?result.ladder.as_ref().map(Ladder::steps),
        expansions = metadata.total_expansions,
        oracle_queries = metadata.total_oracle_queries,
        "ladder query finished"
    );

    let termination = metadata.termination_reason.clone();
    let policy_digest = metadata.policy_digest.clone();
    let report_value = report_json(
        &start,
        &end,
        result.ladder.as_ref(),
        &termination,
        &graph_digest,
        bindings,
        &policy_digest,
    );
    let report_bytes = canonical_json_bytes(&report_value).map_err(|e| RunError::CanonFailed {
        detail: e.to_string(),
    })?;
    let digest = canonical_hash(HashDomain::QueryReport, &report_bytes);

    Ok(LadderReport {
        start,
        end,
        ladder: result.ladder,
        termination,
        graph_bytes,
        graph_digest,
        bindings: bindings.clone(),
        policy_digest,
        report_bytes,
        digest,
    })
}

/// Canonical JSON projection of a report (the digest basis).
pub(crate) fn report_json(
    start: &Word,
    end: &Word,
    ladder: Option<&Ladder>,
    termination: &TerminationReason,
    graph_digest: &ContentHash,
    bindings: &MetadataBindings,
    policy_digest: &str,
) -> serde_json::Value {
    let ladder_json = ladder.map(|l| {
        l.words()
            .iter()
            .map(|w| w.as_str().to_string())
            .collect::<Vec<_>>()
    });
    serde_json::json!({
        "end": end.as_str(),
        "graph_digest": graph_digest.as_str(),
        "ladder": ladder_json,
        "oracle_digest": bindings.oracle_digest,
        "oracle_id": bindings.oracle_id,
        "policy_digest": policy_digest,
        "start": start.as_str(),
        "steps": ladder.map(|l| l.steps() as u64),
        "termination": termination.tag(),
    })
}
