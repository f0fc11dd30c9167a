//! Report verification: a pure integrity check over a [`LadderReport`].
//!
//! Verification does NOT re-run the search. It proves:
//!
//! 1. `graph_bytes` are canonical JSON and hash to `graph_digest`.
//! 2. `report_bytes` equal the canonical projection recomputed from the
//!    typed report fields, and hash to `digest`.
//! 3. The graph metadata agrees with the report (endpoints, oracle binding,
//!    policy digest, termination reason).
//! 4. The oracle binding matches the supplied lexicon's digest.
//! 5. A present ladder satisfies every ladder invariant, runs from `start`
//!    to `end`, and every word after the start is in the lexicon.

use std::fmt;

use ladder_kernel::proof::canon::{canonical_json_bytes, is_canonical_json};
use ladder_kernel::proof::hash::{canonical_hash, HashDomain};
use ladder_search::ladder::LadderDefect;

use crate::lexicon::Lexicon;
use crate::runner::{report_json, LadderReport};

/// First inconsistency found in a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportVerifyError {
    /// Graph bytes are not canonical JSON.
    GraphNotCanonical,
    /// Graph digest does not match the graph bytes.
    GraphDigestMismatch { declared: String, computed: String },
    /// Report bytes do not match the recomputed projection.
    ReportBytesMismatch,
    /// Report digest does not match the report bytes.
    ReportDigestMismatch { declared: String, computed: String },
    /// A field in the graph metadata disagrees with the report.
    BindingMismatch { field: &'static str },
    /// The report is bound to a different lexicon.
    LexiconMismatch,
    /// The ladder violates a ladder invariant.
    InvalidLadder(LadderDefect),
    /// The ladder does not start at `start` or end at `end`.
    EndpointMismatch,
    /// A ladder word is not in the lexicon.
    WordNotInLexicon { word: String },
    /// Canonical JSON serialization failed during recomputation.
    CanonError { detail: String },
}

impl fmt::Display for ReportVerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GraphNotCanonical => write!(f, "search graph is not canonical JSON"),
            Self::GraphDigestMismatch { declared, computed } => {
                write!(f, "graph digest mismatch: declared {declared}, computed {computed}")
            }
            Self::ReportBytesMismatch => write!(f, "report bytes do not match report fields"),
            Self::ReportDigestMismatch { declared, computed } => {
                write!(f, "report digest mismatch: declared {declared}, computed {computed}")
            }
            Self::BindingMismatch { field } => {
                write!(f, "graph metadata field {field} disagrees with report")
            }
            Self::LexiconMismatch => write!(f, "report is bound to a different lexicon"),
            Self::InvalidLadder(defect) => write!(f, "invalid ladder: {defect}"),
            Self::EndpointMismatch => write!(f, "ladder endpoints do not match the query"),
            Self::WordNotInLexicon { word } => write!(f, "ladder word {word:?} is not in the lexicon"),
            Self::CanonError { detail } => write!(f, "canonical JSON failed: {detail}"),
        }
    }
}

impl std::error::Error for ReportVerifyError {}

/// Verify the internal consistency of a report against `lexicon`.
///
/// # Errors
///
/// Returns the first [`ReportVerifyError`] encountered, in the order listed
/// in the module docs.
pub fn verify_report(report: &LadderReport, lexicon: &Lexicon) -> Result<(), ReportVerifyError> {
    // Step 1: graph bytes and digest.
    if !is_canonical_json(&report.graph_bytes) {
        return Err(ReportVerifyError::GraphNotCanonical);
    }
    let graph_digest = canonical_hash(HashDomain::SearchGraph, &report.graph_bytes);
    if graph_digest != report.graph_digest {
        return Err(ReportVerifyError::GraphDigestMismatch {
            declared: report.graph_digest.as_str().to_string(),
            computed: graph_digest.as_str().to_string(),
        });
    }

    // Step 2: report bytes and digest.
    let expected = report_json(
        &report.start,
        &report.end,
        report.ladder.as_ref(),
        &report.termination,
        &report.graph_digest,
        &report.bindings,
        &report.policy_digest,
    );
    let expected_bytes = canonical_json_bytes(&expected).map_err(|e| ReportVerifyError::CanonError {
        detail: e.to_string(),
    })?;
    if expected_bytes != report.report_bytes {
        return Err(ReportVerifyError::ReportBytesMismatch);
    }
    let digest = canonical_hash(HashDomain::QueryReport, &report.report_bytes);
    if digest != report.digest {
        return Err(ReportVerifyError::ReportDigestMismatch {
            declared: report.digest.as_str().to_string(),
            computed: digest.as_str().to_string(),
        });
    }

    // Step 3: graph metadata agrees with the report.
    let graph: serde_json::Value =
        serde_json::from_slice(&report.graph_bytes).map_err(|_| ReportVerifyError::GraphNotCanonical)?;
    let meta = &graph["metadata"];
    let checks: [(&'static str, serde_json::Value); 6] = [
        ("start", serde_json::json!(report.start.as_str())),
        ("end", serde_json::json!(report.end.as_str())),
        ("oracle_id", serde_json::json!(report.bindings.oracle_id)),
        ("oracle_digest", serde_json::json!(report.bindings.oracle_digest)),
        ("policy_digest", serde_json::json!(report.policy_digest)),
        ("termination_reason", serde_json::json!(report.termination.tag())),
    ];
    for (field, value) in checks {
        let actual = if field == "termination_reason" {
            &meta[field]["type"]
        } else {
            &meta[field]
        };
        if *actual != value {
            return Err(ReportVerifyError::BindingMismatch { field });
        }
    }

    // Step 4: lexicon binding.
    if report.bindings.oracle_digest.as_deref() != Some(lexicon.digest().as_str()) {
        return Err(ReportVerifyError::LexiconMismatch);
    }

    // Step 5: ladder invariants and membership.
    if let Some(ladder) = &report.ladder {
        ladder.verify().map_err(ReportVerifyError::InvalidLadder)?;
        if ladder.start() != Some(&report.start) || ladder.end() != Some(&report.end) {
            return Err(ReportVerifyError::EndpointMismatch);
        }
        for word in ladder.words().iter().skip(1) {
            if !lexicon.contains_word(word) {
                return Err(ReportVerifyError::WordNotInLexicon {
                    word: word.as_str().to_string(),
                });
            }
        }
    }

    Ok(())
}
