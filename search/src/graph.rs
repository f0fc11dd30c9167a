//! `LadderGraph`: expansion-event audit log of one search.
//!
//! The normative record is the ordered list of `ExpandEvent` entries. Node
//! summaries are a derived index for path reconstruction and inspection.
//! Rejected and duplicate candidates are counted, not listed: a full
//! dictionary search tries tens of candidates per word and the counts are
//! what an auditor needs to reproduce the totals.

use ladder_kernel::proof::canon::{canonical_json_bytes, CanonError};
use ladder_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

/// The complete search audit trail.
#[derive(Debug, Clone)]
pub struct LadderGraph {
    /// Ordered expansion events (one per frontier pop).
    pub expansions: Vec<ExpandEvent>,
    /// Derived node index sorted by `node_id` ascending.
    pub node_summaries: Vec<NodeSummary>,
    /// Aggregate metadata with snapshot bindings.
    pub metadata: GraphMetadata,
}

/// A single frontier-pop + candidate-expansion event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandEvent {
    /// Total order of frontier pops.
    pub expansion_order: u64,
    /// The node being expanded.
    pub node_id: u64,
    /// The expanded node's word.
    pub word: String,
    /// The expanded node's depth.
    pub depth: u32,
    /// Candidates produced by neighbor generation and examined.
    pub candidates_generated: u64,
    /// Candidates skipped because their word was already visited.
    pub duplicates_suppressed: u64,
    /// Candidates the oracle rejected.
    pub oracle_rejections: u64,
    /// Candidates that became nodes, in generation order.
    pub accepted: Vec<AcceptedCandidate>,
    /// True if the expansion created no node.
    pub dead_end: bool,
    /// True if the node sat at `max_depth` and was not expanded.
    pub depth_limited: bool,
}

/// A candidate the oracle accepted and the engine turned into a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedCandidate {
    pub position: u64,
    pub from: char,
    pub to: char,
    pub word: String,
    pub to_node: u64,
    pub is_goal: bool,
}

/// Derived node summary for path reconstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSummary {
    pub node_id: u64,
    pub parent_id: Option<u64>,
    pub word: String,
    pub depth: u32,
    pub is_goal: bool,
    pub expansion_order: Option<u64>,
}

/// Aggregate metadata with snapshot bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphMetadata {
    // Snapshot bindings
    pub oracle_id: String,
    pub oracle_digest: Option<String>,
    pub policy_digest: String,
    pub start: String,
    pub end: String,
    pub word_length: u64,

    // Counters
    pub total_expansions: u64,
    pub total_candidates_generated: u64,
    pub total_duplicates_suppressed: u64,
    pub total_oracle_queries: u64,
    pub total_oracle_rejections: u64,
    pub total_dead_ends: u64,
    pub frontier_high_water: u64,
    pub visited_count: u64,
    pub termination_reason: TerminationReason,
}

/// Why the search terminated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The end word was reached by node `node_id`.
    GoalReached { node_id: u64 },
    /// Frontier emptied without reaching the end word (no ladder exists).
    FrontierExhausted,
    /// `max_expansions` budget was hit.
    ExpansionBudgetExceeded,
    /// Frontier emptied, but only because nodes at `max_depth` were not expanded.
    DepthBudgetExceeded,
    /// The oracle returned an error for `word`.
    OracleFailure { word: String, detail: String },
    /// The oracle panicked while checking `word`.
    OraclePanic { word: String },
}

impl TerminationReason {
    /// Stable snake-case tag used in canonical JSON and fixture output.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::GoalReached { .. } => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
            Self::DepthBudgetExceeded => "depth_budget_exceeded",
            Self::OracleFailure { .. } => "oracle_failure",
            Self::OraclePanic { .. } => "oracle_panic",
        }
    }
}

// ---------------------------------------------------------------------------
// Canonical JSON serialization
// ---------------------------------------------------------------------------

impl LadderGraph {
    /// Serialize the graph to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// `canonical_hash(SearchGraph, canonical_json(self))`.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SearchGraph, &bytes))
    }

    #[must_use]
    fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "expansions": self.expansions.iter().map(expand_event_to_json).collect::<Vec<_>>(),
            "metadata": metadata_to_json(&self.metadata),
            "node_summaries": self.node_summaries.iter().map(node_summary_to_json).collect::<Vec<_>>(),
        })
    }
}

fn expand_event_to_json(e: &ExpandEvent) -> serde_json::Value {
    serde_json::json!({
        "accepted": e.accepted.iter().map(accepted_to_json).collect::<Vec<_>>(),
        "candidates_generated": e.candidates_generated,
        "dead_end": e.dead_end,
        "depth": e.depth,
        "depth_limited": e.depth_limited,
        "duplicates_suppressed": e.duplicates_suppressed,
        "expansion_order": e.expansion_order,
        "node_id": e.node_id,
        "oracle_rejections": e.oracle_rejections,
        "word": e.word,
    })
}

fn accepted_to_json(a: &AcceptedCandidate) -> serde_json::Value {
    serde_json::json!({
        "from": a.from.to_string(),
        "is_goal": a.is_goal,
        "position": a.position,
        "to": a.to.to_string(),
        "to_node": a.to_node,
        "word": a.word,
    })
}

fn node_summary_to_json(n: &NodeSummary) -> serde_json::Value {
    serde_json::json!({
        "depth": n.depth,
        "expansion_order": n.expansion_order,
        "is_goal": n.is_goal,
        "node_id": n.node_id,
        "parent_id": n.parent_id,
        "word": n.word,
    })
}

fn metadata_to_json(m: &GraphMetadata) -> serde_json::Value {
    serde_json::json!({
        "end": m.end,
        "frontier_high_water": m.frontier_high_water,
        "oracle_digest": m.oracle_digest,
        "oracle_id": m.oracle_id,
        "policy_digest": m.policy_digest,
        "start": m.start,
        "termination_reason": termination_reason_to_json(&m.termination_reason),
        "total_candidates_generated": m.total_candidates_generated,
        "total_dead_ends": m.total_dead_ends,
        "total_duplicates_suppressed": m.total_duplicates_suppressed,
        "total_expansions": m.total_expansions,
        "total_oracle_queries": m.total_oracle_queries,
        "total_oracle_rejections": m.total_oracle_rejections,
        "visited_count": m.visited_count,
        "word_length": m.word_length,
    })
}

fn termination_reason_to_json(r: &TerminationReason) -> serde_json::Value {
    match r {
        TerminationReason::GoalReached { node_id } => {
            serde_json::json!({"node_id": node_id, "type": r.tag()})
        }
        TerminationReason::OracleFailure { word, detail } => {
            serde_json::json!({"detail": detail, "type": r.tag(), "word": word})
        }
        TerminationReason::OraclePanic { word } => {
            serde_json::json!({"type": r.tag(), "word": word})
        }
        TerminationReason::FrontierExhausted
        | TerminationReason::ExpansionBudgetExceeded
        | TerminationReason::DepthBudgetExceeded => serde_json::json!({"type": r.tag()}),
    }
}
