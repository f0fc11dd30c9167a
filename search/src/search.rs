//! Search entry points and the breadth-first expansion loop.

use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};

use ladder_kernel::word::Word;

use crate::contract::WordOracle;
use crate::error::LadderError;
use crate::frontier::BreadthFirstFrontier;
use crate::graph::{
    AcceptedCandidate, ExpandEvent, GraphMetadata, LadderGraph, NodeSummary, TerminationReason,
};
use crate::ladder::Ladder;
use crate::neighbor::Neighbors;
use crate::node::LadderNode;
use crate::policy::SearchPolicy;

/// Result of a search execution.
///
/// Always contains a complete `LadderGraph` audit trail regardless of how the
/// search terminated. Check [`SearchResult::is_goal_reached`] or inspect
/// `graph.metadata.termination_reason` to determine the outcome.
#[derive(Debug)]
pub struct SearchResult {
    /// The shortest ladder (if the end word was reached).
    pub ladder: Option<Ladder>,
    /// The complete search audit trail.
    pub graph: LadderGraph,
    /// All nodes created during search, indexed by `node_id`.
    pub nodes: Vec<LadderNode>,
}

impl SearchResult {
    /// Returns `true` if the search terminated because the end word was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(
            self.graph.metadata.termination_reason,
            TerminationReason::GoalReached { .. }
        )
    }

    /// Collapse into the caller-facing outcome of [`find_ladder`].
    ///
    /// `Ok(None)` means the frontier was exhausted: no ladder exists.
    ///
    /// # Errors
    ///
    /// - [`LadderError::OracleFailure`] if the oracle failed or panicked.
    /// - [`LadderError::BudgetExhausted`] if a budget stopped the search first.
    pub fn into_outcome(self) -> Result<Option<Ladder>, LadderError> {
        match self.graph.metadata.termination_reason {
            TerminationReason::GoalReached { .. } => Ok(self.ladder),
            TerminationReason::OracleFailure { word, detail } => {
                Err(LadderError::OracleFailure { word, detail })
            }
            TerminationReason::OraclePanic { word } => Err(LadderError::OracleFailure {
                word,
                detail: "oracle panicked".into(),
            }),
            TerminationReason::FrontierExhausted => Ok(None),
            reason @ (TerminationReason::ExpansionBudgetExceeded
            | TerminationReason::DepthBudgetExceeded) => {
                Err(LadderError::BudgetExhausted { reason })
            }
        }
    }
}

/// Snapshot bindings for `GraphMetadata`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataBindings {
    /// Names the oracle implementation (e.g., `"lexicon"`).
    pub oracle_id: String,
    /// Content digest of the oracle's data, when it has one.
    pub oracle_digest: Option<String>,
}

impl Default for MetadataBindings {
    fn default() -> Self {
        Self {
            oracle_id: "unbound".into(),
            oracle_digest: None,
        }
    }
}

/// Find the shortest ladder from `start` to `end`.
///
/// Runs [`search`] with the default (unbounded) policy and drops the audit
/// trail. `Ok(None)` means no ladder exists under this oracle.
///
/// # Errors
///
/// - [`LadderError::LengthMismatch`] if the words differ in length.
/// - [`LadderError::OracleFailure`] if the oracle cannot answer.
pub fn find_ladder(
    start: &Word,
    end: &Word,
    oracle: &dyn WordOracle,
) -> Result<Option<Ladder>, LadderError> {
    search(
        start,
        end,
        oracle,
        &SearchPolicy::default(),
        &MetadataBindings::default(),
    )?
    .into_outcome()
}

#[derive(Debug, Default)]
struct Counters {
    candidates_generated: u64,
    duplicates_suppressed: u64,
    oracle_queries: u64,
    oracle_rejections: u64,
    dead_ends: u64,
}

/// Run breadth-first search from `start` towards `end`.
///
/// Candidates of each popped word are generated position-ascending then
/// letter-ascending; each is skipped if visited, skipped if the oracle
/// rejects it, and otherwise marked visited and turned into a node. Reaching
/// `end` stops the search immediately. If `start == end` the oracle is never
/// consulted.
///
/// All runtime terminations (including oracle failures and caught oracle
/// panics) return `Ok(SearchResult)` with the audit trail preserved.
///
/// # Errors
///
/// Returns [`LadderError::LengthMismatch`] or [`LadderError::InvalidPolicy`]
/// for pre-flight failures. No `LadderGraph` is produced in these cases
/// because no search step was taken.
#[allow(clippy::too_many_lines)]
pub fn search(
    start: &Word,
    end: &Word,
    oracle: &dyn WordOracle,
    policy: &SearchPolicy,
    bindings: &MetadataBindings,
) -> Result<SearchResult, LadderError> {
    if start.len() != end.len() {
        return Err(LadderError::LengthMismatch {
            start_len: start.len(),
            end_len: end.len(),
        });
    }
    policy.validate()?;
    let policy_digest = policy
        .digest()
        .map_err(|e| LadderError::InvalidPolicy {
            detail: e.to_string(),
        })?
        .as_str()
        .to_string();

    let mut frontier = BreadthFirstFrontier::new();
    let mut expansions: Vec<ExpandEvent> = Vec::new();
    let mut all_nodes: Vec<LadderNode> = Vec::new();
    let mut counters = Counters::default();

    let root = LadderNode::root(start.clone());
    all_nodes.push(root.clone());

    let termination_reason = if start == end {
        frontier.mark_visited(start);
        TerminationReason::GoalReached { node_id: 0 }
    } else {
        frontier.push(root);
        let mut depth_limited_seen = false;

        // Main search loop
        loop {
            let Some(current) = frontier.pop() else {
                break if depth_limited_seen {
                    TerminationReason::DepthBudgetExceeded
                } else {
                    TerminationReason::FrontierExhausted
                };
            };

            let expansion_order = expansions.len() as u64;
            if expansion_order >= policy.max_expansions {
                break TerminationReason::ExpansionBudgetExceeded;
            }

            let mut event = ExpandEvent {
                expansion_order,
                node_id: current.node_id,
                word: current.word.as_str().to_string(),
                depth: current.depth,
                candidates_generated: 0,
                duplicates_suppressed: 0,
                oracle_rejections: 0,
                accepted: Vec::new(),
                dead_end: false,
                depth_limited: false,
            };

            if current.depth >= policy.max_depth {
                event.depth_limited = true;
                depth_limited_seen = true;
                expansions.push(event);
                continue;
            }

            let mut abort: Option<TerminationReason> = None;
            let mut goal_node_id: Option<u64> = None;

            for candidate in Neighbors::new(&current.word, &policy.alphabet) {
                event.candidates_generated += 1;

                // First-reached-wins: a visited word already has a ladder at
                // this depth or shallower.
                if frontier.is_visited(&candidate.word) {
                    event.duplicates_suppressed += 1;
                    continue;
                }

                counters.oracle_queries += 1;
                let verdict = catch_unwind(AssertUnwindSafe(|| oracle.contains(&candidate.word)));
                let is_valid = match verdict {
                    Ok(Ok(is_valid)) => is_valid,
                    Ok(Err(err)) => {
                        abort = Some(TerminationReason::OracleFailure {
                            word: candidate.word.as_str().to_string(),
                            detail: err.detail,
                        });
                        break;
                    }
                    Err(_) => {
                        abort = Some(TerminationReason::OraclePanic {
                            word: candidate.word.as_str().to_string(),
                        });
                        break;
                    }
                };
                if !is_valid {
                    event.oracle_rejections += 1;
                    continue;
                }

                let child = LadderNode {
                    node_id: all_nodes.len() as u64,
                    parent_id: Some(current.node_id),
                    word: candidate.word,
                    depth: current.depth.saturating_add(1),
                    substitution: Some(candidate.substitution),
                };
                let is_goal = child.word == *end;
                event.accepted.push(AcceptedCandidate {
                    position: candidate.substitution.position as u64,
                    from: candidate.substitution.from,
                    to: candidate.substitution.to,
                    word: child.word.as_str().to_string(),
                    to_node: child.node_id,
                    is_goal,
                });
                all_nodes.push(child.clone());

                if is_goal {
                    frontier.mark_visited(&child.word);
                    goal_node_id = Some(child.node_id);
                    break;
                }
                frontier.push(child);
            }

            event.dead_end = event.accepted.is_empty() && abort.is_none();
            if event.dead_end {
                counters.dead_ends += 1;
            }
            counters.candidates_generated += event.candidates_generated;
            counters.duplicates_suppressed += event.duplicates_suppressed;
            counters.oracle_rejections += event.oracle_rejections;
            expansions.push(event);

            if let Some(reason) = abort {
                break reason;
            }
            if let Some(node_id) = goal_node_id {
                break TerminationReason::GoalReached { node_id };
            }
        }
    };

    let ladder = match &termination_reason {
        TerminationReason::GoalReached { node_id: 0 } => Some(Ladder::singleton(start.clone())),
        TerminationReason::GoalReached { node_id } => {
            let words = reconstruct_path(&all_nodes, *node_id)
                .into_iter()
                .filter_map(|id| node_at(&all_nodes, id).map(|n| n.word.clone()))
                .collect();
            Some(Ladder::from_path_unchecked(words))
        }
        _ => None,
    };

    let metadata = GraphMetadata {
        oracle_id: bindings.oracle_id.clone(),
        oracle_digest: bindings.oracle_digest.clone(),
        policy_digest,
        start: start.as_str().to_string(),
        end: end.as_str().to_string(),
        word_length: start.len() as u64,
        total_expansions: expansions.len() as u64,
        total_candidates_generated: counters.candidates_generated,
        total_duplicates_suppressed: counters.duplicates_suppressed,
        total_oracle_queries: counters.oracle_queries,
        total_oracle_rejections: counters.oracle_rejections,
        total_dead_ends: counters.dead_ends,
        frontier_high_water: frontier.high_water(),
        visited_count: frontier.visited_count() as u64,
        termination_reason,
    };
    let graph = build_graph(expansions, &all_nodes, metadata);

    Ok(SearchResult {
        ladder,
        graph,
        nodes: all_nodes,
    })
}

/// Reconstruct the node-id path from the start node to `goal_node_id`.
///
/// Returns an empty path if `goal_node_id` is not in `nodes`.
#[must_use]
pub fn reconstruct_path(nodes: &[LadderNode], goal_node_id: u64) -> Vec<u64> {
    let mut path = Vec::new();
    let mut current = node_at(nodes, goal_node_id);

    while let Some(node) = current {
        path.push(node.node_id);
        current = node.parent_id.and_then(|id| node_at(nodes, id));
    }

    path.reverse();
    path
}

fn node_at(nodes: &[LadderNode], node_id: u64) -> Option<&LadderNode> {
    usize::try_from(node_id)
        .ok()
        .and_then(|i| nodes.get(i))
        .filter(|n| n.node_id == node_id)
}

fn build_graph(
    expansions: Vec<ExpandEvent>,
    all_nodes: &[LadderNode],
    metadata: GraphMetadata,
) -> LadderGraph {
    let expansion_index: HashMap<u64, u64> = expansions
        .iter()
        .map(|e| (e.node_id, e.expansion_order))
        .collect();

    let mut node_summaries: Vec<NodeSummary> = all_nodes
        .iter()
        .map(|n| NodeSummary {
            node_id: n.node_id,
            parent_id: n.parent_id,
            word: n.word.as_str().to_string(),
            depth: n.depth,
            is_goal: matches!(
                metadata.termination_reason,
                TerminationReason::GoalReached { node_id } if node_id == n.node_id
            ),
            expansion_order: expansion_index.get(&n.node_id).copied(),
        })
        .collect();
    node_summaries.sort_by_key(|n| n.node_id);

    LadderGraph {
        expansions,
        node_summaries,
        metadata,
    }
}
