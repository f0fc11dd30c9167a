//! Search budget lock tests.
//!
//! Proves:
//! 1. Budgets are opt-in: the default policy is unbounded.
//! 2. `max_expansions` stops the search with `ExpansionBudgetExceeded`, and
//!    the collapsed outcome is `BudgetExhausted`, never `Ok(None)`.
//! 3. `max_depth` marks depth-limited expansions and reports
//!    `DepthBudgetExceeded` only when the limit actually cut the search.
//! 4. A depth limit equal to the shortest ladder's length still finds it.
//! 5. A zero expansion budget is rejected before the search starts.

use ladder_search::error::LadderError;
use ladder_search::graph::TerminationReason;
use ladder_search::policy::SearchPolicy;
use ladder_search::search::{search, MetadataBindings, SearchResult};
use lock_tests::ladder_test_helpers::{ladder_strs, scenario_lexicon, word};

fn run(start: &str, end: &str, policy: &SearchPolicy) -> Result<SearchResult, LadderError> {
    search(
        &word(start),
        &word(end),
        &scenario_lexicon(),
        policy,
        &MetadataBindings::default(),
    )
}

#[test]
fn default_policy_is_unbounded() {
    let policy = SearchPolicy::default();
    assert_eq!(policy.max_expansions, u64::MAX);
    assert_eq!(policy.max_depth, u32::MAX);
    assert!(run("bit", "dog", &policy).unwrap().is_goal_reached());
}

#[test]
fn expansion_budget_stops_search() {
    let policy = SearchPolicy {
        max_expansions: 3,
        ..SearchPolicy::default()
    };
    let result = run("bit", "dog", &policy).unwrap();
    assert_eq!(
        result.graph.metadata.termination_reason,
        TerminationReason::ExpansionBudgetExceeded
    );
    assert_eq!(result.graph.metadata.total_expansions, 3);
    assert_eq!(
        result.into_outcome(),
        Err(LadderError::BudgetExhausted {
            reason: TerminationReason::ExpansionBudgetExceeded
        })
    );
}

#[test]
fn depth_budget_reports_cut_search() {
    let policy = SearchPolicy {
        max_depth: 3,
        ..SearchPolicy::default()
    };
    let result = run("bit", "dog", &policy).unwrap();
    assert_eq!(
        result.graph.metadata.termination_reason,
        TerminationReason::DepthBudgetExceeded
    );
    assert!(result
        .graph
        .expansions
        .iter()
        .filter(|e| e.depth_limited)
        .all(|e| e.depth == 3 && e.accepted.is_empty()));
    assert_eq!(
        result.into_outcome(),
        Err(LadderError::BudgetExhausted {
            reason: TerminationReason::DepthBudgetExceeded
        })
    );
}

#[test]
fn budget_cut_off_is_distinct_from_no_ladder() {
    // A ladder bit -> dog exists; one expansion is not enough to reach it.
    let policy = SearchPolicy {
        max_expansions: 1,
        ..SearchPolicy::default()
    };
    let cut = run("bit", "dog", &policy).unwrap().into_outcome();
    assert!(
        matches!(cut, Err(LadderError::BudgetExhausted { .. })),
        "{cut:?}"
    );

    let exhausted = run("cat", "dig", &SearchPolicy::default())
        .unwrap()
        .into_outcome();
    assert_eq!(exhausted, Ok(None));
    assert_ne!(cut, exhausted);
}

#[test]
fn depth_budget_equal_to_ladder_length_still_finds_it() {
    let policy = SearchPolicy {
        max_depth: 4,
        ..SearchPolicy::default()
    };
    let result = run("bit", "dog", &policy).unwrap();
    let ladder = result.ladder.unwrap();
    assert_eq!(ladder_strs(&ladder), ["bit", "bot", "cot", "cog", "dog"]);
}

#[test]
fn unreachable_end_within_depth_is_exhaustion() {
    // The whole component of "cat" lies within depth 4, so the limit never bites.
    let policy = SearchPolicy {
        max_depth: 10,
        ..SearchPolicy::default()
    };
    let result = run("cat", "dig", &policy).unwrap();
    assert_eq!(
        result.graph.metadata.termination_reason,
        TerminationReason::FrontierExhausted
    );
    assert!(result.graph.expansions.iter().all(|e| !e.depth_limited));
}

#[test]
fn zero_expansion_budget_is_invalid() {
    let policy = SearchPolicy {
        max_expansions: 0,
        ..SearchPolicy::default()
    };
    let err = run("cat", "bat", &policy).unwrap_err();
    assert!(matches!(err, LadderError::InvalidPolicy { .. }), "{err:?}");
}
