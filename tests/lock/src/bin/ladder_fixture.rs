//! Binary that runs the scenario queries through the harness runner and
//! prints deterministic output lines for cross-process verification.
//!
//! Usage: `ladder_fixture`
//!
//! Output: key=value lines (see source for format).

use ladder_harness::runner::run_query;
use ladder_search::policy::SearchPolicy;
use lock_tests::ladder_test_helpers::{scenario_lexicon, FIXTURE_QUERIES};

fn main() {
    let lexicon = scenario_lexicon();
    let policy = SearchPolicy::default();

    println!("lexicon_digest={}", lexicon.digest());
    println!(
        "policy_digest={}",
        policy.digest().expect("policy digest failed")
    );

    for (start, end) in FIXTURE_QUERIES {
        let report = run_query(&lexicon, start, end, &policy).expect("query failed");
        let graph_json: serde_json::Value =
            serde_json::from_slice(&report.graph_bytes).expect("invalid graph JSON");
        let total_expansions = graph_json["metadata"]["total_expansions"]
            .as_u64()
            .expect("missing total_expansions");
        let ladder = report
            .ladder
            .as_ref()
            .map_or_else(|| "none".to_string(), ToString::to_string);

        let key = format!("{start}_{end}");
        println!("{key}.ladder={ladder}");
        println!("{key}.termination={}", report.termination.tag());
        println!("{key}.total_expansions={total_expansions}");
        println!("{key}.graph_digest={}", report.graph_digest);
        println!("{key}.report_digest={}", report.digest);
    }
}
