//! Hash domain lock tests.
//!
//! Domain byte strings are checked by the kernel's own unit tests. This file
//! pins what those cannot see:
//! 1. No crate spells a `LADDER::` domain literal outside `hash_domain.rs`.
//! 2. Digests of the empty lexicon, the scenario lexicon and the default
//!    policy do not drift.

use ladder_harness::lexicon::Lexicon;
use ladder_search::policy::SearchPolicy;
use lock_tests::ladder_test_helpers::{production_lines, scenario_lexicon};

#[test]
fn domain_literals_live_only_in_hash_domain() {
    let mut scanned = 0;
    let mut violations = Vec::new();
    for crate_dir in ["kernel", "search", "harness", "cli"] {
        for line in production_lines(crate_dir) {
            scanned += 1;
            if line.path.ends_with("hash_domain.rs") {
                continue;
            }
            if line.text.contains("b\"LADDER::") {
                violations.push(format!("  {}:{}: {}", line.path.display(), line.line_no, line.text));
            }
        }
    }
    assert!(scanned > 0, "no production source was scanned");
    assert!(
        violations.is_empty(),
        "domain literals outside hash_domain.rs:\n{}",
        violations.join("\n")
    );
}

#[test]
fn empty_lexicon_digest_is_pinned() {
    assert_eq!(
        Lexicon::default().digest().as_str(),
        "sha256:804333c01b63841c77ffbe214e42cd4a1d4de05261d0f1d76be12fae710a9c08"
    );
}

#[test]
fn scenario_lexicon_digest_is_pinned() {
    assert_eq!(
        scenario_lexicon().digest().as_str(),
        "sha256:92efa2dd77edb2864f8c7ff21683e1976ae989427970ab76e83831d3d62d81e8"
    );
}

#[test]
fn default_policy_digest_is_pinned() {
    assert_eq!(
        SearchPolicy::default().digest().unwrap().as_str(),
        "sha256:a6341fa38323c2c5c11c54b59bc3ff8b57650e97531a3d72ee874e9866af8056"
    );
}
