//! Layering lock tests: the crate dependency direction is
//! `kernel <- search <- harness <- cli`, and the search core stays pure.
//!
//! Proves:
//! 1. `kernel` depends on no workspace crate; `search` depends only on `kernel`.
//! 2. Search and kernel sources touch neither the file system nor stdio.
//! 3. The search core emits no logging; its observability is the audit graph.

use std::fmt::Write;
use std::fs;

use lock_tests::ladder_test_helpers::{production_lines, workspace_root};

/// Patterns forbidden in non-comment source lines of the pure crates.
const IMPURE_PATTERNS: &[&str] = &[
    "std::fs",
    "std::io",
    "println!",
    "eprintln!",
    "tracing::",
    "File::open",
];

fn assert_no_violations(crate_dir: &str) {
    let violations: Vec<_> = production_lines(crate_dir)
        .into_iter()
        .filter(|line| IMPURE_PATTERNS.iter().any(|p| line.text.contains(p)))
        .collect();
    if !violations.is_empty() {
        let mut msg = format!("impure code found in {crate_dir} source:\n");
        for line in &violations {
            let _ = writeln!(msg, "  {}:{}: {}", line.path.display(), line.line_no, line.text);
        }
        panic!("{msg}");
    }
}

fn manifest(crate_dir: &str) -> String {
    let path = workspace_root().join(crate_dir).join("Cargo.toml");
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
}

#[test]
fn kernel_depends_on_no_workspace_crate() {
    let toml = manifest("kernel");
    for forbidden in ["ladder-search", "ladder-harness", "ladder-cli"] {
        assert!(!toml.contains(forbidden), "kernel depends on {forbidden}");
    }
}

#[test]
fn search_depends_only_on_kernel() {
    let toml = manifest("search");
    assert!(toml.contains("ladder-kernel"));
    for forbidden in ["ladder-harness", "ladder-cli", "tracing"] {
        assert!(!toml.contains(forbidden), "search depends on {forbidden}");
    }
}

#[test]
fn kernel_source_is_pure() {
    assert_no_violations("kernel");
}

#[test]
fn search_source_is_pure() {
    assert_no_violations("search");
}
