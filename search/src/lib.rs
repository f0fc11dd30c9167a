//! Ladder Search: deterministic breadth-first word-ladder search with an
//! auditable graph artifact.
//!
//! This crate depends only on `ladder_kernel`; it does NOT depend on
//! `ladder_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! ladder_kernel  ←  ladder_search  ←  ladder_harness  ←  ladder_cli
//! (word, hash)      (frontier, BFS)    (lexicon, runner)   (binary)
//! ```
//!
//! # Key types
//!
//! - [`contract::WordOracle`] -- dictionary membership capability (injected)
//! - [`search::find_ladder`] -- shortest ladder or `None`
//! - [`search::search`] -- same search, returning the full audit trail
//! - [`graph::LadderGraph`] -- expansion-event audit log (canonical JSON)
//! - [`policy::SearchPolicy`] -- alphabet and opt-in budgets
//! - [`ladder::Ladder`] -- verified word sequence

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod ladder;
pub mod neighbor;
pub mod node;
pub mod policy;
pub mod search;
