//! Ladder Harness: dictionary-backed orchestration around the search crate.
//!
//! The harness loads a [`lexicon::Lexicon`], runs queries through
//! `ladder_search::search::search`, and packages each result as a
//! [`runner::LadderReport`] whose digests can be re-checked with
//! [`verify::verify_report`].
//!
//! The harness does NOT implement search logic; it delegates to the search
//! crate. The interactive loop in [`session`] is a thin caller that builds
//! one lexicon and runs one query per word pair.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod lexicon;
pub mod runner;
pub mod session;
pub mod verify;
