//! Ladder Kernel: the value types and proof primitives of the word-ladder workspace.
//!
//! # API Surface
//!
//! - [`word::Word`] -- a normalized (trimmed, lowercase, non-empty) word
//! - [`alphabet::Alphabet`] -- the sorted letter set used for substitutions
//! - [`proof::canon::canonical_json_bytes`] -- canonical JSON for hashing
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 content hashes
//!
//! # Module Dependency Direction
//!
//! `word`, `alphabet` ← `proof`
//!
//! `proof` hashes bytes; it never inspects words. Nothing in the kernel knows
//! about search.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod alphabet;
pub mod proof;
pub mod word;
