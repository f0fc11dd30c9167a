//! Proof module: canonical JSON and domain-separated content hashing.

pub mod canon;
pub mod hash;
pub mod hash_domain;
