//! Shared helpers for the lock tests and the cross-process fixture binary.

pub mod ladder_test_helpers;
