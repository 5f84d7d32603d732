//! Internal test modules - whitebox tests with crate access
//!
//! This module contains tests that require internal access to crate types.
//! Tests here can access private items and implementation details for
//! comprehensive validation of internal invariants and edge cases.

// Harness-based acceptance tests
mod acceptance_autoplay;
mod acceptance_delete;
