//! Cross-layer integration tests for WordLift
//!
//! Tests that verify correct interaction between multiple crates.

mod concurrency;
mod properties;
mod site;
