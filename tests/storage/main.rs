//! Integration tests for Layer 2: Storage
//!
//! Tests for the entity store, title lookup, permalinks, and site configuration.

mod config;
mod permalinks;
