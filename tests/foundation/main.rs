//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: entity records, link states, settings, and errors.

mod links;
