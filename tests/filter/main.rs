//! Integration tests for Layer 3: Filter
//!
//! Tests for the link policy, anchor rendering, and the content filter.

mod policy;
