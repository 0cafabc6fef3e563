//! Integration tests for Layer 1: Markup
//!
//! Tests for annotation marker scanning, start tags, and attribute escaping.

mod escaping;
mod tags;
