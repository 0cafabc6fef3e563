//! Link policy and content rewriting for WordLift-annotated HTML.
//!
//! # Architecture
//!
//! ```text
//! raw HTML
//!    │
//!    ▼
//! ┌─────────────────┐
//! │ SCANNER         │  → [Literal, Marker(E1), Literal, Malformed, ...]
//! └─────────────────┘
//!    │ per marker
//!    ▼
//! ┌─────────────────┐
//! │ RESOLVER        │  → EntityRecord | not found | error (aborts)
//! └─────────────────┘
//!    │
//!    ▼
//! ┌─────────────────┐
//! │ POLICY          │  → ShouldLink | ShouldNotLink | PassThrough
//! └─────────────────┘
//!    │
//!    ▼
//! ┌─────────────────┐
//! │ RENDER          │  → <a class='wl-entity-page-link' href='…'>…</a> | text | original
//! └─────────────────┘
//!    │
//!    ▼
//! rewritten HTML
//! ```
//!
//! # Modules
//!
//! - [`policy`] - The link decision table
//! - [`options`] - Rendering options
//! - [`render`] - Anchor rendering
//! - [`rewriter`] - The [`ContentFilter`] orchestrator

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod options;
pub mod policy;
pub mod render;
pub mod rewriter;


pub use options::FilterOptions;
pub use policy::decide;
pub use rewriter::{ContentFilter, Rewrite, RewriteStats, referenced_entities};
