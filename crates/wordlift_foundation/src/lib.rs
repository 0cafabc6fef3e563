//! Core types, errors, and collaborator interfaces for WordLift.
//!
//! This crate provides:
//! - [`EntityRecord`] - The entity representation read by the content filter
//! - [`LinkState`] / [`LinkDecision`] - Per-marker link preferences and outcomes
//! - [`LinkSettings`] - Immutable snapshot of the site-wide link configuration
//! - [`EntityResolver`], [`PermalinkProvider`], [`ConfigurationSource`] - The
//!   interfaces the content filter consumes
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod entity;
pub mod error;
pub mod link;
pub mod resolve;

pub use config::LinkSettings;
pub use entity::EntityRecord;
pub use error::{Error, ErrorContext, ErrorKind};
pub use link::{LinkDecision, LinkDecisionKind, LinkState};
pub use resolve::{ConfigurationSource, EntityResolver, PermalinkProvider};

/// Result type alias using the WordLift error type.
pub type Result<T> = std::result::Result<T, Error>;
