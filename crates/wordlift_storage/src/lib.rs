//! In-memory entity store, permalinks, and site configuration for WordLift.
//!
//! This crate provides the default implementations of the collaborators the
//! content filter consumes:
//! - [`EntityStore`] - Entity records indexed by URI, with title and alias lookup
//! - [`SitePermalinks`] - Entity page URLs derived from the site base URL
//! - [`SiteConfiguration`] - The site-wide link-by-default flag

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod permalink;
pub mod query;
pub mod store;

pub use config::SiteConfiguration;
pub use permalink::SitePermalinks;
pub use query::TitleQuery;
pub use store::EntityStore;
