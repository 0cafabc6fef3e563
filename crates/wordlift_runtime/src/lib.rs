//! Site snapshots, CLI, and logging setup for WordLift.
//!
//! This crate provides:
//! - [`Site`] - A store, permalinks, and configuration wired to the content filter
//! - [`SiteSnapshot`] - Site state saved as JSON or `MessagePack`
//! - CLI argument parsing and execution for the `wordlift` binary
//! - [`init_logging`] - The `tracing` subscriber used by the binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod logging;
pub mod site;
pub mod snapshot;

pub use cli::{CliConfig, CliError, parse_args};
pub use logging::init_logging;
pub use site::{Rendered, Site};
pub use snapshot::{SiteSnapshot, SnapshotFormat, from_bytes, load_from_file, save_to_file, to_bytes};
