//! Logging setup for the `wordlift` binary.
//!
//! Library crates only emit `tracing` events; this installs the subscriber
//! that prints them to standard error.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Filter used with `--verbose`.
pub const VERBOSE_FILTER: &str = "debug";

/// Returns the filter directives for the given verbosity and `RUST_LOG`
/// value. `--verbose` wins over the environment.
#[must_use]
pub fn filter_directives(verbose: bool, env: Option<&str>) -> String {
    if verbose {
        return VERBOSE_FILTER.to_string();
    }
    match env.map(str::trim) {
        Some(directives) if !directives.is_empty() => directives.to_string(),
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// Installs a `fmt` subscriber writing to standard error.
///
/// Returns false if a global subscriber was already installed.
pub fn init_logging(verbose: bool) -> bool {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directives = filter_directives(verbose, env.as_deref());
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
