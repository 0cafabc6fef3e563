//! Command-line interface for the `wordlift` binary.
//!
//! `wordlift [OPTIONS] [FILES...]` filters each HTML file (or standard
//! input when no file is given) against a site snapshot and writes the
//! result to standard output.

use std::fs;
use std::io::{Read, Write};
use std::path::PathBuf;

use thiserror::Error;
use tracing::info;
use wordlift_foundation::{Error, ErrorKind, Result};

use crate::site::Site;
use crate::snapshot::{SiteSnapshot, load_from_file};

/// Name used for standard input in reports.
const STDIN_NAME: &str = "<stdin>";

/// Errors in the command line itself.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CliError {
    /// An option that takes a value was the last argument.
    #[error("{0} requires a value")]
    MissingValue(String),

    /// An option that is not recognized.
    #[error("unknown option: {0}")]
    UnknownOption(String),
}

/// CLI configuration parsed from arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// HTML files to filter; standard input when empty.
    pub files: Vec<PathBuf>,
    /// Site snapshot to load.
    pub site: Option<PathBuf>,
    /// Override of the snapshot's link-by-default flag.
    pub link_by_default: Option<bool>,
    /// Override of the snapshot's base URL.
    pub base_url: Option<String>,
    /// Print per-document counts to the report stream.
    pub report: bool,
    /// Debug logging.
    pub verbose: bool,
    /// Print help and exit.
    pub show_help: bool,
    /// Print version and exit.
    pub show_version: bool,
}

/// Parses command-line arguments, excluding the program name.
///
/// # Errors
///
/// Returns an error for unknown options or options missing their value.
pub fn parse_args<I>(args: I) -> std::result::Result<CliConfig, CliError>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut config = CliConfig::default();
    let mut args = args.into_iter().map(Into::into);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-v" | "--verbose" => config.verbose = true,
            "--report" => config.report = true,
            "--link-by-default" => config.link_by_default = Some(true),
            "--no-link-by-default" => config.link_by_default = Some(false),
            "--site" => {
                let path = args.next().ok_or_else(|| CliError::MissingValue(arg.clone()))?;
                config.site = Some(PathBuf::from(path));
            }
            "--base-url" => {
                let url = args.next().ok_or_else(|| CliError::MissingValue(arg.clone()))?;
                config.base_url = Some(url);
            }
            option if option.starts_with('-') && option != "-" => {
                return Err(CliError::UnknownOption(option.to_string()));
            }
            path => config.files.push(PathBuf::from(path)),
        }
    }

    Ok(config)
}

impl CliConfig {
    /// Builds the site: the snapshot (or an empty site) with the command
    /// line overrides applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be loaded or is invalid.
    pub fn load_site(&self) -> Result<Site> {
        let mut snapshot = match &self.site {
            Some(path) => {
                let snapshot = load_from_file(path)?;
                info!(path = %path.display(), entities = snapshot.entities.len(), "site loaded");
                snapshot
            }
            None => SiteSnapshot::default(),
        };
        if let Some(base_url) = &self.base_url {
            snapshot.base_url.clone_from(base_url);
        }
        if let Some(link_by_default) = self.link_by_default {
            snapshot.link_by_default = link_by_default;
        }
        snapshot.into_site()
    }

    /// Filters every input and writes the results to `out`, in order.
    ///
    /// `stdin` is read when no files were given (or for a `-` argument);
    /// reports go to `report`.
    ///
    /// # Errors
    ///
    /// Returns an error if an input cannot be read or an output cannot be
    /// written. Resolution failures are not errors: the affected document
    /// is written unmodified.
    pub fn filter_inputs(
        &self,
        site: &Site,
        stdin: &mut dyn Read,
        out: &mut dyn Write,
        report: &mut dyn Write,
    ) -> Result<()> {
        if self.files.is_empty() {
            return self.filter_one(site, STDIN_NAME, &read_stdin(stdin)?, out, report);
        }
        for path in &self.files {
            let (name, html) = if path.as_os_str() == "-" {
                (STDIN_NAME.to_string(), read_stdin(stdin)?)
            } else {
                let html = fs::read_to_string(path).map_err(|e| {
                    Error::new(ErrorKind::IoError(format!(
                        "failed to read file '{}': {e}",
                        path.display()
                    )))
                })?;
                (path.display().to_string(), html)
            };
            self.filter_one(site, &name, &html, out, report)?;
        }
        Ok(())
    }

    fn filter_one(
        &self,
        site: &Site,
        name: &str,
        html: &str,
        out: &mut dyn Write,
        report: &mut dyn Write,
    ) -> Result<()> {
        let rendered = site.render(html);
        out.write_all(rendered.html.as_bytes()).map_err(|e| write_error(&e))?;
        if self.report {
            let line = match rendered.stats {
                Some(stats) => format!(
                    "{name}: {} linked, {} unlinked, {} passed through, {} malformed",
                    stats.linked, stats.unlinked, stats.passed_through, stats.malformed
                ),
                None => format!("{name}: resolution failed, content left unmodified"),
            };
            writeln!(report, "{line}").map_err(|e| write_error(&e))?;
        }
        Ok(())
    }
}

fn read_stdin(stdin: &mut dyn Read) -> Result<String> {
    let mut html = String::new();
    stdin.read_to_string(&mut html).map_err(|e| {
        Error::new(ErrorKind::IoError(format!("failed to read standard input: {e}")))
    })?;
    Ok(html)
}

fn write_error(e: &std::io::Error) -> Error {
    Error::new(ErrorKind::IoError(format!("failed to write output: {e}")))
}

/// Returns the help text.
#[must_use]
pub fn help_text() -> String {
    format!(
        "\x1b[1mWordLift\x1b[0m {} - Entity link rewriting for annotated HTML

\x1b[1mUSAGE:\x1b[0m
    wordlift [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    HTML files to filter (standard input if none, or `-`)

\x1b[1mOPTIONS:\x1b[0m
    --site FILE             Site snapshot (.json, otherwise MessagePack)
    --base-url URL          Override the site base URL
    --link-by-default       Link annotations without a wl-link/wl-no-link class
    --no-link-by-default    Leave such annotations unlinked
    --report                Print per-document counts to stderr
    -v, --verbose           Debug logging (otherwise RUST_LOG, default warn)
    -h, --help              Print help information
    -V, --version           Print version information

\x1b[1mEXAMPLES:\x1b[0m
    wordlift --site site.json post.html
    wordlift --site site.msgpack --no-link-by-default < post.html
    wordlift --site site.json --report a.html b.html > out.html",
        env!("CARGO_PKG_VERSION")
    )
}
