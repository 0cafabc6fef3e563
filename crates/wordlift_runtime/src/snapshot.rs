//! Site snapshots.
//!
//! A [`SiteSnapshot`] is everything the filter needs to know about a site:
//! its base URL, where entity pages live, the link-by-default flag, and the
//! entity records. Snapshots are stored as JSON or `MessagePack`, chosen by
//! file extension.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use wordlift_foundation::{EntityRecord, Error, ErrorKind, Result};
use wordlift_storage::permalink::DEFAULT_ENTITY_BASE;
use wordlift_storage::{EntityStore, SiteConfiguration, SitePermalinks};

use crate::site::Site;

/// Base URL used when a snapshot does not name one.
pub const DEFAULT_BASE_URL: &str = "http://localhost";

/// Serializable site state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSnapshot {
    /// Site base URL (`http` or `https`).
    pub base_url: String,
    /// Path segment under which entity pages live.
    pub entity_base: String,
    /// Whether annotations without an explicit preference are linked.
    pub link_by_default: bool,
    /// The site's entities.
    pub entities: Vec<EntityRecord>,
}

impl Default for SiteSnapshot {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            entity_base: DEFAULT_ENTITY_BASE.to_string(),
            link_by_default: true,
            entities: Vec::new(),
        }
    }
}

impl SiteSnapshot {
    /// Creates an empty snapshot for the site at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Builder method to add an entity.
    #[must_use]
    pub fn with_entity(mut self, entity: EntityRecord) -> Self {
        self.entities.push(entity);
        self
    }

    /// Builder method to set the link-by-default flag.
    #[must_use]
    pub fn with_link_by_default(mut self, link_by_default: bool) -> Self {
        self.link_by_default = link_by_default;
        self
    }

    /// Builds the live site described by this snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or two entities share a
    /// URI or post id.
    pub fn into_site(self) -> Result<Site> {
        let permalinks = SitePermalinks::new(self.base_url)?.with_entity_base(self.entity_base);
        let mut store = EntityStore::new();
        for entity in self.entities {
            store.insert(entity)?;
        }
        Ok(Site::new(store, permalinks, SiteConfiguration::new(self.link_by_default)))
    }
}

/// On-disk snapshot encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapshotFormat {
    /// Human-editable JSON.
    Json,
    /// Compact `MessagePack` with named fields.
    MessagePack,
}

impl SnapshotFormat {
    /// Picks the format from a file extension: `.json` is JSON, anything
    /// else is `MessagePack`.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::MessagePack,
        }
    }
}

/// Serializes a snapshot.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(snapshot: &SiteSnapshot, format: SnapshotFormat) -> Result<Vec<u8>> {
    match format {
        SnapshotFormat::Json => serde_json::to_vec_pretty(snapshot)
            .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string()))),
        SnapshotFormat::MessagePack => rmp_serde::to_vec_named(snapshot)
            .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string()))),
    }
}

/// Deserializes a snapshot.
///
/// # Errors
///
/// Returns an error if the bytes are not a valid snapshot in `format`.
pub fn from_bytes(bytes: &[u8], format: SnapshotFormat) -> Result<SiteSnapshot> {
    match format {
        SnapshotFormat::Json => serde_json::from_slice(bytes)
            .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string()))),
        SnapshotFormat::MessagePack => rmp_serde::from_slice(bytes)
            .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string()))),
    }
}

fn io_error(action: &str, path: &Path, err: &std::io::Error) -> Error {
    Error::new(ErrorKind::IoError(format!(
        "failed to {action} file '{}': {err}",
        path.display()
    )))
}

/// Saves a snapshot, in the format its extension selects.
///
/// # Errors
///
/// Returns an error if the file cannot be written or serialization fails.
pub fn save_to_file<P: AsRef<Path>>(snapshot: &SiteSnapshot, path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = to_bytes(snapshot, SnapshotFormat::from_path(path))?;

    let file = File::create(path).map_err(|e| io_error("create", path, &e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&bytes)
        .map_err(|e| io_error("write to", path, &e))?;
    writer.flush().map_err(|e| io_error("flush", path, &e))
}

/// Loads a snapshot, in the format its extension selects.
///
/// # Errors
///
/// Returns an error if the file cannot be read or deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<SiteSnapshot> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| io_error("open", path, &e))?;

    let mut bytes = Vec::new();
    BufReader::new(file)
        .read_to_end(&mut bytes)
        .map_err(|e| io_error("read", path, &e))?;

    from_bytes(&bytes, SnapshotFormat::from_path(path))
}
