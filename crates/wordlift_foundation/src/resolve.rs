//! Interfaces of the collaborators the content filter consumes.
//!
//! Implementations must be safe to share between threads rendering
//! different documents at the same time.

use std::sync::Arc;

use crate::{EntityRecord, LinkSettings, Result};

/// Looks up entities by URI.
pub trait EntityResolver {
    /// Resolves an entity URI.
    ///
    /// Returns `Ok(None)` when no entity is known by that URI.
    ///
    /// # Errors
    ///
    /// Returns a resolution error when the lookup itself failed; a miss is
    /// not an error.
    fn resolve(&self, uri: &str) -> Result<Option<EntityRecord>>;
}

/// Produces the canonical page URL of an entity.
pub trait PermalinkProvider {
    /// Returns the permalink of the given entity.
    ///
    /// # Errors
    ///
    /// Returns a permalink error when no URL can be produced.
    fn permalink_for(&self, entity: &EntityRecord) -> Result<String>;
}

/// Source of the site-wide link configuration.
pub trait ConfigurationSource {
    /// Whether annotations without an explicit preference are linked.
    fn is_link_by_default(&self) -> bool;

    /// Takes an immutable snapshot of the configuration.
    fn snapshot(&self) -> LinkSettings {
        LinkSettings {
            link_by_default: self.is_link_by_default(),
        }
    }
}

impl ConfigurationSource for LinkSettings {
    fn is_link_by_default(&self) -> bool {
        self.link_by_default
    }
}

impl<T: EntityResolver + ?Sized> EntityResolver for &T {
    fn resolve(&self, uri: &str) -> Result<Option<EntityRecord>> {
        (**self).resolve(uri)
    }
}

impl<T: EntityResolver + ?Sized> EntityResolver for Arc<T> {
    fn resolve(&self, uri: &str) -> Result<Option<EntityRecord>> {
        (**self).resolve(uri)
    }
}

impl<T: PermalinkProvider + ?Sized> PermalinkProvider for &T {
    fn permalink_for(&self, entity: &EntityRecord) -> Result<String> {
        (**self).permalink_for(entity)
    }
}

impl<T: PermalinkProvider + ?Sized> PermalinkProvider for Arc<T> {
    fn permalink_for(&self, entity: &EntityRecord) -> Result<String> {
        (**self).permalink_for(entity)
    }
}

impl<T: ConfigurationSource + ?Sized> ConfigurationSource for &T {
    fn is_link_by_default(&self) -> bool {
        (**self).is_link_by_default()
    }
}

impl<T: ConfigurationSource + ?Sized> ConfigurationSource for Arc<T> {
    fn is_link_by_default(&self) -> bool {
        (**self).is_link_by_default()
    }
}
