//! Entity page URLs.

use wordlift_foundation::{EntityRecord, Error, PermalinkProvider, Result};

/// Default path segment under which entity pages live.
pub const DEFAULT_ENTITY_BASE: &str = "entity";

/// Builds entity permalinks from the site base URL.
///
/// A record's explicit permalink wins; otherwise the URL is
/// `{base_url}/{entity_base}/{slug}/`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SitePermalinks {
    base_url: String,
    entity_base: String,
}

impl SitePermalinks {
    /// Creates permalinks for the site at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error unless `base_url` is an `http` or `https` URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        let has_host = ["http://", "https://"]
            .iter()
            .any(|scheme| trimmed.len() > scheme.len() && trimmed.starts_with(scheme));
        if !has_host {
            return Err(Error::invalid_configuration(format!(
                "site base URL must be an http(s) URL, got '{base_url}'"
            )));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
            entity_base: DEFAULT_ENTITY_BASE.to_string(),
        })
    }

    /// Builder method to set the entity path segment (empty for none).
    #[must_use]
    pub fn with_entity_base(mut self, entity_base: impl Into<String>) -> Self {
        self.entity_base = entity_base.into().trim_matches('/').to_string();
        self
    }

    /// Returns the site base URL, without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the entity path segment.
    #[must_use]
    pub fn entity_base(&self) -> &str {
        &self.entity_base
    }
}

impl PermalinkProvider for SitePermalinks {
    fn permalink_for(&self, entity: &EntityRecord) -> Result<String> {
        if let Some(permalink) = entity.permalink.as_deref().filter(|p| !p.trim().is_empty()) {
            return Ok(permalink.trim().to_string());
        }

        let slug = entity.slug.trim_matches('/');
        if slug.is_empty() {
            return Err(Error::permalink(&entity.uri, "entity has no slug"));
        }

        Ok(if self.entity_base.is_empty() {
            format!("{}/{slug}/", self.base_url)
        } else {
            format!("{}/{}/{slug}/", self.base_url, self.entity_base)
        })
    }
}
