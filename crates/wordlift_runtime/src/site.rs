//! A site: entities, permalinks, and configuration behind one filter.

use std::borrow::Cow;

use tracing::warn;
use wordlift_filter::{ContentFilter, FilterOptions, RewriteStats};
use wordlift_foundation::{ConfigurationSource, LinkSettings};
use wordlift_storage::{EntityStore, SiteConfiguration, SitePermalinks};

use crate::snapshot::SiteSnapshot;

/// Filter type borrowed from a [`Site`].
pub type SiteFilter<'a> = ContentFilter<&'a EntityStore, &'a SitePermalinks, &'a SiteConfiguration>;

/// The outcome of filtering one document for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendered<'a> {
    /// The content to serve.
    pub html: Cow<'a, str>,
    /// What the rewrite did, or `None` if it failed and `html` is the
    /// original content.
    pub stats: Option<RewriteStats>,
}

/// A site's entity store, permalinks, and configuration.
#[derive(Debug)]
pub struct Site {
    store: EntityStore,
    permalinks: SitePermalinks,
    config: SiteConfiguration,
    options: FilterOptions,
}

impl Site {
    /// Creates a site from its parts.
    #[must_use]
    pub fn new(store: EntityStore, permalinks: SitePermalinks, config: SiteConfiguration) -> Self {
        Self {
            store,
            permalinks,
            config,
            options: FilterOptions::default(),
        }
    }

    /// Builder method to set the rendering options.
    #[must_use]
    pub fn with_options(mut self, options: FilterOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the entity store.
    #[must_use]
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Returns the entity store for editing.
    pub fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.store
    }

    /// Returns the permalink builder.
    #[must_use]
    pub fn permalinks(&self) -> &SitePermalinks {
        &self.permalinks
    }

    /// Returns the live configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfiguration {
        &self.config
    }

    /// Returns the current configuration snapshot.
    #[must_use]
    pub fn settings(&self) -> LinkSettings {
        self.config.snapshot()
    }

    /// Returns a content filter over this site.
    #[must_use]
    pub fn filter(&self) -> SiteFilter<'_> {
        ContentFilter::new(&self.store, &self.permalinks, &self.config)
            .with_options(self.options.clone())
    }

    /// Filters `html` for display.
    ///
    /// If entity resolution fails the original content is returned and the
    /// failure is logged; a page is never left without content.
    #[must_use]
    pub fn render<'a>(&self, html: &'a str) -> Rendered<'a> {
        match self.filter().rewrite_report(html, self.settings()) {
            Ok(rewrite) => Rendered {
                html: Cow::Owned(rewrite.html),
                stats: Some(rewrite.stats),
            },
            Err(error) => {
                warn!(%error, context = ?error.context, "content filter failed, serving original content");
                Rendered {
                    html: Cow::Borrowed(html),
                    stats: None,
                }
            }
        }
    }

    /// Filters `html` for display, returning only the content.
    ///
    /// See [`render`](Self::render).
    #[must_use]
    pub fn filter_content<'a>(&self, html: &'a str) -> Cow<'a, str> {
        self.render(html).html
    }

    /// Captures the site's current state.
    #[must_use]
    pub fn snapshot(&self) -> SiteSnapshot {
        SiteSnapshot {
            base_url: self.permalinks.base_url().to_string(),
            entity_base: self.permalinks.entity_base().to_string(),
            link_by_default: self.settings().link_by_default,
            entities: self.store.iter().cloned().collect(),
        }
    }
}
