//! Entity records as seen by the content filter.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An entity (person, place, organization, ...) with a dedicated page.
///
/// The filter only reads records; they are owned by whichever
/// [`EntityResolver`](crate::EntityResolver) produced them.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EntityRecord {
    /// Canonical entity URI (the value annotation markers carry in `itemid`).
    pub uri: String,
    /// Identifier of the post backing the entity page.
    pub post_id: u64,
    /// Entity title.
    pub title: String,
    /// URL slug of the entity page.
    pub slug: String,
    /// Synonyms the entity is also known by.
    pub alternative_labels: Vec<String>,
    /// Equivalent URIs published by other datasets.
    pub same_as: Vec<String>,
    /// Explicit permalink, overriding the one derived from the slug.
    pub permalink: Option<String>,
}

impl EntityRecord {
    /// Creates a record with the given URI and title.
    ///
    /// The slug is derived from the title.
    #[must_use]
    pub fn new(uri: impl Into<String>, title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            uri: uri.into(),
            slug: slugify(&title),
            title,
            ..Self::default()
        }
    }

    /// Sets the post id.
    #[must_use]
    pub fn with_post_id(mut self, post_id: u64) -> Self {
        self.post_id = post_id;
        self
    }

    /// Sets the slug.
    #[must_use]
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Adds an alternative label.
    #[must_use]
    pub fn with_alternative_label(mut self, label: impl Into<String>) -> Self {
        self.alternative_labels.push(label.into());
        self
    }

    /// Adds an equivalent URI.
    #[must_use]
    pub fn with_same_as(mut self, uri: impl Into<String>) -> Self {
        self.same_as.push(uri.into());
        self
    }

    /// Sets an explicit permalink.
    #[must_use]
    pub fn with_permalink(mut self, permalink: impl Into<String>) -> Self {
        self.permalink = Some(permalink.into());
        self
    }

    /// Returns true if `uri` identifies this entity, either canonically or
    /// through one of its `same_as` URIs.
    #[must_use]
    pub fn is_identified_by(&self, uri: &str) -> bool {
        self.uri == uri || self.same_as.iter().any(|s| s == uri)
    }

    /// Returns true if `label` is this entity's title, ignoring ASCII case
    /// and surrounding whitespace.
    #[must_use]
    pub fn has_title(&self, label: &str) -> bool {
        self.title.trim().eq_ignore_ascii_case(label.trim())
    }
}

/// Converts a title into a URL slug (`Matt Mullenweg` → `matt-mullenweg`).
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    slug
}
