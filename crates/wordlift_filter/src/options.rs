//! Rendering options.

/// Class given to the anchors the filter inserts.
pub const ENTITY_PAGE_LINK_CLASS: &str = "wl-entity-page-link";

/// Options controlling how linked annotations are rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOptions {
    /// Class of the inserted anchors.
    pub link_class: String,

    /// Add a `title` attribute with the entity title when the annotated
    /// label differs from it. Off by default: the default anchor carries
    /// only `class` and `href`.
    pub title_attributes: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            link_class: ENTITY_PAGE_LINK_CLASS.to_string(),
            title_attributes: false,
        }
    }
}

impl FilterOptions {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the anchor class.
    #[must_use]
    pub fn with_link_class(mut self, link_class: impl Into<String>) -> Self {
        self.link_class = link_class.into();
        self
    }

    /// Builder method to enable/disable title attributes.
    #[must_use]
    pub fn with_title_attributes(mut self, title_attributes: bool) -> Self {
        self.title_attributes = title_attributes;
        self
    }
}
