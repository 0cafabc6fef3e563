//! Site-wide configuration.

use std::sync::atomic::{AtomicBool, Ordering};

use wordlift_foundation::ConfigurationSource;

/// The site's mutable link configuration.
///
/// May be changed while documents are being filtered; each rewrite reads a
/// [`LinkSettings`](wordlift_foundation::LinkSettings) snapshot once.
#[derive(Debug)]
pub struct SiteConfiguration {
    link_by_default: AtomicBool,
}

impl Default for SiteConfiguration {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SiteConfiguration {
    /// Creates a configuration with the given link-by-default flag.
    #[must_use]
    pub fn new(link_by_default: bool) -> Self {
        Self {
            link_by_default: AtomicBool::new(link_by_default),
        }
    }

    /// Sets whether annotations without an explicit preference are linked.
    pub fn set_link_by_default(&self, link_by_default: bool) {
        self.link_by_default.store(link_by_default, Ordering::Release);
    }
}

impl ConfigurationSource for SiteConfiguration {
    fn is_link_by_default(&self) -> bool {
        self.link_by_default.load(Ordering::Acquire)
    }
}
