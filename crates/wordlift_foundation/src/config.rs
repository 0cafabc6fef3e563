//! Link configuration snapshot.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable snapshot of the site-wide link configuration.
///
/// Taken once per rewrite so that a configuration change made while a
/// document is being filtered cannot flip decisions halfway through it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinkSettings {
    /// Whether annotations without an explicit preference are linked.
    pub link_by_default: bool,
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self {
            link_by_default: true,
        }
    }
}

impl LinkSettings {
    /// Creates settings that link by default.
    #[must_use]
    pub fn linking() -> Self {
        Self {
            link_by_default: true,
        }
    }

    /// Creates settings that do not link by default.
    #[must_use]
    pub fn not_linking() -> Self {
        Self {
            link_by_default: false,
        }
    }

    /// Builder method to set the link-by-default flag.
    #[must_use]
    pub fn with_link_by_default(mut self, link_by_default: bool) -> Self {
        self.link_by_default = link_by_default;
        self
    }
}
