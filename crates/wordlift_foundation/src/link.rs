//! Link preferences carried by annotation markers and the decisions made from them.

use std::fmt;

/// Class token that forces an annotation to be linked.
pub const LINK_CLASS: &str = "wl-link";

/// Class token that forces an annotation not to be linked.
pub const NO_LINK_CLASS: &str = "wl-no-link";

/// Explicit per-marker link preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LinkState {
    /// Neither `wl-link` nor `wl-no-link`: the site default applies.
    #[default]
    Unspecified,
    /// `wl-link`: always link.
    ForceLink,
    /// `wl-no-link`: never link.
    ForceNoLink,
}

impl LinkState {
    /// Derives the link state from a marker's class tokens.
    ///
    /// When both `wl-link` and `wl-no-link` are present, `ForceNoLink` wins.
    pub fn from_classes<'a, I>(classes: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut state = Self::Unspecified;
        for class in classes {
            match class {
                NO_LINK_CLASS => return Self::ForceNoLink,
                LINK_CLASS => state = Self::ForceLink,
                _ => {}
            }
        }
        state
    }
}

impl fmt::Display for LinkState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unspecified => write!(f, "unspecified"),
            Self::ForceLink => write!(f, "{LINK_CLASS}"),
            Self::ForceNoLink => write!(f, "{NO_LINK_CLASS}"),
        }
    }
}

/// The kind of rendering chosen for a marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LinkDecisionKind {
    /// Wrap the marker text in an anchor to the entity page.
    ShouldLink,
    /// Emit the marker text without any wrapping markup.
    ShouldNotLink,
    /// Emit the original marker markup unchanged.
    PassThrough,
}

/// The rendering chosen for a marker, with the link target when linking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkDecision {
    /// Link to the given URL.
    Link(String),
    /// Strip the marker, keep its text.
    NoLink,
    /// Keep the marker verbatim (entity could not be resolved).
    PassThrough,
}

impl LinkDecision {
    /// Returns the kind of this decision.
    #[must_use]
    pub fn kind(&self) -> LinkDecisionKind {
        match self {
            Self::Link(_) => LinkDecisionKind::ShouldLink,
            Self::NoLink => LinkDecisionKind::ShouldNotLink,
            Self::PassThrough => LinkDecisionKind::PassThrough,
        }
    }
}
