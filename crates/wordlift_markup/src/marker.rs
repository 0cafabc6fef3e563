//! Annotation markers and marker errors.

use std::borrow::Cow;

use thiserror::Error;
use wordlift_foundation::LinkState;

use crate::span::Span;

/// Class token that identifies an annotation marker.
pub const TEXT_ANNOTATION_CLASS: &str = "textannotation";

/// Attribute carrying the URI of the annotated entity.
pub const ENTITY_ATTRIBUTE: &str = "itemid";

/// Attribute carrying the opaque annotation id.
pub const ANNOTATION_ID_ATTRIBUTE: &str = "id";

/// One well-formed annotation marker.
///
/// Borrowed from the document being scanned and discarded once the
/// rewriter has rendered it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnotationMarker<'src> {
    /// The whole element, start tag to closing tag.
    pub span: Span,
    /// The content between the start and closing tags.
    pub inner_span: Span,
    /// The element's source markup, byte-identical to the input.
    pub source: &'src str,
    /// The content between the tags, treated opaquely.
    pub inner: &'src str,
    /// Tag name as written (usually `span`).
    pub tag_name: &'src str,
    /// The annotation id (`id` attribute), if any.
    pub annotation_id: Option<Cow<'src, str>>,
    /// The URI of the annotated entity (`itemid` attribute).
    pub entity_uri: Cow<'src, str>,
    /// Explicit link preference from the class tokens.
    pub link_state: LinkState,
}

impl AnnotationMarker<'_> {
    /// Returns the marker's label: its inner content with any tags removed
    /// and surrounding whitespace trimmed.
    #[must_use]
    pub fn label(&self) -> Cow<'_, str> {
        if !self.inner.contains('<') {
            return Cow::Borrowed(self.inner.trim());
        }

        let mut label = String::with_capacity(self.inner.len());
        let mut rest = self.inner;
        while let Some(open) = rest.find('<') {
            label.push_str(&rest[..open]);
            match rest[open..].find('>') {
                Some(close) => rest = &rest[open + close + 1..],
                None => {
                    rest = &rest[open..];
                    break;
                }
            }
        }
        label.push_str(rest);
        Cow::Owned(label.trim().to_string())
    }
}

/// Why an element that looks like a marker could not be used as one.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MarkerError {
    /// No matching closing tag.
    #[error("unclosed <{tag}> annotation at {line}:{column}")]
    Unclosed {
        /// Tag name of the marker.
        tag: String,
        /// 1-based line of the start tag.
        line: u32,
        /// 1-based column of the start tag.
        column: u32,
    },

    /// A `<tag ... />` marker has no content to link.
    #[error("self-closing <{tag}> annotation at {line}:{column}")]
    SelfClosing {
        /// Tag name of the marker.
        tag: String,
        /// 1-based line of the start tag.
        line: u32,
        /// 1-based column of the start tag.
        column: u32,
    },

    /// The marker has no (or an empty) entity reference.
    #[error("annotation without entity reference at {line}:{column}")]
    MissingEntityReference {
        /// 1-based line of the start tag.
        line: u32,
        /// 1-based column of the start tag.
        column: u32,
    },
}

impl MarkerError {
    /// Returns the line and column of the offending start tag.
    #[must_use]
    pub fn position(&self) -> (u32, u32) {
        match self {
            Self::Unclosed { line, column, .. }
            | Self::SelfClosing { line, column, .. }
            | Self::MissingEntityReference { line, column } => (*line, *column),
        }
    }
}
