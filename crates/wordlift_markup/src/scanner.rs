//! Scanner for annotation markers.
//!
//! The scanner walks an HTML fragment and yields [`Segment`]s that tile the
//! input exactly: every byte belongs to one segment, in order. Literal runs
//! between markers are coalesced into a single segment.
//!
//! A marker's content is opaque. Markers nested inside another marker are
//! part of the outer marker's content and are not reported separately.

use std::borrow::Cow;

use wordlift_foundation::LinkState;

use crate::marker::{
    ANNOTATION_ID_ATTRIBUTE, AnnotationMarker, ENTITY_ATTRIBUTE, MarkerError, TEXT_ANNOTATION_CLASS,
};
use crate::span::{LineTracker, Span};
use crate::tag::{StartTag, parse_end_tag};

const COMMENT_OPEN: &str = "<!--";
const COMMENT_CLOSE: &str = "-->";

/// One piece of a scanned document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment<'src> {
    /// Markup or text that is not an annotation marker.
    Literal {
        /// Location of the run.
        span: Span,
        /// The run's source text.
        text: &'src str,
    },
    /// A well-formed annotation marker.
    Marker(AnnotationMarker<'src>),
    /// Something that looks like a marker but cannot be used as one.
    Malformed {
        /// Location of the offending markup.
        span: Span,
        /// The offending markup.
        text: &'src str,
        /// Why it was rejected.
        error: MarkerError,
    },
}

impl<'src> Segment<'src> {
    /// Returns the location of this segment.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Literal { span, .. } | Self::Malformed { span, .. } => *span,
            Self::Marker(marker) => marker.span,
        }
    }

    /// Returns the source text of this segment.
    #[must_use]
    pub fn source(&self) -> &'src str {
        match self {
            Self::Literal { text, .. } | Self::Malformed { text, .. } => *text,
            Self::Marker(marker) => marker.source,
        }
    }

    /// Returns the marker if this segment is one.
    #[must_use]
    pub fn as_marker(&self) -> Option<&AnnotationMarker<'src>> {
        match self {
            Self::Marker(marker) => Some(marker),
            _ => None,
        }
    }
}

/// Scanner over an HTML fragment.
///
/// The scanner is a lazy iterator; scanning the same input again with a
/// fresh scanner yields the same segments.
pub struct Scanner<'src> {
    /// Source text being scanned.
    source: &'src str,
    /// Byte offset where the search for the next marker resumes.
    position: usize,
    /// Byte offset where the pending literal run starts.
    literal_start: usize,
    /// Marker-like segment found after a literal run, returned next.
    pending: Option<Segment<'src>>,
    /// Line/column bookkeeping.
    lines: LineTracker<'src>,
}

impl<'src> Scanner<'src> {
    /// Creates a new scanner for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            position: 0,
            literal_start: 0,
            pending: None,
            lines: LineTracker::new(source),
        }
    }

    /// Scans all source and returns the segments.
    #[must_use]
    pub fn scan_all(source: &'src str) -> Vec<Segment<'src>> {
        Scanner::new(source).collect()
    }

    /// Returns the well-formed markers of `source`, in document order.
    #[must_use]
    pub fn markers(source: &'src str) -> Vec<AnnotationMarker<'src>> {
        Scanner::new(source)
            .filter_map(|segment| match segment {
                Segment::Marker(marker) => Some(marker),
                _ => None,
            })
            .collect()
    }

    /// Finds the next start tag carrying the annotation class at or after
    /// `self.position`.
    ///
    /// Leaves `self.position` at the end of the source when there is none.
    fn next_marker_start(&mut self) -> Option<(usize, StartTag<'src>)> {
        let source = self.source;
        while let Some(found) = source[self.position..].find('<') {
            let at = self.position + found;
            let rest = &source[at..];

            if rest.starts_with(COMMENT_OPEN) {
                self.position = skip_comment(source, at).unwrap_or(source.len());
                continue;
            }

            match StartTag::parse(rest) {
                Some(tag) if tag.has_class(TEXT_ANNOTATION_CLASS) => return Some((at, tag)),
                Some(tag) => self.position = at + tag.len,
                None => self.position = at + 1,
            }
        }
        self.position = source.len();
        None
    }

    /// Builds the segment for a marker whose start tag begins at `at`.
    fn build_marker(&mut self, at: usize, tag: &StartTag<'src>) -> Segment<'src> {
        let source = self.source;
        let open_end = at + tag.len;
        let (line, column) = self.lines.locate(at);

        if tag.self_closing {
            return self.malformed(
                at,
                open_end,
                MarkerError::SelfClosing {
                    tag: tag.name.to_string(),
                    line,
                    column,
                },
            );
        }

        let Some((close_start, close_end)) = find_closing_tag(source, open_end, tag.name) else {
            return self.malformed(
                at,
                open_end,
                MarkerError::Unclosed {
                    tag: tag.name.to_string(),
                    line,
                    column,
                },
            );
        };

        let entity_uri = match tag.attribute(ENTITY_ATTRIBUTE) {
            Some(uri) if !uri.trim().is_empty() => trim_cow(uri),
            _ => {
                return self.malformed(
                    at,
                    close_end,
                    MarkerError::MissingEntityReference { line, column },
                );
            }
        };

        let span = Span::new(at, close_end, line, column);
        let inner_span = self.lines.span(open_end, close_start);

        Segment::Marker(AnnotationMarker {
            span,
            inner_span,
            source: &source[at..close_end],
            inner: &source[open_end..close_start],
            tag_name: tag.name,
            annotation_id: tag.attribute(ANNOTATION_ID_ATTRIBUTE),
            entity_uri,
            link_state: LinkState::from_classes(tag.class_tokens()),
        })
    }

    fn malformed(&mut self, start: usize, end: usize, error: MarkerError) -> Segment<'src> {
        let source = self.source;
        Segment::Malformed {
            span: self.lines.span(start, end),
            text: &source[start..end],
            error,
        }
    }

    /// Emits the literal run from `literal_start` to `end`, if non-empty.
    fn take_literal(&mut self, end: usize) -> Option<Segment<'src>> {
        let start = self.literal_start;
        if start >= end {
            return None;
        }
        self.literal_start = end;
        let source = self.source;
        Some(Segment::Literal {
            span: self.lines.span(start, end),
            text: &source[start..end],
        })
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Segment<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(segment) = self.pending.take() {
            return Some(segment);
        }

        if let Some((at, tag)) = self.next_marker_start() {
            // The literal run must be located before the marker: line
            // tracking only moves forward.
            let literal = self.take_literal(at);
            let segment = self.build_marker(at, &tag);
            self.position = segment.span().end;
            self.literal_start = self.position;
            return match literal {
                Some(literal) => {
                    self.pending = Some(segment);
                    Some(literal)
                }
                None => Some(segment),
            };
        }

        self.take_literal(self.source.len())
    }
}

/// Returns the offset just past the comment starting at `at`, or `None` for
/// an unterminated comment.
fn skip_comment(source: &str, at: usize) -> Option<usize> {
    let body = at + COMMENT_OPEN.len();
    source[body..]
        .find(COMMENT_CLOSE)
        .map(|close| body + close + COMMENT_CLOSE.len())
}

/// Finds the closing tag matching an element named `name` whose content
/// starts at `from`, counting nested elements of the same name.
///
/// Returns the start and end offsets of the closing tag.
fn find_closing_tag(source: &str, from: usize, name: &str) -> Option<(usize, usize)> {
    let mut depth = 0usize;
    let mut position = from;

    while let Some(found) = source[position..].find('<') {
        let at = position + found;
        let rest = &source[at..];

        if rest.starts_with(COMMENT_OPEN) {
            position = skip_comment(source, at)?;
        } else if let Some((end_name, len)) = parse_end_tag(rest) {
            if end_name.eq_ignore_ascii_case(name) {
                if depth == 0 {
                    return Some((at, at + len));
                }
                depth -= 1;
            }
            position = at + len;
        } else if let Some(tag) = StartTag::parse(rest) {
            if tag.is_named(name) && !tag.self_closing {
                depth += 1;
            }
            position = at + tag.len;
        } else {
            position = at + 1;
        }
    }
    None
}

fn trim_cow(value: Cow<'_, str>) -> Cow<'_, str> {
    match value {
        Cow::Borrowed(s) => Cow::Borrowed(s.trim()),
        Cow::Owned(s) => Cow::Owned(s.trim().to_string()),
    }
}
