//! Source location tracking.
//!
//! `Span` records where each segment of a document starts and ends, so that
//! the rewriter can copy untouched regions byte for byte and report
//! problems by line and column.

/// A span of source markup.
///
/// Tracks byte offsets and the line/column where the span starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Span {
    /// Byte offset where this span starts.
    pub start: usize,
    /// Byte offset where this span ends (exclusive).
    pub end: usize,
    /// 1-based line number where this span starts.
    pub line: u32,
    /// 1-based column number where this span starts.
    pub column: u32,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Returns the length of this span in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if this span is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the text this span covers in the given source.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

/// Incremental byte offset to line/column conversion.
///
/// Offsets must be requested in non-decreasing order, which is how the
/// scanner walks a document.
#[derive(Debug, Clone)]
pub(crate) struct LineTracker<'src> {
    source: &'src str,
    offset: usize,
    line: u32,
    column: u32,
}

impl<'src> LineTracker<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the line and column of `offset`.
    pub(crate) fn locate(&mut self, offset: usize) -> (u32, u32) {
        debug_assert!(offset >= self.offset, "offsets must not go backwards");
        for c in self.source[self.offset..offset].chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.offset = offset;
        (self.line, self.column)
    }

    /// Builds a span from `start` to `end`.
    pub(crate) fn span(&mut self, start: usize, end: usize) -> Span {
        let (line, column) = self.locate(start);
        Span::new(start, end, line, column)
    }
}
