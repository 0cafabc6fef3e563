//! Error types for the WordLift content filter.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Only failures of the resolution infrastructure are errors. An entity that
//! simply does not exist is reported as `Ok(None)` by resolvers, and a
//! malformed annotation marker is contained by the scanner.

use std::fmt;

use thiserror::Error;

/// The main error type for WordLift operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a resolution error for the given entity URI.
    #[must_use]
    pub fn resolution(uri: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Resolution {
            uri: uri.into(),
            message: message.into(),
        })
    }

    /// Creates a permalink error for the given entity URI.
    #[must_use]
    pub fn permalink(uri: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Permalink {
            uri: uri.into(),
            message: message.into(),
        })
    }

    /// Creates an entity not found error.
    #[must_use]
    pub fn entity_not_found(uri: impl Into<String>) -> Self {
        Self::new(ErrorKind::EntityNotFound(uri.into()))
    }

    /// Creates a duplicate entity error.
    #[must_use]
    pub fn duplicate_entity(uri: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateEntity(uri.into()))
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidConfiguration(message.into()))
    }

    /// Returns true if this error came from the resolution infrastructure.
    ///
    /// Callers filtering content on the rendering path use this to decide
    /// whether to fall back to the unmodified content.
    #[must_use]
    pub fn is_resolution_failure(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Resolution { .. } | ErrorKind::Permalink { .. }
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The entity resolver failed (backend unavailable, timeout, ...).
    #[error("failed to resolve entity {uri}: {message}")]
    Resolution {
        /// The entity URI being resolved.
        uri: String,
        /// Description of the failure.
        message: String,
    },

    /// The permalink provider could not produce a URL for a resolved entity.
    #[error("failed to build permalink for entity {uri}: {message}")]
    Permalink {
        /// The entity URI.
        uri: String,
        /// Description of the failure.
        message: String,
    },

    /// Entity was not found in the store (mutations only).
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    /// An entity with the same URI already exists.
    #[error("duplicate entity: {0}")]
    DuplicateEntity(String),

    /// Configuration value was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Document or file being processed.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
    /// Column number in source.
    pub column: Option<usize>,
    /// Stack of operations that led to the error.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
        }
        if let (Some(line), Some(col)) = (self.line, self.column) {
            if self.source.is_some() {
                write!(f, ":{line}:{col}")?;
            } else {
                write!(f, "at {line}:{col}")?;
            }
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
