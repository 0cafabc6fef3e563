//! Annotation marker scanner for WordLift-annotated HTML.
//!
//! Annotated content carries inline markers such as
//!
//! ```html
//! <span id="urn:enhancement-4b54b56d" class="textannotation wl-link"
//!       itemid="http://data.example.org/entity">Matt Mullenweg</span>
//! ```
//!
//! The [`Scanner`] splits a fragment into an ordered sequence of
//! [`Segment`]s: literal runs of markup, well-formed [`AnnotationMarker`]s,
//! and malformed markers that must be left untouched.
//!
//! # Modules
//!
//! - [`span`] - Source location tracking
//! - [`tag`] - Start tag and attribute parsing
//! - [`escape`] - Attribute entity decoding and escaping
//! - [`marker`] - Annotation markers and marker errors
//! - [`scanner`] - The segment iterator

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod escape;
pub mod marker;
pub mod scanner;
pub mod span;
pub mod tag;


pub use escape::{decode_entities, escape_attribute};
pub use marker::{AnnotationMarker, MarkerError, TEXT_ANNOTATION_CLASS};
pub use scanner::{Scanner, Segment};
pub use span::Span;
pub use tag::{Attribute, StartTag};
