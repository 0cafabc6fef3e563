//! The content filter.
//!
//! [`ContentFilter`] rewrites annotated HTML: every well-formed annotation
//! marker is resolved, decided on, and rendered in place, while everything
//! else is copied through byte for byte.

use std::collections::HashSet;

use tracing::{debug, warn};
use wordlift_foundation::{
    ConfigurationSource, EntityRecord, EntityResolver, Error, ErrorContext, ErrorKind,
    LinkDecision, LinkDecisionKind, LinkSettings, PermalinkProvider, Result,
};
use wordlift_markup::{AnnotationMarker, Scanner, Segment};

use crate::options::FilterOptions;
use crate::policy::resolve_decision;
use crate::render::render_marker;

/// Counts of what a rewrite did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RewriteStats {
    /// Markers replaced by a link.
    pub linked: usize,
    /// Markers replaced by their text.
    pub unlinked: usize,
    /// Markers left untouched because their entity is unknown.
    pub passed_through: usize,
    /// Malformed markers left untouched.
    pub malformed: usize,
}

impl RewriteStats {
    /// Returns the number of well-formed markers seen.
    #[must_use]
    pub fn markers(&self) -> usize {
        self.linked + self.unlinked + self.passed_through
    }

    fn record(&mut self, kind: LinkDecisionKind) {
        match kind {
            LinkDecisionKind::ShouldLink => self.linked += 1,
            LinkDecisionKind::ShouldNotLink => self.unlinked += 1,
            LinkDecisionKind::PassThrough => self.passed_through += 1,
        }
    }
}

/// The result of a rewrite.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rewrite {
    /// The rewritten HTML.
    pub html: String,
    /// What the rewrite did.
    pub stats: RewriteStats,
}

/// Rewrites annotation markers into entity links.
///
/// The filter holds no per-document state, so one instance can serve any
/// number of threads as long as its collaborators can.
#[derive(Debug, Clone)]
pub struct ContentFilter<R, P, C> {
    resolver: R,
    permalinks: P,
    config: C,
    options: FilterOptions,
}

impl<R, P, C> ContentFilter<R, P, C>
where
    R: EntityResolver,
    P: PermalinkProvider,
    C: ConfigurationSource,
{
    /// Creates a filter with the default options.
    #[must_use]
    pub fn new(resolver: R, permalinks: P, config: C) -> Self {
        Self {
            resolver,
            permalinks,
            config,
            options: FilterOptions::default(),
        }
    }

    /// Builder method to set the rendering options.
    #[must_use]
    pub fn with_options(mut self, options: FilterOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the rendering options.
    #[must_use]
    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Returns the configuration source.
    #[must_use]
    pub fn config(&self) -> &C {
        &self.config
    }

    /// Rewrites `html` using the current configuration.
    ///
    /// The configuration is read once, before the first marker.
    ///
    /// Rewriting is idempotent for markers that end up unlinked (their
    /// markup is gone) or passed through (they are unchanged). Linked
    /// markers become plain anchors, which a second pass leaves alone: the
    /// transform is one-way and cannot be undone by running it again.
    ///
    /// # Errors
    ///
    /// Returns the resolver's or permalink provider's error if either fails.
    /// Unknown entities and malformed markers are not errors.
    pub fn rewrite(&self, html: &str) -> Result<String> {
        self.rewrite_with(html, self.config.snapshot())
    }

    /// Rewrites `html` with an explicit configuration snapshot.
    ///
    /// # Errors
    ///
    /// See [`rewrite`](Self::rewrite).
    pub fn rewrite_with(&self, html: &str, settings: LinkSettings) -> Result<String> {
        self.rewrite_report(html, settings).map(|rewrite| rewrite.html)
    }

    /// Rewrites `html` and reports what was done.
    ///
    /// # Errors
    ///
    /// See [`rewrite`](Self::rewrite).
    pub fn rewrite_report(&self, html: &str, settings: LinkSettings) -> Result<Rewrite> {
        let mut out = String::with_capacity(html.len() + html.len() / 8);
        let mut stats = RewriteStats::default();

        for segment in Scanner::new(html) {
            match segment {
                Segment::Literal { text, .. } => out.push_str(text),
                Segment::Malformed { text, error, .. } => {
                    warn!(%error, "leaving malformed annotation untouched");
                    stats.malformed += 1;
                    out.push_str(text);
                }
                Segment::Marker(marker) => {
                    let (decision, entity) = self.decide(&marker, settings).map_err(|mut err| {
                        let mut context = err.context.take().unwrap_or_default();
                        if context.line.is_none() {
                            context = context
                                .with_position(marker.span.line as usize, marker.span.column as usize);
                        }
                        err.with_context(context.with_frame(format!("annotation of {}", marker.entity_uri)))
                    })?;
                    debug!(
                        uri = %marker.entity_uri,
                        link_state = %marker.link_state,
                        decision = ?decision.kind(),
                        "annotation rewritten"
                    );
                    render_marker(&mut out, &marker, &decision, entity.as_ref(), &self.options);
                    stats.record(decision.kind());
                }
            }
        }

        debug!(
            linked = stats.linked,
            unlinked = stats.unlinked,
            passed_through = stats.passed_through,
            malformed = stats.malformed,
            link_by_default = settings.link_by_default,
            "content filtered"
        );
        Ok(Rewrite { html: out, stats })
    }

    /// Resolves a marker's entity and decides how to render it.
    fn decide(
        &self,
        marker: &AnnotationMarker<'_>,
        settings: LinkSettings,
    ) -> Result<(LinkDecision, Option<EntityRecord>)> {
        let entity = self.resolver.resolve(&marker.entity_uri)?;
        let decision = resolve_decision(marker.link_state, entity.is_some(), settings, || {
            match &entity {
                Some(entity) => self.permalinks.permalink_for(entity),
                None => Err(Error::new(ErrorKind::Internal(
                    "link decided for an unresolved entity".to_string(),
                ))),
            }
        })?;
        Ok((decision, entity))
    }
}

/// Returns the unique entity URIs referenced by well-formed markers in
/// `html`, in order of first appearance.
#[must_use]
pub fn referenced_entities(html: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    Scanner::markers(html)
        .into_iter()
        .map(|marker| marker.entity_uri.into_owned())
        .filter(|uri| seen.insert(uri.clone()))
        .collect()
}
