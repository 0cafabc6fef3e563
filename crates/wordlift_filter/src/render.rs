//! Rendering of annotation markers.

use wordlift_foundation::{EntityRecord, LinkDecision};
use wordlift_markup::{AnnotationMarker, escape_attribute};

use crate::options::FilterOptions;

/// Appends the rendering of `marker` under `decision` to `out`.
///
/// `entity` is the resolved record, used for the anchor title.
pub fn render_marker(
    out: &mut String,
    marker: &AnnotationMarker<'_>,
    decision: &LinkDecision,
    entity: Option<&EntityRecord>,
    options: &FilterOptions,
) {
    match decision {
        LinkDecision::Link(url) => render_link(out, marker, url, entity, options),
        LinkDecision::NoLink => out.push_str(marker.inner),
        LinkDecision::PassThrough => out.push_str(marker.source),
    }
}

/// Appends `<a class='…' href='…'>inner</a>` to `out`.
fn render_link(
    out: &mut String,
    marker: &AnnotationMarker<'_>,
    url: &str,
    entity: Option<&EntityRecord>,
    options: &FilterOptions,
) {
    out.push_str("<a class='");
    out.push_str(&escape_attribute(&options.link_class));
    out.push_str("' href='");
    out.push_str(&escape_attribute(url));
    out.push('\'');

    if let Some(title) = entity.and_then(|entity| title_for(marker, entity, options)) {
        out.push_str(" title='");
        out.push_str(&escape_attribute(title));
        out.push('\'');
    }

    out.push('>');
    out.push_str(marker.inner);
    out.push_str("</a>");
}

/// The anchor title: the entity title, when the label says something else.
fn title_for<'e>(
    marker: &AnnotationMarker<'_>,
    entity: &'e EntityRecord,
    options: &FilterOptions,
) -> Option<&'e str> {
    let title = entity.title.trim();
    if !options.title_attributes || title.is_empty() || entity.has_title(&marker.label()) {
        return None;
    }
    Some(title)
}
