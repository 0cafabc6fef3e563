//! Property tests across the scanner and the filter.

use proptest::prelude::*;
use wordlift_filter::ContentFilter;
use wordlift_foundation::{EntityRecord, LinkSettings};
use wordlift_storage::{EntityStore, SitePermalinks};

/// Text or markup containing no annotation marker.
fn plain_part() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 .,;:!?'\"&]{0,16}".prop_map(String::from),
        Just("<p>".to_string()),
        Just("</p>".to_string()),
        Just("<span class=\"textannotations\">".to_string()),
        Just("</span>".to_string()),
        Just("<br/>".to_string()),
        Just("<!-- <span class=\"textannotation\" itemid=\"urn:0\">x</span> -->".to_string()),
        Just(">".to_string()),
    ]
}

/// A marker for one of four entities with a link class and a label.
fn marker_part() -> impl Strategy<Value = (usize, &'static str, String)> {
    (
        0..4usize,
        prop_oneof![Just(""), Just(" wl-link"), Just(" wl-no-link")],
        "[a-zA-Z]{1,8}",
    )
}

fn marker(entity: usize, class: &str, label: &str) -> String {
    format!(r#"<span class="textannotation{class}" itemid="urn:{entity}">{label}</span>"#)
}

fn store(known: usize) -> EntityStore {
    (0..known)
        .map(|i| EntityRecord::new(format!("urn:{i}"), format!("Entity {i}")))
        .collect()
}

fn filter(known: usize) -> ContentFilter<EntityStore, SitePermalinks, LinkSettings> {
    ContentFilter::new(
        store(known),
        SitePermalinks::new("http://example.org").unwrap(),
        LinkSettings::default(),
    )
}

proptest! {
    #[test]
    fn content_without_markers_is_unchanged(
        parts in prop::collection::vec(plain_part(), 0..24),
        by_default in any::<bool>(),
    ) {
        let html = parts.concat();
        let settings = LinkSettings::default().with_link_by_default(by_default);
        prop_assert_eq!(filter(4).rewrite_with(&html, settings).unwrap(), html);
    }

    #[test]
    fn unknown_entities_pass_through(
        markers in prop::collection::vec(marker_part(), 0..12),
        separator in plain_part(),
        by_default in any::<bool>(),
    ) {
        let html = markers
            .iter()
            .map(|(entity, class, label)| marker(*entity, class, label))
            .collect::<Vec<_>>()
            .join(&separator.replace('<', "").replace('>', ""));
        let settings = LinkSettings::default().with_link_by_default(by_default);
        prop_assert_eq!(filter(0).rewrite_with(&html, settings).unwrap(), html);
    }

    #[test]
    fn unlinked_markers_keep_their_order(
        markers in prop::collection::vec(marker_part(), 0..12),
    ) {
        let mut html = String::new();
        let mut expected = String::new();
        for (i, (entity, _, label)) in markers.iter().enumerate() {
            let literal = format!(" [{i}] ");
            html.push_str(&literal);
            html.push_str(&marker(*entity, " wl-no-link", label));
            expected.push_str(&literal);
            expected.push_str(label);
        }
        prop_assert_eq!(filter(4).rewrite(&html).unwrap(), expected);
    }

    #[test]
    fn each_marker_becomes_at_most_one_link(
        markers in prop::collection::vec(marker_part(), 0..12),
        known in 0..5usize,
        by_default in any::<bool>(),
    ) {
        let html: String = markers
            .iter()
            .map(|(entity, class, label)| marker(*entity, class, label))
            .collect();
        let settings = LinkSettings::default().with_link_by_default(by_default);
        let rewrite = filter(known).rewrite_report(&html, settings).unwrap();

        let expected_links = markers
            .iter()
            .filter(|(entity, class, _)| {
                *entity < known && (*class == " wl-link" || (*class == "" && by_default))
            })
            .count();
        prop_assert_eq!(rewrite.stats.linked, expected_links);
        prop_assert_eq!(rewrite.stats.markers(), markers.len());
        prop_assert_eq!(rewrite.html.matches("<a ").count(), expected_links);
    }
}
