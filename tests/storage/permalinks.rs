//! Integration tests for entity permalinks

use wordlift_foundation::{EntityRecord, ErrorKind, PermalinkProvider};
use wordlift_storage::SitePermalinks;

#[test]
fn permalink_under_entity_base() {
    let permalinks = SitePermalinks::new("http://example.org").unwrap();
    let record = EntityRecord::new("urn:e", "Matt Mullenweg");
    assert_eq!(
        permalinks.permalink_for(&record).unwrap(),
        "http://example.org/entity/matt-mullenweg/"
    );
}

#[test]
fn custom_and_empty_entity_base() {
    let record = EntityRecord::new("urn:e", "WordPress");
    let vocabulary = SitePermalinks::new("https://example.org/blog/")
        .unwrap()
        .with_entity_base("/vocabulary/");
    assert_eq!(vocabulary.entity_base(), "vocabulary");
    assert_eq!(
        vocabulary.permalink_for(&record).unwrap(),
        "https://example.org/blog/vocabulary/wordpress/"
    );

    let root = SitePermalinks::new("https://example.org").unwrap().with_entity_base("");
    assert_eq!(root.permalink_for(&record).unwrap(), "https://example.org/wordpress/");
}

#[test]
fn explicit_permalink_is_used_as_is() {
    let permalinks = SitePermalinks::new("http://example.org").unwrap();
    let record = EntityRecord::new("urn:e", "Matt").with_permalink("http://example.org/link");
    assert_eq!(permalinks.permalink_for(&record).unwrap(), "http://example.org/link");
}

#[test]
fn missing_slug_is_a_permalink_error() {
    let permalinks = SitePermalinks::new("http://example.org").unwrap();
    let record = EntityRecord::new("urn:e", "???");
    let err = permalinks.permalink_for(&record).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Permalink { .. }));
    assert!(err.is_resolution_failure());
}

#[test]
fn base_url_must_be_http() {
    for bad in ["", "example.org", "ftp://example.org", "http://", "https:///"] {
        let err = SitePermalinks::new(bad).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidConfiguration(_)), "{bad}");
    }
    assert_eq!(
        SitePermalinks::new(" https://example.org// ").unwrap().base_url(),
        "https://example.org"
    );
}
