//! Integration tests for attribute decoding and escaping

use std::borrow::Cow;

use wordlift_markup::{decode_entities, escape_attribute};

#[test]
fn decode_named_and_numeric() {
    assert_eq!(decode_entities("a &amp; b"), "a & b");
    assert_eq!(decode_entities("&quot;x&quot; &apos;y&apos;"), "\"x\" 'y'");
    assert_eq!(decode_entities("&lt;&gt;"), "<>");
    assert_eq!(decode_entities("&#39;&#x27;"), "''");
}

#[test]
fn decode_leaves_unknown_references() {
    assert_eq!(decode_entities("&nbsp; & &;"), "&nbsp; & &;");
}

#[test]
fn decode_borrows_when_nothing_to_do() {
    assert!(matches!(decode_entities("http://example.org"), Cow::Borrowed(_)));
}

#[test]
fn escape_for_single_quoted_attributes() {
    assert_eq!(escape_attribute("O'Reilly"), "O&#039;Reilly");
    assert_eq!(
        escape_attribute("http://example.org/?a=1&b=<2>"),
        "http://example.org/?a=1&amp;b=&lt;2&gt;"
    );
    assert!(matches!(escape_attribute("http://example.org/link"), Cow::Borrowed(_)));
}
