//! Integration tests for start tag parsing

use wordlift_markup::StartTag;

#[test]
fn parse_span() {
    let tag = StartTag::parse(r#"<span id="x" class="textannotation wl-link" itemid="urn:e">rest"#).unwrap();
    assert_eq!(tag.name, "span");
    assert_eq!(tag.attributes.len(), 3);
    assert!(!tag.self_closing);
    assert_eq!(tag.attribute("itemid").as_deref(), Some("urn:e"));
    assert!(tag.has_class("textannotation"));
    assert!(tag.has_class("wl-link"));
    assert!(!tag.has_class("wl"));
}

#[test]
fn attribute_names_ignore_case() {
    let tag = StartTag::parse(r#"<SPAN CLASS="textannotation" ItemId="urn:e">"#).unwrap();
    assert_eq!(tag.attribute("itemid").as_deref(), Some("urn:e"));
    assert!(tag.has_class("textannotation"));
}

#[test]
fn unquoted_and_boolean_attributes() {
    let tag = StartTag::parse("<span class=textannotation hidden itemid=urn:e>").unwrap();
    assert_eq!(tag.raw_attribute("class"), Some("textannotation"));
    assert_eq!(tag.raw_attribute("hidden"), Some(""));
    assert_eq!(tag.raw_attribute("itemid"), Some("urn:e"));
}

#[test]
fn class_tokens_split_on_whitespace() {
    let tag = StartTag::parse("<span class=\"  textannotation\n\twl-person  \">").unwrap();
    let tokens: Vec<&str> = tag.class_tokens().collect();
    assert_eq!(tokens, vec!["textannotation", "wl-person"]);
}

#[test]
fn self_closing_tag() {
    let tag = StartTag::parse("<span class=\"textannotation\" />").unwrap();
    assert!(tag.self_closing);
}

#[test]
fn not_start_tags() {
    assert!(StartTag::parse("</span>").is_none());
    assert!(StartTag::parse("<!-- comment -->").is_none());
    assert!(StartTag::parse("< span>").is_none());
    assert!(StartTag::parse("<span class=\"unterminated").is_none());
    assert!(StartTag::parse("plain").is_none());
}

#[test]
fn tag_length_covers_the_tag() {
    let html = "<span class='a'>inner";
    let tag = StartTag::parse(html).unwrap();
    assert_eq!(&html[..tag.len], "<span class='a'>");
}
