//! Start tag and attribute parsing.
//!
//! Only as much HTML as marker detection needs: a start tag's name, its
//! attributes, and whether it closes itself. Structural characters are all
//! ASCII, so byte positions found here are always valid `str` boundaries.

use std::borrow::Cow;

use crate::escape::decode_entities;

/// An attribute of a start tag, as written in the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Attribute<'src> {
    /// Attribute name as written.
    pub name: &'src str,
    /// Raw (undecoded) value, `None` for boolean attributes.
    pub value: Option<&'src str>,
}

/// A parsed start tag such as `<span id="x" class="textannotation">`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartTag<'src> {
    /// Tag name as written.
    pub name: &'src str,
    /// Attributes in source order.
    pub attributes: Vec<Attribute<'src>>,
    /// True for `<tag ... />`.
    pub self_closing: bool,
    /// Length of the tag in bytes, `<` and `>` included.
    pub len: usize,
}

impl<'src> StartTag<'src> {
    /// Parses the start tag at the beginning of `input`.
    ///
    /// Returns `None` when `input` does not start with a complete start tag
    /// (closing tags, comments, a stray `<`, an unterminated tag or quote).
    #[must_use]
    pub fn parse(input: &'src str) -> Option<Self> {
        let bytes = input.as_bytes();
        if bytes.first() != Some(&b'<') || !bytes.get(1)?.is_ascii_alphabetic() {
            return None;
        }

        let name_end = 1 + name_len(&bytes[1..]);
        let name = &input[1..name_end];
        let mut attributes = Vec::new();
        let mut i = name_end;

        loop {
            i += bytes[i..].iter().take_while(|b| b.is_ascii_whitespace()).count();
            match bytes.get(i)? {
                b'>' => {
                    return Some(Self {
                        name,
                        attributes,
                        self_closing: false,
                        len: i + 1,
                    });
                }
                b'/' if bytes.get(i + 1) == Some(&b'>') => {
                    return Some(Self {
                        name,
                        attributes,
                        self_closing: true,
                        len: i + 2,
                    });
                }
                b'/' | b'=' | b'"' | b'\'' => {
                    // Stray punctuation between attributes.
                    i += 1;
                }
                _ => {
                    let (attribute, next) = parse_attribute(input, i)?;
                    attributes.push(attribute);
                    i = next;
                }
            }
        }
    }

    /// Returns the raw value of the first attribute named `name`
    /// (ASCII case-insensitive).
    #[must_use]
    pub fn raw_attribute(&self, name: &str) -> Option<&'src str> {
        self.attributes
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
            .map(|a| a.value.unwrap_or(""))
    }

    /// Returns the entity-decoded value of the attribute named `name`.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<Cow<'src, str>> {
        self.raw_attribute(name).map(decode_entities)
    }

    /// Iterates over the tokens of the `class` attribute.
    pub fn class_tokens(&self) -> impl Iterator<Item = &'src str> + use<'src> {
        self.raw_attribute("class")
            .unwrap_or("")
            .split_ascii_whitespace()
    }

    /// Returns true if the `class` attribute contains `token`.
    #[must_use]
    pub fn has_class(&self, token: &str) -> bool {
        self.class_tokens().any(|t| t == token)
    }

    /// Returns true if this tag's name matches `name` (ASCII case-insensitive).
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// Length of the tag or attribute name at the start of `bytes`.
fn name_len(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b':' | b'.'))
        .count()
}

/// Parses one attribute starting at `start`, returning it and the offset
/// just past it.
fn parse_attribute(input: &str, start: usize) -> Option<(Attribute<'_>, usize)> {
    let bytes = input.as_bytes();
    let mut i = start;
    while i < bytes.len()
        && !bytes[i].is_ascii_whitespace()
        && !matches!(bytes[i], b'=' | b'>' | b'/' | b'"' | b'\'')
    {
        i += 1;
    }
    let name = &input[start..i];

    let after_name = i;
    i += bytes[i..].iter().take_while(|b| b.is_ascii_whitespace()).count();
    if bytes.get(i) != Some(&b'=') {
        return Some((Attribute { name, value: None }, after_name));
    }
    i += 1;
    i += bytes[i..].iter().take_while(|b| b.is_ascii_whitespace()).count();

    match *bytes.get(i)? {
        quote @ (b'"' | b'\'') => {
            let len = bytes[i + 1..].iter().position(|&b| b == quote)?;
            let value = &input[i + 1..i + 1 + len];
            Some((
                Attribute {
                    name,
                    value: Some(value),
                },
                i + len + 2,
            ))
        }
        _ => {
            let len = bytes[i..]
                .iter()
                .take_while(|b| !b.is_ascii_whitespace() && **b != b'>')
                .count();
            Some((
                Attribute {
                    name,
                    value: Some(&input[i..i + len]),
                },
                i + len,
            ))
        }
    }
}

/// Returns the name of the closing tag at the start of `input` and the
/// length of the whole tag, or `None` if `input` is not a closing tag.
pub(crate) fn parse_end_tag(input: &str) -> Option<(&str, usize)> {
    let rest = input.strip_prefix("</")?;
    let len = name_len(rest.as_bytes());
    if len == 0 {
        return None;
    }
    let close = rest[len..].find('>')?;
    Some((&rest[..len], 2 + len + close + 1))
}
