//! Parsed tag entries.

use std::borrow::Cow;

use allowtags_ir::Span;

use crate::literal;

/// One `key:"value"` pair, or the malformed remnant of one.
///
/// `key` and `value` are raw slices of the tag content: an invalid key
/// character stays part of the key, and escapes inside a quoted value are
/// not resolved (see [`ParsedEntry::unescaped_value`]). Offsets are
/// absolute source positions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParsedEntry {
    pub key: String,
    pub value: String,
    pub key_offset: u32,
    pub value_offset: u32,
    /// Just past the last value byte.
    pub value_end: u32,
    /// The value was opened with `"`.
    pub quoted: bool,
    /// The value was opened with `"` and the content ended first.
    pub quote_unterminated: bool,
    /// A `:` was seen between key and value.
    pub has_separator: bool,
}

impl ParsedEntry {
    /// Materialize an entry from content-relative spans.
    ///
    /// `to_source` maps a content offset to its source offset.
    pub(crate) fn from_raw(content: &str, raw: RawEntry, to_source: impl Fn(u32) -> u32) -> Self {
        ParsedEntry {
            key: slice(content, raw.key).to_owned(),
            value: slice(content, raw.value).to_owned(),
            key_offset: to_source(raw.key.start),
            value_offset: to_source(raw.value.start),
            value_end: to_source(raw.value.end),
            quoted: raw.quoted,
            quote_unterminated: raw.quote_unterminated,
            has_separator: raw.has_separator,
        }
    }

    /// The value with escapes resolved, as a reflection-style lookup sees it.
    ///
    /// Unquoted values are returned as-is. Returns `None` when a quoted value
    /// holds an escape sequence (or raw newline) that does not unquote.
    pub fn unescaped_value(&self) -> Option<Cow<'_, str>> {
        if !self.quoted {
            return Some(Cow::Borrowed(&self.value));
        }
        literal::unescape(&self.value).ok()
    }
}

/// Entry shape produced by the state machine, before slicing.
///
/// Spans are relative to the tag content. An empty value is a point span
/// at the offset diagnostics should use for it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RawEntry {
    pub key: Span,
    pub value: Span,
    pub quoted: bool,
    pub quote_unterminated: bool,
    pub has_separator: bool,
}

fn slice(content: &str, span: Span) -> &str {
    content.get(span.to_range()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn raw(key: Span, value: Span, quoted: bool) -> RawEntry {
        RawEntry {
            key,
            value,
            quoted,
            quote_unterminated: false,
            has_separator: true,
        }
    }

    #[test]
    fn from_raw_slices_and_maps_offsets() {
        let content = r#"json:"id""#;
        let entry = ParsedEntry::from_raw(
            content,
            raw(Span::new(0, 4), Span::new(6, 8), true),
            |at| at + 100,
        );

        assert_eq!(entry.key, "json");
        assert_eq!(entry.value, "id");
        assert_eq!(entry.key_offset, 100);
        assert_eq!(entry.value_offset, 106);
        assert_eq!(entry.value_end, 108);
    }

    #[test]
    fn from_raw_empty_value_keeps_point_offset() {
        let entry = ParsedEntry::from_raw("json:", raw(Span::new(0, 4), Span::point(5), false), |at| at);
        assert_eq!(entry.value, "");
        assert_eq!(entry.value_offset, 5);
    }

    #[test]
    fn unescaped_value_resolves_quotes() {
        let entry = ParsedEntry::from_raw(
            r#"f:"a\"b""#,
            raw(Span::new(0, 1), Span::new(3, 7), true),
            |at| at,
        );
        assert_eq!(entry.value, r#"a\"b"#);
        assert_eq!(entry.unescaped_value().as_deref(), Some("a\"b"));
    }

    #[test]
    fn unescaped_value_unquoted_is_raw() {
        let entry = ParsedEntry::from_raw(r"f:a\b", raw(Span::new(0, 1), Span::new(2, 5), false), |at| at);
        assert_eq!(entry.unescaped_value().as_deref(), Some(r"a\b"));
    }

    #[test]
    fn unescaped_value_rejects_bad_escape() {
        let entry = ParsedEntry::from_raw(r#"f:"\q""#, raw(Span::new(0, 1), Span::new(3, 5), true), |at| at);
        assert_eq!(entry.unescaped_value(), None);
    }
}
