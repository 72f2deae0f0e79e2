//! Source literal unquoting.
//!
//! A tag is written either as a raw literal (`` `json:"id"` ``) or as an
//! interpreted literal (`"json:\"id\""`). Both must be reduced to their
//! content before the state machine runs. Interpreted literals follow the
//! usual escape set: `\a \b \f \n \r \t \v \\ \"`, `\xHH`, `\uHHHH`,
//! `\UHHHHHHHH` and three-digit octal `\OOO`.
//!
//! When a literal cannot be unquoted the caller still gets a best-effort
//! content string with the outer quote characters trimmed, so scanning can
//! proceed and report everything else it finds.

use std::borrow::Cow;
use std::fmt;
use std::str::CharIndices;

use crate::offset;

/// Characters trimmed from both ends of a literal that failed to unquote.
const TAG_QUOTES: &[char] = &['"', '`'];

/// How a literal is delimited.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// `` `...` ``: no escapes, carriage returns dropped.
    Raw,
    /// `"..."`: backslash escapes, no raw newlines.
    Interpreted,
}

impl Delimiter {
    /// Detect the delimiter of a literal, requiring matching open and close.
    pub fn of(text: &str) -> Option<Delimiter> {
        let bytes = text.as_bytes();
        if bytes.len() < 2 {
            return None;
        }
        match (bytes[0], bytes[bytes.len() - 1]) {
            (b'`', b'`') => Some(Delimiter::Raw),
            (b'"', b'"') => Some(Delimiter::Interpreted),
            _ => None,
        }
    }
}

/// Why a literal could not be unquoted.
///
/// Offsets are byte offsets into the literal body (after the opening quote).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnquoteError {
    /// Not wrapped in a matching pair of `"` or `` ` ``.
    NotDelimited,
    /// The delimiter appears unescaped inside the body.
    StrayDelimiter { offset: usize },
    /// A raw newline inside an interpreted literal.
    Newline { offset: usize },
    /// An unknown or truncated escape sequence.
    InvalidEscape { offset: usize },
}

impl fmt::Display for UnquoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnquoteError::NotDelimited => write!(f, "literal is not delimited by quotes"),
            UnquoteError::StrayDelimiter { offset } => {
                write!(f, "unexpected closing delimiter at offset {offset}")
            }
            UnquoteError::Newline { offset } => {
                write!(f, "newline in interpreted literal at offset {offset}")
            }
            UnquoteError::InvalidEscape { offset } => {
                write!(f, "invalid escape sequence at offset {offset}")
            }
        }
    }
}

impl std::error::Error for UnquoteError {}

/// Translates content offsets back to literal body offsets.
///
/// Unquoting can shrink the text: an escape such as `\"` becomes one byte,
/// and raw literals drop `\r`. Each anchor `(at, extra)` records that from
/// content offset `at` on, the body runs `extra` bytes ahead. Offsets after
/// a byte escape that decoded lossily are approximate.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct OffsetMap {
    anchors: Vec<(u32, u32)>,
}

impl OffsetMap {
    /// Body offset of the content byte at `at`.
    pub fn to_body(&self, at: u32) -> u32 {
        let after = self.anchors.partition_point(|&(start, _)| start <= at);
        let extra = after
            .checked_sub(1)
            .and_then(|i| self.anchors.get(i))
            .map_or(0, |&(_, extra)| extra);
        at.saturating_add(extra)
    }

    fn record(&mut self, content_len: usize, body_pos: usize) {
        let extra = body_pos.saturating_sub(content_len);
        self.anchors.push((offset(content_len), offset(extra)));
    }
}

/// Literal content, with the map back into the literal body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unquoted<'a> {
    pub content: Cow<'a, str>,
    pub map: OffsetMap,
}

impl<'a> Unquoted<'a> {
    fn borrowed(content: &'a str) -> Self {
        Unquoted {
            content: Cow::Borrowed(content),
            map: OffsetMap::default(),
        }
    }
}

/// Unquote a delimited literal into its content.
///
/// Borrows from `text` whenever no rewriting is needed.
pub fn unquote(text: &str) -> Result<Unquoted<'_>, UnquoteError> {
    let delimiter = Delimiter::of(text).ok_or(UnquoteError::NotDelimited)?;
    let body = &text[1..text.len() - 1];
    match delimiter {
        Delimiter::Raw => unquote_raw(body),
        Delimiter::Interpreted => unescape_mapped(body),
    }
}

fn unquote_raw(body: &str) -> Result<Unquoted<'_>, UnquoteError> {
    if let Some(offset) = body.find('`') {
        return Err(UnquoteError::StrayDelimiter { offset });
    }
    if !body.contains('\r') {
        return Ok(Unquoted::borrowed(body));
    }

    let mut map = OffsetMap::default();
    for (dropped, (i, _)) in body.match_indices('\r').enumerate() {
        map.record(i - dropped, i + 1);
    }
    Ok(Unquoted {
        content: Cow::Owned(body.replace('\r', "")),
        map,
    })
}

/// Resolve the escapes of an interpreted literal body (no outer quotes).
///
/// Also used to recover the logical value of a quoted tag value. Byte
/// escapes that do not form valid UTF-8 decode to U+FFFD.
pub fn unescape(body: &str) -> Result<Cow<'_, str>, UnquoteError> {
    unescape_mapped(body).map(|unquoted| unquoted.content)
}

fn unescape_mapped(body: &str) -> Result<Unquoted<'_>, UnquoteError> {
    if !body.contains(['\\', '"', '\n']) {
        return Ok(Unquoted::borrowed(body));
    }

    let mut out: Vec<u8> = Vec::with_capacity(body.len());
    let mut map = OffsetMap::default();
    let mut chars = body.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return Err(UnquoteError::StrayDelimiter { offset: i }),
            '\n' => return Err(UnquoteError::Newline { offset: i }),
            '\\' => {
                let invalid = UnquoteError::InvalidEscape { offset: i };
                let Some((_, esc)) = chars.next() else {
                    return Err(invalid);
                };
                match esc {
                    'a' => out.push(0x07),
                    'b' => out.push(0x08),
                    'f' => out.push(0x0C),
                    'n' => out.push(b'\n'),
                    'r' => out.push(b'\r'),
                    't' => out.push(b'\t'),
                    'v' => out.push(0x0B),
                    '\\' => out.push(b'\\'),
                    '"' => out.push(b'"'),
                    'x' => {
                        let value = take_digits(&mut chars, 2, 16).ok_or(invalid)?;
                        out.push(low_byte(value));
                    }
                    'u' | 'U' => {
                        let width = if esc == 'u' { 4 } else { 8 };
                        let value = take_digits(&mut chars, width, 16).ok_or(invalid.clone())?;
                        let decoded = char::from_u32(value).ok_or(invalid)?;
                        push_char(&mut out, decoded);
                    }
                    '0'..='7' => {
                        let high = esc.to_digit(8).unwrap_or_default();
                        let rest = take_digits(&mut chars, 2, 8).ok_or(invalid.clone())?;
                        let value = high * 64 + rest;
                        if value > 0xFF {
                            return Err(invalid);
                        }
                        out.push(low_byte(value));
                    }
                    _ => return Err(invalid),
                }
                map.record(out.len(), body.len() - chars.as_str().len());
            }
            _ => push_char(&mut out, c),
        }
    }

    let content = match String::from_utf8(out) {
        Ok(s) => s,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    };
    Ok(Unquoted {
        content: Cow::Owned(content),
        map,
    })
}

fn take_digits(chars: &mut CharIndices<'_>, count: usize, radix: u32) -> Option<u32> {
    let mut value = 0u32;
    for _ in 0..count {
        let (_, c) = chars.next()?;
        value = value * radix + c.to_digit(radix)?;
    }
    Some(value)
}

fn low_byte(value: u32) -> u8 {
    value.to_le_bytes()[0]
}

fn push_char(out: &mut Vec<u8>, c: char) {
    let mut buf = [0u8; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}

/// Content ready for scanning, plus where it starts inside the literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prepared<'a> {
    pub content: Cow<'a, str>,
    /// Byte offset of the first content byte, relative to the literal start.
    pub content_start: u32,
    /// Content offsets to body offsets. Empty for the trimmed fallback.
    pub map: OffsetMap,
    /// Set when unquoting failed and `content` is the trimmed fallback.
    pub error: Option<UnquoteError>,
}

impl Prepared<'_> {
    /// Literal-relative offset of the content byte at `at`.
    pub fn literal_offset(&self, at: u32) -> u32 {
        self.content_start.saturating_add(self.map.to_body(at))
    }
}

/// Unquote `text`, falling back to trimming the outer quote characters.
pub fn prepare(text: &str) -> Prepared<'_> {
    match unquote(text) {
        Ok(Unquoted { content, map }) => Prepared {
            content,
            content_start: 1,
            map,
            error: None,
        },
        Err(error) => {
            let trimmed = text.trim_start_matches(TAG_QUOTES);
            let lead = text.len() - trimmed.len();
            tracing::debug!(%error, "tag literal fell back to quote trimming");
            Prepared {
                content: Cow::Borrowed(trimmed.trim_end_matches(TAG_QUOTES)),
                content_start: offset(lead),
                map: OffsetMap::default(),
                error: Some(error),
            }
        }
    }
}
