//! The tag state machine.
//!
//! A tag is a sequence of `key:"value"` pairs optionally separated by
//! spaces. Keys are non-control characters other than space, `"` and `:`.
//! Values are double-quoted and may contain `\"`.
//!
//! [`ScanState::step`] is a pure transition: it consumes one character at a
//! content offset and returns the next state, at most one finished entry and
//! at most one problem. The entry under construction travels inside the
//! state, so there is never more than one and it disappears the moment it
//! is finished. [`ScanState::finish`] flushes whatever is pending at end of
//! input.
//!
//! Quirks matching reflection-style tag parsing:
//! - `ValueEnd` swallows the character after a closing quote whatever it is.
//! - A space or control character inside a key is reported but stays part
//!   of the key text.

use allowtags_ir::Span;

use crate::entry::RawEntry;
use crate::problem::{TagProblem, TagProblemKind};

pub const KV_SEPARATOR: char = ':';
pub const VALUE_QUOTE: char = '"';
pub const ESCAPE_CHAR: char = '\\';

/// Characters separating pairs. Other whitespace (tab, newline) is not a
/// separator: it is a control character and reported as such.
pub const TAG_SEPARATORS: &[char] = &[' '];

/// Non-control characters a key may not contain.
const INVALID_KEY: &[char] = &[' ', '"', ':'];

#[inline]
fn is_separator(c: char) -> bool {
    TAG_SEPARATORS.contains(&c)
}

#[inline]
fn is_invalid_key(c: char) -> bool {
    INVALID_KEY.contains(&c)
}

/// The part of an entry known once its key is closed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pending {
    /// Key text; a point span for an empty key.
    pub key: Span,
    pub has_separator: bool,
}

impl Pending {
    fn finish(self, value: Span, quoted: bool, quote_unterminated: bool) -> RawEntry {
        RawEntry {
            key: self.key,
            value,
            quoted,
            quote_unterminated,
            has_separator: self.has_separator,
        }
    }
}

/// Scanner state. Offsets are relative to the tag content.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum ScanState {
    /// Between pairs.
    #[default]
    Separator,
    /// Inside a key that started at `start`.
    Key { start: u32 },
    /// Just after the `:`.
    KvSep { pending: Pending },
    /// Just after the opening `"`.
    ValueStart { pending: Pending },
    /// Inside a value. `escapes` counts the current run of backslashes.
    Value {
        pending: Pending,
        start: u32,
        quoted: bool,
        escapes: u32,
    },
    /// Just after the closing `"`.
    ValueEnd,
}

/// Result of one transition.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Step {
    pub next: ScanState,
    pub entry: Option<RawEntry>,
    pub problem: Option<TagProblemKind>,
}

impl Step {
    fn to(next: ScanState) -> Self {
        Step {
            next,
            entry: None,
            problem: None,
        }
    }

    fn finished(next: ScanState, entry: RawEntry) -> Self {
        Step {
            next,
            entry: Some(entry),
            problem: None,
        }
    }

    fn invalid_key_char(next: ScanState) -> Self {
        Step {
            next,
            entry: None,
            problem: Some(TagProblemKind::InvalidKeyChar),
        }
    }

    /// The step's problem located at the character that caused it.
    pub fn problem_at(&self, at: u32) -> Option<TagProblem> {
        self.problem.clone().map(|kind| TagProblem::new(kind, at))
    }
}

impl ScanState {
    /// Consume character `c` found at content offset `at`.
    pub fn step(self, at: u32, c: char) -> Step {
        // Control characters are only legal inside values.
        if c.is_control() && !matches!(self, ScanState::Value { .. }) {
            return Step::invalid_key_char(self);
        }

        match self {
            ScanState::Separator => {
                if is_separator(c) {
                    Step::to(self)
                } else if c == KV_SEPARATOR {
                    Step::to(ScanState::KvSep {
                        pending: Pending {
                            key: Span::point(at),
                            has_separator: true,
                        },
                    })
                } else if is_invalid_key(c) {
                    Step::invalid_key_char(self)
                } else {
                    Step::to(ScanState::Key { start: at })
                }
            }

            ScanState::Key { start } => {
                if c == KV_SEPARATOR {
                    Step::to(ScanState::KvSep {
                        pending: Pending {
                            key: Span::new(start, at),
                            has_separator: true,
                        },
                    })
                } else if c == VALUE_QUOTE {
                    Step::to(ScanState::ValueStart {
                        pending: Pending {
                            key: Span::new(start, at),
                            has_separator: false,
                        },
                    })
                } else if is_invalid_key(c) {
                    Step::invalid_key_char(self)
                } else {
                    Step::to(self)
                }
            }

            ScanState::KvSep { pending } => {
                if is_separator(c) {
                    let value = Span::point(at.saturating_sub(1));
                    Step::finished(ScanState::Separator, pending.finish(value, false, false))
                } else if c == VALUE_QUOTE {
                    Step::to(ScanState::ValueStart { pending })
                } else {
                    Step::to(ScanState::Value {
                        pending,
                        start: at,
                        quoted: false,
                        escapes: u32::from(c == ESCAPE_CHAR),
                    })
                }
            }

            ScanState::ValueStart { pending } => {
                if c == VALUE_QUOTE {
                    let value = Span::point(at.saturating_sub(1));
                    Step::finished(ScanState::ValueEnd, pending.finish(value, true, false))
                } else {
                    Step::to(ScanState::Value {
                        pending,
                        start: at,
                        quoted: true,
                        escapes: u32::from(c == ESCAPE_CHAR),
                    })
                }
            }

            ScanState::Value {
                pending,
                start,
                quoted,
                escapes,
            } => {
                let value = Span::new(start, at);
                if c == ESCAPE_CHAR {
                    // Wrapping keeps the parity, which is all that matters.
                    Step::to(ScanState::Value {
                        pending,
                        start,
                        quoted,
                        escapes: escapes.wrapping_add(1),
                    })
                } else if quoted && c == VALUE_QUOTE && escapes % 2 == 0 {
                    Step::finished(ScanState::ValueEnd, pending.finish(value, true, false))
                } else if !quoted && is_separator(c) {
                    Step::finished(ScanState::Separator, pending.finish(value, false, false))
                } else {
                    Step::to(ScanState::Value {
                        pending,
                        start,
                        quoted,
                        escapes: 0,
                    })
                }
            }

            ScanState::ValueEnd => Step::to(ScanState::Separator),
        }
    }

    /// Flush the pending entry at end of input; `end` is the content length.
    pub fn finish(self, end: u32) -> Option<RawEntry> {
        match self {
            ScanState::Separator | ScanState::ValueEnd => None,
            ScanState::Key { start } => Some(RawEntry {
                key: Span::new(start, end),
                value: Span::point(end),
                quoted: false,
                quote_unterminated: false,
                has_separator: false,
            }),
            ScanState::KvSep { pending } => Some(pending.finish(Span::point(end), false, false)),
            ScanState::ValueStart { pending } => {
                Some(pending.finish(Span::point(end), true, false))
            }
            ScanState::Value {
                pending,
                start,
                quoted,
                ..
            } => Some(pending.finish(Span::new(start, end), quoted, quoted)),
        }
    }
}
