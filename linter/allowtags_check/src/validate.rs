//! Validation-time problems.
//!
//! Runs over entries the scanner already produced. Every applicable problem
//! of an entry is reported, key first, then value, then separator.

use allowtags_scanner::{ParsedEntry, TagProblem, TagProblemKind};

use crate::AllowedKeys;

/// Problems of all `entries`, in entry order.
pub fn validate(entries: &[ParsedEntry], allowed: &AllowedKeys) -> Vec<TagProblem> {
    let mut problems = Vec::new();
    for entry in entries {
        validate_entry(entry, allowed, &mut problems);
    }
    problems
}

/// Append the problems of one entry to `out`.
pub fn validate_entry(entry: &ParsedEntry, allowed: &AllowedKeys, out: &mut Vec<TagProblem>) {
    if entry.key.is_empty() {
        out.push(TagProblem::new(TagProblemKind::EmptyKey, entry.key_offset));
    } else if !allowed.contains(&entry.key) {
        out.push(TagProblem::new(
            TagProblemKind::UnknownKey(entry.key.clone()),
            entry.key_offset,
        ));
    }

    if entry.value.is_empty() {
        // Quoting and separator problems only apply to non-empty values.
        out.push(TagProblem::new(TagProblemKind::EmptyValue, entry.value_offset));
        return;
    }

    if !entry.quoted {
        out.push(TagProblem::new(
            TagProblemKind::UnquotedValue,
            entry.value_offset,
        ));
    } else if entry.quote_unterminated {
        out.push(TagProblem::new(
            TagProblemKind::UnterminatedQuote,
            entry.value_end,
        ));
    }

    if !entry.has_separator {
        out.push(TagProblem::new(
            TagProblemKind::MissingSeparator,
            entry.value_offset.saturating_sub(1),
        ));
    }
}
