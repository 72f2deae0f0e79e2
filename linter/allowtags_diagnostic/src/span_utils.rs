//! Line and column lookup for byte offsets.
//!
//! Tag problems carry absolute byte offsets. Emitters that have the source
//! text convert them to 1-based line and column numbers through a
//! [`LineOffsetTable`], built once per file.

/// Pre-computed line start table for O(log L) line/column lookup.
///
/// ```
/// use allowtags_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "type A struct {\n\tID int `json:\"id\"`\n}";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 24), (2, 9));
/// assert_eq!(table.line_text(source, 2), Some("\tID int `json:\"id\"`"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start; `offsets[0] == 0`.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                offsets.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineOffsetTable { offsets }
    }

    /// 1-based line containing `offset`.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// 1-based (line, column) of `offset`.
    ///
    /// The column counts characters, not bytes, from the line start. An
    /// offset past the end of `source` is clamped to the end, and one inside
    /// a multi-byte character is rounded down to its start.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self.line_start_offset(line).unwrap_or(0) as usize;

        let mut end = (offset as usize).min(source.len());
        while end > line_start && !source.is_char_boundary(end) {
            end -= 1;
        }
        let col_text = source.get(line_start..end).unwrap_or_default();
        let col = u32::try_from(col_text.chars().count()).unwrap_or(u32::MAX - 1) + 1;

        (line, col)
    }

    /// Byte offset of a line start (1-based line number).
    pub fn line_start_offset(&self, line: u32) -> Option<u32> {
        if line == 0 {
            return None;
        }
        self.offsets.get((line - 1) as usize).copied()
    }

    /// Text of a line (1-based), without its line terminator.
    pub fn line_text<'s>(&self, source: &'s str, line: u32) -> Option<&'s str> {
        let start = self.line_start_offset(line)? as usize;
        let end = self
            .line_start_offset(line + 1)
            .map_or(source.len(), |next| next as usize);
        let text = source.get(start..end)?;
        Some(text.trim_end_matches(['\n', '\r']))
    }
}

#[cfg(test)]
mod tests;
