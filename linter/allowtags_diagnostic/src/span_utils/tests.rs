use super::*;

#[test]
fn test_single_line() {
    let source = "json:\"id\"";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_text(source, 1), Some(source));
    assert_eq!(table.line_text(source, 2), None);
    assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
    assert_eq!(table.offset_to_line_col(source, 5), (1, 6));
}

#[test]
fn test_multiple_lines() {
    let source = "line1\nline2\nline3";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_start_offset(3), Some(12));
    assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
    assert_eq!(table.offset_to_line_col(source, 5), (1, 6));
    assert_eq!(table.offset_to_line_col(source, 6), (2, 1));
    assert_eq!(table.offset_to_line_col(source, 14), (3, 3));
}

#[test]
fn test_offset_past_end_is_clamped() {
    let source = "ab\ncd";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 5), (2, 3));
    assert_eq!(table.offset_to_line_col(source, 100), (2, 3));
}

#[test]
fn test_multibyte_columns_count_chars() {
    // "ключ" is 8 bytes, 4 chars.
    let source = "ключ:\"x\"";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 8), (1, 5));
    // Offset 3 is inside 'л' and rounds down to its start.
    assert_eq!(table.offset_to_line_col(source, 3), (1, 2));
}

#[test]
fn test_line_start_offset() {
    let table = LineOffsetTable::build("a\nbb\nccc");
    assert_eq!(table.line_start_offset(0), None);
    assert_eq!(table.line_start_offset(1), Some(0));
    assert_eq!(table.line_start_offset(2), Some(2));
    assert_eq!(table.line_start_offset(3), Some(5));
    assert_eq!(table.line_start_offset(4), None);
}

#[test]
fn test_line_text() {
    let source = "first\r\nsecond\nthird";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_text(source, 1), Some("first"));
    assert_eq!(table.line_text(source, 2), Some("second"));
    assert_eq!(table.line_text(source, 3), Some("third"));
    assert_eq!(table.line_text(source, 4), None);
    assert_eq!(table.line_text(source, 0), None);
}

#[test]
fn test_trailing_newline_starts_empty_line() {
    let source = "a\n";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_start_offset(2), Some(2));
    assert_eq!(table.offset_to_line_col(source, 2), (2, 1));
    assert_eq!(table.line_text(source, 2), Some(""));
}
