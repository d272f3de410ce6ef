//! Integration tests for dpp-common crate.

use dpp_common::{BytePos, SourceBuffer, Span};

// ============================================================================
// Span Tests
// ============================================================================

#[test]
fn test_span_merge() {
    let a = Span::from_usize(2, 5);
    let b = Span::from_usize(8, 12);
    let merged = a.merge(b);
    assert_eq!(merged.start, BytePos(2));
    assert_eq!(merged.end, BytePos(12));

    // Merge is order-independent
    assert_eq!(b.merge(a), merged);
}

#[test]
fn test_span_len_and_range() {
    let span = Span::from_usize(3, 9);
    assert_eq!(span.len(), 6);
    assert!(!span.is_empty());
    assert_eq!(span.range(), 3..9);

    let empty = Span::from_usize(4, 4);
    assert!(empty.is_empty());
    assert_eq!(empty.len(), 0);
}

#[test]
fn test_point_span_is_empty() {
    let span = Span::point(7);
    assert!(span.is_empty());
    assert_eq!(span.range(), 7..7);
    assert_eq!(span.merge(Span::from_usize(2, 5)), Span::from_usize(2, 7));
}

#[test]
fn test_byte_pos_conversions() {
    let pos = BytePos::from(42usize);
    assert_eq!(usize::from(pos), 42);
    assert_eq!(pos.offset(8), BytePos(50));
}

// ============================================================================
// SourceBuffer Tests
// ============================================================================

#[test]
fn test_line_col_single_line() {
    let buffer = SourceBuffer::new("int x = 5;");
    let pos = buffer.line_col(BytePos(4));
    assert_eq!(pos.line, 1);
    assert_eq!(pos.column, 5);
}

#[test]
fn test_line_col_multi_line() {
    let buffer = SourceBuffer::new("int x = 5;\nint y = 6;\n");
    assert_eq!(buffer.line_count(), 3);

    let first = buffer.line_col(BytePos(0));
    assert_eq!((first.line, first.column), (1, 1));

    // `y` on the second line
    let y = buffer.line_col(BytePos(15));
    assert_eq!((y.line, y.column), (2, 5));

    // Start of the second line
    let start = buffer.line_col(BytePos(11));
    assert_eq!((start.line, start.column), (2, 1));
}

#[test]
fn test_line_col_counts_chars_not_bytes() {
    // `é` is two bytes; the column after it must be 3, not 4.
    let buffer = SourceBuffer::new("aé b");
    let pos = buffer.line_col(BytePos(3));
    assert_eq!((pos.line, pos.column), (1, 3));
}

#[test]
fn test_slice() {
    let buffer = SourceBuffer::new("int x = 5;");
    assert_eq!(buffer.slice(Span::from_usize(4, 5)), "x");
    assert_eq!(buffer.slice(Span::from_usize(8, 9)), "5");

    // Out-of-range spans do not panic
    assert_eq!(buffer.slice(Span::from_usize(8, 99)), "");
}
