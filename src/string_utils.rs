//! Character-column string utilities
//!
//! Editor positions count columns in characters (Unicode scalar values),
//! while Rust slices by byte offset. A column of `2` in `"på deg"` is the
//! space after `å`, which sits at byte 3 only because `å` takes two bytes.
//! These helpers convert between the two and never panic on out-of-range
//! columns: anything past the end clamps to the end of the string.
//!
//! # Example
//! ```ignore
//! use crate::string_utils::slice_columns;
//!
//! let text = "Hei på deg";
//! assert_eq!(slice_columns(text, 4, 6), "på");
//! ```

// ─────────────────────────────────────────────────────────────────────────────
// Index Conversion Utilities
// ─────────────────────────────────────────────────────────────────────────────

/// Convert a character column to a byte index.
///
/// Returns the string length if `column` is beyond the string.
pub fn column_to_byte_index(s: &str, column: usize) -> usize {
    s.char_indices()
        .nth(column)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Number of character columns in `s`.
#[inline]
pub fn column_count(s: &str) -> usize {
    s.chars().count()
}

// ─────────────────────────────────────────────────────────────────────────────
// Column Slicing Functions
// ─────────────────────────────────────────────────────────────────────────────

/// Slice `s` between two character columns.
///
/// Columns past the end clamp to the end; `start >= end` yields `""`.
pub fn slice_columns(s: &str, start: usize, end: usize) -> &str {
    if start >= end {
        return "";
    }
    let start = column_to_byte_index(s, start);
    let end = column_to_byte_index(s, end);
    &s[start..end]
}

/// Split `s` at a character column.
pub fn split_at_column(s: &str, column: usize) -> (&str, &str) {
    s.split_at(column_to_byte_index(s, column))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_to_byte_index() {
        let s = "Hei på"; // H(1) e(1) i(1) ' '(1) p(1) å(2) = 7 bytes, 6 chars
        assert_eq!(column_to_byte_index(s, 0), 0);
        assert_eq!(column_to_byte_index(s, 4), 4); // 'p'
        assert_eq!(column_to_byte_index(s, 5), 5); // 'å' starts at byte 5
        assert_eq!(column_to_byte_index(s, 6), 7); // End
        assert_eq!(column_to_byte_index(s, 100), 7); // Beyond end
    }

    #[test]
    fn test_column_count() {
        assert_eq!(column_count(""), 0);
        assert_eq!(column_count("abc"), 3);
        assert_eq!(column_count("你好🎉"), 3);
    }

    #[test]
    fn test_slice_columns_ascii() {
        let s = "Hello World";
        assert_eq!(slice_columns(s, 0, 5), "Hello");
        assert_eq!(slice_columns(s, 6, 11), "World");
        assert_eq!(slice_columns(s, 0, 100), "Hello World");
    }

    #[test]
    fn test_slice_columns_multibyte() {
        assert_eq!(slice_columns("Hei på deg", 4, 6), "på");
        assert_eq!(slice_columns("你好世界", 1, 3), "好世");
        assert_eq!(slice_columns("Hi🎉Bye", 2, 3), "🎉");
    }

    #[test]
    fn test_slice_columns_empty() {
        assert_eq!(slice_columns("Hello", 5, 5), "");
        assert_eq!(slice_columns("Hello", 3, 2), "");
        assert_eq!(slice_columns("", 0, 4), "");
    }

    #[test]
    fn test_split_at_column() {
        assert_eq!(split_at_column("æøå", 1), ("æ", "øå"));
        assert_eq!(split_at_column("abc", 0), ("", "abc"));
        assert_eq!(split_at_column("abc", 9), ("abc", ""));
    }
}
