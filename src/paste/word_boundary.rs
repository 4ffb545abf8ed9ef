//! Word boundaries under the cursor
//!
//! Finds the token the cursor sits on when nothing is selected. Characters
//! fall into three classes (word, whitespace, other) and the token is the
//! run of same-class characters around the cursor. If the surrounding
//! non-whitespace run is a link target, that wider run wins, so a cursor in
//! the middle of `https://example.com/page` selects the whole URL rather
//! than `example`.
//!
//! The word class is a heuristic: ASCII word characters, plus non-ASCII
//! letters detected by case folding, plus a fixed allow-list of blocks for
//! scripts without case. It is not Unicode word segmentation.

use super::classify::is_link_target;
use super::PasteConfig;
use crate::editor::{Position, Range};

/// Blocks of single-case scripts treated as word characters.
const SINGLE_CASE_WORD_BLOCKS: &[(char, char)] = &[
    ('\u{00df}', '\u{00df}'), // ß
    ('\u{0587}', '\u{0587}'), // Armenian ligature ech yiwn
    ('\u{0590}', '\u{05f4}'), // Hebrew
    ('\u{0600}', '\u{06ff}'), // Arabic
    ('\u{3040}', '\u{309f}'), // Hiragana
    ('\u{30a0}', '\u{30ff}'), // Katakana
    ('\u{3400}', '\u{4db5}'), // CJK extension A
    ('\u{4e00}', '\u{9fcc}'), // CJK unified ideographs
    ('\u{ac00}', '\u{d7af}'), // Hangul syllables
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Word,
    Space,
    Other,
}

fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

fn is_word_char(c: char) -> bool {
    if c.is_ascii_alphanumeric() || c == '_' {
        return true;
    }
    c > '\u{80}'
        && (!c.to_uppercase().eq(c.to_lowercase())
            || SINGLE_CASE_WORD_BLOCKS
                .iter()
                .any(|&(lo, hi)| (lo..=hi).contains(&c)))
}

fn classify(c: char) -> CharClass {
    if is_word_char(c) {
        CharClass::Word
    } else if is_space(c) {
        CharClass::Space
    } else {
        CharClass::Other
    }
}

/// Range of the token under `cursor` in `line_text`.
///
/// Only `cursor.ch` is used for the search; `cursor.line` is copied into
/// both endpoints. A cursor at (or past) the end of the line looks at the
/// character before it. An empty line yields an empty range at column 0.
pub fn locate_word_at(line_text: &str, cursor: Position, config: &PasteConfig) -> Range {
    let chars: Vec<char> = line_text.chars().collect();
    let len = chars.len();
    if len == 0 {
        return Range::caret(Position::new(cursor.line, 0));
    }

    let probe = cursor.ch.min(len - 1);
    let class = classify(chars[probe]);

    let mut start = probe;
    let mut end = probe + 1;
    while start > 0 && classify(chars[start - 1]) == class {
        start -= 1;
    }
    while end < len && classify(chars[end]) == class {
        end += 1;
    }

    // Widen to the whole whitespace-delimited run if that is a link
    let mut wide_start = start;
    let mut wide_end = end;
    while wide_start > 0 && !is_space(chars[wide_start - 1]) {
        wide_start -= 1;
    }
    while wide_end < len && !is_space(chars[wide_end]) {
        wide_end += 1;
    }
    if (wide_start, wide_end) != (start, end) {
        let candidate: String = chars[wide_start..wide_end].iter().collect();
        if is_link_target(&candidate, config) {
            start = wide_start;
            end = wide_end;
        }
    }

    Range::new(
        Position::new(cursor.line, start),
        Position::new(cursor.line, end),
    )
}
