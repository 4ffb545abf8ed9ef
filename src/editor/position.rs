//! Buffer positions and ranges

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A location in a text buffer.
///
/// `ch` counts characters (not bytes) from the start of the line.
/// Positions order by line first, then column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Position {
    /// Zero-based line index
    pub line: usize,
    /// Zero-based character column
    pub ch: usize,
}

impl Position {
    pub fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.ch)
    }
}

/// Parses `line:ch`, both zero-based.
impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (line, ch) = s
            .split_once(':')
            .ok_or_else(|| format!("expected LINE:COLUMN, got '{}'", s))?;
        let line = line
            .trim()
            .parse()
            .map_err(|e| format!("invalid line in '{}': {}", s, e))?;
        let ch = ch
            .trim()
            .parse()
            .map_err(|e| format!("invalid column in '{}': {}", s, e))?;
        Ok(Self { line, ch })
    }
}

/// A half-open span between two positions, with `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub from: Position,
    pub to: Position,
}

impl Range {
    /// Create a range, ordering the endpoints so `from` never follows `to`.
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { from: a, to: b }
        } else {
            Self { from: b, to: a }
        }
    }

    /// A zero-width range at `pos`.
    pub fn caret(pos: Position) -> Self {
        Self { from: pos, to: pos }
    }

    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }
}
