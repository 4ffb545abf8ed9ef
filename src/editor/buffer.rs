//! In-memory text buffer
//!
//! A minimal [`Editor`] implementation over a vector of lines. The command
//! line front end loads documents into it, and the paste pipeline tests drive
//! it directly.

use super::{Editor, Position, Range};
use crate::string_utils::{column_count, slice_columns, split_at_column};

/// A line-based text buffer with a cursor and an optional selection.
///
/// Lines are split on `\n`; a trailing newline produces a final empty line,
/// so [`TextBuffer::text`] round-trips the input exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
    /// Fixed end of the selection; `None` when nothing is selected
    anchor: Option<Position>,
    /// Moving end of the selection, and the cursor
    head: Position,
}

impl TextBuffer {
    pub fn new(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(String::from).collect(),
            anchor: None,
            head: Position::default(),
        }
    }

    /// Full buffer contents.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Select from `anchor` to `head`; the cursor ends up at `head`.
    pub fn select(&mut self, anchor: Position, head: Position) {
        let anchor = self.clamp(anchor);
        self.head = self.clamp(head);
        self.anchor = Some(anchor);
    }

    /// The selected span, if any.
    pub fn selection_range(&self) -> Option<Range> {
        match self.anchor {
            Some(anchor) if anchor != self.head => Some(Range::new(anchor, self.head)),
            _ => None,
        }
    }

    /// Clamp a position to an existing line and column.
    fn clamp(&self, pos: Position) -> Position {
        let line = pos.line.min(self.lines.len().saturating_sub(1));
        let ch = pos.ch.min(column_count(&self.lines[line]));
        Position { line, ch }
    }

    fn text_in(&self, range: Range) -> String {
        let Range { from, to } = range;
        if from.line == to.line {
            return slice_columns(&self.lines[from.line], from.ch, to.ch).to_string();
        }
        let mut parts = Vec::with_capacity(to.line - from.line + 1);
        parts.push(split_at_column(&self.lines[from.line], from.ch).1);
        for line in &self.lines[from.line + 1..to.line] {
            parts.push(line.as_str());
        }
        parts.push(split_at_column(&self.lines[to.line], to.ch).0);
        parts.join("\n")
    }

    /// Replace `range` with `text` and put the cursor after the inserted text.
    fn splice(&mut self, text: &str, range: Range) {
        let from = self.clamp(range.from);
        let to = self.clamp(range.to);

        let prefix = split_at_column(&self.lines[from.line], from.ch).0;
        let suffix = split_at_column(&self.lines[to.line], to.ch).1;
        let joined = format!("{}{}{}", prefix, text, suffix);

        let new_lines: Vec<String> = joined.split('\n').map(String::from).collect();
        let inserted: Vec<&str> = text.split('\n').collect();
        let end_line = from.line + inserted.len() - 1;
        let end_ch = match inserted.as_slice() {
            [only] => from.ch + column_count(only),
            [.., last] => column_count(last),
            [] => from.ch,
        };

        self.lines.splice(from.line..=to.line, new_lines);
        self.anchor = None;
        self.head = Position::new(end_line, end_ch);
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new("")
    }
}

impl Editor for TextBuffer {
    fn something_selected(&self) -> bool {
        self.selection_range().is_some()
    }

    fn selection(&self) -> String {
        self.selection_range()
            .map(|range| self.text_in(range))
            .unwrap_or_default()
    }

    fn cursor(&self) -> Position {
        self.head
    }

    fn line(&self, line: usize) -> String {
        self.lines.get(line).cloned().unwrap_or_default()
    }

    fn replace_range(&mut self, text: &str, range: Range) {
        self.splice(text, range);
    }

    fn replace_selection(&mut self, text: &str) {
        let range = self
            .selection_range()
            .unwrap_or_else(|| Range::caret(self.head));
        self.splice(text, range);
    }

    fn set_cursor(&mut self, pos: Position) {
        self.anchor = None;
        self.head = self.clamp(pos);
    }
}
