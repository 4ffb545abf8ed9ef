//! Editor module for linkpaste
//!
//! This module defines the text-buffer capability the paste pipeline needs
//! from a host editor, along with the position types it speaks in and a
//! small in-memory implementation.

mod buffer;
mod position;

pub use buffer::TextBuffer;
pub use position::{Position, Range};

/// Text-buffer operations supplied by the host editor.
///
/// Columns are character counts within a line. Implementations should
/// treat each method as a single, atomic buffer operation.
pub trait Editor {
    /// Whether a non-empty selection exists.
    fn something_selected(&self) -> bool;

    /// The selected text, or `""` when nothing is selected.
    fn selection(&self) -> String;

    /// The cursor (the moving end of the selection).
    fn cursor(&self) -> Position;

    /// Text of a line without its line terminator.
    fn line(&self, line: usize) -> String;

    /// Replace the text in `range`.
    fn replace_range(&mut self, text: &str, range: Range);

    /// Replace the live selection, or insert at the cursor if there is none.
    fn replace_selection(&mut self, text: &str);

    /// Move the cursor, collapsing any selection.
    fn set_cursor(&mut self, pos: Position);
}
