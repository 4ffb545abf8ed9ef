//! linkpaste
//!
//! Rewrites clipboard pastes of URLs and file paths into Markdown links.
//! A host editor implements [`editor::Editor`], hands each paste to
//! [`paste::paste_event`], and lets the default paste run when it declines.

pub mod clipboard;
pub mod config;
pub mod editor;
pub mod error;
pub mod paste;
pub mod string_utils;

pub use clipboard::{ClipboardEvent, SystemClipboard};
pub use config::{NothingSelected, Settings};
pub use editor::{Editor, Position, Range, TextBuffer};
pub use error::{Error, Result};
pub use paste::{paste_event, paste_text, PasteConfig};
