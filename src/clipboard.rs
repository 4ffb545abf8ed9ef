//! Clipboard Payloads
//!
//! This module defines the paste-event capability the paste pipeline reads
//! from, and a system clipboard implementation backed by the arboard crate.

use arboard::Clipboard;
use log::debug;

// ─────────────────────────────────────────────────────────────────────────────
// Clipboard Error
// ─────────────────────────────────────────────────────────────────────────────

/// Errors that can occur while talking to the system clipboard.
#[derive(Debug)]
pub enum ClipboardError {
    /// Failed to access clipboard
    AccessError(String),
    /// Failed to read clipboard content
    ReadError(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::AccessError(msg) => write!(f, "Clipboard access error: {}", msg),
            ClipboardError::ReadError(msg) => write!(f, "Clipboard read error: {}", msg),
        }
    }
}

impl std::error::Error for ClipboardError {}

impl From<arboard::Error> for ClipboardError {
    fn from(err: arboard::Error) -> Self {
        ClipboardError::ReadError(err.to_string())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Paste Event Capability
// ─────────────────────────────────────────────────────────────────────────────

/// A paste event as delivered by the host.
pub trait ClipboardEvent {
    /// Plain-text payload, or `None` when the clipboard holds no readable text.
    fn text(&self) -> Option<String>;

    /// Stop the host from running its own paste handling.
    fn prevent_default(&mut self);
}

// ─────────────────────────────────────────────────────────────────────────────
// System Clipboard
// ─────────────────────────────────────────────────────────────────────────────

/// A paste event whose payload is the current system clipboard.
///
/// The text is captured once, when the event is created.
#[derive(Debug, Default)]
pub struct SystemClipboard {
    text: Option<String>,
    default_prevented: bool,
}

impl SystemClipboard {
    /// Snapshot the system clipboard.
    ///
    /// A clipboard that cannot be opened, or that holds no text (an image,
    /// for example), produces an event with no payload.
    pub fn capture() -> Self {
        match read_clipboard_text() {
            Ok(text) => Self {
                text: Some(text),
                default_prevented: false,
            },
            Err(e) => {
                debug!("No text on the clipboard: {}", e);
                Self::default()
            }
        }
    }

    /// Whether a handler suppressed the default paste.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

impl ClipboardEvent for SystemClipboard {
    fn text(&self) -> Option<String> {
        self.text.clone()
    }

    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

/// Read plain text from the system clipboard.
///
/// Uses arboard for cross-platform clipboard support.
pub fn read_clipboard_text() -> Result<String, ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(|e| ClipboardError::AccessError(e.to_string()))?;
    Ok(clipboard.get_text()?)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_error_display() {
        let err = ClipboardError::AccessError("no display".to_string());
        assert!(err.to_string().contains("no display"));

        let err = ClipboardError::ReadError("not text".to_string());
        assert!(err.to_string().contains("not text"));
    }

    #[test]
    fn test_prevent_default_is_recorded() {
        let mut event = SystemClipboard::default();
        assert!(!event.default_prevented());
        event.prevent_default();
        assert!(event.default_prevented());
    }

    #[test]
    fn test_empty_event_has_no_text() {
        assert_eq!(SystemClipboard::default().text(), None);
    }

    // Note: Reading the real clipboard requires a display/clipboard context
    // which isn't typically available in CI environments.
}
