//! Paste orchestration
//!
//! Ties the pipeline together for one paste event: decide whether to act,
//! resolve the selection, compose the replacement and apply it to the editor.

use super::compose::compose;
use super::selection::resolve_selection;
use super::PasteConfig;
use crate::clipboard::ClipboardEvent;
use crate::config::NothingSelected;
use crate::editor::{Editor, Position};
use crate::error::Result;
use log::debug;

/// Handle a paste event from the host.
///
/// Returns `Ok(true)` when the paste was turned into Markdown, in which case
/// the event's default handling has been suppressed. `Ok(false)` leaves the
/// event untouched so the host pastes normally.
pub fn paste_event<E, C>(editor: &mut E, event: &mut C, config: &PasteConfig) -> Result<bool>
where
    E: Editor + ?Sized,
    C: ClipboardEvent + ?Sized,
{
    let handled = url_into_selection(editor, event.text().as_deref(), config)?;
    if handled {
        event.prevent_default();
    }
    Ok(handled)
}

/// Handle a paste of `clipboard_text` with no host event involved.
pub fn paste_text<E: Editor + ?Sized>(
    editor: &mut E,
    clipboard_text: &str,
    config: &PasteConfig,
) -> Result<bool> {
    url_into_selection(editor, Some(clipboard_text), config)
}

fn url_into_selection<E: Editor + ?Sized>(
    editor: &mut E,
    clipboard: Option<&str>,
    config: &PasteConfig,
) -> Result<bool> {
    let had_selection = editor.something_selected();
    if !had_selection && config.nothing_selected == NothingSelected::DoNothing {
        debug!("Nothing selected, leaving paste alone");
        return Ok(false);
    }

    let Some(clipboard_text) = clipboard else {
        debug!("Clipboard holds no readable text");
        return Ok(false);
    };
    let clipboard_text = clipboard_text.trim();

    let target = resolve_selection(editor, config)?;
    let Some(replacement) = compose(clipboard_text, &target.selected_text, config) else {
        return Ok(false);
    };

    debug!(
        "Replacing '{}' with '{}'",
        target.selected_text, replacement
    );
    match target.replace_range {
        Some(range) => {
            editor.replace_range(&replacement, range);
            if !had_selection && config.nothing_selected == NothingSelected::InsertInlineImageSkeleton {
                // Between the brackets of `[](url)`
                editor.set_cursor(Position::new(range.from.line, range.from.ch + 1));
            }
        }
        None => editor.replace_selection(&replacement),
    }

    Ok(true)
}
