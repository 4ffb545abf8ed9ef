//! Selection resolution
//!
//! Works out which text a paste applies to and which range it overwrites.

use super::word_boundary::locate_word_at;
use super::PasteConfig;
use crate::config::NothingSelected;
use crate::editor::{Editor, Range};
use crate::error::{Error, Result};
use crate::string_utils::slice_columns;

/// The text a paste acts on and where its replacement goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionTarget {
    /// Selected (or auto-selected) text
    pub selected_text: String,
    /// Range to overwrite; `None` means the live selection
    pub replace_range: Option<Range>,
}

/// Resolve the paste target from the editor state.
///
/// A live selection is used as-is (trimmed). Without one, the
/// nothing-selected behavior decides: auto-select the word under the
/// cursor, or insert at the cursor with no selected text.
///
/// # Errors
///
/// `Error::InvalidConfiguration` when nothing is selected and the behavior
/// is `DoNothing`; callers are expected to decline such pastes first.
pub fn resolve_selection<E: Editor + ?Sized>(
    editor: &E,
    config: &PasteConfig,
) -> Result<SelectionTarget> {
    if editor.something_selected() {
        return Ok(SelectionTarget {
            selected_text: editor.selection().trim().to_string(),
            replace_range: None,
        });
    }

    let cursor = editor.cursor();
    match config.nothing_selected {
        NothingSelected::AutoSelectWord => {
            let line = editor.line(cursor.line);
            let range = locate_word_at(&line, cursor, config);
            Ok(SelectionTarget {
                selected_text: slice_columns(&line, range.from.ch, range.to.ch).to_string(),
                replace_range: Some(range),
            })
        }
        NothingSelected::InsertInlineImageSkeleton | NothingSelected::InsertBareAngleLink => {
            Ok(SelectionTarget {
                selected_text: String::new(),
                replace_range: Some(Range::caret(cursor)),
            })
        }
        NothingSelected::DoNothing => Err(Error::InvalidConfiguration(
            "pastes with nothing selected and behavior 'do_nothing' must be declined before resolving a selection".to_string(),
        )),
    }
}
