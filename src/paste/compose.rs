//! Replacement text decision matrix
//!
//! Given the clipboard text and the selected text, decide what Markdown (if
//! any) replaces the paste. A link on the clipboard takes priority, since
//! pasting is the triggering action. A link in the selection comes second:
//! pasting a caption over an existing URL turns the caption into the label.

use super::classify::is_link_target;
use super::normalize::normalize;
use super::PasteConfig;
use crate::config::NothingSelected;
use log::debug;

/// Compose the replacement for a paste, or `None` to let the paste through.
pub fn compose(clipboard_text: &str, selected_text: &str, config: &PasteConfig) -> Option<String> {
    if is_link_target(clipboard_text, config) {
        if !selected_text.is_empty() {
            if !config.paste_url_onto_selection {
                debug!("Pasting URLs onto a selection is disabled");
                return None;
            }
            if config.convert_selection_to_hyperlink {
                return Some(format!("[{}]({})", selected_text, normalize(clipboard_text)));
            }
            return Some(clipboard_text.to_string());
        }

        let url = normalize(clipboard_text);
        return Some(match config.nothing_selected {
            NothingSelected::InsertBareAngleLink => format!("<{}>", url),
            NothingSelected::InsertInlineImageSkeleton => format!("[]({})", url),
            NothingSelected::DoNothing | NothingSelected::AutoSelectWord => url,
        });
    }

    if is_link_target(selected_text, config) {
        return Some(format!("[{}]({})", clipboard_text, normalize(selected_text)));
    }

    debug!("Neither clipboard nor selection is a link");
    None
}
