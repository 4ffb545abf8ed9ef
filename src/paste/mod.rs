//! Paste-to-Markdown pipeline
//!
//! Turns a clipboard paste into Markdown link syntax:
//! - `classify`: is a string a URL or absolute file path
//! - `normalize`: make a link target safe inside `(...)`
//! - `word_boundary`: the token under the cursor when nothing is selected
//! - `selection`: what text the paste applies to, and where it goes
//! - `compose`: the replacement text decision matrix
//! - `handler`: the entry points a host editor calls

mod classify;
mod compose;
mod handler;
mod normalize;
mod options;
mod selection;
mod word_boundary;

pub use classify::{is_file_path, is_link_target};
pub use compose::compose;
pub use handler::{paste_event, paste_text};
pub use normalize::{normalize, path_to_file_url};
pub use options::PasteConfig;
pub use selection::{resolve_selection, SelectionTarget};
pub use word_boundary::locate_word_at;
