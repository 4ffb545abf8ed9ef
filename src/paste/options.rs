//! Per-paste configuration snapshot
//!
//! [`PasteConfig`] is compiled from the persisted [`Settings`] once per paste
//! event. Compiling here keeps regex errors out of the hot path: a pattern
//! that fails to compile is logged and then simply never matches.

use crate::config::{NothingSelected, Settings};
use log::warn;
use regex::Regex;

/// Immutable view of the settings relevant to one paste.
#[derive(Debug, Clone)]
pub struct PasteConfig {
    /// What to do when nothing is selected
    pub nothing_selected: NothingSelected,
    /// Fallback test for strings that are not absolute URLs; `None` never matches
    pub url_fallback: Option<Regex>,
    /// Turn `url` pasted onto a selection into `[selection](url)`
    pub convert_selection_to_hyperlink: bool,
    /// Allow pasting a URL onto a selection at all
    pub paste_url_onto_selection: bool,
    /// Patterns identifying image URLs
    pub image_patterns: Vec<Regex>,
}

impl PasteConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        let url_fallback = match Regex::new(&settings.url_regex) {
            Ok(re) => Some(re),
            Err(e) => {
                warn!(
                    "Ignoring invalid URL regex '{}': {}",
                    settings.url_regex, e
                );
                None
            }
        };

        let image_patterns = settings
            .image_patterns()
            .filter_map(|pattern| match Regex::new(pattern) {
                Ok(re) => Some(re),
                Err(e) => {
                    warn!("Ignoring invalid image URL pattern '{}': {}", pattern, e);
                    None
                }
            })
            .collect();

        Self {
            nothing_selected: settings.nothing_selected,
            url_fallback,
            convert_selection_to_hyperlink: settings.convert_selection_to_hyperlink,
            paste_url_onto_selection: settings.paste_url_onto_selection,
            image_patterns,
        }
    }

    /// Same snapshot with a different nothing-selected behavior.
    pub fn with_nothing_selected(mut self, behavior: NothingSelected) -> Self {
        self.nothing_selected = behavior;
        self
    }

    /// Whether `url` matches any image URL pattern.
    pub fn is_image_url(&self, url: &str) -> bool {
        self.image_patterns.iter().any(|re| re.is_match(url))
    }
}

impl Default for PasteConfig {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl From<&Settings> for PasteConfig {
    fn from(settings: &Settings) -> Self {
        Self::from_settings(settings)
    }
}
