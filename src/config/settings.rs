//! User settings for linkpaste
//!
//! This module defines the `Settings` struct that holds the user-configurable
//! paste behaviors, with serde support for JSON persistence. Field and enum
//! aliases accept the camelCase keys written by the Obsidian plugin,
//! so an existing `data.json` can be loaded as-is.

use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Fallback pattern accepting protocol-less, web-looking strings.
pub const DEFAULT_URL_REGEX: &str = r"^(?:https?://)?(?:www\.)?[^\s/$.?#].[^\s]*$";

/// Newline-separated patterns identifying image URLs.
pub const DEFAULT_IMAGE_URL_PATTERNS: &str = "\\.(gif|jpe?g|tiff?|png|webp|bmp)$\nimgur\\.com";

// ─────────────────────────────────────────────────────────────────────────────
// Nothing-Selected Behavior
// ─────────────────────────────────────────────────────────────────────────────

/// What a paste does when no text is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NothingSelected {
    /// Leave the paste to the editor (default)
    #[default]
    #[serde(alias = "doNothing")]
    DoNothing,
    /// Select the word (or URL) under the cursor and paste onto it
    #[serde(rename = "auto_select", alias = "autoSelect")]
    AutoSelectWord,
    /// Insert `[](url)` and put the cursor between the brackets
    #[serde(rename = "insert_inline", alias = "insertInline")]
    InsertInlineImageSkeleton,
    /// Insert `<url>`
    #[serde(rename = "insert_bare", alias = "insertBare")]
    InsertBareAngleLink,
}

impl NothingSelected {
    /// Get the display label for the behavior.
    pub fn label(&self) -> &'static str {
        match self {
            NothingSelected::DoNothing => "Do nothing",
            NothingSelected::AutoSelectWord => "Auto-select word under cursor",
            NothingSelected::InsertInlineImageSkeleton => "Insert [](url)",
            NothingSelected::InsertBareAngleLink => "Insert <url>",
        }
    }

    /// Get the key used for this behavior in settings files and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            NothingSelected::DoNothing => "do_nothing",
            NothingSelected::AutoSelectWord => "auto_select",
            NothingSelected::InsertInlineImageSkeleton => "insert_inline",
            NothingSelected::InsertBareAngleLink => "insert_bare",
        }
    }

    /// Get all available behaviors.
    pub fn all() -> &'static [NothingSelected] {
        &[
            NothingSelected::DoNothing,
            NothingSelected::AutoSelectWord,
            NothingSelected::InsertInlineImageSkeleton,
            NothingSelected::InsertBareAngleLink,
        ]
    }

    /// Look up a behavior by its key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|b| b.key() == key)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Main Settings Struct
// ─────────────────────────────────────────────────────────────────────────────

/// User preferences for URL pasting.
///
/// Serialized to JSON and persisted to the user's config directory.
/// Missing fields fall back to `Default` through `#[serde(default)]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// What to do when pasting a URL with no text selected
    #[serde(alias = "nothingSelected")]
    pub nothing_selected: NothingSelected,

    /// Regular expression accepting URLs without a protocol
    #[serde(alias = "regex")]
    pub url_regex: String,

    /// Regular expressions identifying image URLs, one per line
    #[serde(alias = "listForImgEmbed")]
    pub image_url_patterns: String,

    /// Pasting a URL onto selected text creates `[selection](url)`
    #[serde(alias = "convertSelectionToHyperlink")]
    pub convert_selection_to_hyperlink: bool,

    /// Pasting a URL onto selected text is allowed at all
    #[serde(alias = "pasteUrlOntoSelection")]
    pub paste_url_onto_selection: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            nothing_selected: NothingSelected::default(),
            url_regex: String::from(DEFAULT_URL_REGEX),
            image_url_patterns: String::from(DEFAULT_IMAGE_URL_PATTERNS),
            convert_selection_to_hyperlink: true,
            paste_url_onto_selection: true,
        }
    }
}

impl Settings {
    /// Iterate over the non-empty image URL patterns.
    pub fn image_patterns(&self) -> impl Iterator<Item = &str> {
        self.image_url_patterns
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
    }

    /// Normalize values loaded from a file that may have been edited by hand.
    ///
    /// Blank and padded lines are removed from the image pattern list. Regular
    /// expressions are left alone; invalid ones are reported by [`validate`]
    /// and fail closed at match time.
    ///
    /// [`validate`]: Settings::validate
    pub fn sanitize(&mut self) {
        let patterns: Vec<&str> = self.image_patterns().collect();
        self.image_url_patterns = patterns.join("\n");
    }

    /// Check that every user-supplied pattern compiles.
    ///
    /// Returns the first offending pattern as `Error::InvalidPattern`.
    pub fn validate(&self) -> Result<()> {
        if let Err(source) = Regex::new(&self.url_regex) {
            return Err(Error::InvalidPattern {
                setting: "url_regex",
                pattern: self.url_regex.clone(),
                source,
            });
        }
        for pattern in self.image_patterns() {
            if let Err(source) = Regex::new(pattern) {
                return Err(Error::InvalidPattern {
                    setting: "image_url_patterns",
                    pattern: pattern.to_string(),
                    source,
                });
            }
        }
        Ok(())
    }

    /// Load settings and sanitize them.
    pub fn from_json_sanitized(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
