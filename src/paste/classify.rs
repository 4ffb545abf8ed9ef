//! URL and file path classification
//!
//! Decides whether a string should be treated as a link target: an absolute
//! URL, an absolute Windows or Unix file path, or anything the user's
//! fallback pattern accepts (protocol-less URLs such as `www.example.com`).

use super::PasteConfig;
use log::debug;
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

/// Absolute Windows path: `C:\dir\file`, no reserved characters in segments.
static WIN32_PATH: OnceLock<Regex> = OnceLock::new();
/// Absolute Unix path: one or more `/segment` groups, optional trailing slash.
static UNIX_PATH: OnceLock<Regex> = OnceLock::new();

fn win32_path() -> &'static Regex {
    WIN32_PATH.get_or_init(|| {
        Regex::new(r#"(?i)^[a-z]:\\(?:[^\\/:*?"<>|\r\n]+\\)*[^\\/:*?"<>|\r\n]*$"#)
            .expect("windows path pattern is valid")
    })
}

fn unix_path() -> &'static Regex {
    UNIX_PATH.get_or_init(|| Regex::new(r"^(?:/[^/]+)+/?$").expect("unix path pattern is valid"))
}

/// Whether `text` looks like an absolute file path.
pub fn is_file_path(text: &str) -> bool {
    win32_path().is_match(text) || unix_path().is_match(text)
}

/// Whether `text` should be treated as a link target.
///
/// Strict URL parsing comes first; only when it fails are the file-path test
/// and the fallback pattern consulted. An invalid fallback pattern is
/// compiled to `None` upstream and never matches.
pub fn is_link_target(text: &str, config: &PasteConfig) -> bool {
    if text.is_empty() {
        return false;
    }

    if Url::parse(text).is_ok() {
        debug!("'{}' parses as an absolute URL", text);
        return true;
    }

    let file_path = is_file_path(text);
    let fallback = config
        .url_fallback
        .as_ref()
        .is_some_and(|re| re.is_match(text));
    debug!(
        "'{}' fallback checks: file_path={}, pattern={}",
        text, file_path, fallback
    );
    file_path || fallback
}
