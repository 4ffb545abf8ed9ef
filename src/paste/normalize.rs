//! Link destination normalization
//!
//! Turns a classified link target into text that can sit between the
//! parentheses of a Markdown link: file paths become `file://` URLs, angle
//! brackets are percent-encoded, and destinations containing spaces or
//! parentheses are wrapped in `<...>`.

use super::classify::is_file_path;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left alone in a path segment; everything else is escaped.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Convert an absolute Windows or Unix path to a `file://` URL.
///
/// Backslashes become slashes, a leading slash is ensured, and each segment
/// is percent-encoded on its own, so `C:\My Files\a.png` becomes
/// `file:///C%3A/My%20Files/a.png`.
pub fn path_to_file_url(path: &str) -> String {
    let forward = path.replace('\\', "/");
    let rooted = if forward.starts_with('/') {
        forward
    } else {
        format!("/{}", forward)
    };
    let encoded: Vec<String> = rooted
        .split('/')
        .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
        .collect();
    format!("file://{}", encoded.join("/"))
}

/// Make `target` safe to use as a Markdown link destination.
///
/// The space check runs on the final string, after file paths have been
/// percent-encoded, so an encoded path is never angle-wrapped for a space.
/// Parentheses survive encoding and still trigger the wrap.
pub fn normalize(target: &str) -> String {
    let url = if is_file_path(target) {
        path_to_file_url(target)
    } else {
        target.to_string()
    };

    let escaped = url.replace('<', "%3C").replace('>', "%3E");
    if escaped.contains(['(', ')', ' ']) {
        format!("<{}>", escaped)
    } else {
        escaped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_url_passes_through() {
        assert_eq!(normalize("http://example.com"), "http://example.com");
        assert_eq!(
            normalize("https://example.com/a?b=c#d"),
            "https://example.com/a?b=c#d"
        );
    }

    #[test]
    fn test_unix_path_with_space_is_encoded_not_wrapped() {
        assert_eq!(
            normalize("/usr/local/bin/file name.txt"),
            "file:///usr/local/bin/file%20name.txt"
        );
    }

    #[test]
    fn test_windows_path() {
        assert_eq!(
            normalize(r"C:\My Files\a.png"),
            "file:///C%3A/My%20Files/a.png"
        );
    }

    #[test]
    fn test_trailing_slash_is_kept() {
        assert_eq!(normalize("/home/me/"), "file:///home/me/");
    }

    #[test]
    fn test_path_encoding_keeps_unreserved_marks() {
        assert_eq!(
            path_to_file_url("/a/it's-~fine_!*.md"),
            "file:///a/it's-~fine_!*.md"
        );
        assert_eq!(path_to_file_url("/a/#1?&=.md"), "file:///a/%231%3F%26%3D.md");
        assert_eq!(path_to_file_url("/café"), "file:///caf%C3%A9");
    }

    #[test]
    fn test_parentheses_in_path_force_wrap() {
        assert_eq!(
            normalize("/tmp/photo (1).png"),
            "<file:///tmp/photo%20(1).png>"
        );
    }

    #[test]
    fn test_space_in_url_forces_wrap() {
        assert_eq!(
            normalize("https://example.com/a b"),
            "<https://example.com/a b>"
        );
    }

    #[test]
    fn test_parentheses_in_url_force_wrap() {
        assert_eq!(
            normalize("https://en.wikipedia.org/wiki/Rust_(language)"),
            "<https://en.wikipedia.org/wiki/Rust_(language)>"
        );
    }

    #[test]
    fn test_angle_brackets_are_escaped() {
        assert_eq!(
            normalize("https://example.com/<tag>"),
            "https://example.com/%3Ctag%3E"
        );
        assert_eq!(
            normalize("https://example.com/<a b>"),
            "<https://example.com/%3Ca b%3E>"
        );
    }

    #[test]
    fn test_no_unescaped_angle_brackets_inside() {
        for input in [
            "https://x.test/<<>>",
            "www.x.test/<a>(b)",
            "/tmp/<dir>/f",
            r"C:\x\y z",
        ] {
            let out = normalize(input);
            let inner = out
                .strip_prefix('<')
                .and_then(|s| s.strip_suffix('>'))
                .unwrap_or(&out);
            assert!(!inner.contains(['<', '>']), "{} -> {}", input, out);
        }
    }

    #[test]
    fn test_normalize_is_not_idempotent() {
        let once = normalize("https://example.com/a b");
        assert_ne!(normalize(&once), once);
    }
}
