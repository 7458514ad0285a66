//! Markdown stripping for section titles
//!
//! Section and table-of-contents titles are derived from the first line of a
//! card's markdown body. This module strips the formatting from that line so
//! the title reads as plain text.

use regex::Regex;
use std::sync::LazyLock;

/// Compiled regex patterns for title stripping
///
/// Order matters:
/// 1. Images before links (both use brackets)
/// 2. Bold before italic (`**` conflicts with `*`)
/// 3. Leading heading/quote markers last
static TITLE_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        // Images: ![alt](url) -> alt
        (Regex::new(r"!\[([^\]]*)\]\([^)]+\)").unwrap(), "$1"),
        // Links: [text](url) -> text
        (Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap(), "$1"),
        // Inline code: `code` -> code
        (Regex::new(r"`([^`]+)`").unwrap(), "$1"),
        // Bold: **text** or __text__ -> text
        (Regex::new(r"\*\*([^*]+)\*\*").unwrap(), "$1"),
        (Regex::new(r"__([^_]+)__").unwrap(), "$1"),
        // Strikethrough: ~~text~~ -> text
        (Regex::new(r"~~([^~]+)~~").unwrap(), "$1"),
        // Italic: *text* or _text_ -> text
        (Regex::new(r"\*([^*]+)\*").unwrap(), "$1"),
        (Regex::new(r"_([^_]+)_").unwrap(), "$1"),
        // Leading heading markers: # Title -> Title
        (Regex::new(r"^#{1,6}\s+").unwrap(), ""),
        // Leading blockquote markers
        (Regex::new(r"^>\s*").unwrap(), ""),
        // Leading list markers
        (Regex::new(r"^[-*+]\s+").unwrap(), ""),
        (Regex::new(r"^\d+\.\s+").unwrap(), ""),
    ]
});

/// Strip markdown formatting from a title line
///
/// # Examples
///
/// ```
/// use boardspace_core::utils::strip_markdown;
///
/// assert_eq!(strip_markdown("# My Title"), "My Title");
/// assert_eq!(strip_markdown("**bold** start"), "bold start");
/// assert_eq!(strip_markdown("[link](http://example.com)"), "link");
/// ```
pub fn strip_markdown(line: &str) -> String {
    let mut result = line.to_string();
    for (pattern, replacement) in TITLE_PATTERNS.iter() {
        result = pattern.replace_all(&result, *replacement).to_string();
    }
    result.trim().to_string()
}
