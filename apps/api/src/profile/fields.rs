//! Scalar fields recovered from the head of the document.

use crate::profile::sections::{capture_section, SectionKind};

pub const UNKNOWN_NAME: &str = "Unknown";

/// Leading run of alphabetic characters and spaces on the first non-blank line.
/// Whitespace before that line is skipped; the run never crosses a line break.
pub fn extract_name(text: &str) -> String {
    let text = text.trim_start();
    let run_len: usize = text
        .chars()
        .take_while(|c| c.is_alphabetic() || *c == ' ' || *c == '\t')
        .map(char::len_utf8)
        .sum();

    let name = text[..run_len].trim();
    if name.is_empty() {
        UNKNOWN_NAME.to_string()
    } else {
        name.to_string()
    }
}

/// Second non-blank line (the first is the name line).
pub fn extract_headline(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .nth(1)
        .map(String::from)
        .unwrap_or_default()
}

pub fn extract_summary(text: &str) -> String {
    capture_section(text, SectionKind::Summary).trim().to_string()
}
