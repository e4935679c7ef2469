//! Component extraction from already-classified lines.
//!
//! These functions assume the matching classifier predicate already returned
//! true for the input; on violated assumptions they degrade to empty
//! components rather than panic.

use super::fixup::fixup_title;
use super::{COMMENT_MARKERS, QUOTE, SECTION_CLOSE, SECTION_OPEN, VALUE_MARKERS};

/// Split a section line into its title and optional inline comment.
///
/// The title is fixed up (brackets stripped, trimmed); any text after the
/// closing `]` is treated as an inline comment with a leading comment marker
/// removed if present.
pub fn split_section_line(line: &str) -> (String, Option<String>) {
    let trimmed = line.trim_start();
    let body = trimmed.strip_prefix(SECTION_OPEN).unwrap_or(trimmed);
    match body.find(SECTION_CLOSE) {
        Some(close) => {
            let title = fixup_title(&body[..close]);
            let comment = strip_comment_marker(&body[close + 1..]);
            (title, comment)
        }
        None => (fixup_title(body), None),
    }
}

/// Split a value line into its label, value, and optional trailing comment.
///
/// The value may be quoted, in which case markers inside the quotes are
/// literal content and the quotes themselves are removed.
pub fn split_value_line(line: &str) -> (String, String, Option<String>) {
    let Some(marker_pos) = line.find(VALUE_MARKERS) else {
        return (line.trim().to_string(), String::new(), None);
    };

    let label = line[..marker_pos].trim().to_string();
    let rest = line[marker_pos + 1..].trim_start();

    if let Some(quoted) = rest.strip_prefix(QUOTE) {
        match quoted.find(QUOTE) {
            Some(close) => {
                let value = quoted[..close].to_string();
                let comment = strip_comment_marker(&quoted[close + 1..]);
                return (label, value, comment);
            }
            // Unterminated quote: take everything after the opening quote.
            None => return (label, quoted.trim_end().to_string(), None),
        }
    }

    match rest.find(COMMENT_MARKERS) {
        Some(comment_pos) => {
            let value = rest[..comment_pos].trim().to_string();
            let comment = strip_comment_marker(&rest[comment_pos..]);
            (label, value, comment)
        }
        None => (label, rest.trim().to_string(), None),
    }
}

/// Strip a leading comment marker and surrounding whitespace from trailing
/// text, returning `None` when nothing remains.
fn strip_comment_marker(text: &str) -> Option<String> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix(COMMENT_MARKERS)
        .map_or(trimmed, str::trim_start);
    if body.is_empty() {
        None
    } else {
        Some(body.to_string())
    }
}
