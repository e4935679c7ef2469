//! Normalization applied to strings immediately before rendering.
//!
//! Fixups are idempotent: applying any of them twice yields the same text as
//! applying it once. Rendering relies on this, since a tree rebuilt from its
//! own output passes through the same fixups a second time.

use super::{COMMENT_MARKERS, QUOTE, SECTION_CLOSE, SECTION_OPEN, VALUE_MARKERS};
use crate::style::Style;

/// Normalize a section title: strip every section marker anywhere in the
/// string, then trim surrounding whitespace.
pub fn fixup_title(title: &str) -> String {
    title
        .chars()
        .filter(|&c| c != SECTION_OPEN && c != SECTION_CLOSE)
        .collect::<String>()
        .trim()
        .to_string()
}

/// Normalize a value label: trim surrounding whitespace only.
pub fn fixup_label(label: &str) -> String {
    label.trim().to_string()
}

/// Normalize a value: trim, then quote the whole value if it contains any
/// comment or value marker. Already-quoted values pass through unchanged.
pub fn fixup_value(value: &str) -> String {
    let trimmed = value.trim();
    let already_quoted =
        trimmed.len() >= 2 && trimmed.starts_with(QUOTE) && trimmed.ends_with(QUOTE);
    let reserved = trimmed
        .chars()
        .any(|c| COMMENT_MARKERS.contains(&c) || VALUE_MARKERS.contains(&c));
    if reserved && !already_quoted {
        format!("{QUOTE}{trimmed}{QUOTE}")
    } else {
        trimmed.to_string()
    }
}

/// Render a value marker with its surrounding spacing.
///
/// An unrecognized marker is substituted with the style's default marker.
/// Spacing is fixed by marker identity, not by style: `:` renders as `": "`
/// and `=` as `" = "`.
pub fn fixup_marker(marker: char, style: &Style) -> String {
    let marker = if VALUE_MARKERS.contains(&marker) {
        marker
    } else {
        style.value_marker()
    };
    match marker {
        ':' => ": ".to_string(),
        _ => " = ".to_string(),
    }
}
