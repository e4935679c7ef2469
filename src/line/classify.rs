//! Classification predicates over raw configuration lines.
//!
//! Each predicate is independent and pure; none of them interprets content
//! beyond what is needed for the decision.

use super::{COMMENT_MARKERS, QUOTE, SECTION_CLOSE, SECTION_OPEN, VALUE_MARKERS};

/// True iff the line is empty or consists only of whitespace.
///
/// # Examples
///
/// ```
/// use initree::line::is_hollow;
///
/// assert!(is_hollow(""));
/// assert!(is_hollow("  \t "));
/// assert!(!is_hollow(" x "));
/// ```
pub fn is_hollow(line: &str) -> bool {
    line.trim().is_empty()
}

/// True iff the line is a comment: after stripping leading whitespace the
/// first character is a recognized comment marker (`#` or `;`).
///
/// Hollow lines are not comments.
pub fn is_comment(line: &str) -> bool {
    match line.trim_start().chars().next() {
        Some(first) => COMMENT_MARKERS.contains(&first),
        None => false,
    }
}

/// True iff the line is a section header: after stripping leading whitespace
/// the first character is `[` and a `]` occurs anywhere later.
///
/// Trailing content after `]` is permitted and ignored here; it is an inline
/// comment parsed separately.
pub fn is_section(line: &str) -> bool {
    let trimmed = line.trim_start();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) if first == SECTION_OPEN => chars.any(|c| c == SECTION_CLOSE),
        _ => false,
    }
}

/// True iff the line is a label/value pair.
///
/// Scans left to right: a quote or comment marker before any value marker
/// disqualifies the line; the first `:` or `=` confirms it. A bare label with
/// no marker is never a value.
pub fn is_value(line: &str) -> bool {
    for c in line.chars() {
        if c == QUOTE || COMMENT_MARKERS.contains(&c) {
            return false;
        }
        if VALUE_MARKERS.contains(&c) {
            return true;
        }
    }
    false
}
