//! Formatting style policy.
//!
//! A [`Style`] selects the default value marker, the comment marker, and the
//! header decoration conventions. It is an explicit value passed to every
//! formatting and output call; swapping styles between calls never mutates an
//! already-constructed tree. [`Style::default`] is [`Style::Mixed`].

mod header;

pub use header::{DATE_TOKEN, FILE_TOKEN, extended_header, standard_header};

/// Built-in formatting conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Accepts either marker; prefers `=` when substituting an invalid one.
    #[default]
    Mixed,
    /// Windows convention: `=` markers, `;` comments.
    Windows,
    /// Unix convention: `:` markers, `#` comments.
    Unix,
}

impl Style {
    /// The default value marker for this style.
    pub fn value_marker(&self) -> char {
        match self {
            Style::Mixed | Style::Windows => '=',
            Style::Unix => ':',
        }
    }

    /// The default comment marker for this style.
    pub fn comment_marker(&self) -> char {
        match self {
            Style::Windows => ';',
            Style::Mixed | Style::Unix => '#',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_is_mixed() {
        assert_eq!(Style::default(), Style::Mixed);
    }

    #[test]
    fn marker_preferences() {
        assert_eq!(Style::Mixed.value_marker(), '=');
        assert_eq!(Style::Windows.value_marker(), '=');
        assert_eq!(Style::Unix.value_marker(), ':');
        assert_eq!(Style::Windows.comment_marker(), ';');
        assert_eq!(Style::Unix.comment_marker(), '#');
        assert_eq!(Style::Mixed.comment_marker(), '#');
    }
}
