//! Culture-sensitive numeric formatting.

/// Numeric formatting conventions for parsing and rendering.
///
/// Only the decimal separator varies between cultures here; integers and
/// booleans are culture-invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Culture {
    decimal_separator: char,
}

impl Culture {
    /// The invariant culture: `.` as the decimal separator.
    pub const fn invariant() -> Self {
        Self {
            decimal_separator: '.',
        }
    }

    /// A culture using the given decimal separator.
    pub const fn with_decimal_separator(separator: char) -> Self {
        Self {
            decimal_separator: separator,
        }
    }

    /// The decimal separator of this culture.
    pub const fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    /// Rewrite a culture-formatted decimal into the invariant form accepted
    /// by the standard float parsers.
    pub fn normalize_decimal(&self, text: &str) -> String {
        if self.decimal_separator == '.' {
            text.to_string()
        } else {
            text.replace(self.decimal_separator, ".")
        }
    }

    /// Rewrite an invariant-formatted decimal into this culture's form.
    pub fn localize_decimal(&self, text: String) -> String {
        if self.decimal_separator == '.' {
            text
        } else {
            text.replace('.', &self.decimal_separator.to_string())
        }
    }
}

impl Default for Culture {
    fn default() -> Self {
        Self::invariant()
    }
}
