//! The built-in scalar conversion targets.

use super::culture::Culture;
use crate::line::is_hollow;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

/// A conversion failure without positional context; the bind layer attaches
/// the label and offending value.
#[derive(Debug, Clone, Error)]
#[error("{reason}")]
pub struct ScalarError {
    /// Human-readable description of the mismatch.
    pub reason: String,
}

impl ScalarError {
    pub(crate) fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// A flat scalar value that can cross the text boundary in both directions.
pub trait Scalar: Sized {
    /// Parse a value from raw text under the given culture.
    fn parse(text: &str, culture: &Culture) -> Result<Self, ScalarError>;

    /// Render the value back into raw text under the given culture.
    fn render(&self, culture: &Culture) -> String;
}

impl Scalar for String {
    fn parse(text: &str, _culture: &Culture) -> Result<Self, ScalarError> {
        Ok(text.to_string())
    }

    fn render(&self, _culture: &Culture) -> String {
        self.clone()
    }
}

impl Scalar for bool {
    fn parse(text: &str, _culture: &Culture) -> Result<Self, ScalarError> {
        match text.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(true),
            "false" | "no" | "off" | "0" => Ok(false),
            other => Err(ScalarError::new(format!("'{other}' is not a boolean"))),
        }
    }

    fn render(&self, _culture: &Culture) -> String {
        if *self { "true" } else { "false" }.to_string()
    }
}

impl Scalar for char {
    fn parse(text: &str, _culture: &Culture) -> Result<Self, ScalarError> {
        let trimmed = text.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(ScalarError::new(format!(
                "'{trimmed}' is not a single character"
            ))),
        }
    }

    fn render(&self, _culture: &Culture) -> String {
        self.to_string()
    }
}

macro_rules! integer_scalar {
    ($($ty:ty),+) => {
        $(
            impl Scalar for $ty {
                fn parse(text: &str, _culture: &Culture) -> Result<Self, ScalarError> {
                    text.trim()
                        .parse::<$ty>()
                        .map_err(|e| ScalarError::new(e.to_string()))
                }

                fn render(&self, _culture: &Culture) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

integer_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_scalar {
    ($($ty:ty),+) => {
        $(
            impl Scalar for $ty {
                fn parse(text: &str, culture: &Culture) -> Result<Self, ScalarError> {
                    culture
                        .normalize_decimal(text.trim())
                        .parse::<$ty>()
                        .map_err(|e| ScalarError::new(e.to_string()))
                }

                fn render(&self, culture: &Culture) -> String {
                    culture.localize_decimal(self.to_string())
                }
            }
        )+
    };
}

float_scalar!(f32, f64);

impl Scalar for NaiveDate {
    fn parse(text: &str, _culture: &Culture) -> Result<Self, ScalarError> {
        NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
            .map_err(|e| ScalarError::new(e.to_string()))
    }

    fn render(&self, _culture: &Culture) -> String {
        self.format("%Y-%m-%d").to_string()
    }
}

impl Scalar for NaiveDateTime {
    fn parse(text: &str, _culture: &Culture) -> Result<Self, ScalarError> {
        NaiveDateTime::parse_from_str(text.trim(), "%Y-%m-%d %H:%M:%S")
            .map_err(|e| ScalarError::new(e.to_string()))
    }

    fn render(&self, _culture: &Culture) -> String {
        self.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

impl Scalar for DateTime<Utc> {
    fn parse(text: &str, _culture: &Culture) -> Result<Self, ScalarError> {
        DateTime::parse_from_rfc3339(text.trim())
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| ScalarError::new(e.to_string()))
    }

    fn render(&self, _culture: &Culture) -> String {
        self.to_rfc3339()
    }
}

/// Hollow text yields `None`; anything else follows the wrapped type's rule.
impl<S: Scalar> Scalar for Option<S> {
    fn parse(text: &str, culture: &Culture) -> Result<Self, ScalarError> {
        if is_hollow(text) {
            Ok(None)
        } else {
            S::parse(text, culture).map(Some)
        }
    }

    fn render(&self, culture: &Culture) -> String {
        match self {
            Some(value) => value.render(culture),
            None => String::new(),
        }
    }
}

/// Define an enumeration usable as a configuration scalar.
///
/// Parsing matches variant names case-insensitively; rendering emits the
/// declared name. Wrap the field type in `Option` to let hollow input mean
/// "no value".
///
/// ```
/// use initree::config_enum;
/// use initree::convert::{Culture, Scalar};
///
/// config_enum! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     pub enum LogLevel { Debug, Info, Warning }
/// }
///
/// let culture = Culture::invariant();
/// assert_eq!(LogLevel::parse("info", &culture).unwrap(), LogLevel::Info);
/// assert!(LogLevel::parse("loud", &culture).is_err());
/// ```
#[macro_export]
macro_rules! config_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $($(#[$variant_meta])* $variant),+
        }

        impl $crate::convert::Scalar for $name {
            fn parse(
                text: &str,
                _culture: &$crate::convert::Culture,
            ) -> std::result::Result<Self, $crate::convert::ScalarError> {
                let trimmed = text.trim();
                $(
                    if trimmed.eq_ignore_ascii_case(stringify!($variant)) {
                        return Ok(Self::$variant);
                    }
                )+
                Err($crate::convert::ScalarError {
                    reason: format!(
                        "'{}' is not one of: {}",
                        trimmed,
                        [$(stringify!($variant)),+].join(", "),
                    ),
                })
            }

            fn render(&self, _culture: &$crate::convert::Culture) -> String {
                match self {
                    $(Self::$variant => stringify!($variant).to_string()),+
                }
            }
        }
    };
}
