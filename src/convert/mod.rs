//! Conversion between raw value text and typed field values.
//!
//! The [`Scalar`] trait covers the built-in flat scalar targets (strings,
//! booleans, integers, floats, chrono dates, and `Option`-wrapped versions of
//! each); the [`config_enum!`](crate::config_enum) macro extends it to
//! application enumerations with case-insensitive name matching. Types with
//! their own wire representation implement [`ValueCodec`] instead.
//!
//! Numeric parsing is culture-aware through an explicitly supplied
//! [`Culture`]; nothing in this module reads ambient locale state.

mod codec;
mod culture;
mod scalar;

#[cfg(test)]
mod tests;

pub use codec::{CodecFault, ValueCodec};
pub use culture::Culture;
pub use scalar::{Scalar, ScalarError};

use crate::error::{ConfigError, Result};

/// Convert raw text into a scalar value, attaching the label to any failure.
pub fn parse_scalar<S: Scalar>(label: &str, text: &str, culture: &Culture) -> Result<S> {
    S::parse(text, culture)
        .map_err(|fault| ConfigError::conversion(label, text, fault.reason))
}

/// Render a scalar value back into raw text.
pub fn render_scalar<S: Scalar>(value: &S, culture: &Culture) -> String {
    value.render(culture)
}
