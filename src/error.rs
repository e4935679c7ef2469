//! Error types for the initree engine.
//!
//! Uses thiserror for derive macros. Only value conversion can fail during a
//! bind; structural anomalies on the read path are reported as warnings next
//! to a best-effort tree (see [`crate::reader::ReadWarning`]), never as errors.

use thiserror::Error;

/// Main error type for initree operations.
///
/// Every variant is recoverable by the caller and raised synchronously at the
/// call that triggered it.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Raw text could not be converted to or from the declared field type.
    #[error("cannot convert value '{value}' for label '{label}': {reason}")]
    Conversion {
        /// Label of the value pair at fault.
        label: String,
        /// The offending raw text.
        value: String,
        /// Human-readable description of the mismatch.
        reason: String,
    },

    /// A custom value codec failed; the original cause is preserved.
    #[error("codec failed for label '{label}' with value '{value}'")]
    Codec {
        /// Label of the value pair at fault.
        label: String,
        /// The offending raw text or rendered value.
        value: String,
        /// The fault raised by the codec.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An I/O fault from the line source or sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Build a conversion error for the given label/value pair.
    pub fn conversion(
        label: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ConfigError::Conversion {
            label: label.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for initree operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_error_names_label_and_value() {
        let err = ConfigError::conversion("port", "abc", "invalid digit");
        let msg = err.to_string();
        assert!(msg.contains("port"));
        assert!(msg.contains("abc"));
        assert!(msg.contains("invalid digit"));
    }

    #[test]
    fn codec_error_preserves_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad payload");
        let err = ConfigError::Codec {
            label: "blob".to_string(),
            value: "xyz".to_string(),
            source: Box::new(cause),
        };
        assert!(err.to_string().contains("blob"));
        let source = std::error::Error::source(&err).expect("source should be preserved");
        assert!(source.to_string().contains("bad payload"));
    }
}
