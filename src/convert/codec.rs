//! The custom converter extension point.

use super::culture::Culture;

/// The fault type a codec may raise; preserved as the error source when the
/// engine wraps it.
pub type CodecFault = Box<dyn std::error::Error + Send + Sync>;

/// A two-way converter a field type may declare instead of relying on the
/// built-in [`Scalar`](super::Scalar) rules.
///
/// The engine resolves a codec once per field binding and holds it as a
/// capability; it is not re-resolved per call. A fault raised here surfaces
/// as [`ConfigError::Codec`](crate::error::ConfigError::Codec), carrying the
/// offending label and value plus the original cause.
pub trait ValueCodec<T> {
    /// Convert raw text into a value.
    ///
    /// `text` is the found text, or the declared fallback when the value was
    /// absent; `fallback` is the declared fallback itself, for codecs that
    /// distinguish the two.
    fn decode(
        &self,
        label: &str,
        text: &str,
        fallback: Option<&str>,
        culture: &Culture,
    ) -> Result<T, CodecFault>;

    /// Convert a value back into raw text.
    fn encode(&self, label: &str, value: &T, culture: &Culture) -> Result<String, CodecFault>;
}
