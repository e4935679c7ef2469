//! A single labeled value within a section.

use crate::line::split::split_value_line;
use crate::line::{fixup_label, fixup_marker, fixup_value, is_value};
use crate::model::ConfigItem;
use crate::style::Style;

/// A label/value pair, optionally carrying a trailing comment.
///
/// The label is the unique key within the owning section. The value may be
/// empty but is never absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigValue {
    /// The label, unique within the owning section.
    pub label: String,
    /// The raw value text.
    pub value: String,
    /// Optional trailing comment rendered after the value.
    pub comment: Option<String>,
}

impl ConfigValue {
    /// Create a value from a label and value text.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            comment: None,
        }
    }

    /// Attach a trailing comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Render this value as a single output line under the given style.
    ///
    /// The label and value are fixed up at render time; the marker is the
    /// style's default, spaced according to its own identity.
    pub fn render(&self, style: &Style) -> String {
        let mut line = format!(
            "{}{}{}",
            fixup_label(&self.label),
            fixup_marker(style.value_marker(), style),
            fixup_value(&self.value),
        );
        if let Some(comment) = &self.comment {
            line.push(' ');
            line.push(style.comment_marker());
            line.push(' ');
            line.push_str(comment);
        }
        // An empty value would otherwise leave a dangling space after the marker.
        line.trim_end().to_string()
    }

    /// Produce the output line sequence for this value (always one line).
    pub fn to_output<'a>(&'a self, style: &'a Style) -> impl Iterator<Item = String> + 'a {
        std::iter::once_with(move || self.render(style))
    }
}

/// Construct a value from a raw descriptor line such as `"port = 8080"`.
///
/// A descriptor without a value marker becomes a label with an empty value.
impl From<&str> for ConfigValue {
    fn from(descriptor: &str) -> Self {
        if is_value(descriptor) {
            let (label, value, comment) = split_value_line(descriptor);
            Self {
                label,
                value,
                comment,
            }
        } else {
            Self::new(descriptor.trim(), "")
        }
    }
}

impl ConfigItem for ConfigValue {
    /// A value is valid iff it has a non-empty label.
    fn is_valid(&self) -> bool {
        !self.label.trim().is_empty()
    }
}
