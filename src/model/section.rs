//! A titled, ordered, label-unique collection of values.

use crate::line::{fixup_title, is_section, split::split_section_line};
use crate::model::{ConfigItem, ConfigValue, KeyedVec};
use crate::style::Style;

/// A section of the configuration: a title plus its label/value pairs.
///
/// The empty title denotes the implicit "others" bucket holding values that
/// precede any section header. At most one value per label exists; adopting a
/// value under an existing label replaces it in place.
#[derive(Debug, Clone, Default)]
pub struct ConfigSection {
    /// The title, unique within the owning content. Empty for the implicit
    /// untitled bucket.
    pub title: String,
    /// Optional inline comment rendered after the section header.
    pub comment: Option<String>,
    values: KeyedVec<ConfigValue>,
}

impl ConfigSection {
    /// Create an empty section with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            comment: None,
            values: KeyedVec::new(),
        }
    }

    /// Create the implicit untitled bucket.
    pub fn untitled() -> Self {
        Self::new("")
    }

    /// Attach an inline comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Whether this is the implicit untitled bucket.
    pub fn is_untitled(&self) -> bool {
        self.title.is_empty()
    }

    /// Number of values in this section.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether this section holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Remove all values.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Access a value by position.
    pub fn get(&self, index: usize) -> Option<&ConfigValue> {
        self.values.get(index)
    }

    /// Find a value by label.
    pub fn find(&self, label: &str) -> Option<&ConfigValue> {
        self.values.find(label, |v| &v.label)
    }

    /// Find a value by label for mutation.
    pub fn find_mut(&mut self, label: &str) -> Option<&mut ConfigValue> {
        self.values.find_mut(label, |v| &v.label)
    }

    /// Adopt a value at the end, or replace a same-labeled value in place.
    ///
    /// Accepts either a [`ConfigValue`] or a raw descriptor string.
    pub fn append(&mut self, value: impl Into<ConfigValue>) {
        self.values.append(value.into(), |v| &v.label);
    }

    /// Adopt a value at the front, or replace a same-labeled value in place.
    pub fn prepend(&mut self, value: impl Into<ConfigValue>) {
        self.values.prepend(value.into(), |v| &v.label);
    }

    /// Adopt a value at the given position, or replace a same-labeled value
    /// in place.
    pub fn insert(&mut self, index: usize, value: impl Into<ConfigValue>) {
        self.values.insert(index, value.into(), |v| &v.label);
    }

    /// Detach and return the value with the given label.
    pub fn remove(&mut self, label: &str) -> Option<ConfigValue> {
        self.values.remove_key(label, |v| &v.label)
    }

    /// Detach and return the value at the given position.
    pub fn remove_at(&mut self, index: usize) -> Option<ConfigValue> {
        self.values.remove_at(index)
    }

    /// Iterate over the values in order.
    pub fn iter(&self) -> impl Iterator<Item = &ConfigValue> {
        self.values.iter()
    }

    /// Produce the output line sequence for this section.
    ///
    /// Titled sections emit a `[Title]` line (plus inline comment) followed
    /// by one line per value; the untitled bucket emits its values only.
    pub fn to_output<'a>(&'a self, style: &'a Style) -> impl Iterator<Item = String> + 'a {
        let header = (!self.is_untitled()).then(move || {
            let mut line = format!("[{}]", fixup_title(&self.title));
            if let Some(comment) = &self.comment {
                line.push(' ');
                line.push(style.comment_marker());
                line.push(' ');
                line.push_str(comment);
            }
            line
        });
        header
            .into_iter()
            .chain(self.values.iter().map(move |v| v.render(style)))
    }
}

/// Construct a section from a raw descriptor such as `"[server]"` or
/// `"server"`.
impl From<&str> for ConfigSection {
    fn from(descriptor: &str) -> Self {
        if is_section(descriptor) {
            let (title, comment) = split_section_line(descriptor);
            Self {
                title,
                comment,
                values: KeyedVec::new(),
            }
        } else {
            Self::new(fixup_title(descriptor))
        }
    }
}

impl ConfigItem for ConfigSection {
    /// A section is valid iff its title is already in normalized form: no
    /// stray section markers, no surrounding whitespace. The untitled bucket
    /// is always valid.
    fn is_valid(&self) -> bool {
        self.title == fixup_title(&self.title)
    }
}
