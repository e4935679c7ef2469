//! The root of a configuration tree.

use crate::model::{ConfigHeader, ConfigItem, ConfigSection, KeyedVec};
use crate::style::Style;

/// An entire configuration: an ordered, title-unique collection of sections
/// plus an optional header block.
///
/// At most one section per distinct title exists; adopting a section under an
/// existing title replaces it in place without disturbing the positions of
/// other sections. The implicit untitled bucket, when created through
/// [`section_mut`](Self::section_mut), is kept at the front so its values
/// still precede every section header on output.
#[derive(Debug, Clone, Default)]
pub struct ConfigContent {
    /// Optional block of comment lines emitted before all sections.
    pub header: Option<ConfigHeader>,
    sections: KeyedVec<ConfigSection>,
}

impl ConfigContent {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the configuration holds no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Remove all sections (the header is kept).
    pub fn clear(&mut self) {
        self.sections.clear();
    }

    /// Access a section by position.
    pub fn get(&self, index: usize) -> Option<&ConfigSection> {
        self.sections.get(index)
    }

    /// Find a section by title.
    pub fn find(&self, title: &str) -> Option<&ConfigSection> {
        self.sections.find(title, |s| &s.title)
    }

    /// Find a section by title for mutation.
    pub fn find_mut(&mut self, title: &str) -> Option<&mut ConfigSection> {
        self.sections.find_mut(title, |s| &s.title)
    }

    /// Find a section by title, creating it if absent.
    ///
    /// A newly created untitled bucket is placed at the front; any other new
    /// section is placed at the end.
    pub fn section_mut(&mut self, title: &str) -> &mut ConfigSection {
        if self.find(title).is_none() {
            let section = ConfigSection::new(title);
            if section.is_untitled() {
                self.sections.prepend(section, |s| &s.title);
            } else {
                self.sections.append(section, |s| &s.title);
            }
        }
        self.find_mut(title).expect("section was just inserted")
    }

    /// Adopt a section at the end, or replace a same-titled section in place.
    ///
    /// Accepts either a [`ConfigSection`] or a raw descriptor string such as
    /// `"[server]"`.
    pub fn append(&mut self, section: impl Into<ConfigSection>) {
        self.sections.append(section.into(), |s| &s.title);
    }

    /// Adopt a section at the front, or replace a same-titled section in
    /// place.
    pub fn prepend(&mut self, section: impl Into<ConfigSection>) {
        self.sections.prepend(section.into(), |s| &s.title);
    }

    /// Adopt a section at the given position, or replace a same-titled
    /// section in place.
    pub fn insert(&mut self, index: usize, section: impl Into<ConfigSection>) {
        self.sections.insert(index, section.into(), |s| &s.title);
    }

    /// Detach and return the section with the given title.
    pub fn remove(&mut self, title: &str) -> Option<ConfigSection> {
        self.sections.remove_key(title, |s| &s.title)
    }

    /// Detach and return the section at the given position.
    pub fn remove_at(&mut self, index: usize) -> Option<ConfigSection> {
        self.sections.remove_at(index)
    }

    /// Iterate over the sections in order.
    pub fn iter(&self) -> impl Iterator<Item = &ConfigSection> {
        self.sections.iter()
    }

    /// Iterate over the sections in order, mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ConfigSection> {
        self.sections.iter_mut()
    }

    /// Produce the output line sequence for the whole configuration.
    ///
    /// Header lines come first, then each section, with a blank separator
    /// line before every section that does not open the output. Producing
    /// output never mutates the tree, and each call yields a fresh iterator.
    pub fn to_output<'a>(&'a self, style: &'a Style) -> impl Iterator<Item = String> + 'a {
        let has_header = self.header.is_some();
        let header = self.header.iter().flat_map(ConfigHeader::to_output);
        let sections = self
            .sections
            .iter()
            .enumerate()
            .flat_map(move |(index, section)| {
                let separator = (index > 0 || has_header).then(String::new);
                separator.into_iter().chain(section.to_output(style))
            });
        header.chain(sections)
    }
}

impl ConfigItem for ConfigContent {
    /// A configuration is valid iff its header (when present) and every
    /// section and value are valid.
    fn is_valid(&self) -> bool {
        self.header.as_ref().is_none_or(ConfigItem::is_valid)
            && self
                .sections
                .iter()
                .all(|s| s.is_valid() && s.iter().all(ConfigItem::is_valid))
    }
}
