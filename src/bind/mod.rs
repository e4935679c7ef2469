//! Two-directional mapping between typed records and config trees.
//!
//! A record type opts in by implementing [`ConfigRecord`], supplying an
//! ordered list of [`FieldBinding`]s — the descriptor set the engine walks
//! instead of inspecting types at run time. Value bindings read and write
//! labeled values in the current section; section bindings descend into a
//! titled section of the same (flat) content and recurse with a nested
//! record type.
//!
//! Absence never fails: a missing section or value degrades to the field's
//! default (or declared fallback). Only conversion mismatches raise.

mod field;


pub use field::FieldBinding;

use field::FieldKind;

use crate::convert::Culture;
use crate::error::Result;
use crate::line::fixup_label;
use crate::model::{ConfigContent, ConfigValue};
use crate::style::{Style, extended_header, standard_header};

/// Header annotation for a record type: which flavor to build and with what
/// title and placeholder lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderSpec {
    /// Whether to build the extended flavor with the format documentation
    /// block.
    pub extended: bool,
    /// Optional title framed by the separator bars.
    pub title: Option<&'static str>,
    /// Whether to emit file-name/file-date placeholder lines.
    pub placeholders: bool,
}

impl HeaderSpec {
    /// A standard header with no title or placeholders.
    pub const fn standard() -> Self {
        Self {
            extended: false,
            title: None,
            placeholders: false,
        }
    }

    /// An extended header with no title or placeholders.
    pub const fn extended() -> Self {
        Self {
            extended: true,
            title: None,
            placeholders: false,
        }
    }

    /// Set the header title.
    pub const fn with_title(mut self, title: &'static str) -> Self {
        self.title = Some(title);
        self
    }

    /// Request file-name/file-date placeholder lines.
    pub const fn with_placeholders(mut self) -> Self {
        self.placeholders = true;
        self
    }
}

/// A record type that can be bound to and from a config tree.
pub trait ConfigRecord: Default {
    /// The ordered field descriptors for this type.
    ///
    /// Declaration order determines emission order on the write path.
    fn bindings() -> Vec<FieldBinding<Self>>;

    /// Optional header attached to the tree on the write path.
    fn header() -> Option<HeaderSpec> {
        None
    }
}

/// Produce a record from a config tree.
///
/// Value bindings of the top-level record read from the implicit untitled
/// section; section bindings select their titled section from the content.
pub fn from_tree<T: ConfigRecord>(content: &ConfigContent, culture: &Culture) -> Result<T> {
    read_record(content, "", culture)
}

/// Produce a config tree from a record.
///
/// The mirror of [`from_tree`]: sections and values are created as declared,
/// leaves are stringified through the converter, and the type's header
/// annotation (if any) is attached to the root.
pub fn to_tree<T: ConfigRecord>(
    record: &T,
    culture: &Culture,
    style: &Style,
) -> Result<ConfigContent> {
    let mut content = ConfigContent::new();
    if let Some(spec) = T::header() {
        let title = spec.title.unwrap_or("");
        let header = if spec.extended {
            extended_header(style, title, spec.placeholders)
        } else {
            standard_header(style, title, spec.placeholders)
        };
        if !header.is_empty() {
            content.header = Some(header);
        }
    }
    write_record(record, &mut content, "", culture)?;
    Ok(content)
}

pub(crate) fn read_record<T: ConfigRecord>(
    content: &ConfigContent,
    section_title: &str,
    culture: &Culture,
) -> Result<T> {
    let mut record = T::default();
    let section = content.find(section_title);

    for binding in T::bindings() {
        match &binding.kind {
            FieldKind::Value {
                label,
                fallback,
                read,
                ..
            } => {
                let found = section
                    .and_then(|s| s.find(label))
                    .map(|v| v.value.clone());
                // Missing degrades to the fallback, or to the field default.
                if let Some(text) = found.or_else(|| fallback.clone()) {
                    read(&mut record, &text, fallback.as_deref(), culture)?;
                }
            }
            FieldKind::Section { read, .. } => read(&mut record, content, culture)?,
        }
    }
    Ok(record)
}

pub(crate) fn write_record<T: ConfigRecord>(
    record: &T,
    content: &mut ConfigContent,
    section_title: &str,
    culture: &Culture,
) -> Result<()> {
    for binding in T::bindings() {
        match binding.kind {
            FieldKind::Value {
                label,
                comment,
                write,
                ..
            } => {
                let text = write(record, culture)?;
                // The label is fixed up on insertion; value quoting is
                // deferred to render time so tree-level lookups see raw text.
                let mut value = ConfigValue::new(fixup_label(&label), text.trim());
                value.comment = comment;
                content.section_mut(section_title).append(value);
            }
            FieldKind::Section {
                title,
                comment,
                write,
                ..
            } => {
                let section = content.section_mut(&title);
                if section.comment.is_none() {
                    section.comment = comment;
                }
                write(record, content, culture)?;
            }
        }
    }
    Ok(())
}
