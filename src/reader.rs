//! Best-effort construction of a config tree from raw text lines.
//!
//! Each physical line is classified exactly once, in fixed precedence:
//! comment, then section, then value, else hollow or unrecognized. Malformed
//! lines never abort the read; they are skipped and reported as
//! [`ReadWarning`]s alongside the tree.
//!
//! Leading comment lines form the header block. Values appearing before any
//! section header land in the implicit untitled section. Duplicate section
//! headers extend the existing section; duplicate labels replace in place.

use crate::line::split::{split_section_line, split_value_line};
use crate::line::{is_comment, is_hollow, is_section, is_value};
use crate::model::{ConfigContent, ConfigHeader, ConfigValue};

/// A non-fatal anomaly encountered while reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadWarning {
    /// One-based number of the offending physical line.
    pub line: usize,
    /// The offending text, trimmed.
    pub text: String,
}

impl std::fmt::Display for ReadWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: unrecognized line '{}'", self.line, self.text)
    }
}

/// The result of a best-effort read: a tree plus accumulated warnings.
#[derive(Debug, Clone, Default)]
pub struct ReadOutcome {
    /// The tree built from every recognized line.
    pub content: ConfigContent,
    /// Anomalies for the lines that were skipped.
    pub warnings: Vec<ReadWarning>,
}

/// Read a configuration from a string.
///
/// # Examples
///
/// ```
/// use initree::reader::read_str;
///
/// let outcome = read_str("top = 1\n[server]\nport = 8080\n");
/// assert_eq!(outcome.content.find("").unwrap().find("top").unwrap().value, "1");
/// assert_eq!(outcome.content.find("server").unwrap().find("port").unwrap().value, "8080");
/// assert!(outcome.warnings.is_empty());
/// ```
pub fn read_str(text: &str) -> ReadOutcome {
    read_lines(text.lines())
}

/// Read a configuration from a sequence of raw text lines.
pub fn read_lines<I, S>(lines: I) -> ReadOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut content = ConfigContent::new();
    let mut warnings = Vec::new();
    let mut header_lines: Vec<String> = Vec::new();
    let mut in_header = true;
    let mut current_title: Option<String> = None;

    for (number, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();

        if is_comment(line) {
            if in_header {
                header_lines.push(line.trim().to_string());
            }
            // Standalone comments past the header carry no position in the
            // model and are skipped.
            continue;
        }

        if is_section(line) {
            in_header = false;
            let (title, comment) = split_section_line(line);
            let section = content.section_mut(&title);
            if section.comment.is_none() {
                section.comment = comment;
            }
            current_title = Some(title);
            continue;
        }

        if is_value(line) {
            in_header = false;
            let (label, value, comment) = split_value_line(line);
            let mut item = ConfigValue::new(label, value);
            item.comment = comment;
            let title = current_title.as_deref().unwrap_or("");
            content.section_mut(title).append(item);
            continue;
        }

        if is_hollow(line) {
            continue;
        }

        warnings.push(ReadWarning {
            line: number + 1,
            text: line.trim().to_string(),
        });
    }

    if !header_lines.is_empty() {
        content.header = Some(ConfigHeader::from_lines(header_lines));
    }

    ReadOutcome { content, warnings }
}
