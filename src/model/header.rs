//! The optional block of comment lines preceding all sections.

use crate::line::is_comment;
use crate::model::ConfigItem;
use crate::style::{DATE_TOKEN, FILE_TOKEN};

/// An ordered sequence of header comment lines.
///
/// Every line is required to independently satisfy
/// [`is_comment`](crate::line::is_comment); lines are stored fully rendered,
/// so producing output is a plain copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigHeader {
    lines: Vec<String>,
}

impl ConfigHeader {
    /// Create a header from pre-rendered comment lines.
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Number of header lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the header has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate over the header lines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Produce the output line sequence (a copy of the stored lines).
    pub fn to_output(&self) -> impl Iterator<Item = String> + '_ {
        self.lines.iter().cloned()
    }

    /// Return a copy with the file-name and file-date placeholder tokens
    /// substituted.
    pub fn substituted(&self, file_name: &str, file_date: &str) -> Self {
        Self {
            lines: self
                .lines
                .iter()
                .map(|line| line.replace(FILE_TOKEN, file_name).replace(DATE_TOKEN, file_date))
                .collect(),
        }
    }
}

impl ConfigItem for ConfigHeader {
    /// A header is valid iff every line is a pure comment.
    fn is_valid(&self) -> bool {
        self.lines.iter().all(|line| is_comment(line))
    }
}
