//! Header block builders.
//!
//! Headers are blocks of comment lines placed before the first section of an
//! output file. The standard flavor frames an optional title between
//! decorative separator bars; the extended flavor adds a fixed block
//! documenting the file format itself.

use crate::line::is_hollow;
use crate::model::ConfigHeader;
use crate::style::Style;

/// Placeholder token for the file name, substituted at write time.
pub const FILE_TOKEN: &str = "{file}";

/// Placeholder token for the file date, substituted at write time.
pub const DATE_TOKEN: &str = "{date}";

const BAR_WIDTH: usize = 76;

/// Build a standard header: a title framed by separator bars, with optional
/// file-name and file-date placeholder lines.
///
/// Produces an empty header when the title is hollow and no placeholders were
/// requested.
pub fn standard_header(style: &Style, title: &str, placeholders: bool) -> ConfigHeader {
    let mut lines = Vec::new();
    push_standard_block(&mut lines, style, title, placeholders);
    ConfigHeader::from_lines(lines)
}

/// Build an extended header: the standard leading block followed by a fixed
/// block of comment lines documenting the format's own grammar.
///
/// The documentation block is emitted unconditionally.
pub fn extended_header(style: &Style, title: &str, placeholders: bool) -> ConfigHeader {
    let mut lines = Vec::new();
    push_standard_block(&mut lines, style, title, placeholders);

    let m = style.comment_marker();
    lines.push(format!("{m} Configuration file syntax:"));
    lines.push(format!("{m}"));
    lines.push(format!(
        "{m}   {m} text         lines opening with '#' or ';' are comments"
    ));
    lines.push(format!(
        "{m}   [Section]      a section header; text after ']' is a comment"
    ));
    lines.push(format!(
        "{m}   label = value  a labeled value; ':' is also accepted as marker"
    ));
    lines.push(format!(
        "{m}   Values containing '#', ';', ':' or '=' are wrapped in quotes."
    ));
    lines.push(format!(
        "{m}   Values before the first section belong to the untitled section."
    ));
    ConfigHeader::from_lines(lines)
}

fn push_standard_block(lines: &mut Vec<String>, style: &Style, title: &str, placeholders: bool) {
    if is_hollow(title) && !placeholders {
        return;
    }
    let m = style.comment_marker();
    let bar = format!("{m} {}", "-".repeat(BAR_WIDTH));
    lines.push(bar.clone());
    if !is_hollow(title) {
        lines.push(format!("{m} {}", title.trim()));
    }
    if placeholders {
        lines.push(format!("{m} File: {FILE_TOKEN}"));
        lines.push(format!("{m} Date: {DATE_TOKEN}"));
    }
    lines.push(bar);
}
