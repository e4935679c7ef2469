//! Line-level text handling.
//!
//! This module owns everything that operates on a single physical line of
//! configuration text without looking at the surrounding tree:
//!
//! - [`classify`]: predicates deciding what kind of line a raw string is
//! - [`fixup`]: normalization applied to titles, labels, values, and markers
//!   immediately before rendering
//! - [`split`]: extraction of the components (title, label, value, inline
//!   comment) from an already-classified line
//!
//! The predicates are mutually informative but not mutually exclusive; the
//! reader applies them in a fixed precedence (comment, section, value, else
//! hollow/unrecognized) to classify each line exactly once.

pub mod classify;
pub mod fixup;
pub mod split;

#[cfg(test)]
mod tests;

pub use classify::{is_comment, is_hollow, is_section, is_value};
pub use fixup::{fixup_label, fixup_marker, fixup_title, fixup_value};

/// Characters that introduce a comment.
pub const COMMENT_MARKERS: [char; 2] = ['#', ';'];

/// Characters that separate a label from its value.
pub const VALUE_MARKERS: [char; 2] = [':', '='];

/// Character that opens a section header.
pub const SECTION_OPEN: char = '[';

/// Character that closes a section header.
pub const SECTION_CLOSE: char = ']';

/// Character that quotes a value containing reserved characters.
pub const QUOTE: char = '"';
