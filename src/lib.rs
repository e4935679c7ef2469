//! Initree: order-preserving INI configuration engine with typed record binding.
//!
//! The crate has three layers:
//!
//! - **Text layer** ([`line`], [`style`]): pure line classification predicates
//!   and the fixup/formatting rules that normalize titles, labels, values, and
//!   markers for output under an explicit [`style::Style`].
//! - **Tree layer** ([`model`], [`reader`], [`io`]): the generic config tree —
//!   ordered, key-unique sections of ordered, key-unique label/value pairs —
//!   read from and rendered back to raw text lines.
//! - **Binding layer** ([`convert`], [`bind`]): a descriptor-driven mapper
//!   between application record types and config trees, converting every leaf
//!   through culture-aware scalar parsing or custom codecs.
//!
//! Reading is best-effort: malformed lines become [`reader::ReadWarning`]s
//! alongside the tree, never errors. Only value conversion mismatches raise.

pub mod bind;
pub mod convert;
pub mod error;
pub mod io;
pub mod line;
pub mod model;
pub mod reader;
pub mod style;
