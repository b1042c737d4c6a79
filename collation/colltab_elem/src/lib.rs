//! Collation weight elements and the base weighter capability.
//!
//! This crate is standalone: the table weighter and the numeric weighter both
//! build on what it exports.
//!
//! - [`Elem`]: a multi-level weight `(primary, secondary, tertiary, quaternary)`.
//! - [`Weighter`]: maps a text position to the elements of the longest
//!   matching lexical unit and reports how much input that unit covered.
//!
//! [`decode_first`] is the UTF-8 decoding step every byte-span weighter needs.

mod elem;
mod text;
mod weighter;

pub use elem::{
    Elem, ElemError, DEFAULT_SECONDARY, DEFAULT_TERTIARY, MAX_PRIMARY, MAX_SECONDARY,
    MAX_TERTIARY,
};
pub use text::decode_first;
pub use weighter::Weighter;
