//! Longest-match table weighter.
//!
//! [`TableWeighter`] maps lexical units (single characters and contractions
//! such as `"ch"`) to groups of collation elements. Characters missing from
//! the table get an implicit weight derived from their code point, so the
//! weighter is total over any input.

mod table;

pub use table::{TableError, TableWeighter, TableWeighterBuilder, DEFAULT_IMPLICIT_BASE};
