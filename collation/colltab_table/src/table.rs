//! Table storage, lookup and the builder.

use colltab_elem::{decode_first, Elem, Weighter, MAX_PRIMARY};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::debug;

/// Default base for implicit primaries: `base + char::MAX` stays within
/// [`MAX_PRIMARY`].
pub const DEFAULT_IMPLICIT_BASE: u32 = 0x0E_0000;

/// Largest implicit base for which every code point still gets a valid
/// primary.
const MAX_IMPLICIT_BASE: u32 = MAX_PRIMARY - char::MAX as u32;

/// Element group for one lexical unit. Most units map to one or two elements.
type ElemGroup = SmallVec<[Elem; 2]>;

/// Invalid table entry or builder setting.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("table keys must be non-empty")]
    EmptyKey,
    #[error("table entry {key:?} has no elements")]
    EmptyElems { key: String },
    #[error("implicit base {0:#x} would overflow the primary range")]
    ImplicitBaseOutOfRange(u32),
}

/// Longest-match weighter over a table of lexical units.
///
/// Created via [`TableWeighter::builder()`].
#[derive(Clone, Debug)]
pub struct TableWeighter {
    entries: FxHashMap<Box<str>, ElemGroup>,
    /// Length in bytes of the longest key; bounds the prefixes tried.
    max_key_len: usize,
    implicit_base: u32,
}

impl TableWeighter {
    pub fn builder() -> TableWeighterBuilder {
        TableWeighterBuilder {
            entries: FxHashMap::default(),
            implicit_base: DEFAULT_IMPLICIT_BASE,
        }
    }

    /// Elements stored for exactly `key`, if any.
    pub fn lookup(&self, key: &str) -> Option<&[Elem]> {
        self.entries.get(key).map(SmallVec::as_slice)
    }

    /// Number of lexical units in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn implicit_base(&self) -> u32 {
        self.implicit_base
    }

    /// Element for a character with no table entry.
    fn implicit(&self, c: char) -> Elem {
        Elem::primary_only(self.implicit_base + u32::from(c))
    }
}

impl Weighter for TableWeighter {
    fn append_next(&self, buf: &mut Vec<Elem>, s: &[u8]) -> usize {
        debug_assert!(!s.is_empty(), "weighter called past end of input");

        // Prefixes that split a character fail `from_utf8` and are skipped.
        for len in (1..=self.max_key_len.min(s.len())).rev() {
            let Ok(key) = std::str::from_utf8(&s[..len]) else {
                continue;
            };
            if let Some(elems) = self.entries.get(key) {
                buf.extend_from_slice(elems);
                return len;
            }
        }

        match decode_first(s) {
            Some((c, width)) => {
                buf.push(self.implicit(c));
                width
            }
            None => {
                buf.push(self.implicit(char::REPLACEMENT_CHARACTER));
                1
            }
        }
    }

    fn append_next_str(&self, buf: &mut Vec<Elem>, s: &str) -> usize {
        self.append_next(buf, s.as_bytes())
    }
}

/// Builder for [`TableWeighter`].
#[derive(Debug)]
pub struct TableWeighterBuilder {
    entries: FxHashMap<Box<str>, ElemGroup>,
    implicit_base: u32,
}

impl TableWeighterBuilder {
    /// Map `key` to `elems`, replacing any previous entry.
    pub fn insert(&mut self, key: &str, elems: &[Elem]) -> Result<&mut Self, TableError> {
        if key.is_empty() {
            return Err(TableError::EmptyKey);
        }
        if elems.is_empty() {
            return Err(TableError::EmptyElems { key: key.to_owned() });
        }
        if self
            .entries
            .insert(key.into(), SmallVec::from_slice(elems))
            .is_some()
        {
            debug!(key, "replaced collation table entry");
        }
        Ok(self)
    }

    /// Map `key` to a single element with default lower levels.
    pub fn primary(&mut self, key: &str, primary: u32) -> Result<&mut Self, TableError> {
        self.insert(key, &[Elem::primary_only(primary)])
    }

    /// Base added to a code point to form its implicit primary.
    pub fn implicit_base(&mut self, base: u32) -> Result<&mut Self, TableError> {
        if base > MAX_IMPLICIT_BASE {
            return Err(TableError::ImplicitBaseOutOfRange(base));
        }
        self.implicit_base = base;
        Ok(self)
    }

    pub fn build(self) -> TableWeighter {
        let max_key_len = self.entries.keys().map(|k| k.len()).max().unwrap_or(0);
        debug!(
            entries = self.entries.len(),
            max_key_len, "built collation table"
        );
        TableWeighter {
            entries: self.entries,
            max_key_len,
            implicit_base: self.implicit_base,
        }
    }
}
