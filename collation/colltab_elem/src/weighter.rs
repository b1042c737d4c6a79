//! The base weighter capability.

use std::sync::Arc;

use crate::Elem;

/// Produces collation elements for the lexical unit at the start of a span.
///
/// A lexical unit is a single character or a multi-character sequence
/// (contraction) known to the implementation; the longest match wins.
///
/// # Contract
///
/// - The span passed in is non-empty.
/// - Elements are only appended to `buf`; existing contents are left intact.
/// - The returned length is at least 1 and counts units of the span type
///   (bytes for both methods, since `str` indices are byte offsets).
/// - Both methods behave identically on equivalent input.
pub trait Weighter {
    /// Append the elements for the unit at the start of `s`; returns the
    /// number of bytes consumed.
    fn append_next(&self, buf: &mut Vec<Elem>, s: &[u8]) -> usize;

    /// String variant of [`append_next`](Self::append_next).
    fn append_next_str(&self, buf: &mut Vec<Elem>, s: &str) -> usize;
}

impl<W: Weighter + ?Sized> Weighter for &W {
    #[inline]
    fn append_next(&self, buf: &mut Vec<Elem>, s: &[u8]) -> usize {
        (**self).append_next(buf, s)
    }

    #[inline]
    fn append_next_str(&self, buf: &mut Vec<Elem>, s: &str) -> usize {
        (**self).append_next_str(buf, s)
    }
}

impl<W: Weighter + ?Sized> Weighter for Box<W> {
    #[inline]
    fn append_next(&self, buf: &mut Vec<Elem>, s: &[u8]) -> usize {
        (**self).append_next(buf, s)
    }

    #[inline]
    fn append_next_str(&self, buf: &mut Vec<Elem>, s: &str) -> usize {
        (**self).append_next_str(buf, s)
    }
}

impl<W: Weighter + ?Sized> Weighter for Arc<W> {
    #[inline]
    fn append_next(&self, buf: &mut Vec<Elem>, s: &[u8]) -> usize {
        (**self).append_next(buf, s)
    }

    #[inline]
    fn append_next_str(&self, buf: &mut Vec<Elem>, s: &str) -> usize {
        (**self).append_next_str(buf, s)
    }
}
