//! Byte and string spans behind one scanning interface.
//!
//! The scanner is written once against [`TextSpan`]; the two public entry
//! points of the numeric weighter only pick the implementation.

use colltab_elem::{decode_first, Elem, Weighter};

use crate::digit::decimal_value;

/// A decimal digit at some position of a span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct DecimalDigit {
    /// Numeric value, `0..=9`.
    pub(crate) value: u8,
    /// Encoded width in bytes.
    pub(crate) width: usize,
}

/// Input the numeric weighter can scan.
///
/// Positions are byte offsets for both implementations. Positions handed to
/// [`tail`](Self::tail) always come from digit widths or base weighter
/// consumption, so they fall on character boundaries.
pub(crate) trait TextSpan {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn tail(&self, pos: usize) -> &Self;

    /// The decimal digit starting at `pos`, or `None` for a non-digit, an
    /// undecodable byte, or end of input.
    fn decimal_digit_at(&self, pos: usize) -> Option<DecimalDigit>;

    /// Weigh the unit at the start of this span with the matching
    /// [`Weighter`] method.
    fn append_base<W: Weighter + ?Sized>(&self, base: &W, buf: &mut Vec<Elem>) -> usize;
}

impl TextSpan for [u8] {
    #[inline]
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    #[inline]
    fn tail(&self, pos: usize) -> &Self {
        &self[pos..]
    }

    #[inline]
    fn decimal_digit_at(&self, pos: usize) -> Option<DecimalDigit> {
        let (c, width) = decode_first(self.get(pos..)?)?;
        Some(DecimalDigit {
            value: decimal_value(c)?,
            width,
        })
    }

    #[inline]
    fn append_base<W: Weighter + ?Sized>(&self, base: &W, buf: &mut Vec<Elem>) -> usize {
        base.append_next(buf, self)
    }
}

impl TextSpan for str {
    #[inline]
    fn len(&self) -> usize {
        str::len(self)
    }

    #[inline]
    fn tail(&self, pos: usize) -> &Self {
        &self[pos..]
    }

    #[inline]
    fn decimal_digit_at(&self, pos: usize) -> Option<DecimalDigit> {
        let c = self.get(pos..)?.chars().next()?;
        Some(DecimalDigit {
            value: decimal_value(c)?,
            width: c.len_utf8(),
        })
    }

    #[inline]
    fn append_base<W: Weighter + ?Sized>(&self, base: &W, buf: &mut Vec<Elem>) -> usize {
        base.append_next_str(buf, self)
    }
}
