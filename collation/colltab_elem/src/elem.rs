//! Multi-level collation weight element.
//!
//! Elements compare component by component in level order, so the derived
//! `Ord` is exactly the per-element order used by a multi-level comparator.
//! Sequences of elements (`[Elem]`, `Vec<Elem>`) then compare lexicographically.
//!
//! # Ignorables
//!
//! An element with `primary == 0` is ignorable at the primary level. Such
//! elements are legitimate output of a base weighter (combining marks,
//! variation riders) but must never be synthesized as a stand-in for a value.

use std::fmt;

/// Largest primary weight representable (21 bits).
pub const MAX_PRIMARY: u32 = 0x1F_FFFF;

/// Largest secondary weight representable (12 bits).
pub const MAX_SECONDARY: u16 = 0xFFF;

/// Largest tertiary weight representable (8 bits).
pub const MAX_TERTIARY: u8 = u8::MAX;

/// Secondary weight of a plain, unaccented character.
pub const DEFAULT_SECONDARY: u16 = 0x20;

/// Tertiary weight of a plain, lowercase character.
pub const DEFAULT_TERTIARY: u8 = 0x02;

/// A collation weight element.
///
/// Field order matters: the derived `Ord` compares `primary` first, then
/// `secondary`, `tertiary` and `quaternary`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Elem {
    primary: u32,
    secondary: u16,
    tertiary: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    quaternary: u32,
}

/// Size assertion: an element fits in 12 bytes.
const _: () = assert!(std::mem::size_of::<Elem>() <= 12);

/// A weight component exceeded its representable range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ElemError {
    #[error("primary weight {0:#x} exceeds 21 bits")]
    PrimaryOutOfRange(u32),
    #[error("secondary weight {0:#x} exceeds 12 bits")]
    SecondaryOutOfRange(u16),
}

impl Elem {
    /// Create an element without range checks. Quaternary is zero.
    ///
    /// Use [`try_new`](Self::try_new) for weights coming from untrusted
    /// tables.
    #[inline]
    pub const fn new(primary: u32, secondary: u16, tertiary: u8) -> Self {
        Elem {
            primary,
            secondary,
            tertiary,
            quaternary: 0,
        }
    }

    /// Create an element with the given primary and default lower levels.
    #[inline]
    pub const fn primary_only(primary: u32) -> Self {
        Elem::new(primary, DEFAULT_SECONDARY, DEFAULT_TERTIARY)
    }

    /// Create an element, rejecting components outside their bit width.
    pub fn try_new(primary: u32, secondary: u16, tertiary: u8) -> Result<Self, ElemError> {
        if primary > MAX_PRIMARY {
            return Err(ElemError::PrimaryOutOfRange(primary));
        }
        if secondary > MAX_SECONDARY {
            return Err(ElemError::SecondaryOutOfRange(secondary));
        }
        Ok(Elem::new(primary, secondary, tertiary))
    }

    /// Return a copy of this element with the given quaternary weight.
    #[inline]
    #[must_use]
    pub const fn with_quaternary(self, quaternary: u32) -> Self {
        Elem { quaternary, ..self }
    }

    #[inline]
    pub const fn primary(self) -> u32 {
        self.primary
    }

    #[inline]
    pub const fn secondary(self) -> u16 {
        self.secondary
    }

    #[inline]
    pub const fn tertiary(self) -> u8 {
        self.tertiary
    }

    #[inline]
    pub const fn quaternary(self) -> u32 {
        self.quaternary
    }

    /// Whether this element is ignorable at the primary level.
    #[inline]
    pub const fn is_ignorable(self) -> bool {
        self.primary == 0
    }
}

impl fmt::Display for Elem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}.{}.{}", self.primary, self.secondary, self.tertiary)?;
        if self.quaternary != 0 {
            write!(f, ".{}", self.quaternary)?;
        }
        f.write_str("]")
    }
}
