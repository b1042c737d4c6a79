//! Numeric weighter configuration.
//!
//! The surrounding collation table owns these values: the anchor primary is
//! reserved by whoever lays out the primary weight space, and the cap trades
//! exact ordering of very long numbers for bounded output per call.

use colltab_elem::{
    Elem, ElemError, Weighter, DEFAULT_SECONDARY, DEFAULT_TERTIARY, MAX_PRIMARY, MAX_SECONDARY,
};
use tracing::debug;

/// Default cap on encodable significant digits and leading zeros.
///
/// Runs of up to `DEFAULT_MAX_DIGITS - 1` significant digits order exactly;
/// that covers every integer type and typical identifiers (serials, dates,
/// version components).
pub const DEFAULT_MAX_DIGITS: u32 = 64;

/// Invalid numeric weighter configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NumericError {
    #[error("digit cap must be at least 2, got {0}")]
    CapTooSmall(u32),
    #[error("digit cap {0} exceeds the primary weight range")]
    CapTooLarge(u32),
    #[error("numeric anchor must be a non-zero primary weight")]
    ZeroAnchor,
    #[error("numeric anchor {0:#x} exceeds the primary weight range")]
    AnchorOutOfRange(u32),
    #[error("base weighter has no primary weight for '9'")]
    NoDigitWeight,
    #[error(transparent)]
    Elem(#[from] ElemError),
}

/// Values the numeric weighter stamps into the elements it synthesizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumericConfig {
    /// Cap on the digit and leading-zero counts; see [`DEFAULT_MAX_DIGITS`].
    #[cfg_attr(feature = "serde", serde(default = "default_max_digits"))]
    max_digits: u32,
    /// Reserved primary opening every numeric sequence.
    anchor: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_secondary"))]
    secondary: u16,
    #[cfg_attr(feature = "serde", serde(default = "default_tertiary"))]
    tertiary: u8,
}

#[cfg(feature = "serde")]
fn default_max_digits() -> u32 {
    DEFAULT_MAX_DIGITS
}

#[cfg(feature = "serde")]
fn default_secondary() -> u16 {
    DEFAULT_SECONDARY
}

#[cfg(feature = "serde")]
fn default_tertiary() -> u8 {
    DEFAULT_TERTIARY
}

impl NumericConfig {
    /// Configuration with the given anchor and default cap and lower levels.
    ///
    /// Not validated; [`NumericWeighter::with_config`](crate::NumericWeighter::with_config)
    /// does that.
    pub const fn new(anchor: u32) -> Self {
        NumericConfig {
            max_digits: DEFAULT_MAX_DIGITS,
            anchor,
            secondary: DEFAULT_SECONDARY,
            tertiary: DEFAULT_TERTIARY,
        }
    }

    /// Derive a configuration from a base weighter.
    ///
    /// The anchor is the primary directly after the one `base` assigns to
    /// `'9'`, so numbers sort after every digit yet before anything the table
    /// places further up. The table must leave that primary unused.
    pub fn for_weighter<W: Weighter + ?Sized>(base: &W) -> Result<Self, NumericError> {
        let mut elems = Vec::with_capacity(2);
        base.append_next_str(&mut elems, "9");
        let nine = elems
            .first()
            .filter(|e| !e.is_ignorable())
            .ok_or(NumericError::NoDigitWeight)?;
        let anchor = nine
            .primary()
            .checked_add(1)
            .ok_or(NumericError::AnchorOutOfRange(nine.primary()))?;
        debug!(anchor, "derived numeric anchor from base weighter");

        let config = NumericConfig::new(anchor);
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub const fn with_max_digits(self, max_digits: u32) -> Self {
        NumericConfig { max_digits, ..self }
    }

    #[must_use]
    pub const fn with_secondary(self, secondary: u16) -> Self {
        NumericConfig { secondary, ..self }
    }

    #[must_use]
    pub const fn with_tertiary(self, tertiary: u8) -> Self {
        NumericConfig { tertiary, ..self }
    }

    pub const fn max_digits(&self) -> u32 {
        self.max_digits
    }

    pub const fn anchor(&self) -> u32 {
        self.anchor
    }

    pub const fn secondary(&self) -> u16 {
        self.secondary
    }

    pub const fn tertiary(&self) -> u8 {
        self.tertiary
    }

    /// Check that every element this configuration can produce is valid and
    /// that a call on a non-zero digit always consumes input.
    pub fn validate(&self) -> Result<(), NumericError> {
        if self.max_digits < 2 {
            return Err(NumericError::CapTooSmall(self.max_digits));
        }
        if self.max_digits > MAX_PRIMARY {
            return Err(NumericError::CapTooLarge(self.max_digits));
        }
        if self.anchor == 0 {
            return Err(NumericError::ZeroAnchor);
        }
        if self.anchor > MAX_PRIMARY {
            return Err(NumericError::AnchorOutOfRange(self.anchor));
        }
        if self.secondary > MAX_SECONDARY {
            return Err(ElemError::SecondaryOutOfRange(self.secondary).into());
        }
        Ok(())
    }

    /// A synthesized element with this configuration's lower levels.
    #[inline]
    pub(crate) const fn elem(&self, primary: u32) -> Elem {
        Elem::new(primary, self.secondary, self.tertiary)
    }
}
