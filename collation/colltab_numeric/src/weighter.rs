//! The numeric weighter.

use colltab_elem::{Elem, Weighter};

use crate::config::{NumericConfig, NumericError};
use crate::scanner::append_digit_run;
use crate::span::TextSpan;

/// Wraps a base weighter so that runs of decimal digits sort by numeric value.
///
/// Non-digit input is passed through to the base weighter untouched. A digit
/// run is replaced by a numeric sequence (see the scanner module for the
/// layout) whose digit weights still come from the base weighter, so
/// locale-specific digit forms keep their secondary and tertiary variation.
///
/// The wrapper holds no mutable state. Share one base table between several
/// weighters by wrapping a reference or an `Arc`.
///
/// # Example
///
/// ```
/// use colltab_elem::Weighter;
/// use colltab_numeric::NumericWeighter;
/// # use colltab_elem::Elem;
/// # struct Ascii;
/// # impl Weighter for Ascii {
/// #     fn append_next(&self, buf: &mut Vec<Elem>, s: &[u8]) -> usize {
/// #         buf.push(Elem::primary_only(u32::from(s[0])));
/// #         1
/// #     }
/// #     fn append_next_str(&self, buf: &mut Vec<Elem>, s: &str) -> usize {
/// #         self.append_next(buf, s.as_bytes())
/// #     }
/// # }
///
/// let numeric = NumericWeighter::new(Ascii)?;
/// let key = |s: &str| {
///     let mut buf = Vec::new();
///     let mut pos = 0;
///     while pos < s.len() {
///         pos += numeric.append_next_str(&mut buf, &s[pos..]);
///     }
///     buf
/// };
/// assert!(key("file9") < key("file10"));
/// # Ok::<(), colltab_numeric::NumericError>(())
/// ```
#[derive(Clone, Debug)]
pub struct NumericWeighter<W> {
    base: W,
    config: NumericConfig,
}

impl<W: Weighter> NumericWeighter<W> {
    /// Wrap `base`, deriving the configuration from its weight for `'9'`.
    ///
    /// See [`NumericConfig::for_weighter`].
    pub fn new(base: W) -> Result<Self, NumericError> {
        let config = NumericConfig::for_weighter(&base)?;
        Ok(NumericWeighter { base, config })
    }

    /// Wrap `base` with an explicit configuration.
    pub fn with_config(base: W, config: NumericConfig) -> Result<Self, NumericError> {
        config.validate()?;
        Ok(NumericWeighter { base, config })
    }

    pub fn base(&self) -> &W {
        &self.base
    }

    pub fn config(&self) -> &NumericConfig {
        &self.config
    }

    pub fn into_inner(self) -> W {
        self.base
    }

    fn append<S: TextSpan + ?Sized>(&self, buf: &mut Vec<Elem>, text: &S) -> usize {
        debug_assert!(!text.is_empty(), "weighter called past end of input");
        if text.is_empty() {
            return 0;
        }
        if text.decimal_digit_at(0).is_none() {
            return text.append_base(&self.base, buf);
        }
        append_digit_run(&self.base, &self.config, buf, text)
    }
}

impl<W: Weighter> Weighter for NumericWeighter<W> {
    #[inline]
    fn append_next(&self, buf: &mut Vec<Elem>, s: &[u8]) -> usize {
        self.append(buf, s)
    }

    #[inline]
    fn append_next_str(&self, buf: &mut Vec<Elem>, s: &str) -> usize {
        self.append(buf, s)
    }
}
