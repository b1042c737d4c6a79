//! Numeric ordering of digit runs for collation weighters.
//!
//! [`NumericWeighter`] wraps any base [`Weighter`](colltab_elem::Weighter)
//! and makes `"file9"` sort before `"file10"`: each run of decimal digits
//! (Unicode `Nd`, any script) is replaced by a bounded sequence of elements
//! that compares like the number's value. Everything else is delegated to the
//! base weighter.
//!
//! The result is itself a `Weighter`, so it drops into any pipeline that
//! drives a base weighter call by call.

mod config;
mod digit;
mod scanner;
mod span;
mod weighter;

#[cfg(test)]
mod test_table;

pub use config::{NumericConfig, NumericError, DEFAULT_MAX_DIGITS};
pub use digit::decimal_value;
pub use weighter::NumericWeighter;
