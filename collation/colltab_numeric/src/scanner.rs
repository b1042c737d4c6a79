//! Digit-run scanner and encoder.
//!
//! A run of decimal digits starting at the scan position is encoded as:
//!
//! ```text
//! [anchor] [n + 1] [digit weights ...] [z + 1] [next char weights ...]
//!           ^count  ^n groups, verbatim  ^terminator  ^natural end only
//! ```
//!
//! where `z` is the number of leading zeros and `n` the number of significant
//! digits, both capped at `max_digits - 1`. Putting the digit count before
//! the digits makes `"9"` sort before `"10"`; putting the zero count last
//! makes it a tie-break only, so `"1"` sorts just before `"01"`.
//!
//! # Capping
//!
//! Leading zeros are consumed in full even after the count saturates: the
//! encoding costs one element however many there are. Significant digits each
//! add a group of elements and a base weighter call, so the scan stops as soon
//! as `max_digits - 1` of them are encoded. The remaining digits are left for
//! the next call, which encodes them as a number of their own.

use colltab_elem::{Elem, Weighter};
use tracing::trace;

use crate::config::NumericConfig;
use crate::span::TextSpan;

/// Encode the digit run at the start of `text` into `buf`.
///
/// `text` must start with a decimal digit. Returns the number of bytes
/// consumed, which includes the character terminating the run when the run
/// ended before the cap.
pub(crate) fn append_digit_run<W, S>(
    base: &W,
    config: &NumericConfig,
    buf: &mut Vec<Elem>,
    text: &S,
) -> usize
where
    W: Weighter + ?Sized,
    S: TextSpan + ?Sized,
{
    debug_assert!(
        text.decimal_digit_at(0).is_some(),
        "digit run must start with a decimal digit"
    );
    let limit = config.max_digits() - 1;

    buf.push(config.elem(config.anchor()));
    // Patched once the significant digits are counted.
    let count_slot = buf.len();
    buf.push(config.elem(1));

    let mut pos = 0;
    let mut zeros: u32 = 0;
    while let Some(digit) = text.decimal_digit_at(pos) {
        if digit.value != 0 {
            break;
        }
        zeros = zeros.saturating_add(1);
        pos += digit.width;
    }
    if zeros > limit {
        trace!(zeros, limit, "leading zero count saturated");
    }

    let mut digits: u32 = 0;
    while digits < limit && text.decimal_digit_at(pos).is_some() {
        let consumed = text.tail(pos).append_base(base, buf);
        debug_assert!(consumed > 0, "base weighter made no progress");
        pos += consumed;
        digits += 1;
    }

    buf[count_slot] = config.elem(digits + 1);
    buf.push(config.elem(zeros.min(limit) + 1));

    if digits == limit {
        trace!(digits, consumed = pos, "significant digits truncated at cap");
    } else if pos < text.len() {
        // The run ended naturally; its terminating character joins this call.
        pos += text.tail(pos).append_base(base, buf);
    }
    pos
}
