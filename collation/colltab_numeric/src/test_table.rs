//! Base weighter shared by the unit tests.
//!
//! Digits `0..=9` weigh 100..=107, 118, 119: increasing but not contiguous,
//! leaving 120 free for the numeric anchor. Non-ASCII digit forms carry
//! tertiary variants or an extra ignorable modifier element.

#![allow(clippy::unwrap_used)]

use colltab_elem::{Elem, DEFAULT_SECONDARY, DEFAULT_TERTIARY};
use colltab_table::TableWeighter;

/// Ignorable modifier some digit forms attach after their primary element.
pub(crate) const T_PLUS_3: Elem = Elem::new(0, 50, DEFAULT_TERTIARY + 3);

/// A digit element with a tertiary variant.
pub(crate) const fn variant(primary: u32, tertiary_delta: u8) -> Elem {
    Elem::new(primary, DEFAULT_SECONDARY, DEFAULT_TERTIARY + tertiary_delta)
}

/// Elements with default lower levels.
pub(crate) fn p(primaries: &[u32]) -> Vec<Elem> {
    primaries.iter().copied().map(Elem::primary_only).collect()
}

pub(crate) fn digits_table() -> TableWeighter {
    let mut b = TableWeighter::builder();
    for (digit, primary) in ('0'..='9').zip([100, 101, 102, 103, 104, 105, 106, 107, 118, 119]) {
        b.primary(digit.encode_utf8(&mut [0; 4]), primary).unwrap();
    }
    b.insert("\u{FF10}", &[variant(100, 1)]) // FULLWIDTH DIGIT ZERO
        .unwrap()
        .insert("\u{2080}", &[variant(100, 5)]) // SUBSCRIPT ZERO
        .unwrap()
        .insert("\u{0661}", &[Elem::primary_only(101), T_PLUS_3]) // ARABIC-INDIC DIGIT ONE
        .unwrap()
        .insert("\u{FF11}", &[variant(101, 1)]) // FULLWIDTH DIGIT ONE
        .unwrap()
        .insert("\u{0662}", &[Elem::primary_only(102), T_PLUS_3]) // ARABIC-INDIC DIGIT TWO
        .unwrap()
        .insert("\u{FF12}", &[variant(102, 3)]) // FULLWIDTH DIGIT TWO
        .unwrap()
        .insert("\u{0669}", &[Elem::primary_only(119), T_PLUS_3]) // ARABIC-INDIC DIGIT NINE
        .unwrap()
        .insert("\u{FF19}", &[variant(119, 1)]) // FULLWIDTH DIGIT NINE
        .unwrap()
        .insert("\u{2089}", &[variant(119, 5)]) // SUBSCRIPT NINE
        .unwrap();
    b.primary("a", 5)
        .unwrap()
        .primary("b", 6)
        .unwrap()
        .insert("c", &p(&[8, 2]))
        .unwrap()
        .primary("klm", 99)
        .unwrap()
        .primary("nop", 121)
        .unwrap()
        .primary("x", 200)
        .unwrap()
        .primary("y", 201)
        .unwrap();
    b.build()
}
