//! Shared fixtures for the integration tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use colltab_elem::{Elem, Weighter, DEFAULT_SECONDARY, DEFAULT_TERTIARY};
use colltab_numeric::NumericWeighter;
use colltab_table::TableWeighter;

/// Primaries of the ASCII digits; increasing, with 120 left for the anchor.
pub const DIGIT_PRIMARIES: [u32; 10] = [100, 101, 102, 103, 104, 105, 106, 107, 118, 119];

/// Digits in three scripts plus a handful of letters, one a contraction.
pub fn base_table() -> TableWeighter {
    let mut b = TableWeighter::builder();
    for (i, primary) in DIGIT_PRIMARIES.into_iter().enumerate() {
        let offset = u32::try_from(i).unwrap();
        let ascii = char::from_digit(offset, 10).unwrap();
        let arabic = char::from_u32(0x0660 + offset).unwrap();
        let fullwidth = char::from_u32(0xFF10 + offset).unwrap();
        b.primary(ascii.encode_utf8(&mut [0; 4]), primary).unwrap();
        b.insert(
            arabic.encode_utf8(&mut [0; 4]),
            &[Elem::primary_only(primary), Elem::new(0, 50, DEFAULT_TERTIARY + 3)],
        )
        .unwrap();
        b.insert(
            fullwidth.encode_utf8(&mut [0; 4]),
            &[Elem::new(primary, DEFAULT_SECONDARY, DEFAULT_TERTIARY + 1)],
        )
        .unwrap();
    }
    for (key, primary) in [("a", 5), ("b", 6), ("x", 200), ("y", 201), ("ch", 9), ("-", 3)] {
        b.primary(key, primary).unwrap();
    }
    b.build()
}

pub fn numeric() -> NumericWeighter<TableWeighter> {
    NumericWeighter::new(base_table()).unwrap()
}

/// Weigh all of `s` with the string entry point.
pub fn key_str<W: Weighter>(w: &W, s: &str) -> Vec<Elem> {
    let mut buf = Vec::new();
    let mut pos = 0;
    while pos < s.len() {
        pos += w.append_next_str(&mut buf, &s[pos..]);
    }
    buf
}

/// Weigh all of `s` with the byte entry point.
pub fn key_bytes<W: Weighter>(w: &W, s: &[u8]) -> Vec<Elem> {
    let mut buf = Vec::new();
    let mut pos = 0;
    while pos < s.len() {
        pos += w.append_next(&mut buf, &s[pos..]);
    }
    buf
}
