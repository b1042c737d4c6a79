use super::*;

#[test]
fn ascii_digits() {
    for (i, c) in ('0'..='9').enumerate() {
        assert_eq!(decimal_value(c), u8::try_from(i).ok());
    }
    assert_eq!(decimal_value('a'), None);
    assert_eq!(decimal_value('/'), None);
    assert_eq!(decimal_value(':'), None);
}

#[test]
fn other_scripts() {
    assert_eq!(decimal_value('\u{0660}'), Some(0)); // ARABIC-INDIC DIGIT ZERO
    assert_eq!(decimal_value('\u{0669}'), Some(9)); // ARABIC-INDIC DIGIT NINE
    assert_eq!(decimal_value('\u{FF11}'), Some(1)); // FULLWIDTH DIGIT ONE
    assert_eq!(decimal_value('\u{096F}'), Some(9)); // DEVANAGARI DIGIT NINE
    assert_eq!(decimal_value('\u{1D7FF}'), Some(9)); // MATHEMATICAL MONOSPACE DIGIT NINE
}

#[test]
fn adjacent_blocks_restart_at_zero() {
    // Myanmar Tai Laing and Tai Tham Tham blocks sit back to back.
    assert_eq!(decimal_value('\u{1A89}'), Some(9));
    assert_eq!(decimal_value('\u{1A90}'), Some(0));
    // Mathematical digit styles are five consecutive blocks.
    assert_eq!(decimal_value('\u{1D7D7}'), Some(9));
    assert_eq!(decimal_value('\u{1D7D8}'), Some(0));
}

#[test]
fn gaps_between_blocks() {
    assert_eq!(decimal_value('\u{066A}'), None); // ARABIC PERCENT SIGN
    assert_eq!(decimal_value('\u{1A8A}'), None);
    assert_eq!(decimal_value('\u{FF1A}'), None); // FULLWIDTH COLON
}

#[test]
fn other_numbers_are_not_decimal() {
    assert_eq!(decimal_value('\u{2080}'), None); // SUBSCRIPT ZERO
    assert_eq!(decimal_value('\u{00B9}'), None); // SUPERSCRIPT ONE
    assert_eq!(decimal_value('\u{2460}'), None); // CIRCLED DIGIT ONE
    assert_eq!(decimal_value('\u{216B}'), None); // ROMAN NUMERAL TWELVE
}

#[test]
fn table_is_sorted_and_non_overlapping() {
    for pair in DECIMAL_ZEROS.windows(2) {
        assert!(u32::from(pair[1]) - u32::from(pair[0]) >= 10, "{pair:?}");
    }
}
