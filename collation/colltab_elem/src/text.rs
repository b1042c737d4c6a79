//! UTF-8 decoding shared by byte-span weighters.

/// Decode the first character of `s`, returning it with its encoded width.
///
/// Returns `None` if `s` is empty or does not start with a complete, valid
/// UTF-8 sequence. Callers decide how to weigh the offending byte.
#[inline]
pub fn decode_first(s: &[u8]) -> Option<(char, usize)> {
    match *s.first()? {
        b @ 0..=0x7F => Some((char::from(b), 1)),
        _ => {
            let head = &s[..s.len().min(4)];
            let valid = match std::str::from_utf8(head) {
                Ok(valid) => valid,
                Err(err) => std::str::from_utf8(&head[..err.valid_up_to()]).ok()?,
            };
            let c = valid.chars().next()?;
            Some((c, c.len_utf8()))
        }
    }
}
