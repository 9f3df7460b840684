//! ASCII classifiers for the numeric grammar.
//!
//! Fixed-convention predicates over single bytes; the ambient locale of the
//! process never participates in classification. Digit classification is
//! [`u8::is_ascii_digit`], used directly at the call sites.

/// Horizontal or vertical ASCII whitespace: tab, line feed, vertical tab,
/// form feed, carriage return, space.
#[inline]
pub(crate) fn is_horizontal_or_vertical_space(b: u8) -> bool {
    matches!(b, b'\t' | b'\n' | 0x0B | 0x0C | b'\r' | b' ')
}

/// Index of the first byte of `bytes` that is not horizontal or vertical
/// whitespace (or `bytes.len()` when all of it is).
#[inline]
pub(crate) fn leading_space_len(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .take_while(|&&b| is_horizontal_or_vertical_space(b))
        .count()
}
