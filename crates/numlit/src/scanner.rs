//! Grammar scanner: boundary detection for numeric literals.
//!
//! The scanner decides whether a numeric literal starts at the beginning of
//! an input sequence and, if so, where it ends. It recognizes exactly this
//! shape, greedily, left to right, without backtracking:
//!
//! ```text
//! ws* sign? digit digit* ( '.' digit* )? ( [eE] sign? digit digit* )? '%'?
//! ```
//!
//! Two rules are stricter than `strtod` and deliberate:
//! - the first non-space, non-sign character must be a digit, so `".5"` is
//!   not numeric;
//! - an exponent marker must be followed by at least one digit, and when it
//!   is not, the whole literal is rejected, so `"2.1E"` is not numeric at
//!   all (rather than matching `"2.1"` with a stray marker).
//!
//! The grammar is pure ASCII and UTF-8 continuation bytes are all above
//! 0x7F, so scanning the raw bytes of a `&str` is identical to scanning its
//! characters; the returned index is always a char boundary.

use crate::classify::is_horizontal_or_vertical_space;

/// Finds the end of the numeric literal at the start of `s`.
///
/// Returns the byte index immediately past the last character of the
/// literal, or `None` when no literal starts there. On success the index is
/// strictly positive: at least one digit was consumed.
///
/// ```rust
/// use numlit::end_of_numeric_literal;
///
/// assert_eq!(end_of_numeric_literal("  -42, then text"), Some(5));
/// assert_eq!(end_of_numeric_literal("2.1E"), None);
/// ```
#[must_use]
pub fn end_of_numeric_literal(s: &str) -> Option<usize> {
    end_of_numeric_literal_bytes(s.as_bytes())
}

/// Byte-oriented form of [`end_of_numeric_literal`].
#[must_use]
pub fn end_of_numeric_literal_bytes(bytes: &[u8]) -> Option<usize> {
    let at = |i: usize| bytes.get(i).copied();
    let mut p = 0;

    // Leading white space is fine.
    while at(p).is_some_and(is_horizontal_or_vertical_space) {
        p += 1;
    }
    if matches!(at(p), Some(b'+' | b'-')) {
        p += 1;
    }
    // The next character has to be a digit, so ".5" is not numeric.
    if !at(p).is_some_and(|b| b.is_ascii_digit()) {
        return None;
    }
    while at(p).is_some_and(|b| b.is_ascii_digit()) {
        p += 1;
    }
    if at(p) == Some(b'.') {
        p += 1;
        // Zero digits after the point are allowed: "3." is numeric.
        while at(p).is_some_and(|b| b.is_ascii_digit()) {
            p += 1;
        }
    }
    if matches!(at(p), Some(b'e' | b'E')) {
        p += 1;
        if matches!(at(p), Some(b'+' | b'-')) {
            p += 1;
        }
        // The exponent shall contain at least one digit; "2.1E" is not
        // numeric, and neither is the "2.1" in front of it.
        if !at(p).is_some_and(|b| b.is_ascii_digit()) {
            return None;
        }
        while at(p).is_some_and(|b| b.is_ascii_digit()) {
            p += 1;
        }
    }
    if at(p) == Some(b'%') {
        p += 1;
    }
    Some(p)
}
