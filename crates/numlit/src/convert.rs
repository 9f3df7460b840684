//! Locale-independent string-to-double conversion.
//!
//! The converter parses a leading floating-point literal under the fixed
//! convention described by [`FIXED_CONVENTION`]. Whatever decimal separator
//! or digit grouping the host process's locale is configured with, the
//! result is the same. The digit-to-double step is delegated to `core`'s
//! decimal float parser, which follows the fixed convention unconditionally,
//! so there is no mutable state anywhere and every call is reentrant.
//!
//! The accepted shape here is the lenient `strtod` one, wider than the
//! grammar in [`crate::scanner`]: a bare leading decimal point converts
//! (`".5"` is `0.5`), and an exponent marker without digits is backtracked
//! out of the match rather than failing it (`"2.1E"` converts as `2.1`,
//! consuming three bytes). The strictness lives in the scanner.

use crate::classify::leading_space_len;

/// A fixed numeric-formatting convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Convention {
    /// The decimal separator.
    pub decimal_point: u8,
    /// The exponent markers.
    pub exponent_markers: [u8; 2],
}

/// The process-wide convention the converter guarantees: period as decimal
/// separator, `e`/`E` exponent markers, no digit grouping. Immutable and
/// shared by reference everywhere.
pub const FIXED_CONVENTION: Convention = Convention {
    decimal_point: b'.',
    exponent_markers: [b'e', b'E'],
};

/// Parses a leading floating-point literal from `s`.
///
/// Returns the value and the number of bytes consumed, counted from the
/// start of `s` (leading horizontal/vertical whitespace is skipped and
/// counted as consumed). When no numeric prefix is present the result is
/// `(0.0, 0)`; "parsed zero" and "parsed nothing" are told apart by the
/// consumed count, never by the value.
///
/// ```rust
/// use numlit::parse_f64_prefix;
///
/// assert_eq!(parse_f64_prefix("  -42 apples"), (-42.0, 5));
/// assert_eq!(parse_f64_prefix("garbage"), (0.0, 0));
/// ```
#[must_use]
pub fn parse_f64_prefix(s: &str) -> (f64, usize) {
    parse_f64_prefix_bytes(s.as_bytes())
}

/// Byte-oriented form of [`parse_f64_prefix`].
#[must_use]
pub fn parse_f64_prefix_bytes(bytes: &[u8]) -> (f64, usize) {
    let start = leading_space_len(bytes);
    let len = float_prefix_len(&bytes[start..]);
    if len == 0 {
        return (0.0, 0);
    }
    let end = start + len;
    // The matched prefix is pure ASCII, so it is valid UTF-8, and its shape
    // is a subset of what core's float parser accepts.
    let Ok(text) = core::str::from_utf8(&bytes[start..end]) else {
        return (0.0, 0);
    };
    match text.parse::<f64>() {
        Ok(value) => (value, end),
        Err(_) => (0.0, 0),
    }
}

/// Length of the longest `strtod`-shaped prefix of `bytes`, 0 when none.
fn float_prefix_len(bytes: &[u8]) -> usize {
    let at = |i: usize| bytes.get(i).copied();
    let mut p = 0;
    if matches!(at(p), Some(b'+' | b'-')) {
        p += 1;
    }
    let mut digits = 0;
    while at(p).is_some_and(|b| b.is_ascii_digit()) {
        p += 1;
        digits += 1;
    }
    if at(p) == Some(FIXED_CONVENTION.decimal_point) {
        p += 1;
        while at(p).is_some_and(|b| b.is_ascii_digit()) {
            p += 1;
            digits += 1;
        }
    }
    // At least one digit on either side of the point, or nothing matched.
    if digits == 0 {
        return 0;
    }
    if at(p).is_some_and(|b| FIXED_CONVENTION.exponent_markers.contains(&b)) {
        let mut q = p + 1;
        if matches!(at(q), Some(b'+' | b'-')) {
            q += 1;
        }
        if at(q).is_some_and(|b| b.is_ascii_digit()) {
            while at(q).is_some_and(|b| b.is_ascii_digit()) {
                q += 1;
            }
            p = q;
        }
        // No digit after the marker: the marker is not part of the number.
    }
    p
}
