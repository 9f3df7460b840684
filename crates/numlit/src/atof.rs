//! Entry points: value extraction, the whole-string predicate, and integer
//! extraction.

use crate::classify::is_horizontal_or_vertical_space;
use crate::convert::parse_f64_prefix_bytes;
use crate::scanner::end_of_numeric_literal_bytes;

/// Sentinel meaning "no numeric value could be extracted".
///
/// Distinct from every value the converter can produce, including `0.0`:
/// the grammar has no NaN spelling, so a NaN result always means this
/// sentinel. Test with [`is_undefined`], never with `==`.
pub const UNDEFINED: f64 = f64::NAN;

/// Whether `v` is the [`UNDEFINED`] sentinel.
#[inline]
#[must_use]
pub fn is_undefined(v: f64) -> bool {
    v.is_nan()
}

/// Extracts the value of the numeric literal at the start of `s`.
///
/// Returns [`UNDEFINED`] when no literal the grammar recognizes starts
/// there. A trailing percent sign divides the value by 100, so `"50%"`
/// yields `0.5`. Text after the literal is ignored.
///
/// ```rust
/// use numlit::{is_undefined, to_f64};
///
/// assert_eq!(to_f64("  -42"), -42.0);
/// assert_eq!(to_f64("150% of budget"), 1.5);
/// assert!(is_undefined(to_f64("no number here")));
/// ```
#[must_use]
pub fn to_f64(s: &str) -> f64 {
    to_f64_bytes(s.as_bytes())
}

/// Byte-oriented form of [`to_f64`].
#[must_use]
pub fn to_f64_bytes(bytes: &[u8]) -> f64 {
    let Some(end) = end_of_numeric_literal_bytes(bytes) else {
        return UNDEFINED;
    };
    // The converter re-derives where the prefix ends on its own; the scan
    // result only settles the percent question.
    let (value, _) = parse_f64_prefix_bytes(bytes);
    if bytes[..end].last() == Some(&b'%') {
        0.01 * value
    } else {
        value
    }
}

/// Whether the whole of `s` is a single numeric literal, ignoring trailing
/// horizontal/vertical whitespace.
#[must_use]
pub fn is_numeric(s: &str) -> bool {
    is_numeric_bytes(s.as_bytes())
}

/// Byte-oriented form of [`is_numeric`].
#[must_use]
pub fn is_numeric_bytes(bytes: &[u8]) -> bool {
    let Some(mut p) = end_of_numeric_literal_bytes(bytes) else {
        return false;
    };
    // After the literal we accept only white space.
    while bytes.get(p).copied().is_some_and(is_horizontal_or_vertical_space) {
        p += 1;
    }
    p == bytes.len()
}

/// Extracts a leading base-10 integer from `s`, `strtoll`-style: leading
/// whitespace is skipped, a single sign is accepted, digits are consumed
/// greedily, and anything after them is ignored. No digits yields 0;
/// overflow saturates to `i64::MIN`/`i64::MAX`.
#[must_use]
pub fn to_i64(s: &str) -> i64 {
    to_i64_bytes(s.as_bytes())
}

/// Byte-oriented form of [`to_i64`].
#[must_use]
pub fn to_i64_bytes(bytes: &[u8]) -> i64 {
    let mut p = 0;
    while bytes.get(p).copied().is_some_and(is_horizontal_or_vertical_space) {
        p += 1;
    }
    let negative = match bytes.get(p) {
        Some(b'-') => {
            p += 1;
            true
        }
        Some(b'+') => {
            p += 1;
            false
        }
        _ => false,
    };
    // Accumulate on the negative side so that i64::MIN is reachable without
    // overflow on the last digit.
    let mut value: i64 = 0;
    let mut saturated = false;
    while let Some(b) = bytes.get(p).copied() {
        if !b.is_ascii_digit() {
            break;
        }
        if !saturated {
            let d = i64::from(b - b'0');
            value = match value.checked_mul(10).and_then(|v| v.checked_sub(d)) {
                Some(v) => v,
                None => {
                    saturated = true;
                    i64::MIN
                }
            };
        }
        p += 1;
    }
    if negative {
        value
    } else {
        value.checked_neg().unwrap_or(i64::MAX)
    }
}
