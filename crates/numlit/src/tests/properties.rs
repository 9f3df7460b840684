use std::{format, string::String, vec::Vec};

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use crate::{
    end_of_numeric_literal, is_numeric, is_undefined, parse_f64_prefix, to_f64, to_i64,
};

/// Scanning is pure: the same input always yields the same boundary.
#[quickcheck]
fn scan_is_idempotent(s: String) -> bool {
    end_of_numeric_literal(&s) == end_of_numeric_literal(&s)
}

/// A successful scan consumed at least one byte and stayed in bounds.
#[quickcheck]
fn scan_end_is_in_bounds(s: String) -> bool {
    match end_of_numeric_literal(&s) {
        Some(end) => end > 0 && end <= s.len(),
        None => true,
    }
}

/// The converter never consumes more than the input holds, and a consumed
/// count of zero always comes with a value of exactly 0.0.
#[quickcheck]
fn converter_consumed_is_in_bounds(s: String) -> bool {
    let (value, consumed) = parse_f64_prefix(&s);
    consumed <= s.len() && (consumed > 0 || value == 0.0)
}

/// Whatever the predicate accepts, the converter and the extractor agree on:
/// a defined value and a non-zero consumed count no larger than the scan end.
#[quickcheck]
fn accepted_implies_converted(s: String) -> TestResult {
    if !is_numeric(&s) {
        return TestResult::discard();
    }
    let Some(end) = end_of_numeric_literal(&s) else {
        return TestResult::failed();
    };
    let (_, consumed) = parse_f64_prefix(&s);
    TestResult::from_bool(consumed > 0 && consumed <= end && !is_undefined(to_f64(&s)))
}

/// Round trip: a finite double formatted in the fixed convention's canonical
/// form parses back to itself, consuming everything.
#[quickcheck]
fn finite_doubles_round_trip(v: f64) -> TestResult {
    if !v.is_finite() {
        return TestResult::discard();
    }
    let text = format!("{v}");
    let (parsed, consumed) = parse_f64_prefix(&text);
    TestResult::from_bool(consumed == text.len() && parsed == v)
}

#[quickcheck]
fn i64_round_trips(v: i64) -> bool {
    to_i64(&format!("{v}")) == v
}

/// Literals assembled from the grammar are always recognized, and the
/// extracted value matches a direct conversion of the bare literal.
#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn assembled_literals_are_recognized(
    negative: bool,
    int_seed: Vec<u8>,
    frac_seed: Option<Vec<u8>>,
    exp_seed: Option<(bool, Vec<u8>)>,
    percent: bool,
    padding: u8,
) -> bool {
    fn digits(seed: &[u8]) -> String {
        seed.iter().map(|b| char::from(b'0' + b % 10)).collect()
    }

    let mut literal = String::new();
    if negative {
        literal.push('-');
    }
    if int_seed.is_empty() {
        literal.push('7');
    } else {
        literal.push_str(&digits(&int_seed));
    }
    if let Some(frac) = &frac_seed {
        literal.push('.');
        literal.push_str(&digits(frac));
    }
    if let Some((exp_negative, exp)) = &exp_seed {
        if !exp.is_empty() {
            literal.push('e');
            if *exp_negative {
                literal.push('-');
            }
            literal.push_str(&digits(exp));
        }
    }
    let expected = {
        let direct: f64 = literal.parse().unwrap();
        if percent { 0.01 * direct } else { direct }
    };
    if percent {
        literal.push('%');
    }

    let text = format!(
        "{}{literal}{}",
        " ".repeat(usize::from(padding % 3)),
        "\t".repeat(usize::from(padding % 2)),
    );
    let scanned = end_of_numeric_literal(&text);
    let extracted = to_f64(&text);
    is_numeric(&text)
        && scanned == Some(text.len() - usize::from(padding % 2))
        && !is_undefined(extracted)
        && extracted == expected
}
