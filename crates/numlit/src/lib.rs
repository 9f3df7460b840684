//! Locale-independent recognition and conversion of numeric text.
//!
//! Application strings carry numeric literals in a fixed, portable grammar:
//! optional sign, a mandatory leading digit, an optional fraction, an
//! optional exponent, and an optional trailing percent sign. This crate
//! answers two questions about such strings, with identical results no
//! matter how the host process's locale is configured:
//!
//! - does a string consist entirely of one numeric literal (plus trailing
//!   whitespace)? — [`is_numeric`]
//! - given a string that begins with a numeric literal, what is its value
//!   and where does the literal end? — [`to_f64`], [`parse_f64_prefix`]
//!
//! The grammar is strict on purpose: a bare leading decimal point (`".5"`)
//! is not numeric, and an exponent marker without digits (`"2.1E"`) fails
//! the whole literal rather than falling back to `2.1`.
//!
//! ```rust
//! use numlit::{is_numeric, is_undefined, to_f64};
//!
//! assert!(is_numeric("  -1.5e3 "));
//! assert_eq!(to_f64("50%"), 0.5);
//! assert!(is_undefined(to_f64(".5")));
//! ```
#![no_std]

#[cfg(test)]
extern crate std;

mod atof;
mod classify;
mod convert;
mod scanner;

#[cfg(test)]
mod tests;

pub use atof::{
    UNDEFINED, is_numeric, is_numeric_bytes, is_undefined, to_f64, to_f64_bytes, to_i64,
    to_i64_bytes,
};
pub use convert::{Convention, FIXED_CONVENTION, parse_f64_prefix, parse_f64_prefix_bytes};
pub use scanner::{end_of_numeric_literal, end_of_numeric_literal_bytes};
