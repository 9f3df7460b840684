#![no_main]
use libfuzzer_sys::fuzz_target;
use numlit::{
    end_of_numeric_literal_bytes, is_numeric_bytes, is_undefined, parse_f64_prefix_bytes,
    to_f64_bytes,
};

fuzz_target!(|data: &[u8]| {
    match end_of_numeric_literal_bytes(data) {
        Some(end) => {
            assert!(end > 0 && end <= data.len());
            assert!(!is_undefined(to_f64_bytes(data)));
            let (_, consumed) = parse_f64_prefix_bytes(data);
            // The scan end may include a trailing percent sign the converter
            // stops before; otherwise the two boundaries coincide.
            if data[end - 1] == b'%' {
                assert_eq!(consumed, end - 1);
            } else {
                assert_eq!(consumed, end);
            }
        }
        None => {
            assert!(!is_numeric_bytes(data));
            assert!(is_undefined(to_f64_bytes(data)));
        }
    }
    // Purity: a second scan must agree with the first.
    assert_eq!(end_of_numeric_literal_bytes(data), end_of_numeric_literal_bytes(data));
});
