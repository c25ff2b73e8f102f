//! Common test utilities and macros

use regex::Regex;

/// Asserts that a rendered pattern is exactly `width` characters of
/// '0'/'1' and nothing else.
pub fn assert_pattern_shape(pattern: &str, width: usize) {
    let shape = Regex::new(&format!("^[01]{{{width}}}$")).unwrap();
    assert!(
        shape.is_match(pattern),
        "expected {width}-bit pattern, got {pattern:?}"
    );
}

/// Parses a 32-character pattern back to the signed value it encodes.
pub fn parse_twos_complement32(pattern: &str) -> i32 {
    u32::from_str_radix(pattern, 2).unwrap() as i32
}

#[macro_export]
macro_rules! check_binary32 {
    ($test_name:ident, value=$value:expr, pattern=$expected:expr) => {
        #[test]
        fn $test_name() {
            let pattern = bitprobe::int::format_binary32($value);
            crate::common::assert_pattern_shape(&pattern, 32);
            assert_eq!(pattern, $expected);
            assert_eq!(crate::common::parse_twos_complement32(&pattern), $value);
        }
    };
}

#[macro_export]
macro_rules! check_unsigned_decimal {
    ($test_name:ident, value=$value:expr, unsigned=$expected:expr) => {
        #[test]
        fn $test_name() {
            assert_eq!(bitprobe::int::unsigned_decimal($value), $expected);
        }
    };
}
