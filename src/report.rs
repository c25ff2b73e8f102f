//! Report lines for the demonstration harness.
//!
//! Pure string producers; the binary decides where they are printed.

use crate::value::Bits;
use crate::{bigint, float, int};
use num_bigint::BigInt;

/// One line describing a 32-bit pattern and both of its decimal readings.
pub fn int_representation_line(value: i32) -> String {
    format!(
        "binary representation = {}, signed int value = {}, unsigned int value = {}",
        int::format_binary32(value),
        value,
        int::unsigned_decimal(value)
    )
}

/// One line describing an arbitrary precision value: minimal encoded
/// size and the sign-aware base-2 rendering.
pub fn bigint_report_line(value: &BigInt) -> String {
    format!(
        "size in bytes = {}, value in bits = {}",
        bigint::byte_length(value),
        bigint::binary_string(value)
    )
}

/// Lines contrasting arithmetic and logical right shift on one value.
pub fn shift_report_lines(value: i32, amount: u32) -> Vec<String> {
    let arithmetic = int::arithmetic_shr32(value, amount);
    let logical = int::logical_shr32(value, amount);
    vec![
        format!("{}  {}", int::format_binary32(value), value),
        format!(
            "{}  {}  (arithmetic >> {})",
            int::format_binary32(arithmetic),
            arithmetic,
            amount
        ),
        format!(
            "{}  {}  (logical >> {})",
            int::format_binary32(logical),
            int::unsigned_decimal(logical),
            amount
        ),
    ]
}

/// Special-value patterns, each tagged with the operation that produced
/// it. NaN payloads are reported verbatim and may differ per producer.
pub fn special_value_reports() -> Vec<(&'static str, String)> {
    let produced: [(&'static str, f64); 8] = [
        ("-inf", f64::NEG_INFINITY),
        ("-inf + 1", f64::NEG_INFINITY + 1.0),
        ("nan", f64::NAN),
        ("nan + -inf", f64::NAN + f64::NEG_INFINITY),
        ("sqrt(-3)", (-3.0f64).sqrt()),
        ("ln(-2)", (-2.0f64).ln()),
        ("0 * inf", 0.0 * f64::INFINITY),
        ("0 * -inf", 0.0 * f64::NEG_INFINITY),
    ];
    produced
        .into_iter()
        .map(|(label, value)| (label, float::format_binary64(value)))
        .collect()
}

/// One line summarizing how the two zeros compare and how their
/// patterns differ.
pub fn zero_comparison_line() -> String {
    let facts = float::zero_comparison_facts();
    format!(
        "-0.0 == 0.0: {}, -0.0 < 0.0: {}, patterns equal: {} ({} vs {})",
        facts.numerically_equal,
        facts.negative_less_than_positive,
        facts.patterns_equal,
        Bits::from_f64(-0.0),
        Bits::from_f64(0.0),
    )
}
