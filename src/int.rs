//! Fixed-width 32-bit integer inspection.
//!
//! Every function here is total over the 32-bit domain: overflow wraps,
//! shifts reduce their amount mod 32, and no input can fail.

use crate::value::Bits;

/// Formats the two's-complement bit pattern of a signed 32-bit integer.
///
/// The result is exactly 32 characters, most significant bit first,
/// left zero-padded. The sign bit is simply bit 31 printed like any
/// other bit.
///
/// # Examples
/// ```
/// assert_eq!(bitprobe::int::format_binary32(5), format!("{}101", "0".repeat(29)));
/// assert_eq!(bitprobe::int::format_binary32(-1), "1".repeat(32));
/// ```
pub fn format_binary32(value: i32) -> String {
    Bits::from_i32(value).bit_string()
}

/// Reads the bit pattern of a signed 32-bit integer as unsigned decimal.
///
/// For negative inputs this equals `value + 2^32`; for non-negative
/// inputs the two interpretations agree.
pub fn unsigned_decimal(value: i32) -> String {
    (value as u32).to_string()
}

/// Logical right shift: vacated high bits fill with zero, the pattern
/// is treated as unsigned. The shift amount is taken mod 32.
pub fn logical_shr32(value: i32, amount: u32) -> i32 {
    ((value as u32) >> (amount % 32)) as i32
}

/// Arithmetic right shift: vacated high bits replicate the original
/// sign bit. The shift amount is taken mod 32.
pub fn arithmetic_shr32(value: i32, amount: u32) -> i32 {
    value >> (amount % 32)
}

/// Two's-complement modular addition. Wraps silently on overflow,
/// never traps.
pub fn wrapping_add32(left: i32, right: i32) -> i32 {
    left.wrapping_add(right)
}

/// Two's-complement modular multiplication. Wraps silently on overflow,
/// never traps.
pub fn wrapping_mul32(left: i32, right: i32) -> i32 {
    left.wrapping_mul(right)
}
