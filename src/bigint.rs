//! Arbitrary precision integer inspection.
//!
//! Backed by `num_bigint::BigInt`. The byte length reported here is the
//! minimal two's-complement big-endian encoding: an extra `0x00` or
//! `0xFF` byte appears only when the top magnitude bit would otherwise
//! make the sign ambiguous.

use crate::value::Bits;
use num_bigint::BigInt;
use num_traits::Signed;

/// Length in bytes of the minimal two's-complement big-endian encoding.
///
/// Zero encodes as a single `0x00` byte, so the length is never 0.
pub fn byte_length(value: &BigInt) -> usize {
    Bits::from_bigint(value).len_bytes()
}

/// Base-2 rendering of the value: a `-` prefix for negatives, then the
/// magnitude bits with no padding beyond what the magnitude requires.
pub fn binary_string(value: &BigInt) -> String {
    let digits = value.abs().to_str_radix(2);
    if value.is_negative() {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Number of bits in the magnitude, 0 for zero.
pub fn bit_length(value: &BigInt) -> u64 {
    value.bits()
}
