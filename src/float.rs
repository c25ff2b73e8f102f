//! IEEE-754 double inspection.
//!
//! A double is 1 sign bit, 11 exponent bits and 52 mantissa bits. The
//! functions here read the raw pattern without normalizing anything,
//! so distinct NaN payloads stay distinct and the sign of a zero is
//! observable even though `-0.0 == 0.0`.

use crate::value::Bits;

const EXPONENT_MASK: u64 = 0x7FF;
const MANTISSA_MASK: u64 = (1 << 52) - 1;

/// Formats the raw 64-bit IEEE-754 pattern of a double.
///
/// The result is exactly 64 characters, MSB first, with no separators:
/// sign bit, then 11 exponent bits, then 52 mantissa bits.
pub fn format_binary64(value: f64) -> String {
    Bits::from_f64(value).bit_string()
}

/// The three fields of a double's bit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatFields {
    /// Sign bit, true when set
    pub sign: bool,
    /// Biased exponent, 11 bits
    pub exponent: u16,
    /// Mantissa (fraction), 52 bits
    pub mantissa: u64,
}

impl FloatFields {
    /// Decompose a double into sign, exponent and mantissa fields.
    pub fn of(value: f64) -> Self {
        let bits = value.to_bits();
        Self {
            sign: bits >> 63 == 1,
            exponent: (bits >> 52 & EXPONENT_MASK) as u16,
            mantissa: bits & MANTISSA_MASK,
        }
    }

    /// All eleven exponent bits set and a nonzero mantissa.
    ///
    /// Agrees with `f64::is_nan` for every pattern; the mantissa bits
    /// are the payload and differ depending on which operation produced
    /// the NaN.
    pub fn is_nan(&self) -> bool {
        self.exponent == EXPONENT_MASK as u16 && self.mantissa != 0
    }

    /// All eleven exponent bits set and a zero mantissa.
    pub fn is_infinite(&self) -> bool {
        self.exponent == EXPONENT_MASK as u16 && self.mantissa == 0
    }

    /// Zero exponent and zero mantissa; the sign bit may still be set.
    pub fn is_zero(&self) -> bool {
        self.exponent == 0 && self.mantissa == 0
    }
}

/// Observable facts about comparing `-0.0` against `0.0`.
///
/// The two zeros are numerically equal under the ordering operators yet
/// carry different bit patterns. Both facts hold at once; neither
/// contradicts the other because equality compares values while the
/// patterns compare representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZeroComparison {
    /// `-0.0 == 0.0`
    pub numerically_equal: bool,
    /// `-0.0 < 0.0`
    pub negative_less_than_positive: bool,
    /// Raw 64-bit patterns are identical
    pub patterns_equal: bool,
}

/// Evaluates the `-0.0` versus `0.0` comparisons on the running platform.
pub fn zero_comparison_facts() -> ZeroComparison {
    let negative: f64 = -0.0;
    let positive: f64 = 0.0;
    ZeroComparison {
        numerically_equal: negative == positive,
        negative_less_than_positive: negative < positive,
        patterns_equal: negative.to_bits() == positive.to_bits(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_binary64_width() {
        for value in [0.0, -0.0, 1.0, -1.5, f64::INFINITY, f64::NAN] {
            assert_eq!(format_binary64(value).len(), 64);
        }
    }

    #[test]
    fn test_fields_of_one() {
        // 1.0 = biased exponent 1023, empty mantissa
        let fields = FloatFields::of(1.0);
        assert!(!fields.sign);
        assert_eq!(fields.exponent, 1023);
        assert_eq!(fields.mantissa, 0);
    }

    #[test]
    fn test_signed_zero_patterns() {
        assert!(format_binary64(-0.0).starts_with('1'));
        assert!(format_binary64(0.0).starts_with('0'));
        assert_eq!(&format_binary64(-0.0)[1..], &format_binary64(0.0)[1..]);

        let facts = zero_comparison_facts();
        assert!(facts.numerically_equal);
        assert!(!facts.negative_less_than_positive);
        assert!(!facts.patterns_equal);
    }

    #[test]
    fn test_infinity_fields() {
        for (value, sign) in [(f64::INFINITY, false), (f64::NEG_INFINITY, true)] {
            let fields = FloatFields::of(value);
            assert_eq!(fields.sign, sign);
            assert!(fields.is_infinite());
            assert!(!fields.is_nan());
        }
    }

    #[test]
    fn test_nan_is_unordered() {
        let nan = f64::NAN;
        assert!(nan != nan);
        assert!(!(nan < 1.0));
        assert!(!(nan < f64::INFINITY));
        assert!(!(nan == f64::NAN));
    }

    #[test]
    fn test_nan_fields() {
        let fields = FloatFields::of(f64::NAN);
        assert!(fields.is_nan());
        assert!(!fields.is_infinite());
        assert_eq!(fields.exponent, 0x7FF);
        assert_ne!(fields.mantissa, 0);
    }

    #[test]
    fn test_nan_producers_all_report_nan() {
        // Payloads may differ per operation; NaN-ness must not
        let produced = [
            f64::NAN + f64::NEG_INFINITY,
            (-3.0f64).sqrt(),
            (-2.0f64).ln(),
            0.0 * f64::INFINITY,
            0.0 * f64::NEG_INFINITY,
        ];
        for value in produced {
            let fields = FloatFields::of(value);
            assert!(fields.is_nan());
            assert_eq!(format_binary64(value).len(), 64);
        }
    }

    #[test]
    fn test_special_arithmetic_never_traps() {
        assert_eq!(f64::NEG_INFINITY + 1.0, f64::NEG_INFINITY);
        assert_eq!(1.0 / 0.0, f64::INFINITY);
        assert_eq!(-1.0 / 0.0, f64::NEG_INFINITY);
        assert!((0.0f64 / 0.0).is_nan());
    }
}
