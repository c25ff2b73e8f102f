use num_bigint::BigInt;
use smallvec::SmallVec;
use std::fmt;

/// Immutable raw bit pattern, stored as big-endian bytes.
///
/// Uses SmallVec to avoid heap allocations for patterns ≤16 bytes,
/// which covers every fixed-width numeric type and most arbitrary
/// precision values the demos touch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bits {
    /// Raw bytes, most significant first - inline for patterns ≤16 bytes
    data: SmallVec<[u8; 16]>,
}

impl Bits {
    /// Capture the two's-complement pattern of a signed 32-bit integer
    pub fn from_i32(value: i32) -> Self {
        Self {
            data: SmallVec::from_slice(&value.to_be_bytes()),
        }
    }

    /// Capture the pattern of an unsigned 32-bit integer
    pub fn from_u32(value: u32) -> Self {
        Self {
            data: SmallVec::from_slice(&value.to_be_bytes()),
        }
    }

    /// Capture the pattern of an unsigned 64-bit integer
    pub fn from_u64(value: u64) -> Self {
        Self {
            data: SmallVec::from_slice(&value.to_be_bytes()),
        }
    }

    /// Capture the raw IEEE-754 pattern of a double, NaN payload included
    pub fn from_f64(value: f64) -> Self {
        Self {
            data: SmallVec::from_slice(&value.to_bits().to_be_bytes()),
        }
    }

    /// Capture the minimal two's-complement encoding of an arbitrary
    /// precision integer. An extra sign byte is present only when the
    /// magnitude alone would be ambiguous, so the length here is the
    /// minimal byte length of the value.
    pub fn from_bigint(value: &BigInt) -> Self {
        Self {
            data: SmallVec::from_vec(value.to_signed_bytes_be()),
        }
    }

    /// Length of the pattern in bytes
    pub fn len_bytes(&self) -> usize {
        self.data.len()
    }

    /// Length of the pattern in bits
    pub fn len_bits(&self) -> usize {
        self.data.len() * 8
    }

    /// Raw bytes, most significant first
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Render the full pattern as '0'/'1' characters, MSB first.
    ///
    /// Every byte contributes exactly 8 characters, so the result is
    /// zero-padded to the pattern width with no separators.
    pub fn bit_string(&self) -> String {
        let mut out = String::with_capacity(self.len_bits());
        for byte in &self.data {
            for shift in (0..8).rev() {
                out.push(if byte >> shift & 1 == 1 { '1' } else { '0' });
            }
        }
        out
    }

    /// Try to reinterpret as a signed 32-bit integer
    pub fn as_i32(&self) -> Option<i32> {
        if self.data.len() == 4 {
            let mut bytes = [0u8; 4];
            bytes.copy_from_slice(&self.data);
            Some(i32::from_be_bytes(bytes))
        } else {
            None
        }
    }

    /// Try to reinterpret as an unsigned 32-bit integer
    pub fn as_u32(&self) -> Option<u32> {
        if self.data.len() == 4 {
            let mut bytes = [0u8; 4];
            bytes.copy_from_slice(&self.data);
            Some(u32::from_be_bytes(bytes))
        } else {
            None
        }
    }

    /// Try to reinterpret as an unsigned 64-bit integer
    pub fn as_u64(&self) -> Option<u64> {
        if self.data.len() == 8 {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(&self.data);
            Some(u64::from_be_bytes(bytes))
        } else {
            None
        }
    }

    /// Try to reinterpret as an IEEE-754 double.
    ///
    /// The bytes are taken verbatim as the 64-bit pattern, so a NaN
    /// payload survives the round trip unchanged.
    pub fn as_f64(&self) -> Option<f64> {
        self.as_u64().map(f64::from_bits)
    }
}

impl fmt::Display for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bit_string())
    }
}
