//! Bitprobe Numeric Representation Inspector
//!
//! Pure query functions over the bit patterns of fixed-width integers,
//! arbitrary precision integers and IEEE-754 doubles: two's-complement
//! wraparound, signed versus unsigned readings of one pattern, minimal
//! big-endian encodings, signed zeros and NaN payloads.
//!
//! Every operation is a total, stateless function: overflow wraps,
//! shift amounts reduce mod the register width, and floating-point
//! specials are reported instead of trapped. Nothing here holds state,
//! so all of it is safe to call from any number of threads.

pub mod bigint;
pub mod float;
pub mod int;
pub mod report;
pub mod value;

pub use float::{FloatFields, ZeroComparison};
pub use value::Bits;
