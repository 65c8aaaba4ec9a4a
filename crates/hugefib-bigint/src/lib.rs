//! # hugefib-bigint
//!
//! Arbitrary-precision signed integers on u64 limbs: the value type,
//! limb primitives, schoolbook multiplication, Knuth long division, a
//! two's-complement byte codec, and sequential decimal conversion.
//!
//! The parallel Karatsuba multiplier and divide-and-conquer stringifier
//! live in `hugefib-core`; this crate is their sequential substrate.

pub mod arith;
mod bigint;
mod bytes;
mod decimal;
mod div;
mod mul;

// Re-exports
pub use bigint::{BigInt, Sign};
pub use decimal::ParseBigIntError;
