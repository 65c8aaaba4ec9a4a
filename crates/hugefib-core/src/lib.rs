//! # hugefib-core
//!
//! Fast-doubling Fibonacci engine for very large indices, built on the
//! `hugefib-bigint` value type with parallel Karatsuba multiplication and
//! parallel decimal stringification.

pub mod constants;
pub mod error;
pub mod fastdoubling;
pub mod multiply;
pub mod options;
pub mod stringify;

// Re-exports
pub use constants::{exit_codes, DEFAULT_MUL_THRESHOLD, DEFAULT_STR_THRESHOLD, FIB_TABLE, MAX_FIB_U64};
pub use error::FibError;
pub use fastdoubling::fib;
pub use hugefib_bigint::{BigInt, Sign};
pub use multiply::{mul, sqr};
pub use options::Options;
pub use stringify::to_decimal_string;

/// Compute F(n) with default options.
///
/// This is a convenience function for simple use cases; construct an
/// [`Options`] explicitly to control thresholds and worker count.
///
/// # Example
/// ```
/// assert_eq!(hugefib_core::fibonacci(10).to_decimal(), "55");
/// assert_eq!(hugefib_core::fibonacci(0).to_decimal(), "0");
/// ```
#[must_use]
pub fn fibonacci(n: u64) -> BigInt {
    fastdoubling::fib_u64(n, &Options::default().normalize())
}
