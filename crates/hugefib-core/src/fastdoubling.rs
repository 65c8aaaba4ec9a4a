//! Fast Doubling algorithm for Fibonacci computation.
//!
//! Uses the doubling identities:
//!   F(2k)   = F(k) * (2*F(k+1) - F(k))
//!   F(2k+1) = F(k)^2 + F(k+1)^2
//!
//! Iterates over the bits of n from MSB to LSB, so the total cost is
//! O(log n) big-integer multiplications, each delegated to the parallel
//! multiplier. For large operands the one multiply and two squarings of a
//! doubling step also run concurrently with each other.

use hugefib_bigint::BigInt;
use tracing::debug;

use crate::constants::{FIB_TABLE, MAX_FIB_U64};
use crate::error::FibError;
use crate::multiply::{mul, sqr};
use crate::options::Options;

/// Compute F(n).
///
/// Negative `n` is an input-validation error, never a panic or a wrong
/// value.
pub fn fib(n: i64, opts: &Options) -> Result<BigInt, FibError> {
    if n < 0 {
        return Err(FibError::NegativeIndex(n));
    }
    #[allow(clippy::cast_sign_loss)]
    Ok(fib_u64(n as u64, opts))
}

/// Compute F(n) for a known non-negative index.
#[must_use]
pub fn fib_u64(n: u64, opts: &Options) -> BigInt {
    // Fast path: precomputed table for everything that fits in u64.
    if n <= MAX_FIB_U64 {
        return BigInt::from(FIB_TABLE[usize::try_from(n).unwrap_or(0)]);
    }

    let high_bit = 63 - n.leading_zeros();
    debug!(n, high_bit, "fast doubling start");

    // (a, b) = (F(k), F(k+1)), starting at k = 0.
    let mut a = BigInt::zero();
    let mut b = BigInt::one();

    for i in (0..=high_bit).rev() {
        let t = &(&b << 1usize) - &a;
        let max_bits = a.bit_len().max(b.bit_len());

        let (f2k, f2k1) = if opts.workers >= 2 && max_bits >= opts.mul_threshold {
            // The multiply and both squarings are independent.
            let ((a_sq, b_sq), f2k) = rayon::join(
                || rayon::join(|| sqr(&a, opts), || sqr(&b, opts)),
                || mul(&a, &t, opts),
            );
            (f2k, &a_sq + &b_sq)
        } else {
            (
                mul(&a, &t, opts),
                &sqr(&a, opts) + &sqr(&b, opts),
            )
        };

        // (a, b) = (F(2k), F(2k+1))
        a = f2k;
        b = f2k1;

        // Advance one step when bit i of n is set: (a, b) = (b, a + b).
        if (n >> i) & 1 == 1 {
            let next = &a + &b;
            a = std::mem::replace(&mut b, next);
        }
    }

    a
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fib_seq(n: i64) -> BigInt {
        fib(n, &Options::sequential()).expect("non-negative index")
    }

    #[test]
    fn base_cases() {
        assert_eq!(fib_seq(0), BigInt::zero());
        assert_eq!(fib_seq(1), BigInt::one());
        assert_eq!(fib_seq(2), BigInt::one());
        assert_eq!(fib_seq(50), BigInt::from(12_586_269_025u64));
    }

    #[test]
    fn negative_index_is_rejected() {
        assert!(matches!(
            fib(-1, &Options::default()),
            Err(FibError::NegativeIndex(-1))
        ));
        assert!(matches!(
            fib(i64::MIN, &Options::default()),
            Err(FibError::NegativeIndex(_))
        ));
    }

    #[test]
    fn table_boundary() {
        // n = 93 is served from the table, n = 94 by the doubling loop.
        assert_eq!(fib_seq(93), BigInt::from(12_200_160_415_121_876_738u64));
        assert_eq!(
            fib_seq(94),
            "19740274219868223167".parse().expect("literal")
        );
    }

    #[test]
    fn known_values_beyond_table() {
        assert_eq!(
            fib_seq(100),
            "354224848179261915075".parse::<BigInt>().expect("literal")
        );
        assert_eq!(
            fib_seq(200),
            "280571172992510140037611932413038677189525"
                .parse::<BigInt>()
                .expect("literal")
        );
    }

    #[test]
    fn f1000_shape() {
        let s = fib_seq(1000).to_decimal();
        assert!(s.starts_with("43466557686937456435688527675040625802564"));
        assert_eq!(s.len(), 209);
    }

    #[test]
    fn matches_linear_recurrence() {
        let mut prev = BigInt::zero();
        let mut cur = BigInt::one();
        for n in 1..=400i64 {
            assert_eq!(fib_seq(n), cur, "mismatch at n={n}");
            let next = &prev + &cur;
            prev = std::mem::replace(&mut cur, next);
        }
    }

    #[test]
    fn parallel_step_matches_sequential() {
        // Force the step-level join with a tiny threshold.
        let par = Options {
            mul_threshold: 16,
            workers: 4,
            ..Options::default()
        };
        for n in [94i64, 250, 1000, 4096] {
            assert_eq!(
                fib(n, &par).expect("non-negative"),
                fib_seq(n),
                "mismatch at n={n}"
            );
        }
    }
}
