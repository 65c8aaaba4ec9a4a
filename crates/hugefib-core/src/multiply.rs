//! Parallel divide-and-conquer multiplication (Karatsuba).
//!
//! Splits x = xh*2^half + xl, y = yh*2^half + yl and computes
//!
//!   z2 = xh*yh, z0 = xl*yl, z1 = (xh+xl)*(yh+yl)
//!   x*y = z2*2^(2*half) + (z1 - z2 - z0)*2^half + z0
//!
//! z2 and z0 are published to the worker pool for stealing; z1 always runs
//! inline on the dispatching worker, bounding live tasks to roughly the
//! recursion depth. Below the bit threshold, or with fewer than two
//! workers, the schoolbook `Mul` impl is used directly.

use hugefib_bigint::BigInt;

use crate::options::Options;

/// Multiply two big integers, sign-aware.
#[must_use]
pub fn mul(x: &BigInt, y: &BigInt, opts: &Options) -> BigInt {
    if x.is_zero() || y.is_zero() {
        return BigInt::zero();
    }
    let product = mul_abs(&x.abs(), &y.abs(), opts);
    if x.sign() == y.sign() {
        product
    } else {
        -product
    }
}

/// Square a big integer. One split and one high+low sum instead of two.
#[must_use]
pub fn sqr(x: &BigInt, opts: &Options) -> BigInt {
    if x.is_zero() {
        return BigInt::zero();
    }
    sqr_abs(&x.abs(), opts)
}

fn sequential(bits: usize, opts: &Options) -> bool {
    opts.workers < 2 || bits < opts.mul_threshold
}

/// Largest multiple of the limb width not exceeding n/2; plain n/2 when
/// the operands are too small for an aligned split.
fn split_point(n: usize) -> usize {
    let half = (n / 2) / 64 * 64;
    if half == 0 {
        n / 2
    } else {
        half
    }
}

fn mul_abs(x: &BigInt, y: &BigInt, opts: &Options) -> BigInt {
    let n = x.bit_len().max(y.bit_len());
    if sequential(n, opts) {
        return x * y;
    }
    let half = split_point(n);
    if half == 0 {
        return x * y;
    }
    let (xh, xl) = x.split_at_bit(half);
    let (yh, yl) = y.split_at_bit(half);
    let (z1, (z2, z0)) = rayon::join(
        || mul_abs(&(&xh + &xl), &(&yh + &yl), opts),
        || {
            rayon::join(
                || mul_abs(&xh, &yh, opts),
                || mul_abs(&xl, &yl, opts),
            )
        },
    );
    combine(&z2, &z1, &z0, half)
}

fn sqr_abs(x: &BigInt, opts: &Options) -> BigInt {
    let n = x.bit_len();
    if sequential(n, opts) {
        return x * x;
    }
    let half = split_point(n);
    if half == 0 {
        return x * x;
    }
    let (xh, xl) = x.split_at_bit(half);
    let sum = &xh + &xl;
    let (z1, (z2, z0)) = rayon::join(
        || sqr_abs(&sum, opts),
        || rayon::join(|| sqr_abs(&xh, opts), || sqr_abs(&xl, opts)),
    );
    combine(&z2, &z1, &z0, half)
}

/// z2*2^(2*half) + (z1 - z2 - z0)*2^half + z0. The middle term is handled
/// by signed subtraction, so the identity holds regardless of transient
/// negativity.
fn combine(z2: &BigInt, z1: &BigInt, z0: &BigInt, half: usize) -> BigInt {
    let mid = &(z1 - z2) - z0;
    &(&(z2 << (2 * half)) + &(&mid << half)) + z0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forced_parallel() -> Options {
        Options {
            mul_threshold: 8,
            workers: 4,
            ..Options::default()
        }
    }

    fn big(shift: usize, add: u64) -> BigInt {
        &(&BigInt::one() << shift) + &BigInt::from(add)
    }

    #[test]
    fn parallel_matches_schoolbook() {
        let opts = forced_parallel();
        for (a, b) in [
            (big(70, 12345), big(90, 999)),
            (big(200, 1), big(64, u64::MAX)),
            (big(513, 7), big(511, 3)),
        ] {
            assert_eq!(mul(&a, &b, &opts), &a * &b);
        }
    }

    #[test]
    fn split_alignment_fallback() {
        // Operands wide enough to recurse but too narrow for a 64-bit
        // aligned half: split_point falls back to n/2.
        let opts = Options {
            mul_threshold: 4,
            workers: 4,
            ..Options::default()
        };
        for a in 1u64..64 {
            for b in [3u64, 17, 63] {
                let x = BigInt::from(a);
                let y = BigInt::from(b);
                assert_eq!(mul(&x, &y, &opts), BigInt::from(a * b));
            }
        }
    }

    #[test]
    fn square_matches_multiply() {
        let opts = forced_parallel();
        for x in [BigInt::zero(), BigInt::one(), big(100, 5), big(300, 77)] {
            assert_eq!(sqr(&x, &opts), mul(&x, &x, &opts));
        }
    }

    #[test]
    fn signs_propagate() {
        let opts = forced_parallel();
        let a = -big(80, 3);
        let b = big(80, 9);
        assert_eq!(mul(&a, &b, &opts), -(&a.abs() * &b));
        assert_eq!(mul(&a, &a, &opts), &a.abs() * &a.abs());
        assert_eq!(sqr(&a, &opts), &a.abs() * &a.abs());
    }

    #[test]
    fn single_worker_forces_sequential_path() {
        // workers == 1 must disable splitting entirely yet agree bit-for-bit.
        let seq = Options {
            mul_threshold: 8,
            workers: 1,
            ..Options::default()
        };
        let par = forced_parallel();
        let a = big(500, 123);
        let b = big(450, 456);
        assert_eq!(mul(&a, &b, &seq), mul(&a, &b, &par));
    }

    #[test]
    fn zero_and_one_identities() {
        let opts = forced_parallel();
        let x = big(128, 42);
        assert_eq!(mul(&x, &BigInt::zero(), &opts), BigInt::zero());
        assert_eq!(mul(&BigInt::zero(), &x, &opts), BigInt::zero());
        assert_eq!(mul(&x, &BigInt::one(), &opts), x);
        assert_eq!(sqr(&BigInt::zero(), &opts), BigInt::zero());
    }

    #[test]
    fn split_point_word_alignment() {
        assert_eq!(split_point(1_000_000), 499_968); // multiple of 64
        assert_eq!(split_point(499_968 * 2), 499_968);
        assert_eq!(split_point(128), 64);
        assert_eq!(split_point(100), 50); // too narrow to align
        assert_eq!(split_point(1), 0);
    }
}
