//! Parallel divide-and-conquer decimal stringification.
//!
//! Splits x at half its estimated digit count by dividing by 10^half; the
//! high quotient recurses (stealable by sibling workers) while the low
//! remainder is converted inline and left-padded with zeros to exactly
//! `half` characters. Below the bit threshold the sequential
//! repeated-division conversion in `hugefib-bigint` is used directly.

use hugefib_bigint::{BigInt, Sign};

use crate::multiply::{mul, sqr};
use crate::options::Options;

/// Decimal digits of `x`, `-`-prefixed when negative, no leading zeros
/// except the single digit `"0"` for zero.
#[must_use]
pub fn to_decimal_string(x: &BigInt, opts: &Options) -> String {
    if x.sign() == Sign::Minus {
        format!("-{}", convert(&x.abs(), opts))
    } else {
        convert(x, opts)
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn convert(x: &BigInt, opts: &Options) -> String {
    if opts.workers < 2 || x.bit_len() < opts.str_threshold {
        return x.to_decimal();
    }

    let digits = (x.bit_len() as f64 * std::f64::consts::LOG10_2) as usize + 1;
    let half = digits / 2;
    if half == 0 {
        return x.to_decimal();
    }

    let divisor = pow10(half, opts);
    let (high, low) = x.div_rem(&divisor);
    if high.is_zero() {
        // The digit estimate overshot; no padding applies.
        return low.to_decimal();
    }

    let (low_str, high_str) = rayon::join(|| low.to_decimal(), || convert(&high, opts));

    // low < 10^half, so it occupies exactly `half` characters once
    // left-padded. Dropping these zeros corrupts the result.
    let mut out = String::with_capacity(high_str.len() + half);
    out.push_str(&high_str);
    for _ in low_str.len()..half {
        out.push('0');
    }
    out.push_str(&low_str);
    out
}

/// 10^exp via binary exponentiation through the parallel multiplier.
fn pow10(exp: usize, opts: &Options) -> BigInt {
    let mut acc = BigInt::one();
    let mut base = BigInt::from(10u64);
    let mut e = exp;
    while e > 0 {
        if e & 1 == 1 {
            acc = mul(&acc, &base, opts);
        }
        e >>= 1;
        if e > 0 {
            base = sqr(&base, opts);
        }
    }
    acc
}
