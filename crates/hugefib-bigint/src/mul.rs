//! Schoolbook multiplication.
//!
//! This is the sequential floor under the divide-and-conquer multiplier in
//! `hugefib-core`; the `Mul` operator always takes this direct path.

use std::ops::Mul;

use crate::bigint::{trim, BigInt, Sign};

/// O(n*m) limb multiply with u128 accumulation.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn mag_mul(a: &[u64], b: &[u64]) -> Vec<u64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0u64; a.len() + b.len()];
    for (i, &ai) in a.iter().enumerate() {
        if ai == 0 {
            continue;
        }
        let mut carry = 0u64;
        for (j, &bj) in b.iter().enumerate() {
            let acc = u128::from(ai) * u128::from(bj) + u128::from(out[i + j]) + u128::from(carry);
            out[i + j] = acc as u64;
            carry = (acc >> 64) as u64;
        }
        // Column i + b.len() is untouched by earlier rows.
        out[i + b.len()] = carry;
    }
    trim(&mut out);
    out
}

#[allow(clippy::cast_possible_truncation)]
pub(crate) fn mag_mul_word(a: &[u64], w: u64) -> Vec<u64> {
    if a.is_empty() || w == 0 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(a.len() + 1);
    let mut carry = 0u64;
    for &limb in a {
        let acc = u128::from(limb) * u128::from(w) + u128::from(carry);
        out.push(acc as u64);
        carry = (acc >> 64) as u64;
    }
    if carry != 0 {
        out.push(carry);
    }
    out
}

fn product_sign(a: Sign, b: Sign) -> Sign {
    match (a, b) {
        (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
        (x, y) if x == y => Sign::Plus,
        _ => Sign::Minus,
    }
}

impl Mul for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        let sign = product_sign(self.sign(), rhs.sign());
        if sign == Sign::Zero {
            return BigInt::zero();
        }
        BigInt::from_sign_magnitude(sign, mag_mul(self.limbs(), rhs.limbs()))
    }
}

impl Mul for BigInt {
    type Output = BigInt;

    fn mul(self, rhs: BigInt) -> BigInt {
        &self * &rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiply_small() {
        let a = BigInt::from(12345u64);
        let b = BigInt::from(67890u64);
        assert_eq!(&a * &b, BigInt::from(838_102_050u64));
    }

    #[test]
    fn multiply_by_zero() {
        let a = BigInt::from(12345u64);
        assert_eq!(&a * &BigInt::zero(), BigInt::zero());
        assert_eq!(&BigInt::zero() * &a, BigInt::zero());
    }

    #[test]
    fn multiply_by_one() {
        let a = BigInt::from(99999u64);
        assert_eq!(&a * &BigInt::one(), a);
    }

    #[test]
    fn multiply_signs() {
        let a = BigInt::from(-3i64);
        let b = BigInt::from(7i64);
        assert_eq!(&a * &b, BigInt::from(-21i64));
        assert_eq!(&a * &a, BigInt::from(9i64));
    }

    #[test]
    fn multiply_crosses_limb_boundary() {
        let a = BigInt::from(u64::MAX);
        let sq = &a * &a;
        // (2^64 - 1)^2 = 2^128 - 2^65 + 1
        let expected = &(&(&BigInt::one() << 128usize) - &(&BigInt::one() << 65usize)) + &BigInt::one();
        assert_eq!(sq, expected);
    }

    #[test]
    fn multiply_distributes_over_shifted_sum() {
        // (2^100 + 3) * (2^100 + 5) = 2^200 + 8*2^100 + 15
        let a = &(&BigInt::one() << 100usize) + &BigInt::from(3u64);
        let b = &(&BigInt::one() << 100usize) + &BigInt::from(5u64);
        let expected = &(&(&BigInt::one() << 200usize) + &(&BigInt::from(8u64) << 100usize))
            + &BigInt::from(15u64);
        assert_eq!(&a * &b, expected);
    }

    #[test]
    fn mag_mul_word_carries() {
        assert_eq!(mag_mul_word(&[u64::MAX], 2), vec![u64::MAX - 1, 1]);
        assert_eq!(mag_mul_word(&[5, 5], 0), Vec::<u64>::new());
    }
}
