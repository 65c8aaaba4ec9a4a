//! Long division on limb magnitudes.
//!
//! Knuth's Algorithm D with divisor normalization, two-limb quotient
//! estimation, and the add-back correction; single-limb divisors take a
//! direct repeated-division path. The public API only ever divides by
//! powers of ten (decimal splitting), but the routine is general.

use std::cmp::Ordering;

use crate::arith::add_with_carry;
use crate::bigint::{mag_cmp, mag_shr, trim, BigInt, Sign};

impl BigInt {
    /// Quotient and remainder, both non-negative.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero. Operands must be non-negative.
    #[must_use]
    pub fn div_rem(&self, divisor: &BigInt) -> (Self, Self) {
        assert!(!divisor.is_zero(), "division by zero");
        debug_assert!(self.sign() != Sign::Minus && divisor.sign() != Sign::Minus);
        let (q, r) = mag_div_rem(self.limbs(), divisor.limbs());
        (
            Self::from_sign_magnitude(Sign::Plus, q),
            Self::from_sign_magnitude(Sign::Plus, r),
        )
    }

    /// Quotient and remainder for a single-limb divisor.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[must_use]
    pub fn div_rem_u64(&self, divisor: u64) -> (Self, u64) {
        assert!(divisor != 0, "division by zero");
        debug_assert!(self.sign() != Sign::Minus);
        let (q, r) = mag_div_rem_word(self.limbs(), divisor);
        (Self::from_sign_magnitude(Sign::Plus, q), r)
    }
}

#[allow(clippy::cast_possible_truncation)]
pub(crate) fn mag_div_rem_word(u: &[u64], w: u64) -> (Vec<u64>, u64) {
    let mut q = vec![0u64; u.len()];
    let mut rem = 0u128;
    for i in (0..u.len()).rev() {
        let cur = (rem << 64) | u128::from(u[i]);
        q[i] = (cur / u128::from(w)) as u64;
        rem = cur % u128::from(w);
    }
    trim(&mut q);
    (q, rem as u64)
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::many_single_char_names
)]
pub(crate) fn mag_div_rem(u: &[u64], v: &[u64]) -> (Vec<u64>, Vec<u64>) {
    debug_assert!(v.last().is_some_and(|&top| top != 0));
    if v.len() == 1 {
        let (q, r) = mag_div_rem_word(u, v[0]);
        let mut rem = vec![r];
        trim(&mut rem);
        return (q, rem);
    }
    if mag_cmp(u, v) == Ordering::Less {
        return (Vec::new(), u.to_vec());
    }

    let n = v.len();
    let m = u.len() - n;

    // D1: normalize so the divisor's top bit is set.
    let s = v[n - 1].leading_zeros() as usize;
    let vn = crate::bigint::mag_shl(v, s);
    debug_assert_eq!(vn.len(), n);
    let mut un = crate::bigint::mag_shl(u, s);
    un.resize(u.len() + 1, 0);

    let mut q = vec![0u64; m + 1];
    let b = 1u128 << 64;

    for j in (0..=m).rev() {
        // D3: estimate the quotient digit from the top two limbs, then
        // refine with the third.
        let numer = (u128::from(un[j + n]) << 64) | u128::from(un[j + n - 1]);
        let vtop = u128::from(vn[n - 1]);
        let vnext = u128::from(vn[n - 2]);
        let mut qhat = numer / vtop;
        let mut rhat = numer % vtop;
        while qhat >= b || qhat * vnext > (rhat << 64) + u128::from(un[j + n - 2]) {
            qhat -= 1;
            rhat += vtop;
            if rhat >= b {
                break;
            }
        }
        if qhat >= b {
            qhat = b - 1;
        }
        let qh = qhat as u64;

        // D4: multiply and subtract, tracking a signed borrow.
        let mut borrow: i128 = 0;
        let mut carry: u128 = 0;
        for i in 0..n {
            let p = u128::from(qh) * u128::from(vn[i]) + carry;
            carry = p >> 64;
            let t = i128::from(un[i + j]) - borrow - i128::from(p as u64);
            un[i + j] = t as u64;
            borrow = if t < 0 { 1 } else { 0 };
        }
        let t = i128::from(un[j + n]) - borrow - carry as i128;
        un[j + n] = t as u64;

        // D6: the estimate was one too high; add the divisor back.
        if t < 0 {
            q[j] = qh - 1;
            let mut c = 0u64;
            for i in 0..n {
                let (sum, cc) = add_with_carry(un[i + j], vn[i], c);
                un[i + j] = sum;
                c = cc;
            }
            un[j + n] = un[j + n].wrapping_add(c);
        } else {
            q[j] = qh;
        }
    }

    // D8: denormalize the remainder.
    let r = mag_shr(&un[..n], s);
    trim(&mut q);
    (q, r)
}
