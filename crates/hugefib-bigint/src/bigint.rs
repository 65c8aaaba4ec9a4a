//! The `BigInt` value type: a sign plus a base-2^64 magnitude.
//!
//! Limbs are stored least-significant first with no trailing zero limb;
//! the canonical zero has `Sign::Zero` and an empty limb vector. Every
//! operation returns a new value, so operands can be shared by reference
//! across parallel tasks without locking.

use std::cmp::Ordering;
use std::ops::{Add, Neg, Shl, Shr, Sub};

use crate::arith::{add_with_carry, sub_with_borrow};

/// Sign of a [`BigInt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Strictly negative.
    Minus,
    /// The canonical zero.
    Zero,
    /// Strictly positive.
    Plus,
}

/// Arbitrary-precision signed integer, immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigInt {
    sign: Sign,
    limbs: Vec<u64>,
}

// ---------------------------------------------------------------------------
// Magnitude helpers (unsigned limb vectors, least-significant first)
// ---------------------------------------------------------------------------

/// Strip trailing (most-significant) zero limbs.
pub(crate) fn trim(limbs: &mut Vec<u64>) {
    while limbs.last() == Some(&0) {
        limbs.pop();
    }
}

pub(crate) fn mag_cmp(a: &[u64], b: &[u64]) -> Ordering {
    match a.len().cmp(&b.len()) {
        Ordering::Equal => {
            for (x, y) in a.iter().rev().zip(b.iter().rev()) {
                match x.cmp(y) {
                    Ordering::Equal => {}
                    ord => return ord,
                }
            }
            Ordering::Equal
        }
        ord => ord,
    }
}

pub(crate) fn mag_add(a: &[u64], b: &[u64]) -> Vec<u64> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry = 0;
    for i in 0..long.len() {
        let rhs = short.get(i).copied().unwrap_or(0);
        let (sum, c) = add_with_carry(long[i], rhs, carry);
        out.push(sum);
        carry = c;
    }
    if carry != 0 {
        out.push(carry);
    }
    out
}

/// Magnitude subtraction; requires `a >= b`.
pub(crate) fn mag_sub(a: &[u64], b: &[u64]) -> Vec<u64> {
    debug_assert!(mag_cmp(a, b) != Ordering::Less);
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = 0;
    for i in 0..a.len() {
        let rhs = b.get(i).copied().unwrap_or(0);
        let (diff, bo) = sub_with_borrow(a[i], rhs, borrow);
        out.push(diff);
        borrow = bo;
    }
    debug_assert_eq!(borrow, 0);
    trim(&mut out);
    out
}

pub(crate) fn mag_bit_len(a: &[u64]) -> usize {
    match a.last() {
        None => 0,
        Some(top) => a.len() * 64 - top.leading_zeros() as usize,
    }
}

pub(crate) fn mag_shl(a: &[u64], bits: usize) -> Vec<u64> {
    if a.is_empty() {
        return Vec::new();
    }
    let limb_shift = bits / 64;
    let bit_shift = (bits % 64) as u32;
    let mut out = vec![0u64; limb_shift];
    if bit_shift == 0 {
        out.extend_from_slice(a);
    } else {
        let mut carry = 0u64;
        for &limb in a {
            out.push((limb << bit_shift) | carry);
            carry = limb >> (64 - bit_shift);
        }
        if carry != 0 {
            out.push(carry);
        }
    }
    out
}

pub(crate) fn mag_shr(a: &[u64], bits: usize) -> Vec<u64> {
    let limb_shift = bits / 64;
    if limb_shift >= a.len() {
        return Vec::new();
    }
    let bit_shift = (bits % 64) as u32;
    let rest = &a[limb_shift..];
    let mut out = Vec::with_capacity(rest.len());
    if bit_shift == 0 {
        out.extend_from_slice(rest);
    } else {
        for i in 0..rest.len() {
            let high = rest.get(i + 1).copied().unwrap_or(0);
            out.push((rest[i] >> bit_shift) | (high << (64 - bit_shift)));
        }
        trim(&mut out);
    }
    out
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl BigInt {
    /// Build a canonical value from a sign hint and magnitude limbs.
    ///
    /// Trailing zero limbs are stripped; an empty magnitude becomes the
    /// canonical zero regardless of the sign hint.
    pub(crate) fn from_sign_magnitude(sign: Sign, mut limbs: Vec<u64>) -> Self {
        trim(&mut limbs);
        if limbs.is_empty() {
            Self {
                sign: Sign::Zero,
                limbs,
            }
        } else {
            debug_assert!(sign != Sign::Zero);
            Self { sign, limbs }
        }
    }

    /// The canonical zero value.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            sign: Sign::Zero,
            limbs: Vec::new(),
        }
    }

    /// The value one.
    #[must_use]
    pub fn one() -> Self {
        Self {
            sign: Sign::Plus,
            limbs: vec![1],
        }
    }

    /// The sign of this value.
    #[must_use]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    /// Index of the highest set bit of the magnitude, plus one; 0 for zero.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        mag_bit_len(&self.limbs)
    }

    /// Bit `i` of the magnitude (0 = least significant).
    #[must_use]
    pub fn bit(&self, i: usize) -> bool {
        self.limbs
            .get(i / 64)
            .is_some_and(|limb| (limb >> (i % 64)) & 1 == 1)
    }

    /// The absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        match self.sign {
            Sign::Minus => Self {
                sign: Sign::Plus,
                limbs: self.limbs.clone(),
            },
            _ => self.clone(),
        }
    }

    pub(crate) fn limbs(&self) -> &[u64] {
        &self.limbs
    }

    /// Split a non-negative value at bit `k`: returns `(high, low)` with
    /// `self = high * 2^k + low` and `low < 2^k`.
    #[must_use]
    pub fn split_at_bit(&self, k: usize) -> (Self, Self) {
        debug_assert!(self.sign != Sign::Minus);
        let high = mag_shr(&self.limbs, k);
        let full = k.div_ceil(64).min(self.limbs.len());
        let mut low = self.limbs[..full].to_vec();
        if k % 64 != 0 && k / 64 < low.len() {
            low[k / 64] &= (1u64 << (k % 64)) - 1;
        }
        (
            Self::from_sign_magnitude(Sign::Plus, high),
            Self::from_sign_magnitude(Sign::Plus, low),
        )
    }
}

impl From<u64> for BigInt {
    fn from(v: u64) -> Self {
        if v == 0 {
            Self::zero()
        } else {
            Self {
                sign: Sign::Plus,
                limbs: vec![v],
            }
        }
    }
}

impl From<i64> for BigInt {
    fn from(v: i64) -> Self {
        match v.cmp(&0) {
            Ordering::Equal => Self::zero(),
            Ordering::Greater => Self::from(v.unsigned_abs()),
            Ordering::Less => Self {
                sign: Sign::Minus,
                limbs: vec![v.unsigned_abs()],
            },
        }
    }
}

impl From<u32> for BigInt {
    fn from(v: u32) -> Self {
        Self::from(u64::from(v))
    }
}

impl num_traits::Zero for BigInt {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        self.is_zero()
    }
}

impl num_traits::One for BigInt {
    fn one() -> Self {
        Self::one()
    }
}

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

fn sign_rank(s: Sign) -> i8 {
    match s {
        Sign::Minus => -1,
        Sign::Zero => 0,
        Sign::Plus => 1,
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match sign_rank(self.sign).cmp(&sign_rank(other.sign)) {
            Ordering::Equal => {
                let mag = mag_cmp(&self.limbs, &other.limbs);
                if self.sign == Sign::Minus {
                    mag.reverse()
                } else {
                    mag
                }
            }
            ord => ord,
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Addition / subtraction (sign-aware, magnitude-based)
// ---------------------------------------------------------------------------

fn combine(a: &BigInt, b_sign: Sign, b_limbs: &[u64]) -> BigInt {
    if b_sign == Sign::Zero {
        return a.clone();
    }
    if a.sign == Sign::Zero {
        return BigInt::from_sign_magnitude(b_sign, b_limbs.to_vec());
    }
    if a.sign == b_sign {
        return BigInt::from_sign_magnitude(a.sign, mag_add(&a.limbs, b_limbs));
    }
    match mag_cmp(&a.limbs, b_limbs) {
        Ordering::Equal => BigInt::zero(),
        Ordering::Greater => BigInt::from_sign_magnitude(a.sign, mag_sub(&a.limbs, b_limbs)),
        Ordering::Less => BigInt::from_sign_magnitude(b_sign, mag_sub(b_limbs, &a.limbs)),
    }
}

fn flip(s: Sign) -> Sign {
    match s {
        Sign::Minus => Sign::Plus,
        Sign::Zero => Sign::Zero,
        Sign::Plus => Sign::Minus,
    }
}

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        combine(self, rhs.sign, &rhs.limbs)
    }
}

impl Sub for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        combine(self, flip(rhs.sign), &rhs.limbs)
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(self, rhs: BigInt) -> BigInt {
        &self + &rhs
    }
}

impl Sub for BigInt {
    type Output = BigInt;

    fn sub(self, rhs: BigInt) -> BigInt {
        &self - &rhs
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt {
            sign: flip(self.sign),
            limbs: self.limbs.clone(),
        }
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> BigInt {
        self.sign = flip(self.sign);
        self
    }
}

// ---------------------------------------------------------------------------
// Shifts (magnitude shifts; sign is preserved)
// ---------------------------------------------------------------------------

impl Shl<usize> for &BigInt {
    type Output = BigInt;

    fn shl(self, bits: usize) -> BigInt {
        BigInt::from_sign_magnitude(
            if self.sign == Sign::Zero {
                Sign::Plus
            } else {
                self.sign
            },
            mag_shl(&self.limbs, bits),
        )
    }
}

impl Shr<usize> for &BigInt {
    type Output = BigInt;

    fn shr(self, bits: usize) -> BigInt {
        BigInt::from_sign_magnitude(
            if self.sign == Sign::Zero {
                Sign::Plus
            } else {
                self.sign
            },
            mag_shr(&self.limbs, bits),
        )
    }
}

impl Shl<usize> for BigInt {
    type Output = BigInt;

    fn shl(self, bits: usize) -> BigInt {
        &self << bits
    }
}

impl Shr<usize> for BigInt {
    type Output = BigInt;

    fn shr(self, bits: usize) -> BigInt {
        &self >> bits
    }
}
