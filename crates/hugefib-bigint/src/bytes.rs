//! Two's-complement big-endian byte codec.
//!
//! The layout matches the portable big-integer serialization used by
//! `java.math.BigInteger#toByteArray` and `num_bigint::BigInt::to_signed_bytes_be`:
//! minimal length, most-significant byte first, top bit is the sign bit,
//! zero encodes as a single `0x00` byte.

use crate::bigint::{trim, BigInt, Sign};

impl BigInt {
    /// Encode as minimal two's-complement big-endian bytes.
    #[must_use]
    pub fn to_signed_bytes_be(&self) -> Vec<u8> {
        if self.is_zero() {
            return vec![0];
        }
        let mut bytes = magnitude_bytes_be(self.limbs());
        // A set top bit would read back as negative; pad positives.
        if bytes[0] & 0x80 != 0 {
            bytes.insert(0, 0);
        }
        if self.sign() == Sign::Minus {
            negate_in_place(&mut bytes);
        }
        bytes
    }

    /// Decode minimal or padded two's-complement big-endian bytes.
    /// An empty slice decodes as zero.
    #[must_use]
    pub fn from_signed_bytes_be(bytes: &[u8]) -> Self {
        let Some(&first) = bytes.first() else {
            return Self::zero();
        };
        if first & 0x80 == 0 {
            Self::from_sign_magnitude(Sign::Plus, magnitude_limbs(bytes, false))
        } else {
            // Two's complement: invert, then add one.
            let mut limbs = magnitude_limbs(bytes, true);
            let mut carry = 1u64;
            for limb in &mut limbs {
                let (sum, c) = limb.overflowing_add(carry);
                *limb = sum;
                carry = u64::from(c);
                if carry == 0 {
                    break;
                }
            }
            if carry != 0 {
                limbs.push(carry);
            }
            Self::from_sign_magnitude(Sign::Minus, limbs)
        }
    }
}

/// Magnitude bytes, most-significant first, no leading zeros.
fn magnitude_bytes_be(limbs: &[u64]) -> Vec<u8> {
    let mut bytes: Vec<u8> = Vec::with_capacity(limbs.len() * 8);
    for limb in limbs.iter().rev() {
        bytes.extend_from_slice(&limb.to_be_bytes());
    }
    let skip = bytes.iter().take_while(|&&b| b == 0).count();
    bytes.drain(..skip);
    bytes
}

/// Collect big-endian bytes into little-endian limbs, optionally inverting
/// each byte (the first half of a two's-complement decode). Sign-extension
/// padding beyond the byte slice is implied.
fn magnitude_limbs(bytes: &[u8], invert: bool) -> Vec<u64> {
    let mut limbs = Vec::with_capacity(bytes.len().div_ceil(8));
    let mut limb = 0u64;
    let mut shift = 0u32;
    for &byte in bytes.iter().rev() {
        let byte = if invert { !byte } else { byte };
        limb |= u64::from(byte) << shift;
        shift += 8;
        if shift == 64 {
            limbs.push(limb);
            limb = 0;
            shift = 0;
        }
    }
    if shift != 0 {
        limbs.push(limb);
    }
    trim(&mut limbs);
    limbs
}

/// Two's-complement negate a big-endian byte buffer in place, then strip
/// redundant leading sign bytes.
fn negate_in_place(bytes: &mut Vec<u8>) {
    for b in bytes.iter_mut() {
        *b = !*b;
    }
    for b in bytes.iter_mut().rev() {
        let (sum, carry) = b.overflowing_add(1);
        *b = sum;
        if !carry {
            break;
        }
    }
    while bytes.len() > 1 && bytes[0] == 0xFF && bytes[1] & 0x80 != 0 {
        bytes.remove(0);
    }
}
