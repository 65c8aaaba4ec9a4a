//! Sequential decimal conversion and parsing.
//!
//! Conversion repeatedly divides the magnitude by 10^19, the largest power
//! of ten in a u64, emitting 19-digit chunks. This is the sequential floor
//! under the divide-and-conquer stringifier in `hugefib-core`.

use std::fmt;
use std::str::FromStr;

use crate::bigint::{mag_add, BigInt, Sign};
use crate::div::mag_div_rem_word;
use crate::mul::mag_mul_word;

/// Decimal digits carried per division step.
pub(crate) const DIGITS_PER_CHUNK: usize = 19;

/// 10^19, the largest power of ten representable in a u64.
pub(crate) const POW10_CHUNK: u64 = 10_000_000_000_000_000_000;

impl BigInt {
    /// Decimal digits of this value, `-`-prefixed when negative, with no
    /// leading zeros except the single digit `"0"` for zero.
    #[must_use]
    pub fn to_decimal(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let mut chunks: Vec<u64> = Vec::new();
        let mut mag = self.limbs().to_vec();
        while !mag.is_empty() {
            let (q, r) = mag_div_rem_word(&mag, POW10_CHUNK);
            chunks.push(r);
            mag = q;
        }
        let mut s = String::with_capacity(chunks.len() * DIGITS_PER_CHUNK + 1);
        if self.sign() == Sign::Minus {
            s.push('-');
        }
        for (i, chunk) in chunks.iter().rev().enumerate() {
            if i == 0 {
                s.push_str(&chunk.to_string());
            } else {
                s.push_str(&format!("{chunk:019}"));
            }
        }
        s
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(self.sign() != Sign::Minus, "", &self.abs().to_decimal())
    }
}

/// Error parsing a decimal literal into a [`BigInt`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid decimal integer literal")]
pub struct ParseBigIntError(());

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    #[allow(clippy::cast_possible_truncation)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseBigIntError(()));
        }

        let mut mag: Vec<u64> = Vec::new();
        let bytes = digits.as_bytes();
        let mut pos = 0;
        while pos < bytes.len() {
            let take = DIGITS_PER_CHUNK.min(bytes.len() - pos);
            let chunk = std::str::from_utf8(&bytes[pos..pos + take])
                .ok()
                .and_then(|c| c.parse::<u64>().ok())
                .ok_or(ParseBigIntError(()))?;
            mag = mag_mul_word(&mag, 10u64.pow(take as u32));
            if chunk != 0 {
                mag = mag_add(&mag, &[chunk]);
            }
            pos += take;
        }

        let sign = if negative { Sign::Minus } else { Sign::Plus };
        Ok(Self::from_sign_magnitude(sign, mag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> BigInt {
        s.parse().expect("valid literal")
    }

    #[test]
    fn zero_and_small_values() {
        assert_eq!(BigInt::zero().to_decimal(), "0");
        assert_eq!(BigInt::from(7u64).to_decimal(), "7");
        assert_eq!(BigInt::from(-7i64).to_decimal(), "-7");
        assert_eq!(BigInt::from(u64::MAX).to_decimal(), "18446744073709551615");
    }

    #[test]
    fn chunk_boundary_padding() {
        // 10^19 is exactly one chunk; the low chunk must keep its zeros.
        let x = parse("10000000000000000000");
        assert_eq!(x.to_decimal(), "10000000000000000000");
        let y = parse("100000000000000000000000000000000000001");
        assert_eq!(y.to_decimal(), "100000000000000000000000000000000000001");
    }

    #[test]
    fn display_matches_to_decimal() {
        let x = parse("123456789012345678901234567890");
        assert_eq!(format!("{x}"), x.to_decimal());
        assert_eq!(format!("{}", -&x), format!("-{}", x.to_decimal()));
    }

    #[test]
    fn parse_round_trip() {
        for s in [
            "0",
            "1",
            "-1",
            "18446744073709551616",
            "340282366920938463463374607431768211456",
            "-99999999999999999999999999999999999999999999",
        ] {
            assert_eq!(parse(s).to_decimal(), s);
        }
    }

    #[test]
    fn parse_accepts_leading_zeros_and_plus() {
        assert_eq!(parse("000123"), BigInt::from(123u64));
        assert_eq!(parse("+42"), BigInt::from(42u64));
        assert_eq!(parse("-000"), BigInt::zero());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("".parse::<BigInt>().is_err());
        assert!("-".parse::<BigInt>().is_err());
        assert!("12x3".parse::<BigInt>().is_err());
        assert!("1.5".parse::<BigInt>().is_err());
        assert!(" 12".parse::<BigInt>().is_err());
    }

    #[test]
    fn parse_matches_arithmetic() {
        // 2^128 built both ways
        let parsed = parse("340282366920938463463374607431768211456");
        assert_eq!(parsed, &BigInt::one() << 128usize);
    }
}
