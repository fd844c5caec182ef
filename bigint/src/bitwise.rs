//! AND/OR/XOR with infinite-precision two's-complement semantics.
//!
//! Negative values are never materialized in two's complement. Instead each
//! case is rewritten over magnitudes with `-x == !(x - 1)`:
//!
//! | op  | both negative                  | `x >= 0`, `y < 0`            |
//! |-----|--------------------------------|------------------------------|
//! | AND | `-(((x-1) \| (y-1)) + 1)`      | `x & !(y-1)`                 |
//! | OR  | `-(((x-1) & (y-1)) + 1)`       | `-(((y-1) & !x) + 1)`        |
//! | XOR | `(x-1) ^ (y-1)`                | `-((x ^ (y-1)) + 1)`         |

use std::mem;

use crate::digit::Digit;
use crate::error::BigIntError;
use crate::magnitude::{absolute_add_one, absolute_sub_one};
use crate::value::{BigInt, MutableBigInt};

/// What happens to limbs of the longer operand that have no partner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ExtraDigits {
    /// Copy them into the result (OR, XOR, AND-NOT of the first operand).
    Copy,
    /// Drop them (AND).
    Skip,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Symmetry {
    Symmetric,
    NotSymmetric,
}

/// Apply `op` limb by limb to two magnitudes. The result is non-negative.
fn absolute_bitwise_op(
    x: &BigInt,
    y: &BigInt,
    extra_digits: ExtraDigits,
    symmetric: Symmetry,
    op: impl Fn(Digit, Digit) -> Digit,
) -> Result<BigInt, BigIntError> {
    let (mut x, mut y) = (x, y);
    let num_pairs = x.len().min(y.len());
    if x.len() < y.len() && symmetric == Symmetry::Symmetric {
        mem::swap(&mut x, &mut y);
    }
    let result_length = match extra_digits {
        ExtraDigits::Copy => x.len(),
        ExtraDigits::Skip => num_pairs,
    };
    let mut result = MutableBigInt::allocate(result_length)?;
    for i in 0..num_pairs {
        result.set_digit(i, op(x.digit(i), y.digit(i)));
    }
    if extra_digits == ExtraDigits::Copy {
        result.digits_mut()[num_pairs..].copy_from_slice(&x.digits()[num_pairs..]);
    }
    Ok(result.finalize())
}

fn absolute_and(x: &BigInt, y: &BigInt) -> Result<BigInt, BigIntError> {
    absolute_bitwise_op(x, y, ExtraDigits::Skip, Symmetry::Symmetric, |a, b| a & b)
}

/// `|x| & !|y|`.
fn absolute_and_not(x: &BigInt, y: &BigInt) -> Result<BigInt, BigIntError> {
    absolute_bitwise_op(x, y, ExtraDigits::Copy, Symmetry::NotSymmetric, |a, b| a & !b)
}

fn absolute_or(x: &BigInt, y: &BigInt) -> Result<BigInt, BigIntError> {
    absolute_bitwise_op(x, y, ExtraDigits::Copy, Symmetry::Symmetric, |a, b| a | b)
}

fn absolute_xor(x: &BigInt, y: &BigInt) -> Result<BigInt, BigIntError> {
    absolute_bitwise_op(x, y, ExtraDigits::Copy, Symmetry::Symmetric, |a, b| a ^ b)
}

impl BigInt {
    /// Bitwise AND.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// assert_eq!(BigInt::from(-1).bit_and(&BigInt::from(5)).unwrap(), BigInt::from(5));
    /// assert_eq!(BigInt::from(-4).bit_and(&BigInt::from(-6)).unwrap(), BigInt::from(-8));
    /// ```
    pub fn bit_and(&self, other: &Self) -> Result<Self, BigIntError> {
        match (self.is_negative(), other.is_negative()) {
            (false, false) => absolute_and(self, other),
            (true, true) => {
                let x1 = absolute_sub_one(self)?;
                let y1 = absolute_sub_one(other)?;
                absolute_add_one(&absolute_or(&x1, &y1)?, true)
            }
            (false, true) => absolute_and_not(self, &absolute_sub_one(other)?),
            (true, false) => absolute_and_not(other, &absolute_sub_one(self)?),
        }
    }

    /// Bitwise OR.
    pub fn bit_or(&self, other: &Self) -> Result<Self, BigIntError> {
        match (self.is_negative(), other.is_negative()) {
            (false, false) => absolute_or(self, other),
            (true, true) => {
                let x1 = absolute_sub_one(self)?;
                let y1 = absolute_sub_one(other)?;
                absolute_add_one(&absolute_and(&x1, &y1)?, true)
            }
            (false, true) => {
                let y1 = absolute_sub_one(other)?;
                absolute_add_one(&absolute_and_not(&y1, self)?, true)
            }
            (true, false) => {
                let x1 = absolute_sub_one(self)?;
                absolute_add_one(&absolute_and_not(&x1, other)?, true)
            }
        }
    }

    /// Bitwise XOR.
    pub fn bit_xor(&self, other: &Self) -> Result<Self, BigIntError> {
        match (self.is_negative(), other.is_negative()) {
            (false, false) => absolute_xor(self, other),
            (true, true) => {
                let x1 = absolute_sub_one(self)?;
                let y1 = absolute_sub_one(other)?;
                absolute_xor(&x1, &y1)
            }
            (false, true) => {
                let y1 = absolute_sub_one(other)?;
                absolute_add_one(&absolute_xor(self, &y1)?, true)
            }
            (true, false) => {
                let x1 = absolute_sub_one(self)?;
                absolute_add_one(&absolute_xor(&x1, other)?, true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(sign: bool, digits: &[Digit]) -> BigInt {
        BigInt::from_digits(sign, digits.to_vec()).unwrap()
    }

    /// Every small pair against native i64 two's complement.
    #[test]
    fn test_matches_i64_semantics() {
        for a in -20i64..=20 {
            for b in -20i64..=20 {
                let (x, y) = (BigInt::from(a), BigInt::from(b));
                assert_eq!(x.bit_and(&y).unwrap(), BigInt::from(a & b), "{a} & {b}");
                assert_eq!(x.bit_or(&y).unwrap(), BigInt::from(a | b), "{a} | {b}");
                assert_eq!(x.bit_xor(&y).unwrap(), BigInt::from(a ^ b), "{a} ^ {b}");
            }
        }
    }

    #[test]
    fn test_and_minus_one_is_identity() {
        let v = big(false, &[0xdead_beef, 0x1234]);
        assert_eq!(BigInt::from(-1).bit_and(&v).unwrap(), v);
    }

    #[test]
    fn test_unequal_lengths() {
        let long = big(false, &[0xff, 0xf0]);
        let short = BigInt::from(0x0f);
        assert_eq!(long.bit_and(&short).unwrap(), BigInt::from(0x0f));
        assert_eq!(short.bit_or(&long).unwrap(), big(false, &[0xff, 0xf0]));
        assert_eq!(short.bit_xor(&long).unwrap(), big(false, &[0xf0, 0xf0]));
    }

    #[test]
    fn test_negative_across_limbs() {
        // -2^64 has all ones above bit 64 and zeros below.
        let neg = big(true, &[0, 1]);
        let low = BigInt::from(u64::MAX);
        assert!(neg.bit_and(&low).unwrap().is_zero());
        assert_eq!(neg.bit_or(&low).unwrap(), BigInt::from(-1));
        assert_eq!(neg.bit_xor(&low).unwrap(), BigInt::from(-1));
    }

    #[test]
    fn test_and_not_keeps_extra_high_limbs() {
        // x & !(y-1) where x is longer than y-1.
        let x = big(false, &[0b1010, 7]);
        let r = x.bit_and(&BigInt::from(-2)).unwrap();
        assert_eq!(r, big(false, &[0b1010, 7]));
    }
}
