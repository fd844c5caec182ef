//! Value representation: sign + little-endian limbs, always normalized.

use serde::{Deserialize, Serialize};

use crate::digit::{Digit, DIGIT_BITS};
use crate::error::BigIntError;

/// Width of the length bound, in bits.
pub const MAX_LENGTH_BITS: u32 = 20;

/// Maximum number of limbs a value may occupy.
pub const MAX_LENGTH: usize = (1 << MAX_LENGTH_BITS) - 1;

/// Maximum number of magnitude bits a value may occupy.
pub const MAX_BIT_LENGTH: u64 = MAX_LENGTH as u64 * DIGIT_BITS as u64;

/// Arbitrary-precision signed integer.
///
/// Limbs are stored in little-endian order (`digits[0]` is least significant).
/// The top limb is never zero, and zero is never negative, so derived
/// equality and hashing are value equality and value hashing.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBigInt")]
pub struct BigInt {
    sign: bool,
    digits: Vec<Digit>,
}

/// Unvalidated serialized form. Deserialization goes through
/// [`BigInt::from_digits`] so the normalization invariants hold.
#[derive(Deserialize)]
struct RawBigInt {
    sign: bool,
    digits: Vec<Digit>,
}

impl TryFrom<RawBigInt> for BigInt {
    type Error = BigIntError;

    fn try_from(raw: RawBigInt) -> Result<Self, Self::Error> {
        BigInt::from_digits(raw.sign, raw.digits)
    }
}

/// A limb buffer exclusively owned by the operation building it.
///
/// The buffer has a fixed length chosen at allocation. Kernels fill it in,
/// then [`finalize`](MutableBigInt::finalize) trims it into an immutable
/// [`BigInt`]. Dropping it on an error path discards the partial result.
#[derive(Debug)]
pub struct MutableBigInt {
    sign: bool,
    digits: Vec<Digit>,
}

impl MutableBigInt {
    /// Allocate a zero-filled buffer of exactly `length` limbs.
    pub fn allocate(length: usize) -> Result<Self, BigIntError> {
        if length > MAX_LENGTH {
            tracing::debug!(length, max = MAX_LENGTH, "rejecting oversized BigInt allocation");
            return Err(BigIntError::ValueTooBig);
        }
        Ok(Self {
            sign: false,
            digits: vec![0; length],
        })
    }

    /// Allocate a buffer holding a copy of `digits`, padded with zero limbs
    /// up to `length`.
    pub(crate) fn copy_of(digits: &[Digit], length: usize) -> Result<Self, BigIntError> {
        debug_assert!(length >= digits.len());
        let mut result = Self::allocate(length)?;
        result.digits[..digits.len()].copy_from_slice(digits);
        Ok(result)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    #[inline]
    pub fn digit(&self, n: usize) -> Digit {
        self.digits[n]
    }

    #[inline]
    pub fn set_digit(&mut self, n: usize, value: Digit) {
        self.digits[n] = value;
    }

    #[inline]
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    #[inline]
    pub fn digits_mut(&mut self) -> &mut [Digit] {
        &mut self.digits
    }

    #[inline]
    pub fn set_sign(&mut self, sign: bool) {
        self.sign = sign;
    }

    /// Drop most-significant zero limbs.
    pub fn right_trim(&mut self) {
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.sign = false;
        }
    }

    /// Trim and hand out the immutable value.
    pub fn finalize(mut self) -> BigInt {
        self.right_trim();
        BigInt {
            sign: self.sign,
            digits: self.digits,
        }
    }
}

impl BigInt {
    /// The value zero (no limbs).
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let z = BigInt::zero();
    /// assert!(z.is_zero());
    /// assert!(!z.to_boolean());
    /// ```
    pub const fn zero() -> Self {
        Self {
            sign: false,
            digits: Vec::new(),
        }
    }

    pub fn one() -> Self {
        Self {
            sign: false,
            digits: vec![1],
        }
    }

    /// Build a value from raw limbs (LE order) and a sign.
    ///
    /// Leading zero limbs are trimmed and a zero magnitude drops the sign.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let v = BigInt::from_digits(true, vec![5, 0, 0]).unwrap();
    /// assert_eq!(v.len(), 1);
    /// assert!(v.is_negative());
    /// assert!(!BigInt::from_digits(true, vec![0]).unwrap().is_negative());
    /// ```
    pub fn from_digits(sign: bool, digits: Vec<Digit>) -> Result<Self, BigIntError> {
        let mut buffer = MutableBigInt { sign, digits };
        buffer.right_trim();
        if buffer.len() > MAX_LENGTH {
            tracing::debug!(length = buffer.len(), "rejecting oversized BigInt digits");
            return Err(BigIntError::ValueTooBig);
        }
        Ok(buffer.finalize())
    }

    /// Single-limb value. A zero limb yields unsigned zero.
    pub(crate) fn from_digit(sign: bool, digit: Digit) -> Self {
        if digit == 0 {
            return Self::zero();
        }
        Self {
            sign,
            digits: vec![digit],
        }
    }

    /// Whether this value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        debug_assert!(!self.digits.is_empty() || !self.sign, "there is no -0n");
        self.digits.is_empty()
    }

    /// True for negative values. Never true for zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign
    }

    /// Number of limbs in use.
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Magnitude limbs (LE order).
    #[inline]
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    #[inline]
    pub(crate) fn digit(&self, n: usize) -> Digit {
        self.digits[n]
    }

    /// Truthiness: only zero is false.
    #[inline]
    pub fn to_boolean(&self) -> bool {
        !self.is_zero()
    }

    /// Number of significant magnitude bits; zero has none.
    pub fn bit_length(&self) -> u64 {
        match self.digits.last() {
            None => 0,
            Some(&msd) => {
                self.digits.len() as u64 * DIGIT_BITS as u64 - msd.leading_zeros() as u64
            }
        }
    }

    /// Weak hash over the lowest limb only.
    ///
    /// Cheap and stable, not collision resistant: values that share their
    /// low 32 bits collide regardless of sign or length.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// assert_eq!(BigInt::zero().hash_value(), 0);
    /// assert_eq!(BigInt::from(7).hash_value(), BigInt::from(-7).hash_value());
    /// ```
    pub fn hash_value(&self) -> u32 {
        if self.is_zero() {
            0
        } else {
            compute_integer_hash(self.digits[0] as u32, 0)
        }
    }

    /// Same magnitude, given sign. Zero stays unsigned.
    pub(crate) fn with_sign(&self, sign: bool) -> Self {
        Self {
            sign: sign && !self.is_zero(),
            digits: self.digits.clone(),
        }
    }

    /// Same magnitude, given sign, consuming `self`.
    pub(crate) fn into_sign(mut self, sign: bool) -> Self {
        self.sign = sign && !self.is_zero();
        self
    }
}

/// Integer mixing function used by [`BigInt::hash_value`].
pub(crate) fn compute_integer_hash(key: u32, seed: u32) -> u32 {
    let mut hash = key ^ seed;
    hash = (!hash).wrapping_add(hash << 15);
    hash ^= hash >> 12;
    hash = hash.wrapping_add(hash << 2);
    hash ^= hash >> 4;
    hash = hash.wrapping_mul(2057);
    hash ^= hash >> 16;
    hash & 0x3fff_ffff
}

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        Self::from_digit(false, value)
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        Self::from_digit(value < 0, value.unsigned_abs())
    }
}

impl From<i32> for BigInt {
    fn from(value: i32) -> Self {
        Self::from(value as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        let z = BigInt::zero();
        assert!(z.is_zero());
        assert_eq!(z.len(), 0);
        assert!(!z.is_negative());
        assert_eq!(z, BigInt::default());
    }

    #[test]
    fn test_from_i64() {
        let v = BigInt::from(-42i64);
        assert!(v.is_negative());
        assert_eq!(v.digits(), &[42]);

        let min = BigInt::from(i64::MIN);
        assert!(min.is_negative());
        assert_eq!(min.digits(), &[1u64 << 63]);

        assert!(BigInt::from(0i64).is_zero());
    }

    #[test]
    fn test_from_digits_trims() {
        let v = BigInt::from_digits(false, vec![1, 2, 0, 0]).unwrap();
        assert_eq!(v.digits(), &[1, 2]);

        let z = BigInt::from_digits(true, vec![0, 0]).unwrap();
        assert!(z.is_zero());
        assert!(!z.is_negative());
    }

    #[test]
    fn test_allocate_too_big() {
        assert_eq!(
            MutableBigInt::allocate(MAX_LENGTH + 1).unwrap_err(),
            BigIntError::ValueTooBig
        );
        assert_eq!(MutableBigInt::allocate(3).unwrap().digits(), &[0, 0, 0]);
    }

    #[test]
    fn test_finalize_normalizes() {
        let mut buf = MutableBigInt::allocate(3).unwrap();
        buf.set_sign(true);
        buf.set_digit(0, 9);
        let v = buf.finalize();
        assert_eq!(v.digits(), &[9]);
        assert!(v.is_negative());

        let mut empty = MutableBigInt::allocate(2).unwrap();
        empty.set_sign(true);
        let z = empty.finalize();
        assert!(z.is_zero());
        assert!(!z.is_negative());
    }

    #[test]
    fn test_to_boolean() {
        assert!(!BigInt::zero().to_boolean());
        assert!(BigInt::from(-1).to_boolean());
    }

    #[test]
    fn test_hash_value_weak() {
        assert_eq!(BigInt::zero().hash_value(), 0);
        let a = BigInt::from_digits(false, vec![5, 1]).unwrap();
        let b = BigInt::from(5);
        // Only the lowest limb participates.
        assert_eq!(a.hash_value(), b.hash_value());
        assert_ne!(BigInt::from(5).hash_value(), BigInt::from(6).hash_value());
        assert!(BigInt::from(u64::MAX).hash_value() <= 0x3fff_ffff);
    }

    #[test]
    fn test_bit_length() {
        assert_eq!(BigInt::zero().bit_length(), 0);
        assert_eq!(BigInt::from(1).bit_length(), 1);
        assert_eq!(BigInt::from(255).bit_length(), 8);
        assert_eq!(BigInt::from_digits(false, vec![0, 1]).unwrap().bit_length(), 65);
    }

    #[test]
    fn test_with_sign_keeps_zero_unsigned() {
        assert!(!BigInt::zero().with_sign(true).is_negative());
        assert!(BigInt::from(3).with_sign(true).is_negative());
    }

    #[test]
    fn test_is_negative_tracks_sign_through_construction() {
        assert!(BigInt::from_digits(true, vec![1]).unwrap().is_negative());
        assert!(!BigInt::from_digits(true, vec![0, 0]).unwrap().is_negative());
        let mut m = MutableBigInt::allocate(2).unwrap();
        m.set_sign(true);
        m.set_digit(0, 9);
        assert!(m.finalize().is_negative());
        assert!(!BigInt::from(-1).into_sign(false).is_negative());
    }
}
