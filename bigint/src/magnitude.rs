//! Magnitude kernel: unsigned add/subtract/compare, and the signed
//! operators built directly on it.

use std::cmp::Ordering;

use crate::digit::{adc, sbb, Digit};
use crate::error::BigIntError;
use crate::value::{BigInt, MutableBigInt};

// ============================================================================
// Unsigned kernel
// ============================================================================

/// Compare two LE limb slices as unsigned magnitudes. Both must be trimmed.
pub(crate) fn compare_digits(x: &[Digit], y: &[Digit]) -> Ordering {
    x.len()
        .cmp(&y.len())
        .then_with(|| x.iter().rev().cmp(y.iter().rev()))
}

/// Compare `|x|` with `|y|`.
pub(crate) fn absolute_compare(x: &BigInt, y: &BigInt) -> Ordering {
    compare_digits(x.digits(), y.digits())
}

/// `|x| + |y|`, with the caller's choice of sign.
pub(crate) fn absolute_add(
    x: &BigInt,
    y: &BigInt,
    result_sign: bool,
) -> Result<BigInt, BigIntError> {
    let (x, y) = if x.len() < y.len() { (y, x) } else { (x, y) };
    if x.is_zero() {
        return Ok(BigInt::zero());
    }
    if y.is_zero() {
        return Ok(x.with_sign(result_sign));
    }
    let mut result = MutableBigInt::allocate(x.len() + 1)?;
    let mut carry = 0;
    for i in 0..y.len() {
        let (sum, c) = adc(x.digit(i), y.digit(i), carry);
        result.set_digit(i, sum);
        carry = c;
    }
    for i in y.len()..x.len() {
        let (sum, c) = adc(x.digit(i), 0, carry);
        result.set_digit(i, sum);
        carry = c;
    }
    result.set_digit(x.len(), carry);
    result.set_sign(result_sign);
    Ok(result.finalize())
}

/// `|x| - |y|`, with the caller's choice of sign. Requires `|x| >= |y|`.
pub(crate) fn absolute_sub(
    x: &BigInt,
    y: &BigInt,
    result_sign: bool,
) -> Result<BigInt, BigIntError> {
    debug_assert!(absolute_compare(x, y) != Ordering::Less);
    if x.is_zero() {
        return Ok(BigInt::zero());
    }
    if y.is_zero() {
        return Ok(x.with_sign(result_sign));
    }
    let mut result = MutableBigInt::allocate(x.len())?;
    let mut borrow = 0;
    for i in 0..y.len() {
        let (diff, b) = sbb(x.digit(i), y.digit(i), borrow);
        result.set_digit(i, diff);
        borrow = b;
    }
    for i in y.len()..x.len() {
        let (diff, b) = sbb(x.digit(i), 0, borrow);
        result.set_digit(i, diff);
        borrow = b;
    }
    debug_assert_eq!(borrow, 0);
    result.set_sign(result_sign);
    Ok(result.finalize())
}

/// `|x| + 1`. Only grows by a limb when every limb of `x` is saturated.
pub(crate) fn absolute_add_one(x: &BigInt, result_sign: bool) -> Result<BigInt, BigIntError> {
    let will_overflow = x.digits().iter().all(|&d| d == Digit::MAX);
    let mut result = MutableBigInt::allocate(x.len() + usize::from(will_overflow))?;
    let mut carry = 1;
    for i in 0..x.len() {
        let (sum, c) = adc(x.digit(i), 0, carry);
        result.set_digit(i, sum);
        carry = c;
    }
    if will_overflow {
        result.set_digit(x.len(), carry);
    }
    result.set_sign(result_sign);
    Ok(result.finalize())
}

/// `|x| - 1` as a non-negative value. Requires `x != 0`.
pub(crate) fn absolute_sub_one(x: &BigInt) -> Result<BigInt, BigIntError> {
    debug_assert!(!x.is_zero());
    let mut result = MutableBigInt::allocate(x.len())?;
    let mut borrow = 1;
    for i in 0..x.len() {
        let (diff, b) = sbb(x.digit(i), 0, borrow);
        result.set_digit(i, diff);
        borrow = b;
    }
    debug_assert_eq!(borrow, 0);
    Ok(result.finalize())
}

// ============================================================================
// Signed operators
// ============================================================================

impl BigInt {
    /// Addition.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let a = BigInt::from(100);
    /// let b = BigInt::from(-300);
    /// assert_eq!(a.add(&b).unwrap(), BigInt::from(-200));
    /// ```
    pub fn add(&self, other: &Self) -> Result<Self, BigIntError> {
        let x_sign = self.is_negative();
        if x_sign == other.is_negative() {
            return absolute_add(self, other, x_sign);
        }
        // Different signs: the larger magnitude decides the sign.
        if absolute_compare(self, other) != Ordering::Less {
            absolute_sub(self, other, x_sign)
        } else {
            absolute_sub(other, self, !x_sign)
        }
    }

    /// Subtraction.
    pub fn sub(&self, other: &Self) -> Result<Self, BigIntError> {
        let x_sign = self.is_negative();
        if x_sign != other.is_negative() {
            return absolute_add(self, other, x_sign);
        }
        if absolute_compare(self, other) != Ordering::Less {
            absolute_sub(self, other, x_sign)
        } else {
            absolute_sub(other, self, !x_sign)
        }
    }

    /// Negation. Zero stays zero.
    pub fn unary_minus(&self) -> Self {
        self.with_sign(!self.is_negative())
    }

    /// Bitwise NOT under two's-complement semantics: `-x - 1`.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// assert_eq!(BigInt::from(5).bit_not().unwrap(), BigInt::from(-6));
    /// assert_eq!(BigInt::from(-1).bit_not().unwrap(), BigInt::zero());
    /// ```
    pub fn bit_not(&self) -> Result<Self, BigIntError> {
        if self.is_negative() {
            // ~(-x) == x - 1
            absolute_sub_one(self)
        } else {
            // ~x == -(x + 1)
            absolute_add_one(self, true)
        }
    }
}

impl std::ops::Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        let sign = !self.is_negative();
        self.into_sign(sign)
    }
}

impl std::ops::Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        self.unary_minus()
    }
}
