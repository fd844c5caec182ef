//! Schoolbook multiplication and exponentiation by squaring.

use crate::digit::{adc, mac, Digit};
use crate::error::BigIntError;
use crate::value::{BigInt, MutableBigInt, MAX_BIT_LENGTH};

/// `accumulator[index..] += multiplicand * multiplier`.
///
/// Each limb product is taken at full double width; the carry keeps
/// rippling through the accumulator until it is absorbed. The caller sizes
/// the accumulator so the sum always fits.
pub(crate) fn multiply_accumulate(
    multiplicand: &[Digit],
    multiplier: Digit,
    accumulator: &mut [Digit],
    mut index: usize,
) {
    if multiplier == 0 {
        return;
    }
    let mut carry = 0;
    for &m in multiplicand {
        let (lo, hi) = mac(m, multiplier, accumulator[index], carry);
        accumulator[index] = lo;
        carry = hi;
        index += 1;
    }
    while carry != 0 {
        let (sum, c) = adc(accumulator[index], carry, 0);
        accumulator[index] = sum;
        carry = c;
        index += 1;
    }
}

/// `result = source[..n] * factor + summand`.
///
/// Limbs of `result` past `n` receive the final carry, then zeros.
pub(crate) fn internal_multiply_add(
    source: &[Digit],
    factor: Digit,
    summand: Digit,
    n: usize,
    result: &mut [Digit],
) {
    let mut carry = summand;
    for i in 0..n {
        let (lo, hi) = mac(source[i], factor, 0, carry);
        result[i] = lo;
        carry = hi;
    }
    if result.len() > n {
        result[n] = carry;
        result[n + 1..].fill(0);
    } else {
        debug_assert_eq!(carry, 0);
    }
}

impl BigInt {
    /// Multiplication.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let a = BigInt::from(-6);
    /// let b = BigInt::from(7);
    /// assert_eq!(a.mul(&b).unwrap(), BigInt::from(-42));
    /// ```
    pub fn mul(&self, other: &Self) -> Result<Self, BigIntError> {
        if self.is_zero() || other.is_zero() {
            return Ok(BigInt::zero());
        }
        let mut result = MutableBigInt::allocate(self.len() + other.len())?;
        for (i, &multiplier) in other.digits().iter().enumerate() {
            multiply_accumulate(self.digits(), multiplier, result.digits_mut(), i);
        }
        result.set_sign(self.is_negative() != other.is_negative());
        Ok(result.finalize())
    }

    /// Exponentiation. Errors on a negative exponent, or when the result
    /// cannot be represented.
    ///
    /// ```
    /// use bigint::{BigInt, BigIntError};
    ///
    /// let r = BigInt::from(-3).pow(&BigInt::from(3)).unwrap();
    /// assert_eq!(r, BigInt::from(-27));
    /// assert_eq!(
    ///     BigInt::from(2).pow(&BigInt::from(-1)),
    ///     Err(BigIntError::NegativeExponent)
    /// );
    /// ```
    pub fn pow(&self, exponent: &Self) -> Result<Self, BigIntError> {
        if exponent.is_negative() {
            tracing::debug!("rejecting negative BigInt exponent");
            return Err(BigIntError::NegativeExponent);
        }
        if exponent.is_zero() {
            return Ok(BigInt::one());
        }
        if self.is_zero() {
            return Ok(BigInt::zero());
        }
        // (-1) ** even == 1, otherwise (+-1) ** n == base.
        if self.len() == 1 && self.digit(0) == 1 {
            if self.is_negative() && exponent.digit(0) & 1 == 0 {
                return Ok(BigInt::one());
            }
            return Ok(self.clone());
        }
        if exponent.len() > 1 {
            tracing::debug!(exponent_limbs = exponent.len(), "BigInt power too big");
            return Err(BigIntError::ValueTooBig);
        }
        let mut n = exponent.digit(0);
        if n == 1 {
            return Ok(self.clone());
        }
        // |x| >= 2^(bits-1), so |x|^n needs more than (bits-1)*n bits.
        if n >= MAX_BIT_LENGTH || (self.bit_length() - 1).saturating_mul(n) >= MAX_BIT_LENGTH {
            tracing::debug!(exponent = n, base_bits = self.bit_length(), "BigInt power too big");
            return Err(BigIntError::ValueTooBig);
        }
        let result_sign = self.is_negative() && n & 1 == 1;
        if self.len() == 1 && self.digit(0) == 2 {
            let power = BigInt::one().left_shift_by_absolute(n)?;
            return Ok(power.into_sign(result_sign));
        }

        let mut running = self.clone();
        let mut result = if n & 1 == 1 { Some(self.clone()) } else { None };
        n >>= 1;
        while n != 0 {
            running = running.mul(&running)?;
            if n & 1 == 1 {
                result = Some(match result {
                    None => running.clone(),
                    Some(acc) => acc.mul(&running)?,
                });
            }
            n >>= 1;
        }
        Ok(result.unwrap_or_else(BigInt::one))
    }
}
