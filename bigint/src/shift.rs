//! Left and right shifts. Right shifts of negative values round toward
//! negative infinity, as if the value were stored in two's complement.

use crate::digit::{Digit, DIGIT_BITS};
use crate::error::BigIntError;
use crate::magnitude::absolute_add_one;
use crate::value::{BigInt, MutableBigInt, MAX_BIT_LENGTH};

/// Result sizing for [`special_left_shift`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SpecialLeftShiftMode {
    /// The caller guarantees no bits leave the top limb.
    SameSizeResult,
    /// Reserve one extra limb for the bits shifted out of the top limb.
    AlwaysAddOneDigit,
}

/// Shift the magnitude `x` left by `shift < DIGIT_BITS` bits into a fresh
/// buffer. Used to normalize operands for long division.
pub(crate) fn special_left_shift(
    x: &[Digit],
    shift: u32,
    mode: SpecialLeftShiftMode,
) -> Result<MutableBigInt, BigIntError> {
    debug_assert!(shift < DIGIT_BITS);
    let n = x.len();
    let result_length = match mode {
        SpecialLeftShiftMode::SameSizeResult => n,
        SpecialLeftShiftMode::AlwaysAddOneDigit => n + 1,
    };
    let mut result = MutableBigInt::allocate(result_length)?;
    if shift == 0 {
        result.digits_mut()[..n].copy_from_slice(x);
        return Ok(result);
    }
    let mut carry = 0;
    for (i, &d) in x.iter().enumerate() {
        result.set_digit(i, (d << shift) | carry);
        carry = d >> (DIGIT_BITS - shift);
    }
    match mode {
        SpecialLeftShiftMode::AlwaysAddOneDigit => result.set_digit(n, carry),
        SpecialLeftShiftMode::SameSizeResult => debug_assert_eq!(carry, 0),
    }
    Ok(result)
}

/// Shift count as a bit offset, or `None` when the count is larger than any
/// representable value could use. The count's sign is ignored.
fn to_shift_amount(y: &BigInt) -> Option<u64> {
    match y.digits() {
        [] => Some(0),
        [amount] if *amount <= MAX_BIT_LENGTH => Some(*amount),
        _ => None,
    }
}

/// Result of shifting every bit out: 0, or -1 for negative values.
fn right_shift_by_maximum(sign: bool) -> BigInt {
    if sign {
        BigInt::from(-1i64)
    } else {
        BigInt::zero()
    }
}

impl BigInt {
    /// `self << shift` on the magnitude, keeping the sign.
    pub(crate) fn left_shift_by_absolute(&self, shift: u64) -> Result<BigInt, BigIntError> {
        if self.is_zero() || shift == 0 {
            return Ok(self.clone());
        }
        let digit_shift = (shift / DIGIT_BITS as u64) as usize;
        let bits_shift = (shift % DIGIT_BITS as u64) as u32;
        let length = self.len();
        let grow = bits_shift != 0 && (self.digit(length - 1) >> (DIGIT_BITS - bits_shift)) != 0;
        let result_length = length + digit_shift + usize::from(grow);
        tracing::trace!(digit_shift, bits_shift, result_length, "BigInt left shift");
        let mut result = MutableBigInt::allocate(result_length)?;
        if bits_shift == 0 {
            result.digits_mut()[digit_shift..].copy_from_slice(self.digits());
        } else {
            let mut carry = 0;
            for (i, &d) in self.digits().iter().enumerate() {
                result.set_digit(i + digit_shift, (d << bits_shift) | carry);
                carry = d >> (DIGIT_BITS - bits_shift);
            }
            if grow {
                result.set_digit(length + digit_shift, carry);
            }
        }
        result.set_sign(self.is_negative());
        Ok(result.finalize())
    }

    /// Arithmetic `self >> shift`, flooring negative values.
    pub(crate) fn right_shift_by_absolute(&self, shift: u64) -> Result<BigInt, BigIntError> {
        let sign = self.is_negative();
        let length = self.len();
        let digit_shift = usize::try_from(shift / DIGIT_BITS as u64).unwrap_or(usize::MAX);
        let bits_shift = (shift % DIGIT_BITS as u64) as u32;
        if digit_shift >= length {
            return Ok(right_shift_by_maximum(sign));
        }

        // A negative value rounds down when any set bit is shifted out.
        let must_round_down = sign && {
            let mask: Digit = (1 << bits_shift) - 1;
            self.digit(digit_shift) & mask != 0
                || self.digits()[..digit_shift].iter().any(|&d| d != 0)
        };

        let result_length = length - digit_shift;
        let mut result = MutableBigInt::allocate(result_length)?;
        if bits_shift == 0 {
            result
                .digits_mut()
                .copy_from_slice(&self.digits()[digit_shift..]);
        } else {
            let mut carry = self.digit(digit_shift) >> bits_shift;
            let last = result_length - 1;
            for i in 0..last {
                let d = self.digit(i + digit_shift + 1);
                result.set_digit(i, (d << (DIGIT_BITS - bits_shift)) | carry);
                carry = d >> bits_shift;
            }
            result.set_digit(last, carry);
        }
        result.set_sign(sign);
        let result = result.finalize();
        if must_round_down {
            // -floor(x / 2^n) == ceil(|x| / 2^n) == trunc(|x| / 2^n) + 1
            absolute_add_one(&result, true)
        } else {
            Ok(result)
        }
    }

    fn left_shift_by_bigint(&self, y: &BigInt) -> Result<BigInt, BigIntError> {
        match to_shift_amount(y) {
            Some(shift) => self.left_shift_by_absolute(shift),
            None => {
                tracing::debug!(count_limbs = y.len(), "BigInt left shift count out of range");
                Err(BigIntError::ShiftAmountOutOfRange)
            }
        }
    }

    fn right_shift_by_bigint(&self, y: &BigInt) -> Result<BigInt, BigIntError> {
        match to_shift_amount(y) {
            Some(shift) => self.right_shift_by_absolute(shift),
            None => Ok(right_shift_by_maximum(self.is_negative())),
        }
    }

    /// Left shift. A negative count shifts right.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let v = BigInt::from(1).shl(&BigInt::from(64)).unwrap();
    /// assert_eq!(v.digits(), &[0, 1]);
    /// assert_eq!(BigInt::from(-8).shl(&BigInt::from(-2)).unwrap(), BigInt::from(-2));
    /// ```
    pub fn shl(&self, y: &BigInt) -> Result<BigInt, BigIntError> {
        if y.is_zero() || self.is_zero() {
            return Ok(self.clone());
        }
        if y.is_negative() {
            self.right_shift_by_bigint(y)
        } else {
            self.left_shift_by_bigint(y)
        }
    }

    /// Signed (arithmetic) right shift. A negative count shifts left.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// assert_eq!(BigInt::from(-5).sar(&BigInt::from(1)).unwrap(), BigInt::from(-3));
    /// assert_eq!(BigInt::from(5).sar(&BigInt::from(1)).unwrap(), BigInt::from(2));
    /// ```
    pub fn sar(&self, y: &BigInt) -> Result<BigInt, BigIntError> {
        if y.is_zero() || self.is_zero() {
            return Ok(self.clone());
        }
        if y.is_negative() {
            self.left_shift_by_bigint(y)
        } else {
            self.right_shift_by_bigint(y)
        }
    }

    /// Unsigned right shift. Negative values have no unsigned form, so they
    /// are rejected; non-negative values shift like [`sar`](BigInt::sar).
    pub fn shr(&self, y: &BigInt) -> Result<BigInt, BigIntError> {
        if self.is_negative() {
            tracing::debug!("rejecting unsigned right shift of negative BigInt");
            return Err(BigIntError::UnsupportedUnsignedShiftOfNegative);
        }
        self.sar(y)
    }
}
