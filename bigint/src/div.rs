//! Truncating division: a single-limb fast path and normalized long
//! division (Knuth, TAOCP vol. 2, 4.3.1, Algorithm D) for wider divisors.

use std::cmp::Ordering;

use crate::digit::{adc, digit_div, digit_mul, double_digit_greater_than, sbb, Digit, DIGIT_BITS};
use crate::error::BigIntError;
use crate::magnitude::absolute_compare;
use crate::mul::internal_multiply_add;
use crate::shift::{special_left_shift, SpecialLeftShiftMode};
use crate::value::{BigInt, MutableBigInt};

// ============================================================================
// In-place helpers on limb buffers
// ============================================================================

/// Divide `digits` in place by one limb and return the remainder.
pub(crate) fn inplace_div_small(digits: &mut [Digit], divisor: Digit) -> Digit {
    debug_assert_ne!(divisor, 0);
    let mut remainder = 0;
    for d in digits.iter_mut().rev() {
        let (q, r) = digit_div(remainder, *d, divisor);
        *d = q;
        remainder = r;
    }
    remainder
}

/// `digits[start..start + summand.len()] += summand`, returning the carry out.
pub(crate) fn inplace_add(digits: &mut [Digit], summand: &[Digit], start: usize) -> Digit {
    let mut carry = 0;
    for (i, &s) in summand.iter().enumerate() {
        let (sum, c) = adc(digits[start + i], s, carry);
        digits[start + i] = sum;
        carry = c;
    }
    carry
}

/// `digits[start..start + subtrahend.len()] -= subtrahend`, returning the
/// borrow out.
pub(crate) fn inplace_sub(digits: &mut [Digit], subtrahend: &[Digit], start: usize) -> Digit {
    let mut borrow = 0;
    for (i, &s) in subtrahend.iter().enumerate() {
        let (diff, b) = sbb(digits[start + i], s, borrow);
        digits[start + i] = diff;
        borrow = b;
    }
    borrow
}

/// Shift `digits` right by `shift < DIGIT_BITS` bits in place.
pub(crate) fn inplace_right_shift(digits: &mut [Digit], shift: u32) {
    debug_assert!(shift < DIGIT_BITS);
    if shift == 0 || digits.is_empty() {
        return;
    }
    let mut carry = digits[0] >> shift;
    let last = digits.len() - 1;
    for i in 0..last {
        let d = digits[i + 1];
        digits[i] = (d << (DIGIT_BITS - shift)) | carry;
        carry = d >> shift;
    }
    digits[last] = carry;
}

// ============================================================================
// Magnitude division
// ============================================================================

/// `|x| / divisor` for a single-limb divisor: (quotient, remainder).
pub(crate) fn absolute_div_small(
    x: &[Digit],
    divisor: Digit,
) -> Result<(MutableBigInt, Digit), BigIntError> {
    let mut quotient = MutableBigInt::copy_of(x, x.len())?;
    let remainder = inplace_div_small(quotient.digits_mut(), divisor);
    Ok((quotient, remainder))
}

/// `|x| % divisor` for a single-limb divisor, without building a quotient.
pub(crate) fn absolute_mod_small(x: &[Digit], divisor: Digit) -> Digit {
    x.iter()
        .rev()
        .fold(0, |remainder, &d| digit_div(remainder, d, divisor).1)
}

/// Long division of magnitudes with a divisor of at least two limbs.
///
/// Returns untrimmed (quotient, remainder) buffers. Requires
/// `dividend.len() >= divisor.len() >= 2` and a trimmed divisor.
pub(crate) fn absolute_div_large(
    dividend: &[Digit],
    divisor: &[Digit],
) -> Result<(MutableBigInt, MutableBigInt), BigIntError> {
    let n = divisor.len();
    debug_assert!(n >= 2);
    debug_assert!(dividend.len() >= n);
    debug_assert_ne!(divisor[n - 1], 0);
    let m = dividend.len() - n;

    let mut quotient = MutableBigInt::allocate(m + 1)?;
    // Scratch space for qhat * divisor.
    let mut qhatv = MutableBigInt::allocate(n + 1)?;

    // D1. Normalize so the divisor's top bit is set. The dividend gets one
    // extra limb so the first window always has a leading limb.
    let shift = divisor[n - 1].leading_zeros();
    let normalized = special_left_shift(divisor, shift, SpecialLeftShiftMode::SameSizeResult)?;
    let v = normalized.digits();
    let mut u = special_left_shift(dividend, shift, SpecialLeftShiftMode::AlwaysAddOneDigit)?;

    let vn1 = v[n - 1];
    let vn2 = v[n - 2];
    for j in (0..=m).rev() {
        // D3. Estimate qhat from the top two window limbs. The estimate is
        // never too small and, after refinement, at most two too large.
        let mut qhat = Digit::MAX;
        let ujn = u.digit(j + n);
        if ujn != vn1 {
            let (q, mut rhat) = digit_div(ujn, u.digit(j + n - 1), vn1);
            qhat = q;
            let ujn2 = u.digit(j + n - 2);
            loop {
                let (lo, hi) = digit_mul(qhat, vn2);
                if !double_digit_greater_than(hi, lo, rhat, ujn2) {
                    break;
                }
                qhat -= 1;
                let prev_rhat = rhat;
                rhat = rhat.wrapping_add(vn1);
                // rhat >= 2^64: the test cannot succeed again.
                if rhat < prev_rhat {
                    break;
                }
            }
        }

        // D4. Multiply and subtract.
        internal_multiply_add(v, qhat, 0, n, qhatv.digits_mut());
        let mut borrow = inplace_sub(u.digits_mut(), qhatv.digits(), j);

        // D5/D6. The window went negative: qhat overshot. Add the divisor
        // back until the top limb carries out, which happens at most twice.
        let mut corrections = 0;
        while borrow != 0 {
            let carry = inplace_add(u.digits_mut(), v, j);
            let (top, overflow) = u.digit(j + n).overflowing_add(carry);
            u.set_digit(j + n, top);
            qhat -= 1;
            corrections += 1;
            debug_assert!(corrections <= 2);
            if overflow {
                borrow = 0;
            }
        }

        quotient.set_digit(j, qhat);
    }

    // D8. Unnormalize the remainder.
    inplace_right_shift(u.digits_mut(), shift);
    Ok((quotient, u))
}

// ============================================================================
// Signed operators
// ============================================================================

impl BigInt {
    /// Truncating division. Errors on division by zero.
    ///
    /// ```
    /// use bigint::{BigInt, BigIntError};
    ///
    /// assert_eq!(BigInt::from(-7).div(&BigInt::from(2)).unwrap(), BigInt::from(-3));
    /// assert_eq!(
    ///     BigInt::from(1).div(&BigInt::zero()),
    ///     Err(BigIntError::DivisionByZero)
    /// );
    /// ```
    pub fn div(&self, other: &Self) -> Result<Self, BigIntError> {
        if other.is_zero() {
            tracing::debug!("BigInt division by zero");
            return Err(BigIntError::DivisionByZero);
        }
        if absolute_compare(self, other) == Ordering::Less {
            return Ok(BigInt::zero());
        }
        let result_sign = self.is_negative() != other.is_negative();
        let mut quotient = if other.len() == 1 {
            let divisor = other.digit(0);
            if divisor == 1 {
                return Ok(self.with_sign(result_sign));
            }
            tracing::trace!(dividend_len = self.len(), "single-limb BigInt division");
            absolute_div_small(self.digits(), divisor)?.0
        } else {
            tracing::trace!(
                dividend_len = self.len(),
                divisor_len = other.len(),
                "long BigInt division"
            );
            absolute_div_large(self.digits(), other.digits())?.0
        };
        quotient.set_sign(result_sign);
        Ok(quotient.finalize())
    }

    /// Remainder of truncating division; takes the dividend's sign.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// assert_eq!(BigInt::from(-7).rem(&BigInt::from(2)).unwrap(), BigInt::from(-1));
    /// assert_eq!(BigInt::from(7).rem(&BigInt::from(-2)).unwrap(), BigInt::from(1));
    /// ```
    pub fn rem(&self, other: &Self) -> Result<Self, BigIntError> {
        if other.is_zero() {
            tracing::debug!("BigInt remainder by zero");
            return Err(BigIntError::DivisionByZero);
        }
        if absolute_compare(self, other) == Ordering::Less {
            return Ok(self.clone());
        }
        if other.len() == 1 {
            let divisor = other.digit(0);
            if divisor == 1 {
                return Ok(BigInt::zero());
            }
            let remainder = absolute_mod_small(self.digits(), divisor);
            return Ok(BigInt::from_digit(self.is_negative(), remainder));
        }
        let (_, mut remainder) = absolute_div_large(self.digits(), other.digits())?;
        remainder.set_sign(self.is_negative());
        Ok(remainder.finalize())
    }

    /// Quotient and remainder in one pass.
    pub fn div_rem(&self, other: &Self) -> Result<(Self, Self), BigIntError> {
        if other.is_zero() {
            tracing::debug!("BigInt division by zero");
            return Err(BigIntError::DivisionByZero);
        }
        if absolute_compare(self, other) == Ordering::Less {
            return Ok((BigInt::zero(), self.clone()));
        }
        let quotient_sign = self.is_negative() != other.is_negative();
        if other.len() == 1 {
            let (mut quotient, remainder) = absolute_div_small(self.digits(), other.digit(0))?;
            quotient.set_sign(quotient_sign);
            return Ok((
                quotient.finalize(),
                BigInt::from_digit(self.is_negative(), remainder),
            ));
        }
        let (mut quotient, mut remainder) = absolute_div_large(self.digits(), other.digits())?;
        quotient.set_sign(quotient_sign);
        remainder.set_sign(self.is_negative());
        Ok((quotient.finalize(), remainder.finalize()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(sign: bool, digits: &[Digit]) -> BigInt {
        BigInt::from_digits(sign, digits.to_vec()).unwrap()
    }

    #[test]
    fn test_div_basic() {
        assert_eq!(BigInt::from(42).div(&BigInt::from(7)).unwrap(), BigInt::from(6));
        assert_eq!(BigInt::from(10).div(&BigInt::from(3)).unwrap(), BigInt::from(3));
    }

    #[test]
    fn test_div_by_zero() {
        let a = BigInt::from(42);
        assert_eq!(a.div(&BigInt::zero()), Err(BigIntError::DivisionByZero));
        assert_eq!(a.rem(&BigInt::zero()), Err(BigIntError::DivisionByZero));
        assert_eq!(a.div_rem(&BigInt::zero()), Err(BigIntError::DivisionByZero));
    }

    #[test]
    fn test_div_truncates_toward_zero() {
        let cases = [(7, 2, 3, 1), (-7, 2, -3, -1), (7, -2, -3, 1), (-7, -2, 3, -1)];
        for (x, y, q, r) in cases {
            let (x, y) = (BigInt::from(x), BigInt::from(y));
            assert_eq!(x.div(&y).unwrap(), BigInt::from(q));
            assert_eq!(x.rem(&y).unwrap(), BigInt::from(r));
        }
    }

    #[test]
    fn test_small_dividend() {
        let x = BigInt::from(-3);
        let y = big(false, &[0, 1]);
        assert!(x.div(&y).unwrap().is_zero());
        assert_eq!(x.rem(&y).unwrap(), x);
    }

    #[test]
    fn test_divide_by_one() {
        let x = big(true, &[5, 6]);
        assert_eq!(x.div(&BigInt::from(-1)).unwrap(), big(false, &[5, 6]));
        assert!(x.rem(&BigInt::one()).unwrap().is_zero());
    }

    #[test]
    fn test_exact_negative_remainder_is_unsigned_zero() {
        let r = BigInt::from(-8).rem(&BigInt::from(4)).unwrap();
        assert!(r.is_zero());
        assert!(!r.is_negative());
    }

    #[test]
    fn test_ten_pow_30_by_seven() {
        // 10^30 = 0xc9f2c9cd0_4674edea40000000
        let x = big(false, &[0x4674_edea_4000_0000, 0xc_9f2c_9cd0]);
        let (q, r) = x.div_rem(&BigInt::from(7)).unwrap();
        // 142857142857142857142857142857 rem 1
        assert_eq!(q.digits(), &[0x0a10_b446_0924_9249, 0x1_cd98_a8b0]);
        assert_eq!(r, BigInt::one());
    }

    #[test]
    fn test_long_division_add_back() {
        // The trial digit overshoots by one and needs the add-back step.
        let x = big(false, &[0, 0x31e7_aed1_41cb_cc3a, 0x8000_0000_0000_0000]);
        let y = big(false, &[Digit::MAX, 0x8000_0000_0000_0000]);
        let (q, r) = x.div_rem(&y).unwrap();
        assert_eq!(q.digits(), &[Digit::MAX - 1]);
        assert_eq!(r.digits(), &[Digit::MAX - 1, 0x31e7_aed1_41cb_cc3c]);
        assert_eq!(q.mul(&y).unwrap().add(&r).unwrap(), x);
    }

    #[test]
    fn test_long_division_unnormalized_divisor() {
        let x = big(false, &[3, 0, 0x8000_0000_0000_0000]);
        let y = big(false, &[1, 0x2000_0000_0000_0000]);
        let (q, r) = x.div_rem(&y).unwrap();
        assert_eq!(q.digits(), &[Digit::MAX, 3]);
        assert_eq!(r.digits(), &[4, 0x1fff_ffff_ffff_fffc]);
    }

    #[test]
    fn test_long_division_signs() {
        let x = big(true, &[1, 2, 3]);
        let y = big(false, &[4, 5]);
        let (q, r) = x.div_rem(&y).unwrap();
        assert!(q.is_negative());
        assert!(r.is_negative());
        assert_eq!(q, x.div(&y).unwrap());
        assert_eq!(r, x.rem(&y).unwrap());
        assert_eq!(q.mul(&y).unwrap().add(&r).unwrap(), x);
    }

    #[test]
    fn test_inplace_right_shift() {
        // 2^129 + 2^64 >> 1 == 2^128 + 2^63
        let mut digits = vec![0, 1, 2];
        inplace_right_shift(&mut digits, 1);
        assert_eq!(digits, vec![1 << 63, 0, 1]);
        // The low bit of limb 1 carries into the top of limb 0.
        let mut carried = vec![0, 1];
        inplace_right_shift(&mut carried, 1);
        assert_eq!(carried, vec![1 << 63, 0]);
        let mut unchanged = vec![5, 7];
        inplace_right_shift(&mut unchanged, 0);
        assert_eq!(unchanged, vec![5, 7]);
    }

    #[test]
    fn test_inplace_add_sub() {
        let mut digits = vec![Digit::MAX, 0, 0];
        assert_eq!(inplace_add(&mut digits, &[1, 0], 0), 0);
        assert_eq!(digits, vec![0, 1, 0]);
        assert_eq!(inplace_sub(&mut digits, &[1], 0), 1);
        assert_eq!(digits, vec![Digit::MAX, 1, 0]);
    }

    #[test]
    fn test_absolute_mod_small_matches_div() {
        let x = [0x1234_5678_9abc_def0, 0x0fed_cba9_8765_4321, 7];
        let (_, r) = absolute_div_small(&x, 1_000_000_007).unwrap();
        assert_eq!(absolute_mod_small(&x, 1_000_000_007), r);
    }
}
