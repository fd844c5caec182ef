//! Single-limb primitives.
//!
//! Every helper here computes the full double-width result through `u128`,
//! so no partial product or carry is ever truncated.

/// One limb of a magnitude.
pub type Digit = u64;

/// Double-width intermediate for products and two-limb dividends.
pub(crate) type DoubleDigit = u128;

/// Bits per limb.
pub const DIGIT_BITS: u32 = Digit::BITS;

// ============================================================================
// Low-level helpers
// ============================================================================

/// Add with carry: (result, carry) = a + b + carry_in
#[inline(always)]
pub(crate) const fn adc(a: Digit, b: Digit, carry: Digit) -> (Digit, Digit) {
    let tmp = a as DoubleDigit + b as DoubleDigit + carry as DoubleDigit;
    (tmp as Digit, (tmp >> DIGIT_BITS) as Digit)
}

/// Subtract with borrow: (result, borrow) = a - b - borrow_in
#[inline(always)]
pub(crate) const fn sbb(a: Digit, b: Digit, borrow: Digit) -> (Digit, Digit) {
    let tmp = (a as DoubleDigit)
        .wrapping_sub(b as DoubleDigit)
        .wrapping_sub(borrow as DoubleDigit);
    (tmp as Digit, (tmp >> 127) as Digit)
}

/// Multiply-accumulate: (lo, carry) = a * b + c + carry_in
///
/// Cannot overflow: (2^64-1)^2 + 2 * (2^64-1) == 2^128 - 1.
#[inline(always)]
pub(crate) const fn mac(a: Digit, b: Digit, c: Digit, carry: Digit) -> (Digit, Digit) {
    let tmp = a as DoubleDigit * b as DoubleDigit + c as DoubleDigit + carry as DoubleDigit;
    (tmp as Digit, (tmp >> DIGIT_BITS) as Digit)
}

/// Full product: (low, high) = a * b
#[inline(always)]
pub(crate) const fn digit_mul(a: Digit, b: Digit) -> (Digit, Digit) {
    let tmp = a as DoubleDigit * b as DoubleDigit;
    (tmp as Digit, (tmp >> DIGIT_BITS) as Digit)
}

/// Two-limb by one-limb division: (quotient, remainder) of (high:low) / divisor.
///
/// Requires `high < divisor`, which keeps the quotient within one limb.
#[inline(always)]
pub(crate) fn digit_div(high: Digit, low: Digit, divisor: Digit) -> (Digit, Digit) {
    debug_assert!(high < divisor);
    let dividend = ((high as DoubleDigit) << DIGIT_BITS) | low as DoubleDigit;
    let divisor = divisor as DoubleDigit;
    ((dividend / divisor) as Digit, (dividend % divisor) as Digit)
}

/// Whether the two-limb value (x_high:x_low) exceeds (y_high:y_low).
#[inline(always)]
pub(crate) fn double_digit_greater_than(
    x_high: Digit,
    x_low: Digit,
    y_high: Digit,
    y_low: Digit,
) -> bool {
    x_high > y_high || (x_high == y_high && x_low > y_low)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adc_carry() {
        assert_eq!(adc(Digit::MAX, 1, 0), (0, 1));
        assert_eq!(adc(Digit::MAX, Digit::MAX, 1), (Digit::MAX, 1));
        assert_eq!(adc(2, 3, 1), (6, 0));
    }

    #[test]
    fn test_sbb_borrow() {
        assert_eq!(sbb(0, 1, 0), (Digit::MAX, 1));
        assert_eq!(sbb(5, 3, 1), (1, 0));
        assert_eq!(sbb(0, 0, 1), (Digit::MAX, 1));
    }

    #[test]
    fn test_mac_max() {
        let (lo, hi) = mac(Digit::MAX, Digit::MAX, Digit::MAX, Digit::MAX);
        assert_eq!(lo, Digit::MAX);
        assert_eq!(hi, Digit::MAX);
    }

    #[test]
    fn test_digit_mul_split() {
        // (2^64-1)^2 = 2^128 - 2^65 + 1
        assert_eq!(digit_mul(Digit::MAX, Digit::MAX), (1, Digit::MAX - 1));
    }

    #[test]
    fn test_digit_div() {
        // (1 * 2^64 + 0) / 2 = 2^63
        assert_eq!(digit_div(1, 0, 2), (1 << 63, 0));
        assert_eq!(digit_div(0, 17, 5), (3, 2));
    }

    #[test]
    fn test_double_digit_greater_than() {
        assert!(double_digit_greater_than(1, 0, 0, Digit::MAX));
        assert!(double_digit_greater_than(1, 5, 1, 4));
        assert!(!double_digit_greater_than(1, 4, 1, 4));
        assert!(!double_digit_greater_than(0, Digit::MAX, 1, 0));
    }
}
