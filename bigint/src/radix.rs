//! Integer-to-string conversion in radix 2..=36, plus the `fmt` traits.

use std::fmt;

use crate::digit::{Digit, DIGIT_BITS};
use crate::div::inplace_div_small;
use crate::value::BigInt;

const DIGIT_CHARS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Largest power of `radix` that fits in a limb, and its exponent.
fn chunk_divisor(radix: u32) -> (Digit, usize) {
    let radix = radix as Digit;
    let mut power = radix;
    let mut chars = 1;
    while let Some(next) = power.checked_mul(radix) {
        power = next;
        chars += 1;
    }
    (power, chars)
}

/// Magnitude characters, least significant first, for a power-of-two radix.
/// Reads `log2(radix)` bits at a time straight out of the limbs.
fn magnitude_chars_power_of_two(x: &BigInt, radix: u32) -> Vec<u8> {
    let bits_per_char = radix.trailing_zeros();
    let char_mask = (radix - 1) as Digit;
    let capacity = x.bit_length().div_ceil(bits_per_char as u64) as usize;
    let mut chars = Vec::with_capacity(capacity);

    let (&msd, rest) = match x.digits().split_last() {
        Some(split) => split,
        None => return vec![b'0'],
    };
    // Bits carried over from the previous limb, and how many there are.
    let mut digit: Digit = 0;
    let mut available_bits = 0;
    for &new_digit in rest {
        let current = (digit | (new_digit << available_bits)) & char_mask;
        chars.push(DIGIT_CHARS[current as usize]);
        let consumed = bits_per_char - available_bits;
        digit = new_digit >> consumed;
        available_bits = DIGIT_BITS - consumed;
        while available_bits >= bits_per_char {
            chars.push(DIGIT_CHARS[(digit & char_mask) as usize]);
            digit >>= bits_per_char;
            available_bits -= bits_per_char;
        }
    }
    let current = (digit | (msd << available_bits)) & char_mask;
    chars.push(DIGIT_CHARS[current as usize]);
    digit = msd >> (bits_per_char - available_bits);
    while digit != 0 {
        chars.push(DIGIT_CHARS[(digit & char_mask) as usize]);
        digit >>= bits_per_char;
    }
    debug_assert_eq!(chars.len(), capacity);
    chars
}

/// Magnitude characters, least significant first, for any radix.
///
/// Repeatedly divides a scratch copy by the largest power of the radix that
/// fits in a limb, so each pass yields several characters.
fn magnitude_chars_generic(x: &BigInt, radix: u32) -> Vec<u8> {
    let (divisor, chunk_chars) = chunk_divisor(radix);
    let radix = radix as Digit;
    let mut rest = x.digits().to_vec();
    let mut len = rest.len();
    let mut chars = Vec::with_capacity(len * chunk_chars);
    while len > 0 {
        let mut chunk = inplace_div_small(&mut rest[..len], divisor);
        while len > 0 && rest[len - 1] == 0 {
            len -= 1;
        }
        // Inner chunks are zero-padded; the leading one is not.
        for _ in 0..chunk_chars {
            if len == 0 && chunk == 0 {
                break;
            }
            chars.push(DIGIT_CHARS[(chunk % radix) as usize]);
            chunk /= radix;
        }
    }
    if chars.is_empty() {
        chars.push(b'0');
    }
    chars
}

/// Magnitude in `radix`, most significant character first, no sign.
fn magnitude_to_string(x: &BigInt, radix: u32) -> String {
    tracing::trace!(radix, limbs = x.len(), "formatting BigInt");
    let chars = if radix.is_power_of_two() {
        magnitude_chars_power_of_two(x, radix)
    } else {
        magnitude_chars_generic(x, radix)
    };
    chars.iter().rev().map(|&c| c as char).collect()
}

impl BigInt {
    /// Render in `radix` with lowercase letters and a leading `-` for
    /// negative values.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is not in the range 2..=36.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// assert_eq!(BigInt::zero().to_string_radix(10), "0");
    /// assert_eq!(BigInt::from(-255).to_string_radix(16), "-ff");
    /// assert_eq!(BigInt::from(35).to_string_radix(36), "z");
    /// ```
    pub fn to_string_radix(&self, radix: u32) -> String {
        assert!(
            (2..=36).contains(&radix),
            "to_string_radix: radix must be in 2..=36, got {radix}"
        );
        let magnitude = magnitude_to_string(self, radix);
        if self.is_negative() {
            format!("-{magnitude}")
        } else {
            magnitude
        }
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &magnitude_to_string(self, 10))
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0x", &magnitude_to_string(self, 16))
    }
}

impl fmt::Octal for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0o", &magnitude_to_string(self, 8))
    }
}

impl fmt::Binary for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0b", &magnitude_to_string(self, 2))
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({:#x})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(sign: bool, digits: &[Digit]) -> BigInt {
        BigInt::from_digits(sign, digits.to_vec()).unwrap()
    }

    #[test]
    fn test_zero() {
        for radix in 2..=36 {
            assert_eq!(BigInt::zero().to_string_radix(radix), "0");
        }
    }

    #[test]
    fn test_small_values_match_std() {
        for v in [1u64, 7, 35, 36, 255, 1000, u64::MAX] {
            let x = BigInt::from(v);
            assert_eq!(x.to_string_radix(2), format!("{v:b}"));
            assert_eq!(x.to_string_radix(8), format!("{v:o}"));
            assert_eq!(x.to_string_radix(10), v.to_string());
            assert_eq!(x.to_string_radix(16), format!("{v:x}"));
        }
    }

    #[test]
    fn test_power_of_two_across_limbs() {
        let x = big(false, &[0, 1]);
        assert_eq!(x.to_string_radix(16), "10000000000000000");
        assert_eq!(x.to_string_radix(8), "2000000000000000000000");
        assert_eq!(x.to_string_radix(32), "g000000000000");
        assert_eq!(x.to_string_radix(2), format!("1{}", "0".repeat(64)));
    }

    #[test]
    fn test_decimal_across_limbs() {
        // 2^64 and 2^128 - 1
        assert_eq!(big(false, &[0, 1]).to_string_radix(10), "18446744073709551616");
        assert_eq!(
            big(true, &[u64::MAX, u64::MAX]).to_string_radix(10),
            "-340282366920938463463374607431768211455"
        );
    }

    #[test]
    fn test_inner_chunks_are_zero_padded() {
        // A decimal chunk holds 19 characters; 10^20 + 1 spans two chunks
        // and the low one is mostly zeros.
        let ten_pow_20_plus_one = big(false, &[0x6bc7_5e2d_6310_0001, 5]);
        assert_eq!(
            ten_pow_20_plus_one.to_string_radix(10),
            "100000000000000000001"
        );
        let ten_pow_19 = big(false, &[0x8ac7_2304_89e8_0000]);
        assert_eq!(ten_pow_19.to_string_radix(10), format!("1{}", "0".repeat(19)));
    }

    #[test]
    fn test_radix_36() {
        assert_eq!(BigInt::from(-1295).to_string_radix(36), "-zz");
        assert_eq!(BigInt::from(1296).to_string_radix(36), "100");
    }

    #[test]
    #[should_panic(expected = "radix must be in 2..=36")]
    fn test_invalid_radix_panics() {
        BigInt::from(1).to_string_radix(37);
    }

    #[test]
    fn test_fmt_traits() {
        let v = BigInt::from(-255);
        assert_eq!(format!("{v}"), "-255");
        assert_eq!(format!("{v:x}"), "-ff");
        assert_eq!(format!("{v:#x}"), "-0xff");
        assert_eq!(format!("{:#b}", BigInt::from(5)), "0b101");
        assert_eq!(format!("{:o}", BigInt::from(8)), "10");
        assert_eq!(format!("{:>6}", BigInt::from(42)), "    42");
        assert_eq!(format!("{:+}", BigInt::from(42)), "+42");
        assert_eq!(format!("{v:?}"), "BigInt(-0xff)");
    }
}
