//! Arbitrary-precision signed integers with JavaScript BigInt semantics.
//!
//! Values are sign-magnitude with 64-bit limbs, always normalized: no
//! most-significant zero limb and no negative zero. Every operation that can
//! fail returns [`BigIntError`]; results larger than [`MAX_LENGTH`] limbs are
//! rejected with [`BigIntError::ValueTooBig`].
//!
//! ```
//! use bigint::BigInt;
//!
//! let x = BigInt::from(u64::MAX).mul(&BigInt::from(u64::MAX)).unwrap();
//! assert_eq!(x.digits(), &[1, u64::MAX - 1]);
//! assert_eq!(x.to_string(), "340282366920938463426481119284349108225");
//! assert_eq!(x.unary_minus().rem(&BigInt::from(10)).unwrap(), BigInt::from(-5));
//! ```

mod bitwise;
mod cmp;
mod digit;
mod div;
mod error;
mod magnitude;
mod mul;
mod ops;
mod radix;
mod shift;
mod value;

pub use digit::{Digit, DIGIT_BITS};
pub use error::BigIntError;
pub use ops::{BinaryOp, CompareOp, UnaryOp};
pub use value::{BigInt, MutableBigInt, MAX_BIT_LENGTH, MAX_LENGTH, MAX_LENGTH_BITS};
