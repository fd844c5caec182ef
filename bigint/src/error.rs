use thiserror::Error;

/// Errors from BigInt arithmetic.
///
/// Every fallible operation reports one of these synchronously. Arithmetic is
/// deterministic, so none of them are transient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum BigIntError {
    /// `div` or `rem` with a zero divisor.
    #[error("Division by zero")]
    DivisionByZero,

    /// `pow` with a negative exponent.
    #[error("Exponent must be non-negative")]
    NegativeExponent,

    /// The result would need more than [`MAX_LENGTH`](crate::MAX_LENGTH) limbs.
    #[error("BigInt too big")]
    ValueTooBig,

    /// `shr` (unsigned right shift) of a negative value.
    #[error("Unsigned right shift is not supported for negative BigInts")]
    UnsupportedUnsignedShiftOfNegative,

    /// The shift count itself does not fit a native bit offset.
    #[error("Shift amount out of range")]
    ShiftAmountOutOfRange,
}
