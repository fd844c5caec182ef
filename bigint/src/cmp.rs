use std::cmp::Ordering;

use crate::magnitude::absolute_compare;
use crate::value::BigInt;

impl BigInt {
    /// Strict numeric ordering.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// assert!(BigInt::from(-5).less_than(&BigInt::from(3)));
    /// assert!(!BigInt::from(3).less_than(&BigInt::from(3)));
    /// ```
    pub fn less_than(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Less
    }

    /// Value equality: same sign and same magnitude.
    pub fn equals(&self, other: &Self) -> bool {
        self.is_negative() == other.is_negative() && self.digits() == other.digits()
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => absolute_compare(self, other),
            // Larger magnitude is the smaller negative value.
            (true, true) => absolute_compare(other, self),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
