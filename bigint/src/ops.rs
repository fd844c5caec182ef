//! Operator dispatch for evaluators that map source operators onto BigInt
//! operations.
//!
//! ```
//! use bigint::{BigInt, BinaryOp, CompareOp, UnaryOp};
//!
//! let op = BinaryOp::from_symbol("**").unwrap();
//! assert_eq!(op.apply(&BigInt::from(2), &BigInt::from(10)).unwrap(), BigInt::from(1024));
//! assert_eq!(UnaryOp::BitNot.apply(&BigInt::from(0)).unwrap(), BigInt::from(-1));
//! assert!(CompareOp::Le.apply(&BigInt::from(-3), &BigInt::from(-3)));
//! ```

use std::fmt;

use crate::error::BigIntError;
use crate::value::BigInt;

/// Binary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
    Shl,
    Sar,
    Shr,
    BitAnd,
    BitOr,
    BitXor,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 12] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Rem,
        BinaryOp::Pow,
        BinaryOp::Shl,
        BinaryOp::Sar,
        BinaryOp::Shr,
        BinaryOp::BitAnd,
        BinaryOp::BitOr,
        BinaryOp::BitXor,
    ];

    pub fn apply(self, x: &BigInt, y: &BigInt) -> Result<BigInt, BigIntError> {
        match self {
            BinaryOp::Add => x.add(y),
            BinaryOp::Sub => x.sub(y),
            BinaryOp::Mul => x.mul(y),
            BinaryOp::Div => x.div(y),
            BinaryOp::Rem => x.rem(y),
            BinaryOp::Pow => x.pow(y),
            BinaryOp::Shl => x.shl(y),
            BinaryOp::Sar => x.sar(y),
            BinaryOp::Shr => x.shr(y),
            BinaryOp::BitAnd => x.bit_and(y),
            BinaryOp::BitOr => x.bit_or(y),
            BinaryOp::BitXor => x.bit_xor(y),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Pow => "**",
            BinaryOp::Shl => "<<",
            BinaryOp::Sar => ">>",
            BinaryOp::Shr => ">>>",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Neg,
    BitNot,
}

impl UnaryOp {
    pub fn apply(self, x: &BigInt) -> Result<BigInt, BigIntError> {
        match self {
            UnaryOp::Neg => Ok(x.unary_minus()),
            UnaryOp::BitNot => x.bit_not(),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::BitNot => "~",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "-" => Some(UnaryOp::Neg),
            "~" => Some(UnaryOp::BitNot),
            _ => None,
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Comparison operators. Comparisons never fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

impl CompareOp {
    pub const ALL: [CompareOp; 6] = [
        CompareOp::Lt,
        CompareOp::Le,
        CompareOp::Gt,
        CompareOp::Ge,
        CompareOp::Eq,
        CompareOp::Ne,
    ];

    pub fn apply(self, x: &BigInt, y: &BigInt) -> bool {
        match self {
            CompareOp::Lt => x.less_than(y),
            CompareOp::Le => !y.less_than(x),
            CompareOp::Gt => y.less_than(x),
            CompareOp::Ge => !x.less_than(y),
            CompareOp::Eq => x.equals(y),
            CompareOp::Ne => !x.equals(y),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
            CompareOp::Eq => "==",
            CompareOp::Ne => "!=",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
