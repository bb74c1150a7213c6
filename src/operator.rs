//! The operator table: symbols, precedence levels and binary semantics.

use crate::error::{EvaluationError, Result};
use num_bigint::BigInt;
use num_traits::{Pow, Zero};

/// Characters that may start an operator. An identifier may be directly followed by any of them.
pub const OPERATOR_SYMBOLS: &str = "+-*/^";

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponent,
}

impl Operator {
    /// Resolve the text of an operator token.
    ///
    /// A run of `+` of any length is `Add`. A run of `-` is `Add` when its length is
    /// even and `Subtract` when odd. Mixed runs like `+-` and unknown symbols yield `None`.
    pub fn from_symbol(text: &str) -> Option<Self> {
        if text.is_empty() {
            return None;
        }
        if text.chars().all(|c| c == '+') {
            return Some(Operator::Add);
        }
        if text.chars().all(|c| c == '-') {
            return Some(if text.len() % 2 == 0 {
                Operator::Add
            } else {
                Operator::Subtract
            });
        }
        match text {
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            "^" => Some(Operator::Exponent),
            _ => None,
        }
    }

    /// Symbol used in diagnostics.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Exponent => "^",
        }
    }

    /// Binding strength. Higher binds tighter; equal levels associate to the left.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
            Operator::Exponent => 3,
        }
    }

    /// Apply the operator to `lhs` and `rhs`.
    ///
    /// Division truncates toward zero. The exponent must be a non-negative value that
    /// fits into a `usize`.
    pub fn apply(self, lhs: BigInt, rhs: BigInt) -> Result<BigInt> {
        match self {
            Operator::Add => Ok(lhs + rhs),
            Operator::Subtract => Ok(lhs - rhs),
            Operator::Multiply => Ok(lhs * rhs),
            Operator::Divide => {
                if rhs.is_zero() {
                    return Err(EvaluationError::DivisionByZero);
                }
                Ok(lhs / rhs)
            }
            Operator::Exponent => {
                let exponent =
                    usize::try_from(&rhs).map_err(|_| EvaluationError::InvalidExpression)?;
                Ok(Pow::pow(lhs, exponent))
            }
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
