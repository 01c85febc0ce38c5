use super::Val;
use crate::lang::key::Binary;
use crate::lang::Error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

pub struct Operation {}

impl Operation {
    /// Evaluates `previous op current` on operand strings.
    pub fn binary(op: Binary, previous: &str, current: &str) -> Result<String> {
        let lhs = Val::try_from(previous)?;
        let rhs = Val::try_from(current)?;
        use Binary::*;
        let result = match op {
            Add => Operation::sum(lhs, rhs),
            Subtract => Operation::subtract(lhs, rhs),
            Multiply => Operation::multiply(lhs, rhs),
            Divide => Operation::divide(lhs, rhs),
            Remainder => Operation::remainder(lhs, rhs),
            Power => Operation::power(lhs, rhs),
        };
        Ok(result.to_string())
    }

    pub fn sum(lhs: Val, rhs: Val) -> Val {
        Val(lhs.0 + rhs.0)
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Val {
        Val(lhs.0 - rhs.0)
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Val {
        Val(lhs.0 * rhs.0)
    }

    pub fn divide(lhs: Val, rhs: Val) -> Val {
        Val(lhs.0 / rhs.0)
    }

    /// Truncated remainder, sign follows the dividend.
    pub fn remainder(lhs: Val, rhs: Val) -> Val {
        Val(lhs.0 % rhs.0)
    }

    pub fn power(lhs: Val, rhs: Val) -> Val {
        Val(lhs.0.powf(rhs.0))
    }
}
