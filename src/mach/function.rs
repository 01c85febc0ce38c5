use super::Val;
use crate::lang::key::Unary;
use crate::lang::Error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// ## Single-operand keys

pub struct Function {}

impl Function {
    /// Applies a unary key to an operand string and returns the new
    /// operand string.
    pub fn unary(op: Unary, operand: &str) -> Result<String> {
        let val = Val::try_from(operand)?;
        use Unary::*;
        let result = match op {
            Sqrt => Function::sqrt(val),
            Factorial => Function::factorial(val),
            Sin => Function::sin(val),
            Cos => Function::cos(val),
            Tan => Function::tan(val),
            Inv => Function::inv(val),
            Ln => Function::ln(val),
            Log => Function::log(val),
            Rad => Function::rad(val),
        };
        Ok(result.to_string())
    }

    pub fn sqrt(val: Val) -> Val {
        Val(val.0.sqrt())
    }

    /// Factorial of `floor(x)`. Negative input is `NaN`.
    pub fn factorial(val: Val) -> Val {
        let n = val.0.floor();
        if n < 0.0 {
            return Val(f64::NAN);
        }
        let mut product: f64 = 1.0;
        let mut i = 2.0;
        while i <= n && product.is_finite() {
            product *= i;
            i += 1.0;
        }
        if n.is_infinite() {
            return Val(f64::INFINITY);
        }
        Val(product)
    }

    pub fn sin(val: Val) -> Val {
        Val(val.0.sin())
    }

    pub fn cos(val: Val) -> Val {
        Val(val.0.cos())
    }

    pub fn tan(val: Val) -> Val {
        Val(val.0.tan())
    }

    pub fn inv(val: Val) -> Val {
        Val(1.0 / val.0)
    }

    pub fn ln(val: Val) -> Val {
        Val(val.0.ln())
    }

    pub fn log(val: Val) -> Val {
        Val(val.0.log10())
    }

    /// Degrees to radians.
    pub fn rad(val: Val) -> Val {
        Val(val.0 * std::f64::consts::PI / 180.0)
    }
}
