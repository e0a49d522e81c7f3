//! Tree evaluation.
//!
//! Pure and recursive. Binary nodes evaluate left before right.

use crate::ast::{Ast, BinaryOperator, UnaryOperator};
use crate::error::EvalError;

/// Evaluates an AST to a finite value.
///
/// A percent node on the right of `+` or `-` is taken relative to the left
/// operand, so `100 + 10%` is 110. Everywhere else `y%` is `y / 100`.
///
/// # Errors
/// Returns the first [`EvalError`] raised while reducing the tree.
pub fn evaluate(ast: &Ast) -> Result<f64, EvalError> {
    let value = match ast {
        Ast::Number(n) => *n,
        Ast::Binary { op, left, right } => {
            let lhs = evaluate(left)?;
            match (op, right.as_ref()) {
                (
                    BinaryOperator::Add | BinaryOperator::Subtract,
                    Ast::Unary {
                        op: UnaryOperator::Percent,
                        operand,
                    },
                ) => {
                    let rate = evaluate(operand)?;
                    apply_binary(*op, lhs, percent_of(lhs, rate))?
                }
                _ => {
                    let rhs = evaluate(right)?;
                    apply_binary(*op, lhs, rhs)?
                }
            }
        }
        Ast::Unary { op, operand } => apply_unary(*op, evaluate(operand)?)?,
    };
    finite(value)
}

/// Applies a binary operator to two values.
///
/// # Errors
/// [`EvalError::DivisionByZero`] when dividing by exactly zero, and
/// [`EvalError::NonFiniteResult`] when the result overflows or is NaN.
pub fn apply_binary(op: BinaryOperator, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
    let value = match op {
        BinaryOperator::Add => lhs + rhs,
        BinaryOperator::Subtract => lhs - rhs,
        BinaryOperator::Multiply => lhs * rhs,
        BinaryOperator::Divide => {
            if rhs == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            lhs / rhs
        }
        BinaryOperator::Power => lhs.powf(rhs),
    };
    finite(value)
}

/// Applies a unary operator to a value.
///
/// # Errors
/// [`EvalError::NegativeRoot`] for the square root of a negative value.
pub fn apply_unary(op: UnaryOperator, operand: f64) -> Result<f64, EvalError> {
    let value = match op {
        UnaryOperator::Negate => -operand,
        UnaryOperator::Sqrt => {
            if operand < 0.0 {
                return Err(EvalError::NegativeRoot { operand });
            }
            operand.sqrt()
        }
        UnaryOperator::Percent => operand / 100.0,
    };
    finite(value)
}

/// `rate` percent of `base`.
#[must_use]
pub fn percent_of(base: f64, rate: f64) -> f64 {
    base * rate / 100.0
}

fn finite(value: f64) -> Result<f64, EvalError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFiniteResult)
    }
}
