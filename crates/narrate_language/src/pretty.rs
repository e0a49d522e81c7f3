//! Infix rendering of ASTs and numbers.
//!
//! Parentheses are emitted only where the tree's structure differs from
//! what precedence and left-associativity would give.

use crate::ast::{Ast, BinaryOperator, UnaryOperator};

/// Default number of fractional digits when rendering numbers.
pub const DEFAULT_PRECISION: usize = 10;

/// Formats a number with at most `precision` fractional digits.
///
/// Trailing zeros are trimmed and integral values have no decimal point, so
/// `110.00000000000001` renders as `110` and `1/3` as `0.3333333333`.
/// A non-zero value that would round to `0` falls back to scientific
/// notation, so `1e-18` stays `1e-18`.
#[must_use]
pub fn format_number(value: f64, precision: usize) -> String {
    let mut text = format!("{value:.precision$}");
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "0" || text == "-0" {
        if value != 0.0 {
            return format!("{value:e}");
        }
        text = "0".to_string();
    }
    text
}

/// Renders ASTs as infix strings.
#[derive(Clone, Copy, Debug)]
pub struct Renderer {
    precision: usize,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}

impl Renderer {
    /// Creates a renderer with the given number precision.
    #[must_use]
    pub const fn new(precision: usize) -> Self {
        Self { precision }
    }

    /// Formats a number at this renderer's precision.
    #[must_use]
    pub fn number(&self, value: f64) -> String {
        format_number(value, self.precision)
    }

    /// Renders an AST as an infix expression.
    #[must_use]
    pub fn render(&self, ast: &Ast) -> String {
        match ast {
            Ast::Number(n) => self.number(*n),
            Ast::Unary { op, operand } => match op {
                UnaryOperator::Negate => {
                    format!("-{}", self.wrap(operand, precedence(operand) < ATOM))
                }
                UnaryOperator::Sqrt => format!("sqrt({})", self.render(operand)),
                UnaryOperator::Percent => {
                    format!("{}%", self.wrap(operand, precedence(operand) < POWER))
                }
            },
            Ast::Binary {
                op: BinaryOperator::Power,
                left,
                right,
            } => format!(
                "{}^{}",
                self.wrap(left, precedence(left) < ATOM),
                self.wrap(right, precedence(right) < ATOM)
            ),
            Ast::Binary { op, left, right } => {
                let own = binary_precedence(*op);
                format!(
                    "{} {} {}",
                    self.wrap(left, precedence(left) < own),
                    op.symbol(),
                    self.wrap(right, precedence(right) <= own)
                )
            }
        }
    }

    fn wrap(&self, ast: &Ast, parenthesize: bool) -> String {
        if parenthesize {
            format!("({})", self.render(ast))
        } else {
            self.render(ast)
        }
    }
}

const ADDITIVE: u8 = 1;
const MULTIPLICATIVE: u8 = 2;
const PERCENT: u8 = 3;
const POWER: u8 = 4;
const PREFIX: u8 = 5;
const ATOM: u8 = 6;

const fn binary_precedence(op: BinaryOperator) -> u8 {
    match op {
        BinaryOperator::Add | BinaryOperator::Subtract => ADDITIVE,
        BinaryOperator::Multiply | BinaryOperator::Divide => MULTIPLICATIVE,
        BinaryOperator::Power => POWER,
    }
}

fn precedence(ast: &Ast) -> u8 {
    match ast {
        Ast::Number(_)
        | Ast::Unary {
            op: UnaryOperator::Sqrt,
            ..
        } => ATOM,
        Ast::Unary {
            op: UnaryOperator::Negate,
            ..
        } => PREFIX,
        Ast::Unary {
            op: UnaryOperator::Percent,
            ..
        } => PERCENT,
        Ast::Binary { op, .. } => binary_precedence(*op),
    }
}
