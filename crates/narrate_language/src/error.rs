//! Error types for parsing and evaluation.
//!
//! Uses `thiserror`. Tokenization has no error type: unknown words are filler.

use std::fmt;

use thiserror::Error;

/// What the parser found where it expected something else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Found {
    /// A token, by its matched text.
    Token(String),
    /// The token stream ran out.
    EndOfInput,
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(text) => write!(f, "'{text}'"),
            Self::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// A parse failure. The parser stops at the first one.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing left to parse once filler and confirmations are dropped.
    #[error("empty expression")]
    EmptyExpression,

    /// Neither a number nor an opening parenthesis where one was needed,
    /// or a token left over after a complete expression.
    #[error("unexpected {found}")]
    UnexpectedToken {
        /// The offending token, or end of input.
        found: Found,
        /// Index of the offending token in the filtered stream.
        position: usize,
    },

    /// An opening parenthesis was never closed.
    #[error("unclosed parenthesis")]
    UnclosedParenthesis {
        /// Index of the opening parenthesis in the filtered stream.
        opened_at: usize,
    },

    /// Parentheses or prefix operators nested past the parser's bound, or
    /// an operator chain building a tree taller than it accepts.
    #[error("expression nested too deeply")]
    NestingTooDeep {
        /// Index of the token where the bound was crossed.
        position: usize,
    },
}

/// An evaluation failure.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EvalError {
    /// The divisor was exactly zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Square root of a negative number.
    #[error("square root of negative number {operand}")]
    NegativeRoot {
        /// The negative operand.
        operand: f64,
    },

    /// An operation overflowed to infinity or produced NaN.
    #[error("result is not a finite number")]
    NonFiniteResult,
}

/// Any failure turning a transcript into a value.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    /// Parsing failed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
