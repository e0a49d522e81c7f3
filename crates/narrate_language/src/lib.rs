//! Number words, tokenizer, parser, and evaluator for spoken arithmetic.
//!
//! This crate provides:
//! - [`NumberWordResolver`] - Number word runs to values
//! - [`Tokenizer`] - Transcripts to token streams
//! - [`Parser`] - Token streams to an [`Ast`]
//! - [`evaluate`] - An [`Ast`] to a value
//! - [`Renderer`] - An [`Ast`] back to an infix string
//!
//! ```text
//! "five plus three equals"
//!     → [Number(5), Plus, Number(3), Equals]
//!     → Binary(Add, 5, 3)
//!     → 8
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod error;
pub mod eval;
pub mod numbers;
pub mod parser;
pub mod pretty;
pub mod token;
pub mod tokenizer;

pub use ast::{Ast, BinaryOperator, UnaryOperator};
pub use error::{Error, EvalError, Found, ParseError, Result};
pub use eval::{apply_binary, apply_unary, evaluate, percent_of};
pub use numbers::NumberWordResolver;
pub use parser::{MAX_HEIGHT, MAX_NESTING, Parser, parse, parse_tokens};
pub use pretty::{DEFAULT_PRECISION, Renderer, format_number};
pub use token::{Token, TokenKind};
pub use tokenizer::Tokenizer;

/// Parses and evaluates a transcript in one step.
///
/// # Errors
/// Returns the parse error or evaluation error that stopped it.
pub fn calculate(transcript: &str) -> Result<f64> {
    let ast = parse(transcript)?;
    Ok(evaluate(&ast)?)
}
