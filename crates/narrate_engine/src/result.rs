//! Calculation results.
//!
//! A [`CalculationResult`] is what callers render: the transcript, and
//! either the expression, value, and step trace, or an error.

use std::fmt;

use narrate_language::{Error, EvalError, Found, ParseError};
use serde::{Deserialize, Serialize};

/// One line of the step trace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationStep {
    /// What this step shows ("Expression", "Reduce", "Result").
    pub label: String,
    /// The expression at this step.
    pub rendered_expression: String,
}

impl CalculationStep {
    /// Creates a step.
    #[must_use]
    pub fn new(label: impl Into<String>, rendered_expression: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            rendered_expression: rendered_expression.into(),
        }
    }
}

/// Machine-readable failure category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Nothing to calculate.
    EmptyExpression,
    /// A token the grammar does not allow at that position.
    UnexpectedToken,
    /// An opening parenthesis without a closing one.
    UnclosedParenthesis,
    /// Parentheses, prefix operators, or an operator chain nested too deeply.
    NestingTooDeep,
    /// Division by exactly zero.
    DivisionByZero,
    /// Square root of a negative number.
    NegativeRoot,
    /// Overflow or NaN.
    NonFiniteResult,
    /// The transcript exceeded the configured length limit.
    TranscriptTooLong,
}

/// A failure, ready to display or serialize.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Failure category.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// The offending token text, when there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl ErrorInfo {
    /// Creates an error without a token.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            token: None,
        }
    }

    /// Creates a [`ErrorCode::TranscriptTooLong`] error.
    #[must_use]
    pub fn transcript_too_long(length: usize, limit: usize) -> Self {
        Self::new(
            ErrorCode::TranscriptTooLong,
            format!("transcript too long: {length} characters (limit {limit})"),
        )
    }
}

impl From<&Error> for ErrorInfo {
    fn from(error: &Error) -> Self {
        let (code, token) = match error {
            Error::Parse(ParseError::EmptyExpression) => (ErrorCode::EmptyExpression, None),
            Error::Parse(ParseError::UnexpectedToken { found, .. }) => {
                let token = match found {
                    Found::Token(text) => Some(text.clone()),
                    Found::EndOfInput => None,
                };
                (ErrorCode::UnexpectedToken, token)
            }
            Error::Parse(ParseError::UnclosedParenthesis { .. }) => {
                (ErrorCode::UnclosedParenthesis, None)
            }
            Error::Parse(ParseError::NestingTooDeep { .. }) => (ErrorCode::NestingTooDeep, None),
            Error::Eval(EvalError::DivisionByZero) => (ErrorCode::DivisionByZero, None),
            Error::Eval(EvalError::NegativeRoot { .. }) => (ErrorCode::NegativeRoot, None),
            Error::Eval(EvalError::NonFiniteResult) => (ErrorCode::NonFiniteResult, None),
        };
        Self {
            code,
            message: error.to_string(),
            token,
        }
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// The outcome of one transcript.
///
/// Exactly one of `value` and `error` is set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The transcript as given.
    pub transcript: String,
    /// Infix rendering of the parsed expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    /// The finite result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Display-only trace, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<CalculationStep>,
    /// Why there is no value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl CalculationResult {
    /// Creates a successful result.
    #[must_use]
    pub fn success(
        transcript: impl Into<String>,
        expression: impl Into<String>,
        value: f64,
        steps: Vec<CalculationStep>,
    ) -> Self {
        Self {
            transcript: transcript.into(),
            expression: Some(expression.into()),
            value: Some(value),
            steps,
            error: None,
        }
    }

    /// Creates a failed result.
    #[must_use]
    pub fn failure(transcript: impl Into<String>, error: ErrorInfo) -> Self {
        Self {
            transcript: transcript.into(),
            expression: None,
            value: None,
            steps: Vec::new(),
            error: Some(error),
        }
    }

    /// Returns true if this result carries a value.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.value.is_some()
    }

    /// The rendering of the final step, if any.
    #[must_use]
    pub fn final_step(&self) -> Option<&str> {
        self.steps.last().map(|s| s.rendered_expression.as_str())
    }
}

impl fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(error) = &self.error {
            return write!(f, "Error: {error}");
        }
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}. {}: {}", i + 1, step.label, step.rendered_expression)?;
        }
        Ok(())
    }
}
