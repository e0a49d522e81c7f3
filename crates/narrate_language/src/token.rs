//! Token types for spoken arithmetic.
//!
//! Tokens are the output of the tokenizer and input to the parser.

use std::fmt;

/// A token from a transcript.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// What this token is.
    pub kind: TokenKind,
    /// The normalized words this token was read from, joined by spaces.
    pub text: String,
    /// The value of a [`TokenKind::Number`], or the literal exponent of a
    /// [`TokenKind::Power`] read from "squared" or "cubed".
    pub value: Option<f64>,
}

impl Token {
    /// Creates a token without a value.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            value: None,
        }
    }

    /// Creates a number token.
    #[must_use]
    pub fn number(value: f64, text: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Number,
            text: text.into(),
            value: Some(value),
        }
    }

    /// Creates a power token with a literal exponent.
    #[must_use]
    pub fn power_of(exponent: f64, text: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Power,
            text: text.into(),
            value: Some(exponent),
        }
    }

    /// Returns true if this token is an `Equals` confirmation.
    #[must_use]
    pub const fn is_equals(&self) -> bool {
        matches!(self.kind, TokenKind::Equals)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind.name(), self.text)
    }
}

/// Token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A resolved number word run
    Number,
    /// `plus`, `add`, `and`
    Plus,
    /// `minus`, `subtract`, `less`, `negative`
    Minus,
    /// `times`, `multiplied by`, `by`
    Multiply,
    /// `divided by`, `over`
    Divide,
    /// `squared`, `cubed`, `to the power of`
    Power,
    /// `percent`
    Percent,
    /// `square root of`
    Sqrt,
    /// `open`, `left`
    LeftParen,
    /// `close`, `right`
    RightParen,
    /// `equals`, `is`
    Equals,
}

impl TokenKind {
    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Multiply => "'*'",
            Self::Divide => "'/'",
            Self::Power => "'^'",
            Self::Percent => "'%'",
            Self::Sqrt => "sqrt",
            Self::LeftParen => "'('",
            Self::RightParen => "')'",
            Self::Equals => "'='",
        }
    }

    /// Returns true for the operator kinds.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        !matches!(
            self,
            Self::Number | Self::LeftParen | Self::RightParen | Self::Equals
        )
    }
}
