//! Parser for spoken arithmetic.
//!
//! Precedence climbing over a filtered token stream, lowest binding first:
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := factor (('*' | '/') factor)*
//! factor     := power '%'?
//! power      := unary ('^' unary)?
//! unary      := ('-' | sqrt) unary | primary
//! primary    := NUMBER | '(' expression ')'
//! ```
//!
//! Binary operators are left-associative. Powers do not chain: a second `^`
//! after a complete power is a leftover token. A `^` read from "squared" or
//! "cubed" carries its exponent and does not parse one.
//!
//! Nesting is bounded: more than [`MAX_NESTING`] open parentheses and prefix
//! operators, or a tree taller than [`MAX_HEIGHT`], is
//! [`ParseError::NestingTooDeep`]. The evaluator and renderer recurse over
//! the tree, so the bound keeps them within the stack.

use crate::ast::{Ast, BinaryOperator, UnaryOperator};
use crate::error::{Found, ParseError};
use crate::token::{Token, TokenKind};
use crate::tokenizer::Tokenizer;

/// Deepest run of open parentheses and prefix operators a parse accepts.
pub const MAX_NESTING: usize = 256;

/// Tallest expression tree a parse accepts, counting long operator chains.
pub const MAX_HEIGHT: usize = 512;

/// Parser over an owned token stream.
pub struct Parser {
    /// Tokens with `Equals` confirmations removed.
    tokens: Vec<Token>,
    /// Index of the current token.
    pos: usize,
    /// Open parentheses and prefix operators above the current token.
    depth: usize,
}

impl Parser {
    /// Creates a parser over the given tokens.
    ///
    /// `Equals` tokens are dropped wherever they appear: "five plus three
    /// equals" and "what is five plus three" are confirmations, not syntax.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        let tokens = tokens.into_iter().filter(|t| !t.is_equals()).collect();
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Tokenizes a transcript and creates a parser over it.
    #[must_use]
    pub fn from_transcript(transcript: &str) -> Self {
        Self::new(Tokenizer::tokenize(transcript))
    }

    /// Parses the whole token stream as one expression.
    ///
    /// # Errors
    /// Returns [`ParseError::EmptyExpression`] for an empty stream, and the
    /// first syntax error otherwise.
    pub fn parse(&mut self) -> Result<Ast, ParseError> {
        if self.tokens.is_empty() {
            return Err(ParseError::EmptyExpression);
        }

        let Node { ast, .. } = self.parse_expression()?;

        if self.pos < self.tokens.len() {
            return Err(self.unexpected());
        }
        Ok(ast)
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|t| t.kind)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn unexpected(&self) -> ParseError {
        let found = self
            .current()
            .map_or(Found::EndOfInput, |t| Found::Token(t.text.clone()));
        ParseError::UnexpectedToken {
            found,
            position: self.pos,
        }
    }

    fn too_deep(&self) -> ParseError {
        ParseError::NestingTooDeep { position: self.pos }
    }

    /// Opens one level of parenthesis or prefix nesting.
    fn descend(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING {
            return Err(self.too_deep());
        }
        self.depth += 1;
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }

    fn binary(&self, op: BinaryOperator, left: Node, right: Node) -> Result<Node, ParseError> {
        let height = left.height.max(right.height) + 1;
        if height > MAX_HEIGHT {
            return Err(self.too_deep());
        }
        Ok(Node {
            ast: Ast::binary(op, left.ast, right.ast),
            height,
        })
    }

    fn unary(&self, op: UnaryOperator, operand: Node) -> Result<Node, ParseError> {
        let height = operand.height + 1;
        if height > MAX_HEIGHT {
            return Err(self.too_deep());
        }
        Ok(Node {
            ast: Ast::unary(op, operand.ast),
            height,
        })
    }

    fn parse_expression(&mut self) -> Result<Node, ParseError> {
        let mut left = self.parse_term()?;

        loop {
            let op = match self.current_kind() {
                Some(TokenKind::Plus) => BinaryOperator::Add,
                Some(TokenKind::Minus) => BinaryOperator::Subtract,
                _ => break,
            };
            self.advance();
            let right = self.parse_term()?;
            left = self.binary(op, left, right)?;
        }

        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Node, ParseError> {
        let mut left = self.parse_factor()?;

        loop {
            let op = match self.current_kind() {
                Some(TokenKind::Multiply) => BinaryOperator::Multiply,
                Some(TokenKind::Divide) => BinaryOperator::Divide,
                _ => break,
            };
            self.advance();
            let right = self.parse_factor()?;
            left = self.binary(op, left, right)?;
        }

        Ok(left)
    }

    fn parse_factor(&mut self) -> Result<Node, ParseError> {
        let base = self.parse_power()?;

        if self.current_kind() == Some(TokenKind::Percent) {
            self.advance();
            return self.unary(UnaryOperator::Percent, base);
        }
        Ok(base)
    }

    fn parse_power(&mut self) -> Result<Node, ParseError> {
        let base = self.parse_unary()?;

        let Some(token) = self.current().filter(|t| t.kind == TokenKind::Power) else {
            return Ok(base);
        };
        let literal = token.value;
        self.advance();

        let exponent = match literal {
            Some(exponent) => Node::leaf(exponent),
            None => self.parse_unary()?,
        };
        self.binary(BinaryOperator::Power, base, exponent)
    }

    fn parse_unary(&mut self) -> Result<Node, ParseError> {
        let op = match self.current_kind() {
            Some(TokenKind::Minus) => UnaryOperator::Negate,
            Some(TokenKind::Sqrt) => UnaryOperator::Sqrt,
            _ => return self.parse_primary(),
        };
        self.descend()?;
        self.advance();
        let operand = self.parse_unary()?;
        self.ascend();
        self.unary(op, operand)
    }

    fn parse_primary(&mut self) -> Result<Node, ParseError> {
        match self.current() {
            Some(Token {
                kind: TokenKind::Number,
                value: Some(value),
                ..
            }) => {
                let value = *value;
                self.advance();
                Ok(Node::leaf(value))
            }
            Some(Token {
                kind: TokenKind::LeftParen,
                ..
            }) => {
                let opened_at = self.pos;
                self.descend()?;
                self.advance();
                let inner = self.parse_expression()?;
                if self.current_kind() != Some(TokenKind::RightParen) {
                    return Err(ParseError::UnclosedParenthesis { opened_at });
                }
                self.advance();
                self.ascend();
                Ok(inner)
            }
            _ => Err(self.unexpected()),
        }
    }
}

/// A parsed subtree and the height of its tree.
struct Node {
    ast: Ast,
    height: usize,
}

impl Node {
    fn leaf(value: f64) -> Self {
        Self {
            ast: Ast::number(value),
            height: 1,
        }
    }
}

/// Parses a transcript into an AST.
///
/// # Errors
/// Returns the first [`ParseError`] encountered.
pub fn parse(transcript: &str) -> Result<Ast, ParseError> {
    Parser::from_transcript(transcript).parse()
}

/// Parses an already tokenized stream into an AST.
///
/// # Errors
/// Returns the first [`ParseError`] encountered.
pub fn parse_tokens(tokens: Vec<Token>) -> Result<Ast, ParseError> {
    Parser::new(tokens).parse()
}
