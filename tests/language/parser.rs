//! Integration tests for the parser
//!
//! Tests parsing of transcripts to AST.

use narrate_language::{Ast, BinaryOperator, Found, ParseError, UnaryOperator, parse};

fn num(value: f64) -> Ast {
    Ast::number(value)
}

// =============================================================================
// Grammar
// =============================================================================

#[test]
fn parse_single_number() {
    assert_eq!(parse("forty two").unwrap(), num(42.0));
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(
        parse("two plus three times four").unwrap(),
        Ast::binary(
            BinaryOperator::Add,
            num(2.0),
            Ast::binary(BinaryOperator::Multiply, num(3.0), num(4.0))
        )
    );
}

#[test]
fn binary_operators_are_left_associative() {
    assert_eq!(
        parse("ten minus four minus three").unwrap(),
        Ast::binary(
            BinaryOperator::Subtract,
            Ast::binary(BinaryOperator::Subtract, num(10.0), num(4.0)),
            num(3.0)
        )
    );
    assert_eq!(
        parse("eight over four over two").unwrap(),
        Ast::binary(
            BinaryOperator::Divide,
            Ast::binary(BinaryOperator::Divide, num(8.0), num(4.0)),
            num(2.0)
        )
    );
}

#[test]
fn percent_applies_after_power() {
    assert_eq!(
        parse("ten squared percent").unwrap(),
        Ast::unary(
            UnaryOperator::Percent,
            Ast::binary(BinaryOperator::Power, num(10.0), num(2.0))
        )
    );
}

#[test]
fn literal_exponent_replaces_the_right_operand() {
    assert_eq!(
        parse("five squared").unwrap(),
        Ast::binary(BinaryOperator::Power, num(5.0), num(2.0))
    );
    assert_eq!(
        parse("three to the power of four").unwrap(),
        Ast::binary(BinaryOperator::Power, num(3.0), num(4.0))
    );
}

#[test]
fn prefix_operators_nest() {
    assert_eq!(
        parse("square root of negative four").unwrap(),
        Ast::unary(
            UnaryOperator::Sqrt,
            Ast::unary(UnaryOperator::Negate, num(4.0))
        )
    );
}

#[test]
fn parentheses_group() {
    assert_eq!(
        parse("open parenthesis five plus three close parenthesis times two").unwrap(),
        Ast::binary(
            BinaryOperator::Multiply,
            Ast::binary(BinaryOperator::Add, num(5.0), num(3.0)),
            num(2.0)
        )
    );
}

#[test]
fn equals_is_a_confirmation() {
    assert_eq!(
        parse("five plus three equals").unwrap(),
        parse("five plus three").unwrap()
    );
    assert_eq!(parse("what is five").unwrap(), num(5.0));
}

#[test]
fn filler_does_not_block_parsing() {
    assert_eq!(
        parse("please calculate five plus three").unwrap(),
        parse("five plus three").unwrap()
    );
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn empty_expression() {
    assert_eq!(parse(""), Err(ParseError::EmptyExpression));
    assert_eq!(parse("um hello"), Err(ParseError::EmptyExpression));
    assert_eq!(parse("equals"), Err(ParseError::EmptyExpression));
}

#[test]
fn dangling_operator_reaches_end_of_input() {
    assert_eq!(
        parse("five plus"),
        Err(ParseError::UnexpectedToken {
            found: Found::EndOfInput,
            position: 2
        })
    );
}

#[test]
fn operator_in_primary_position_is_reported() {
    assert_eq!(
        parse("times five"),
        Err(ParseError::UnexpectedToken {
            found: Found::Token("times".to_string()),
            position: 0
        })
    );
}

#[test]
fn missing_close_paren() {
    assert_eq!(
        parse("open five plus three"),
        Err(ParseError::UnclosedParenthesis { opened_at: 0 })
    );
}

#[test]
fn stray_close_paren_is_leftover() {
    assert_eq!(
        parse("five plus three close"),
        Err(ParseError::UnexpectedToken {
            found: Found::Token("close".to_string()),
            position: 3
        })
    );
}

#[test]
fn error_messages() {
    assert_eq!(
        parse("times five").unwrap_err().to_string(),
        "unexpected 'times'"
    );
    assert_eq!(
        parse("five plus").unwrap_err().to_string(),
        "unexpected end of input"
    );
}
