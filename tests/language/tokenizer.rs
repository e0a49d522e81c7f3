//! Integration tests for the tokenizer
//!
//! Tests normalization, operator phrases, and number runs.

use narrate_language::{Token, TokenKind, Tokenizer};
use proptest::prelude::*;

fn kinds(transcript: &str) -> Vec<TokenKind> {
    Tokenizer::tokenize(transcript)
        .iter()
        .map(|t| t.kind)
        .collect()
}

fn texts(transcript: &str) -> Vec<String> {
    Tokenizer::tokenize(transcript)
        .into_iter()
        .map(|t| t.text)
        .collect()
}

// =============================================================================
// Keyword table
// =============================================================================

#[test]
fn addition_keywords() {
    for word in ["plus", "add", "and"] {
        assert_eq!(
            kinds(&format!("one {word} two")),
            vec![TokenKind::Number, TokenKind::Plus, TokenKind::Number],
            "{word}"
        );
    }
}

#[test]
fn subtraction_keywords() {
    for word in ["minus", "subtract", "less"] {
        assert_eq!(
            kinds(&format!("one {word} two")),
            vec![TokenKind::Number, TokenKind::Minus, TokenKind::Number],
            "{word}"
        );
    }
}

#[test]
fn multiplication_and_division_keywords() {
    assert_eq!(kinds("two times three")[1], TokenKind::Multiply);
    assert_eq!(kinds("two by three")[1], TokenKind::Multiply);
    assert_eq!(kinds("two multiplied three")[1], TokenKind::Multiply);
    assert_eq!(kinds("six divided three")[1], TokenKind::Divide);
    assert_eq!(kinds("six over three")[1], TokenKind::Divide);
}

#[test]
fn equals_keywords() {
    assert_eq!(kinds("five equals"), vec![TokenKind::Number, TokenKind::Equals]);
    assert_eq!(kinds("what is five"), vec![TokenKind::Equals, TokenKind::Number]);
}

#[test]
fn parenthesis_keywords() {
    assert_eq!(kinds("left two right"), vec![
        TokenKind::LeftParen,
        TokenKind::Number,
        TokenKind::RightParen
    ]);
    assert_eq!(texts("open bracket two close paren"), vec![
        "open bracket",
        "two",
        "close paren"
    ]);
}

// =============================================================================
// Phrases and spans
// =============================================================================

#[test]
fn token_text_is_the_matched_span() {
    assert_eq!(texts("twenty-five times four plus ten percent"), vec![
        "twenty five",
        "times",
        "four",
        "plus",
        "ten",
        "percent"
    ]);
}

#[test]
fn power_phrase_has_no_literal_exponent() {
    let tokens = Tokenizer::tokenize("two to the power of ten");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].kind, TokenKind::Power);
    assert_eq!(tokens[1].value, None);
    assert_eq!(tokens[2].value, Some(10.0));
}

#[test]
fn split_square_root_phrase() {
    let tokens = Tokenizer::tokenize("square the root of nine");
    assert_eq!(tokens[0].kind, TokenKind::Sqrt);
    assert_eq!(tokens[0].text, "square the root of");
}

#[test]
fn symbols_become_operators() {
    assert_eq!(kinds("3 × 4 ÷ 2"), vec![
        TokenKind::Number,
        TokenKind::Multiply,
        TokenKind::Number,
        TokenKind::Divide,
        TokenKind::Number
    ]);
    assert_eq!(kinds("2^8"), vec![
        TokenKind::Number,
        TokenKind::Power,
        TokenKind::Number
    ]);
}

#[test]
fn digit_grouping_and_decimals() {
    let tokens = Tokenizer::tokenize("1,250.75 minus 0.75");
    assert_eq!(tokens[0].value, Some(1250.75));
    assert_eq!(tokens[2].value, Some(0.75));
}

#[test]
fn mixed_digits_and_words() {
    let tokens = Tokenizer::tokenize("3 hundred");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].value, Some(300.0));
}

#[test]
fn filler_only_is_empty() {
    assert!(Tokenizer::tokenize("so um what do you think").is_empty());
    assert!(Tokenizer::tokenize("   ").is_empty());
    assert!(Tokenizer::tokenize("?!...").is_empty());
}

#[test]
fn token_display_names_the_kind() {
    let token = Token::number(5.0, "five");
    assert_eq!(token.to_string(), "number(\"five\")");
}

proptest! {
    #[test]
    fn tokenize_never_panics(s in "\\PC*") {
        let _ = Tokenizer::tokenize(&s);
    }

    #[test]
    fn number_tokens_carry_values(s in "[a-z0-9 .,%+*/^-]{0,60}") {
        for token in Tokenizer::tokenize(&s) {
            if token.kind == TokenKind::Number {
                prop_assert!(token.value.is_some());
            }
            prop_assert!(!token.text.is_empty());
        }
    }
}
