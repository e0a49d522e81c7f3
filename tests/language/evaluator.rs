//! Integration tests for evaluation
//!
//! Tests arithmetic rules end to end through `calculate`.

use narrate_language::{Ast, BinaryOperator, Error, EvalError, UnaryOperator, calculate, evaluate};

fn calc(transcript: &str) -> f64 {
    calculate(transcript).unwrap_or_else(|e| panic!("{transcript:?} failed: {e}"))
}

// =============================================================================
// Arithmetic
// =============================================================================

#[test]
fn precedence_and_associativity() {
    assert_eq!(calc("two plus three times four"), 14.0);
    assert_eq!(calc("ten minus two times three"), 4.0);
    assert_eq!(calc("ten minus four minus three"), 3.0);
    assert_eq!(calc("twenty four divided by four divided by two"), 3.0);
}

#[test]
fn percent_semantics() {
    assert_eq!(calc("ten percent"), 0.1);
    assert_eq!(calc("fifty percent"), 0.5);
    assert_eq!(calc("two hundred times ten percent"), 20.0);
}

#[test]
fn percent_on_the_right_of_addition_is_relative() {
    assert_eq!(calc("twenty-five times four plus ten percent"), 110.0);
    assert_eq!(calc("two hundred minus fifty percent"), 100.0);
}

#[test]
fn powers_and_roots() {
    assert_eq!(calc("five squared"), 25.0);
    assert_eq!(calc("two cubed"), 8.0);
    assert_eq!(calc("three to the power of four"), 81.0);
    assert_eq!(calc("two to the power of ten"), 1024.0);
    assert_eq!(calc("square root of sixteen"), 4.0);
    assert_eq!(calc("square root of open nine times four close"), 6.0);
}

#[test]
fn parentheses_and_confirmation() {
    assert_eq!(
        calc("open parenthesis five plus three close parenthesis times two"),
        16.0
    );
    assert_eq!(calc("five plus three equals"), calc("five plus three"));
    assert_eq!(calc("please calculate five plus three"), 8.0);
}

#[test]
fn negation() {
    assert_eq!(calc("negative five plus three"), -2.0);
    assert_eq!(calc("minus two squared"), 4.0);
    assert_eq!(calc("three minus negative two"), 5.0);
}

// =============================================================================
// Domain errors
// =============================================================================

#[test]
fn division_by_zero() {
    assert_eq!(
        calculate("five divided by zero"),
        Err(Error::Eval(EvalError::DivisionByZero))
    );
    assert_eq!(
        calculate("one over open two minus two close"),
        Err(Error::Eval(EvalError::DivisionByZero))
    );
}

#[test]
fn negative_root() {
    assert_eq!(
        calculate("square root of negative four"),
        Err(Error::Eval(EvalError::NegativeRoot { operand: -4.0 }))
    );
}

#[test]
fn overflow_is_not_a_value() {
    assert_eq!(
        calculate("ten to the power of one thousand"),
        Err(Error::Eval(EvalError::NonFiniteResult))
    );
}

#[test]
fn evaluation_does_not_consume_the_tree() {
    let ast = Ast::binary(
        BinaryOperator::Add,
        Ast::number(1.0),
        Ast::unary(UnaryOperator::Sqrt, Ast::number(9.0)),
    );
    assert_eq!(evaluate(&ast), Ok(4.0));
    assert_eq!(evaluate(&ast), Ok(4.0));
    assert_eq!(ast.node_count(), 4);
}
