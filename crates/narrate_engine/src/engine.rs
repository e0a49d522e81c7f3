//! The narration engine: transcript in, [`CalculationResult`] out.
//!
//! ```text
//! transcript ─▶ Tokenizer ─▶ Parser ─▶ Ast ─▶ evaluate ─▶ value
//!                                       │
//!                                       └─▶ Renderer ─▶ expression + steps
//! ```
//!
//! The engine holds only its configuration. Every call to
//! [`NarrationEngine::compute`] is independent, so one engine may be shared
//! across threads and called with successive partial transcripts.

use log::{debug, trace};
use narrate_language::{
    Ast, BinaryOperator, Error, Renderer, Tokenizer, UnaryOperator, evaluate, parse_tokens,
};

use crate::config::{EngineConfig, StepDetail};
use crate::result::{CalculationResult, CalculationStep, ErrorInfo};

/// Turns transcripts into calculation results.
#[derive(Clone, Debug, Default)]
pub struct NarrationEngine {
    config: EngineConfig,
}

impl NarrationEngine {
    /// Creates an engine with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with the given configuration.
    #[must_use]
    pub const fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Computes a transcript.
    ///
    /// Never fails: parse and evaluation errors come back in the result's
    /// `error` field with no expression, value, or steps.
    #[must_use]
    pub fn compute(&self, transcript: &str) -> CalculationResult {
        if let Some(limit) = self.config.max_transcript_len {
            let length = transcript.chars().count();
            if length > limit {
                debug!("transcript rejected: {length} characters exceeds limit {limit}");
                return CalculationResult::failure(
                    transcript,
                    ErrorInfo::transcript_too_long(length, limit),
                );
            }
        }

        let tokens = Tokenizer::tokenize(transcript);
        trace!("tokens for {transcript:?}: {tokens:?}");

        let ast = match parse_tokens(tokens) {
            Ok(ast) => ast,
            Err(e) => return Self::fail(transcript, &Error::from(e)),
        };

        let value = match evaluate(&ast) {
            Ok(value) => value,
            Err(e) => return Self::fail(transcript, &Error::from(e)),
        };

        let renderer = Renderer::new(self.config.precision);
        let expression = renderer.render(&ast);
        trace!("rendered {transcript:?} as {expression:?}");

        let steps = self.steps(&ast, &expression, value, &renderer);
        debug!("computed {transcript:?} = {value}");
        CalculationResult::success(transcript, expression, value, steps)
    }

    fn fail(transcript: &str, error: &Error) -> CalculationResult {
        debug!("failed to compute {transcript:?}: {error}");
        CalculationResult::failure(transcript, ErrorInfo::from(error))
    }

    /// Builds the step trace: the expression, a reduction of the outermost
    /// binary operator when it says something new, and the result.
    fn steps(
        &self,
        ast: &Ast,
        expression: &str,
        value: f64,
        renderer: &Renderer,
    ) -> Vec<CalculationStep> {
        let mut steps = vec![CalculationStep::new("Expression", expression)];

        if self.config.step_detail == StepDetail::Standard {
            if let Some(reduced) = reduce_outermost(ast, renderer) {
                if reduced != expression {
                    steps.push(CalculationStep::new("Reduce", reduced));
                }
            }
        }

        steps.push(CalculationStep::new("Result", renderer.number(value)));
        steps
    }
}

/// Renders the outermost binary operator with both operands reduced to
/// values, e.g. `25 * 4 + 10%` as `100 + 10%`.
fn reduce_outermost(ast: &Ast, renderer: &Renderer) -> Option<String> {
    let Ast::Binary { op, left, right } = ast else {
        return None;
    };

    let lhs = evaluate(left).ok()?;
    let rhs = match (op, right.as_ref()) {
        (
            BinaryOperator::Add | BinaryOperator::Subtract,
            Ast::Unary {
                op: UnaryOperator::Percent,
                operand,
            },
        ) => format!("{}%", operand_text(evaluate(operand).ok()?, renderer)),
        _ => operand_text(evaluate(right).ok()?, renderer),
    };

    let lhs = if *op == BinaryOperator::Power {
        operand_text(lhs, renderer)
    } else {
        renderer.number(lhs)
    };

    Some(match op {
        BinaryOperator::Power => format!("{lhs}^{rhs}"),
        _ => format!("{lhs} {} {rhs}", op.symbol()),
    })
}

/// A reduced operand, parenthesized when negative.
fn operand_text(value: f64, renderer: &Renderer) -> String {
    let text = renderer.number(value);
    if text.starts_with('-') {
        format!("({text})")
    } else {
        text
    }
}
