//! Error type for the REPL and CLI.

use narrate_engine::SerializeError;
use thiserror::Error;

/// A runtime failure. Calculation failures are not errors here; they are
/// part of a [`CalculationResult`](narrate_engine::CalculationResult).
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The line editor failed.
    #[error("line editor error: {0}")]
    Editor(String),

    /// A result could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[from] SerializeError),

    /// Bad command-line or REPL command usage.
    #[error("{0}")]
    Usage(String),
}

impl From<rustyline::error::ReadlineError> for RuntimeError {
    fn from(error: rustyline::error::ReadlineError) -> Self {
        Self::Editor(error.to_string())
    }
}

/// Result type for this crate.
pub type Result<T> = std::result::Result<T, RuntimeError>;
