//! Narrate - spoken arithmetic
//!
//! This crate re-exports all layers of the Narrate system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: narrate_runtime   - REPL, CLI, output formats
//! Layer 1: narrate_engine    - Orchestration, step traces, results, serialization
//! Layer 0: narrate_language  - Number words, tokenizer, parser, evaluator, rendering
//! ```

pub use narrate_engine as engine;
pub use narrate_language as language;
pub use narrate_runtime as runtime;

pub use narrate_engine::{CalculationResult, EngineConfig, NarrationEngine};
