//! Transcript-to-result orchestration for spoken arithmetic.
//!
//! This crate provides:
//! - [`NarrationEngine`] - Computes a transcript into a [`CalculationResult`]
//! - [`EngineConfig`] - Precision, step detail, and length limits
//! - [`LiveTranscript`] - Last-result-wins tracking for partial transcripts
//! - [`serialize`] - JSON and `MessagePack` encoding of results

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod engine;
pub mod live;
pub mod result;
pub mod serialize;

pub use config::{EngineConfig, StepDetail};
pub use engine::NarrationEngine;
pub use live::LiveTranscript;
pub use result::{CalculationResult, CalculationStep, ErrorCode, ErrorInfo};
pub use serialize::SerializeError;
