//! Configuration for the narration engine.

use narrate_language::DEFAULT_PRECISION;

/// How much of the calculation the step trace shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StepDetail {
    /// The expression and the final value.
    Summary,
    /// The expression, one reduction of the outermost operator, and the
    /// final value.
    #[default]
    Standard,
}

/// Configuration for [`NarrationEngine`](crate::NarrationEngine).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum fractional digits when rendering numbers.
    pub precision: usize,

    /// Step trace detail.
    pub step_detail: StepDetail,

    /// Longest transcript, in characters, the engine will look at.
    /// `None` means no limit.
    pub max_transcript_len: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            step_detail: StepDetail::Standard,
            max_transcript_len: None,
        }
    }
}

impl EngineConfig {
    /// Creates a configuration with summary step traces.
    #[must_use]
    pub fn summary() -> Self {
        Self {
            step_detail: StepDetail::Summary,
            ..Self::default()
        }
    }

    /// Creates a configuration suited to live partial transcripts: summary
    /// traces and a length cap so runaway dictation stays cheap.
    #[must_use]
    pub fn live() -> Self {
        Self {
            step_detail: StepDetail::Summary,
            max_transcript_len: Some(1000),
            ..Self::default()
        }
    }

    /// Builder method to set number precision.
    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder method to set step trace detail.
    #[must_use]
    pub fn with_step_detail(mut self, detail: StepDetail) -> Self {
        self.step_detail = detail;
        self
    }

    /// Builder method to set the transcript length limit.
    #[must_use]
    pub fn with_max_transcript_len(mut self, limit: Option<usize>) -> Self {
        self.max_transcript_len = limit;
        self
    }
}
