//! Last-result-wins tracking for partial transcripts.
//!
//! A streaming recognizer emits growing partial transcripts, each tagged
//! with a revision. Results for older revisions are dropped, even when they
//! finish after a newer one.

use log::trace;

use crate::engine::NarrationEngine;
use crate::result::CalculationResult;

/// The latest result for a stream of partial transcripts.
#[derive(Clone, Debug, Default)]
pub struct LiveTranscript {
    engine: NarrationEngine,
    revision: Option<u64>,
    latest: Option<CalculationResult>,
}

impl LiveTranscript {
    /// Creates a tracker that computes with the given engine.
    #[must_use]
    pub const fn new(engine: NarrationEngine) -> Self {
        Self {
            engine,
            revision: None,
            latest: None,
        }
    }

    /// Computes a partial transcript and keeps the result if `revision` is
    /// newer than the latest accepted one.
    ///
    /// Returns the new latest result, or `None` if the revision was stale
    /// (in which case nothing is computed).
    pub fn submit(&mut self, revision: u64, transcript: &str) -> Option<&CalculationResult> {
        if self.is_stale(revision) {
            trace!("skipping stale revision {revision}");
            return None;
        }
        let result = self.engine.compute(transcript);
        self.accept(revision, result)
    }

    /// Keeps a result computed elsewhere if `revision` is newer than the
    /// latest accepted one.
    ///
    /// Returns the new latest result, or `None` if the result was dropped.
    pub fn accept(
        &mut self,
        revision: u64,
        result: CalculationResult,
    ) -> Option<&CalculationResult> {
        if self.is_stale(revision) {
            trace!("dropping stale result for revision {revision}");
            return None;
        }
        self.revision = Some(revision);
        self.latest = Some(result);
        self.latest.as_ref()
    }

    /// Returns true if a result for `revision` would be dropped.
    #[must_use]
    pub fn is_stale(&self, revision: u64) -> bool {
        self.revision.is_some_and(|latest| revision <= latest)
    }

    /// The latest accepted result.
    #[must_use]
    pub const fn latest(&self) -> Option<&CalculationResult> {
        self.latest.as_ref()
    }

    /// The revision of the latest accepted result.
    #[must_use]
    pub const fn revision(&self) -> Option<u64> {
        self.revision
    }

    /// Returns the engine used by [`submit`](Self::submit).
    #[must_use]
    pub const fn engine(&self) -> &NarrationEngine {
        &self.engine
    }

    /// Forgets the latest result, e.g. when a new utterance starts.
    pub fn reset(&mut self) {
        self.revision = None;
        self.latest = None;
    }
}
