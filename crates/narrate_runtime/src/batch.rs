//! Batch mode: one transcript per input line.

use std::io::{BufRead, Write};

use log::info;
use narrate_engine::NarrationEngine;

use crate::error::Result;
use crate::output::{OutputFormat, write_result};

/// Counts from a batch run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Transcripts that produced a value.
    pub succeeded: usize,
    /// Transcripts that produced an error.
    pub failed: usize,
}

/// Computes every non-blank line of `input` and writes each result.
///
/// # Errors
///
/// Returns an error if reading, serializing, or writing fails.
pub fn run_batch<R: BufRead, W: Write>(
    engine: &NarrationEngine,
    input: R,
    out: &mut W,
    format: OutputFormat,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let result = engine.compute(&line);
        if result.is_success() {
            summary.succeeded += 1;
        } else {
            summary.failed += 1;
        }
        write_result(out, &result, format, false)?;
    }

    out.flush()?;
    info!(
        "batch finished: {} succeeded, {} failed",
        summary.succeeded, summary.failed
    );
    Ok(summary)
}
