//! Rendering results for the terminal and for pipes.

use std::fmt::Write as _;
use std::io::Write;
use std::str::FromStr;

use narrate_engine::{CalculationResult, serialize};

use crate::error::{Result, RuntimeError};

/// How results are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Numbered step trace for people.
    #[default]
    Text,
    /// One JSON object per result.
    Json,
    /// Named `MessagePack`, one value per result.
    MsgPack,
}

impl FromStr for OutputFormat {
    type Err = RuntimeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "msgpack" => Ok(Self::MsgPack),
            other => Err(RuntimeError::Usage(format!(
                "unknown format: {other} (expected text, json, or msgpack)"
            ))),
        }
    }
}

/// Renders a result as text, optionally with ANSI colors.
#[must_use]
pub fn render_text(result: &CalculationResult, color: bool) -> String {
    if result.error.is_some() {
        return if color {
            format!("\x1b[31m{result}\x1b[0m")
        } else {
            result.to_string()
        };
    }

    let mut out = String::new();
    let last = result.steps.len().saturating_sub(1);
    for (i, step) in result.steps.iter().enumerate() {
        let line = format!("{}. {}: {}", i + 1, step.label, step.rendered_expression);
        if color && i == last {
            let _ = writeln!(out, "\x1b[1m{line}\x1b[0m");
        } else {
            let _ = writeln!(out, "{line}");
        }
    }
    out.truncate(out.trim_end().len());
    out
}

/// Writes one result in the given format.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_result<W: Write>(
    out: &mut W,
    result: &CalculationResult,
    format: OutputFormat,
    color: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", render_text(result, color))?,
        OutputFormat::Json => writeln!(out, "{}", serialize::to_json(result)?)?,
        OutputFormat::MsgPack => out.write_all(&serialize::to_bytes(result)?)?,
    }
    Ok(())
}
