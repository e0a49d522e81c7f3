//! REPL and command line for spoken arithmetic.
//!
//! - [`Repl`]: interactive loop over a [`LineEditor`]
//! - [`run_batch`]: one transcript per line from any reader
//! - [`OutputFormat`]: text, JSON, or `MessagePack` results

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod batch;
pub mod editor;
pub mod error;
pub mod highlight;
pub mod output;
pub mod repl;

pub use batch::{BatchSummary, run_batch};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use error::{Result, RuntimeError};
pub use highlight::NarrateHighlighter;
pub use output::{OutputFormat, render_text, write_result};
pub use repl::{Action, Repl};
