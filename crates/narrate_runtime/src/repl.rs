//! The interactive REPL.

use std::io::{self, Write};

use log::debug;
use narrate_engine::{EngineConfig, NarrationEngine, StepDetail};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::error::{Result, RuntimeError};
use crate::output::{OutputFormat, write_result};

/// What the loop does after a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Read another line.
    Continue,
    /// Leave the REPL.
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    editor: E,
    engine: NarrationEngine,
    format: OutputFormat,
    color: bool,
    show_banner: bool,
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        Ok(Self::with_editor(RustylineEditor::new()?))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a REPL that reads from the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            engine: NarrationEngine::new(),
            format: OutputFormat::Text,
            color: true,
            show_banner: true,
            prompt: "calc> ".to_string(),
        }
    }

    /// Uses the given engine configuration.
    #[must_use]
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.engine = NarrationEngine::with_config(config);
        self
    }

    /// Sets the output format. `MsgPack` is rejected by [`Repl::execute`]'s
    /// `:format` command but may be set here for piped sessions.
    #[must_use]
    pub const fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Disables ANSI colors in text output.
    #[must_use]
    pub const fn without_color(mut self) -> Self {
        self.color = false;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns the engine.
    #[must_use]
    pub const fn engine(&self) -> &NarrationEngine {
        &self.engine
    }

    /// Returns the current output format.
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.format
    }

    /// Runs the loop until `:quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fails.
    pub fn run(&mut self) -> Result<()> {
        let stdout = io::stdout();

        if self.show_banner {
            print_banner();
        }

        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };

            if line.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&line);

            let mut out = stdout.lock();
            match self.execute(&line, &mut out) {
                Ok(Action::Continue) => {}
                Ok(Action::Quit) => break,
                Err(e) => eprintln!("\x1b[31mError: {e}\x1b[0m"),
            }
            out.flush()?;
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Handles one line: a `:command` or a transcript.
    ///
    /// # Errors
    ///
    /// Returns an error for a malformed command or a failed write.
    /// Calculation failures are written as results, not returned.
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Action> {
        let line = line.trim();
        if let Some(command) = line.strip_prefix(':') {
            return self.command(command, out);
        }

        let result = self.engine.compute(line);
        write_result(out, &result, self.format, self.color)?;
        Ok(Action::Continue)
    }

    fn command<W: Write>(&mut self, command: &str, out: &mut W) -> Result<Action> {
        let mut parts = command.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let arg = parts.next();
        debug!("repl command {name:?} {arg:?}");

        match (name, arg) {
            ("q" | "quit" | "exit", None) => return Ok(Action::Quit),
            ("h" | "help", None) => writeln!(out, "{HELP}")?,
            ("steps", None) => {
                let detail = match self.engine.config().step_detail {
                    StepDetail::Standard => StepDetail::Summary,
                    StepDetail::Summary => StepDetail::Standard,
                };
                self.reconfigure(|config| config.with_step_detail(detail));
                writeln!(out, "steps: {}", detail_name(detail))?;
            }
            ("format", Some(arg)) => {
                let format: OutputFormat = arg.parse()?;
                if format == OutputFormat::MsgPack {
                    return Err(RuntimeError::Usage(
                        "msgpack output is only available from the command line".to_string(),
                    ));
                }
                self.format = format;
                writeln!(out, "format: {arg}")?;
            }
            ("precision", Some(arg)) => {
                let precision = arg
                    .parse()
                    .map_err(|_| RuntimeError::Usage(format!("invalid precision: {arg}")))?;
                self.reconfigure(|config| config.with_precision(precision));
                writeln!(out, "precision: {precision}")?;
            }
            _ => {
                return Err(RuntimeError::Usage(format!(
                    "unknown command :{command} (try :help)"
                )));
            }
        }
        Ok(Action::Continue)
    }

    fn reconfigure(&mut self, change: impl FnOnce(EngineConfig) -> EngineConfig) {
        let config = change(self.engine.config().clone());
        self.engine = NarrationEngine::with_config(config);
    }
}

const fn detail_name(detail: StepDetail) -> &'static str {
    match detail {
        StepDetail::Summary => "summary",
        StepDetail::Standard => "standard",
    }
}

const HELP: &str = "Say a calculation, e.g. \"twenty five times four plus ten percent\".

Commands:
  :help             Show this help
  :steps            Toggle between summary and standard step traces
  :format text|json Choose the output format
  :precision N      Render at most N fractional digits
  :quit             Exit (Ctrl+D also works)";

fn print_banner() {
    println!("\x1b[1mnarrate\x1b[0m {}", env!("CARGO_PKG_VERSION"));
    println!("Type :help for commands, Ctrl+D to exit.\n");
}
