//! Line editing for the REPL.
//!
//! The REPL reads through the [`LineEditor`] trait so tests can script
//! input; [`RustylineEditor`] is the terminal implementation.

use std::borrow::Cow;

use narrate_language::NumberWordResolver;
use narrate_language::tokenizer::OPERATOR_WORDS;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};

use crate::error::Result;
use crate::highlight::NarrateHighlighter;

/// REPL commands offered for completion.
pub const COMMANDS: [&str; 5] = [":help", ":steps", ":format", ":precision", ":quit"];

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was read.
    Line(String),
    /// Ctrl+C.
    Interrupted,
    /// Ctrl+D.
    Eof,
}

/// Abstraction over line editing.
pub trait LineEditor {
    /// Reads a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Adds a line to history.
    fn add_history(&mut self, line: &str);
}

#[derive(Helper, Completer, Hinter, Validator)]
struct NarrateHelper {
    #[rustyline(Completer)]
    completer: WordCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    highlighter: NarrateHighlighter,
}

impl Highlighter for NarrateHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completes number words, operator words, and REPL commands.
struct WordCompleter {
    words: Vec<&'static str>,
}

impl WordCompleter {
    fn new() -> Self {
        let mut words: Vec<&'static str> = NumberWordResolver::vocabulary()
            .chain(OPERATOR_WORDS)
            .chain(["the", "of", "to"])
            .collect();
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let start = line[..pos]
            .rfind(|c: char| c.is_whitespace() || c == '-')
            .map_or(0, |i| i + 1);
        let word = &line[start..pos];

        let pool: &[&str] = if start == 0 && word.starts_with(':') {
            &COMMANDS
        } else {
            &self.words
        };

        let matches = pool
            .iter()
            .filter(|w| !word.is_empty() && w.starts_with(word))
            .map(|w| Pair {
                display: (*w).to_string(),
                replacement: (*w).to_string(),
            })
            .collect();
        (start, matches)
    }
}

impl Completer for WordCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}

/// Line editor backed by rustyline.
pub struct RustylineEditor {
    editor: Editor<NarrateHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a rustyline editor with completion, hints, and highlighting.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline fails to initialize.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)?
            .build();

        let helper = NarrateHelper {
            completer: WordCompleter::new(),
            hinter: HistoryHinter::new(),
            highlighter: NarrateHighlighter::new(),
        };

        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(e.into()),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}
