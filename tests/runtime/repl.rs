//! Integration tests for the REPL through a scripted editor

use narrate_engine::{EngineConfig, StepDetail};
use narrate_runtime::{Action, LineEditor, OutputFormat, ReadResult, Repl, Result};

struct Script {
    lines: std::vec::IntoIter<&'static str>,
}

impl Script {
    fn new(lines: Vec<&'static str>) -> Self {
        Self {
            lines: lines.into_iter(),
        }
    }
}

impl LineEditor for Script {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self
            .lines
            .next()
            .map_or(ReadResult::Eof, |line| ReadResult::Line(line.to_string())))
    }

    fn add_history(&mut self, _line: &str) {}
}

fn repl() -> Repl<Script> {
    Repl::with_editor(Script::new(vec![]))
        .without_banner()
        .without_color()
}

fn run(repl: &mut Repl<Script>, lines: &[&str]) -> String {
    let mut out = Vec::new();
    for line in lines {
        if repl.execute(line, &mut out).unwrap() == Action::Quit {
            break;
        }
    }
    String::from_utf8(out).unwrap()
}

#[test]
fn session_with_commands() {
    let mut repl = repl();
    let out = run(&mut repl, &[
        "two cubed",
        ":steps",
        "twenty-five times four plus ten percent",
        ":format json",
        "ten percent",
        ":quit",
        "never computed",
    ]);

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, vec![
        "1. Expression: 2^3",
        "2. Result: 8",
        "steps: summary",
        "1. Expression: 25 * 4 + 10%",
        "2. Result: 110",
        "format: json",
        r#"{"transcript":"ten percent","expression":"10%","value":0.1,"steps":[{"label":"Expression","rendered_expression":"10%"},{"label":"Result","rendered_expression":"0.1"}]}"#,
    ]);
}

#[test]
fn configured_repl() {
    let mut repl = repl()
        .with_config(EngineConfig::default().with_precision(4))
        .with_format(OutputFormat::Text);
    assert_eq!(repl.engine().config().step_detail, StepDetail::Standard);

    let out = run(&mut repl, &["two divided by three"]);
    assert!(out.ends_with("Result: 0.6667\n"));
}

#[test]
fn run_reads_until_end_of_input() {
    let mut repl = Repl::with_editor(Script::new(vec!["one plus one", "", ":help"]))
        .without_banner()
        .without_color();
    assert!(repl.run().is_ok());
}
