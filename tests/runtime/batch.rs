//! Integration tests for batch mode

use narrate_engine::{EngineConfig, NarrationEngine, serialize};
use narrate_runtime::{BatchSummary, OutputFormat, run_batch};

const TRANSCRIPTS: &str = "\
two plus three times four
ten minus two times three

five divided by zero
open parenthesis five plus three close parenthesis times two
";

fn batch(engine: &NarrationEngine, format: OutputFormat) -> (BatchSummary, Vec<u8>) {
    let mut out = Vec::new();
    let summary = run_batch(engine, TRANSCRIPTS.as_bytes(), &mut out, format).unwrap();
    (summary, out)
}

#[test]
fn text_batch() {
    let engine = NarrationEngine::with_config(EngineConfig::summary());
    let (summary, out) = batch(&engine, OutputFormat::Text);

    assert_eq!(summary.succeeded, 3);
    assert_eq!(summary.failed, 1);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "1. Expression: 2 + 3 * 4\n2. Result: 14\n\
         1. Expression: 10 - 2 * 3\n2. Result: 4\n\
         Error: division by zero\n\
         1. Expression: (5 + 3) * 2\n2. Result: 16\n"
    );
}

#[test]
fn json_batch_decodes_line_by_line() {
    let (_, out) = batch(&NarrationEngine::new(), OutputFormat::Json);
    let text = String::from_utf8(out).unwrap();

    let values: Vec<Option<f64>> = text
        .lines()
        .map(|line| serialize::from_json(line).unwrap().value)
        .collect();
    assert_eq!(values, vec![Some(14.0), Some(4.0), None, Some(16.0)]);
}

#[test]
fn msgpack_batch_writes_bytes() {
    let (summary, out) = batch(&NarrationEngine::new(), OutputFormat::MsgPack);
    assert_eq!(summary.succeeded + summary.failed, 4);
    assert!(!out.is_empty());
}

#[test]
fn empty_input() {
    let mut out = Vec::new();
    let summary = run_batch(
        &NarrationEngine::new(),
        "".as_bytes(),
        &mut out,
        OutputFormat::Text,
    )
    .unwrap();
    assert_eq!(summary, BatchSummary::default());
    assert!(out.is_empty());
}
