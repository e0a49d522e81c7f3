//! Integration tests for result serialization

use narrate_engine::{NarrationEngine, serialize};

#[test]
fn success_json_has_the_four_fields() {
    let result = NarrationEngine::new().compute("twenty-five times four plus ten percent");
    let json = serialize::to_json_pretty(&result).unwrap();

    assert!(json.contains("\"transcript\""));
    assert!(json.contains("\"expression\": \"25 * 4 + 10%\""));
    assert!(json.contains("\"value\": 110.0"));
    assert!(json.contains("\"rendered_expression\": \"110\""));
    assert!(!json.contains("\"error\""));
}

#[test]
fn failure_json_has_transcript_and_error_only() {
    let result = NarrationEngine::new().compute("five divided by zero");
    let json = serialize::to_json(&result).unwrap();

    assert_eq!(
        json,
        r#"{"transcript":"five divided by zero","error":{"code":"division_by_zero","message":"division by zero"}}"#
    );
}

#[test]
fn json_and_msgpack_round_trip() {
    let engine = NarrationEngine::new();
    for transcript in ["two point five plus one", "open", "ten percent"] {
        let result = engine.compute(transcript);
        let json = serialize::to_json(&result).unwrap();
        assert_eq!(serialize::from_json(&json).unwrap(), result);
        let bytes = serialize::to_bytes(&result).unwrap();
        assert_eq!(serialize::from_bytes(&bytes).unwrap(), result);
    }
}

#[test]
fn malformed_input_is_an_error() {
    assert!(serialize::from_json("{\"transcript\": 5}").is_err());
    assert!(serialize::from_bytes(&[0xc1]).is_err());
}
