//! Integration tests for last-result-wins live transcripts

use narrate_engine::{EngineConfig, ErrorCode, LiveTranscript, NarrationEngine};

#[test]
fn dictation_settles_on_the_final_transcript() {
    let mut live = LiveTranscript::new(NarrationEngine::with_config(EngineConfig::live()));
    let partials = [
        "what is",
        "what is twelve",
        "what is twelve times",
        "what is twelve times twelve",
    ];

    for (revision, transcript) in (1u64..).zip(partials) {
        assert!(live.submit(revision, transcript).is_some());
    }

    let latest = live.latest().unwrap();
    assert_eq!(latest.value, Some(144.0));
    assert_eq!(latest.steps.len(), 2);
}

#[test]
fn late_result_for_older_revision_is_dropped() {
    let engine = NarrationEngine::new();
    let mut live = LiveTranscript::new(engine.clone());

    // Revision 2 finishes first; revision 1 arrives late.
    let newer = engine.compute("nine plus one");
    let older = engine.compute("nine plus");
    live.accept(2, newer);

    assert!(live.is_stale(1));
    assert!(live.accept(1, older).is_none());
    assert_eq!(live.latest().and_then(|r| r.value), Some(10.0));
    assert_eq!(live.revision(), Some(2));
}

#[test]
fn live_config_caps_runaway_transcripts() {
    let mut live = LiveTranscript::new(NarrationEngine::with_config(EngineConfig::live()));
    let runaway = "one plus ".repeat(200);
    let result = live.submit(1, &runaway).unwrap();
    assert_eq!(
        result.error.as_ref().map(|e| e.code),
        Some(ErrorCode::TranscriptTooLong)
    );
}
