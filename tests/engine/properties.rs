//! Property tests for the result shape

use narrate_engine::NarrationEngine;
use proptest::prelude::*;

const WORDS: [&str; 24] = [
    "one", "two", "twelve", "forty", "hundred", "thousand", "point", "five", "and", "plus",
    "minus", "times", "divided", "by", "over", "squared", "to", "the", "power", "of", "percent",
    "open", "close", "zero",
];

fn transcript() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS.to_vec()), 0..14).prop_map(|w| w.join(" "))
}

proptest! {
    #[test]
    fn exactly_one_of_value_or_error(t in transcript()) {
        let result = NarrationEngine::new().compute(&t);
        prop_assert!(result.value.is_some() != result.error.is_some());
    }

    #[test]
    fn success_is_fully_populated(t in transcript()) {
        let result = NarrationEngine::new().compute(&t);
        if let Some(value) = result.value {
            prop_assert!(value.is_finite());
            prop_assert!(result.expression.is_some());
            prop_assert!(!result.steps.is_empty());
            prop_assert_eq!(result.steps[0].label.as_str(), "Expression");
        } else {
            prop_assert!(result.expression.is_none());
            prop_assert!(result.steps.is_empty());
        }
    }

    #[test]
    fn compute_is_idempotent(t in transcript()) {
        let engine = NarrationEngine::new();
        prop_assert_eq!(engine.compute(&t), engine.compute(&t));
    }

    #[test]
    fn compute_never_panics_on_garbage(t in "\\PC{0,80}") {
        let _ = NarrationEngine::new().compute(&t);
    }
}
