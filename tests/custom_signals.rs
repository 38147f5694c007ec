//! Gate composition with caller-provided signals through the public API.

use relevance_gate::{
    ACCEPTED_REWARD, FixedSignal, REJECTED_REWARD, RelevanceGate, RelevanceSignal, ScoringError,
    TOKEN_DISTANCE_SIGNAL, TOKEN_DISTANCE_THRESHOLD,
};

/// Accepts only completions at least as long as the prompt.
struct LengthSignal {
    threshold: f32,
}

impl RelevanceSignal for LengthSignal {
    fn name(&self) -> &'static str {
        "length_ratio"
    }

    fn threshold(&self) -> f32 {
        self.threshold
    }

    fn score(&self, prompt: &str, completion: &str) -> Result<f32, ScoringError> {
        if prompt.is_empty() {
            return Ok(1.0);
        }
        Ok(completion.len() as f32 / prompt.len() as f32)
    }
}

#[test]
fn test_custom_signal_gates_reward() {
    let gate = RelevanceGate::from_signals(vec![Box::new(LengthSignal { threshold: 1.0 })]);

    let accepted = gate
        .score_one("hi", "a longer completion")
        .expect("Scoring should succeed");
    assert_eq!(accepted.reward, ACCEPTED_REWARD);

    let rejected = gate
        .score_one("a much longer prompt", "hi")
        .expect("Scoring should succeed");
    assert_eq!(rejected.reward, REJECTED_REWARD);
}

#[test]
fn test_custom_signal_scores_have_no_reserved_slot() {
    let gate = RelevanceGate::from_signals(vec![Box::new(LengthSignal { threshold: 0.0 })]);

    let event = gate
        .score_one("hi", "completion")
        .expect("Scoring should succeed");
    assert_eq!(event.bert_score, None);
    assert_eq!(event.mpnet_score, None);
}

#[test]
fn test_mixed_builtin_and_custom_signals() {
    let gate = RelevanceGate::from_signals(vec![
        Box::new(FixedSignal::new(
            TOKEN_DISTANCE_SIGNAL,
            -0.01,
            TOKEN_DISTANCE_THRESHOLD,
        )),
        Box::new(LengthSignal { threshold: 0.0 }),
    ]);

    let event = gate
        .score_one("prompt", "completion")
        .expect("Scoring should succeed");
    assert_eq!(event.reward, ACCEPTED_REWARD);
    assert_eq!(event.bert_score, Some(-0.01));
}

#[test]
fn test_signal_order_is_preserved() {
    let gate = RelevanceGate::from_signals(vec![
        Box::new(FixedSignal::new("first", 1.0, 0.0)),
        Box::new(LengthSignal { threshold: 0.0 }),
    ]);

    let names: Vec<_> = gate.signals().iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["first", "length_ratio"]);
}
