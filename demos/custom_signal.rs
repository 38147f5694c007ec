//! Extend the gate with a caller-defined signal.
//!
//! Run with: cargo run --example custom_signal

use anyhow::Result;
use relevance_gate::{RelevanceGate, RelevanceSignal, ScoringError};

/// Rejects completions shorter than a tenth of the prompt.
struct LengthRatioSignal;

impl RelevanceSignal for LengthRatioSignal {
    fn name(&self) -> &'static str {
        "length_ratio"
    }

    fn threshold(&self) -> f32 {
        0.1
    }

    fn score(&self, prompt: &str, completion: &str) -> Result<f32, ScoringError> {
        if prompt.is_empty() {
            return Ok(1.0);
        }
        Ok(completion.len() as f32 / prompt.len() as f32)
    }
}

fn main() -> Result<()> {
    let gate = RelevanceGate::from_signals(vec![Box::new(LengthRatioSignal)]);

    let prompt = "Please explain the theory of relativity in detail.";
    for completion in ["ok", "A full sentence answering the question in detail."] {
        let event = gate.score_one(prompt, completion)?;
        println!("{completion:?} -> {event}");
    }

    Ok(())
}
