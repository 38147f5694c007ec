//! Score a handful of completions against one prompt with stub encoders.
//!
//! Run with: RUST_LOG=debug cargo run --example score_completions

use anyhow::Result;
use relevance_gate::{RelevanceGate, RelevanceGateConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let gate = RelevanceGate::load(RelevanceGateConfig::stub())?;

    let prompt = "What causes ocean tides?";
    let completions = [
        "What causes ocean tides?",
        "Tides come from the gravitational pull of the moon and sun.",
        "I had pasta for lunch today.",
    ];

    let events = gate.score_many(prompt, &completions, "demo")?;

    println!("prompt: {prompt}");
    for (completion, event) in completions.iter().zip(&events) {
        println!("  {completion:?} -> {event}");
    }

    Ok(())
}
