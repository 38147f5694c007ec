//! Signal test doubles for exercising the gate without encoders.

use super::RelevanceSignal;
use super::error::ScoringError;

/// Signal returning a fixed raw score regardless of input.
#[derive(Debug, Clone)]
pub struct FixedSignal {
    name: &'static str,
    raw: f32,
    threshold: f32,
}

impl FixedSignal {
    pub fn new(name: &'static str, raw: f32, threshold: f32) -> Self {
        Self {
            name,
            raw,
            threshold,
        }
    }
}

impl RelevanceSignal for FixedSignal {
    fn name(&self) -> &'static str {
        self.name
    }

    fn threshold(&self) -> f32 {
        self.threshold
    }

    fn score(&self, _prompt: &str, _completion: &str) -> Result<f32, ScoringError> {
        Ok(self.raw)
    }
}

/// Signal that always fails, for error-path tests.
#[derive(Debug, Clone)]
pub struct FailingSignal {
    name: &'static str,
}

impl FailingSignal {
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl RelevanceSignal for FailingSignal {
    fn name(&self) -> &'static str {
        self.name
    }

    fn threshold(&self) -> f32 {
        0.0
    }

    fn score(&self, _prompt: &str, _completion: &str) -> Result<f32, ScoringError> {
        Err(ScoringError::MissingEmbedding { signal: self.name })
    }
}
