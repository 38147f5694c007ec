use std::sync::Arc;

use tracing::debug;

use super::RelevanceSignal;
use super::error::ScoringError;
use crate::constants::{TOKEN_DISTANCE_SIGNAL, TOKEN_DISTANCE_THRESHOLD};
use crate::embedding::TextEmbedder;

/// Scores a completion by the negated RMS distance between pooled prompt and
/// completion embeddings.
///
/// Embeddings come from [`TextEmbedder::embed`], so long inputs are chunked
/// and mean-reduced before comparison. Identical texts score 0; everything
/// else is negative, with more negative meaning less related.
pub struct TokenDistanceScorer {
    encoder: Arc<dyn TextEmbedder>,
    threshold: f32,
}

impl std::fmt::Debug for TokenDistanceScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenDistanceScorer")
            .field("threshold", &self.threshold)
            .finish()
    }
}

impl TokenDistanceScorer {
    pub fn new(encoder: Arc<dyn TextEmbedder>) -> Self {
        Self {
            encoder,
            threshold: TOKEN_DISTANCE_THRESHOLD,
        }
    }

    /// Overrides the rejection cutoff.
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    fn rms_distance(prompt: &[f32], completion: &[f32]) -> Result<f32, ScoringError> {
        if prompt.len() != completion.len() {
            return Err(ScoringError::DimensionMismatch {
                prompt_dim: prompt.len(),
                completion_dim: completion.len(),
            });
        }

        if prompt.is_empty() {
            return Err(ScoringError::MissingEmbedding {
                signal: TOKEN_DISTANCE_SIGNAL,
            });
        }

        let mean_sq = prompt
            .iter()
            .zip(completion)
            .map(|(p, c)| {
                let diff = p - c;
                diff * diff
            })
            .sum::<f32>()
            / prompt.len() as f32;

        Ok(mean_sq.sqrt())
    }
}

impl RelevanceSignal for TokenDistanceScorer {
    fn name(&self) -> &'static str {
        TOKEN_DISTANCE_SIGNAL
    }

    fn threshold(&self) -> f32 {
        self.threshold
    }

    fn score(&self, prompt: &str, completion: &str) -> Result<f32, ScoringError> {
        let completion_embedding = self.encoder.embed(completion)?;
        let prompt_embedding = self.encoder.embed(prompt)?;

        let distance = Self::rms_distance(&prompt_embedding, &completion_embedding)?;

        debug!(
            signal = TOKEN_DISTANCE_SIGNAL,
            distance, "Computed token distance"
        );

        Ok(-distance)
    }
}
