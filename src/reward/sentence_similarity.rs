use std::sync::Arc;

use tracing::debug;

use super::RelevanceSignal;
use super::error::ScoringError;
use crate::constants::{SENTENCE_SIMILARITY_SIGNAL, SENTENCE_SIMILARITY_THRESHOLD};
use crate::embedding::TextEmbedder;

/// Scores a completion by the absolute cosine similarity between prompt and
/// completion sentence embeddings.
///
/// Each text goes through [`TextEmbedder::embed_batch`] as a one-element
/// batch and only the first embedding is compared; multi-sentence inputs are
/// not scored individually. Raw scores land in [0, 1].
pub struct SentenceSimilarityScorer {
    encoder: Arc<dyn TextEmbedder>,
    threshold: f32,
}

impl std::fmt::Debug for SentenceSimilarityScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentenceSimilarityScorer")
            .field("threshold", &self.threshold)
            .finish()
    }
}

impl SentenceSimilarityScorer {
    pub fn new(encoder: Arc<dyn TextEmbedder>) -> Self {
        Self {
            encoder,
            threshold: SENTENCE_SIMILARITY_THRESHOLD,
        }
    }

    /// Overrides the rejection cutoff.
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    fn cosine_similarity(prompt: &[f32], completion: &[f32]) -> Result<f32, ScoringError> {
        if prompt.len() != completion.len() {
            return Err(ScoringError::DimensionMismatch {
                prompt_dim: prompt.len(),
                completion_dim: completion.len(),
            });
        }

        let (dot, norm_p_sq, norm_c_sq) = prompt.iter().zip(completion).fold(
            (0.0f32, 0.0f32, 0.0f32),
            |(dot, np, nc), (pv, cv)| (dot + pv * cv, np + pv * pv, nc + cv * cv),
        );

        let norm_p = norm_p_sq.sqrt();
        let norm_c = norm_c_sq.sqrt();

        if norm_p == 0.0 || norm_c == 0.0 {
            return Ok(0.0);
        }

        Ok(dot / (norm_p * norm_c))
    }
}

impl RelevanceSignal for SentenceSimilarityScorer {
    fn name(&self) -> &'static str {
        SENTENCE_SIMILARITY_SIGNAL
    }

    fn threshold(&self) -> f32 {
        self.threshold
    }

    fn score(&self, prompt: &str, completion: &str) -> Result<f32, ScoringError> {
        let completion_embeddings = self.encoder.embed_batch(&[completion])?;
        let prompt_embeddings = self.encoder.embed_batch(&[prompt])?;

        let completion_embedding =
            completion_embeddings
                .first()
                .ok_or(ScoringError::MissingEmbedding {
                    signal: SENTENCE_SIMILARITY_SIGNAL,
                })?;
        let prompt_embedding = prompt_embeddings
            .first()
            .ok_or(ScoringError::MissingEmbedding {
                signal: SENTENCE_SIMILARITY_SIGNAL,
            })?;

        let similarity = Self::cosine_similarity(prompt_embedding, completion_embedding)?;

        debug!(
            signal = SENTENCE_SIMILARITY_SIGNAL,
            similarity, "Computed sentence similarity"
        );

        Ok(similarity.abs())
    }
}
