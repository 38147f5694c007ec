use thiserror::Error;

use crate::embedding::EmbeddingError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("embedding dimension mismatch: prompt {prompt_dim} vs completion {completion_dim}")]
    DimensionMismatch {
        prompt_dim: usize,
        completion_dim: usize,
    },

    #[error("{signal} produced no embedding")]
    MissingEmbedding { signal: &'static str },
}
