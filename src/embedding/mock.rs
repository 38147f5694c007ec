//! Canned-embedding test double for exercising scorers without a checkpoint.

use std::collections::HashMap;

use super::TextEmbedder;
use super::error::EmbeddingError;

/// Embedder returning pre-registered vectors keyed by input text.
///
/// Unknown inputs and the [`MockEmbedder::failing`] constructor both surface
/// as [`EmbeddingError::InferenceFailed`] so callers can exercise error paths.
#[derive(Debug, Default, Clone)]
pub struct MockEmbedder {
    vectors: HashMap<String, Vec<f32>>,
    fail_reason: Option<String>,
}

impl MockEmbedder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the embedding returned for `text`.
    pub fn with_vector(mut self, text: &str, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.to_string(), vector);
        self
    }

    /// An embedder whose every call fails with `reason`.
    pub fn failing(reason: &str) -> Self {
        Self {
            vectors: HashMap::new(),
            fail_reason: Some(reason.to_string()),
        }
    }
}

impl TextEmbedder for MockEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        if let Some(reason) = &self.fail_reason {
            return Err(EmbeddingError::InferenceFailed {
                reason: reason.clone(),
            });
        }

        self.vectors
            .get(text)
            .cloned()
            .ok_or_else(|| EmbeddingError::InferenceFailed {
                reason: format!("no mock embedding registered for {text:?}"),
            })
    }

    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        texts.iter().map(|text| self.embed(text)).collect()
    }
}
