use std::path::PathBuf;

use crate::embedding::{EmbeddingError, EncoderConfig};

#[derive(Debug, Clone)]
/// Configuration for [`RelevanceGate`](super::RelevanceGate).
pub struct RelevanceGateConfig {
    /// Encoder backing the token-distance signal.
    pub bert: EncoderConfig,
    /// Encoder backing the sentence-similarity signal.
    pub mpnet: EncoderConfig,
    /// Token-distance rejection cutoff. Raw scores are negated distances, so
    /// this sits slightly below zero.
    pub bert_threshold: f32,
    /// Sentence-similarity rejection cutoff, in [0, 1].
    pub mpnet_threshold: f32,
}

impl Default for RelevanceGateConfig {
    fn default() -> Self {
        Self {
            bert: EncoderConfig::default(),
            mpnet: EncoderConfig::default(),
            bert_threshold: crate::constants::TOKEN_DISTANCE_THRESHOLD,
            mpnet_threshold: crate::constants::SENTENCE_SIMILARITY_THRESHOLD,
        }
    }
}

impl RelevanceGateConfig {
    pub const ENV_BERT_DIR: &'static str = "RELEVANCE_BERT_DIR";
    pub const ENV_MPNET_DIR: &'static str = "RELEVANCE_MPNET_DIR";
    pub const ENV_BERT_THRESHOLD: &'static str = "RELEVANCE_BERT_THRESHOLD";
    pub const ENV_MPNET_THRESHOLD: &'static str = "RELEVANCE_MPNET_THRESHOLD";

    /// Points both encoders at their checkpoint directories.
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(bert_dir: P, mpnet_dir: Q) -> Self {
        Self {
            bert: EncoderConfig::new(bert_dir),
            mpnet: EncoderConfig::new(mpnet_dir),
            ..Default::default()
        }
    }

    /// Stub-backed gate for tests and demos; no checkpoints required.
    pub fn stub() -> Self {
        Self {
            bert: EncoderConfig::stub(),
            mpnet: EncoderConfig::stub(),
            ..Default::default()
        }
    }

    /// Overrides the token-distance cutoff.
    pub fn with_bert_threshold(mut self, threshold: f32) -> Self {
        self.bert_threshold = threshold;
        self
    }

    /// Overrides the sentence-similarity cutoff.
    pub fn with_mpnet_threshold(mut self, threshold: f32) -> Self {
        self.mpnet_threshold = threshold;
        self
    }

    /// Loads config from environment variables. Unset or blank variables keep
    /// their defaults; a threshold that fails to parse is an error.
    pub fn from_env() -> Result<Self, EmbeddingError> {
        let mut config = Self::default();

        if let Some(dir) = env_path(Self::ENV_BERT_DIR) {
            config.bert = EncoderConfig::new(dir);
        }
        if let Some(dir) = env_path(Self::ENV_MPNET_DIR) {
            config.mpnet = EncoderConfig::new(dir);
        }
        if let Some(threshold) = env_f32(Self::ENV_BERT_THRESHOLD)? {
            config.bert_threshold = threshold;
        }
        if let Some(threshold) = env_f32(Self::ENV_MPNET_THRESHOLD)? {
            config.mpnet_threshold = threshold;
        }

        Ok(config)
    }

    /// Checks both encoder configs and the threshold ranges.
    pub fn validate(&self) -> Result<(), EmbeddingError> {
        self.bert.validate()?;
        self.mpnet.validate()?;

        if !(0.0..=1.0).contains(&self.mpnet_threshold) {
            return Err(EmbeddingError::InvalidConfig {
                reason: format!(
                    "mpnet_threshold must be between 0.0 and 1.0, got {}",
                    self.mpnet_threshold
                ),
            });
        }

        Ok(())
    }
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn env_f32(name: &str) -> Result<Option<f32>, EmbeddingError> {
    let Some(raw) = std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
    else {
        return Ok(None);
    };

    raw.parse()
        .map(Some)
        .map_err(|_| EmbeddingError::InvalidConfig {
            reason: format!("{name} is not a valid float: {raw:?}"),
        })
}
