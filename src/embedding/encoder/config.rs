use std::path::PathBuf;

use crate::constants::{DEFAULT_EMBEDDING_DIM, DEFAULT_MAX_SEQ_LEN};
use crate::embedding::error::EmbeddingError;

#[derive(Debug, Clone)]
/// Configuration for [`BertEncoder`](super::BertEncoder).
pub struct EncoderConfig {
    /// Directory holding `config.json` and `model.safetensors`.
    pub model_dir: PathBuf,
    /// Path to `tokenizer.json` (or a directory containing it).
    pub tokenizer_path: PathBuf,
    /// Max tokens per chunk fed to the encoder.
    pub max_seq_len: usize,
    /// Stub embedding width. Checkpoint-backed encoders take their width from
    /// the checkpoint instead.
    pub embedding_dim: usize,
    /// If true, run in deterministic stub mode (no checkpoint required).
    pub testing_stub: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::new(),
            tokenizer_path: PathBuf::new(),
            max_seq_len: DEFAULT_MAX_SEQ_LEN,
            embedding_dim: DEFAULT_EMBEDDING_DIM,
            testing_stub: false,
        }
    }
}

impl EncoderConfig {
    /// Points at a checkpoint directory; the tokenizer is expected alongside
    /// the weights as `tokenizer.json`.
    pub fn new<P: Into<PathBuf>>(model_dir: P) -> Self {
        let model_dir = model_dir.into();
        let tokenizer_path = model_dir.join("tokenizer.json");

        Self {
            model_dir,
            tokenizer_path,
            ..Default::default()
        }
    }

    /// Deterministic stub encoder for tests and demos.
    pub fn stub() -> Self {
        Self {
            testing_stub: true,
            ..Default::default()
        }
    }

    /// Overrides the per-chunk token limit.
    pub fn with_max_seq_len(mut self, max_seq_len: usize) -> Self {
        self.max_seq_len = max_seq_len;
        self
    }

    /// Overrides the stub embedding width.
    pub fn with_embedding_dim(mut self, embedding_dim: usize) -> Self {
        self.embedding_dim = embedding_dim;
        self
    }

    /// Checks this configuration is structurally usable. Checkpoint files are
    /// only looked up at load time.
    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.embedding_dim == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "embedding_dim must be non-zero".to_string(),
            });
        }

        if self.max_seq_len == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "max_seq_len must be non-zero".to_string(),
            });
        }

        if !self.testing_stub && self.model_dir.as_os_str().is_empty() {
            return Err(EmbeddingError::InvalidConfig {
                reason: "model_dir is required unless testing_stub is set".to_string(),
            });
        }

        Ok(())
    }

    /// Returns `true` if the checkpoint files are present on disk.
    pub fn model_available(&self) -> bool {
        self.model_dir.join("config.json").is_file()
            && self.model_dir.join("model.safetensors").is_file()
    }

    /// Returns `true` if the tokenizer file is present on disk.
    pub fn tokenizer_available(&self) -> bool {
        if self.tokenizer_path.is_dir() {
            self.tokenizer_path.join("tokenizer.json").is_file()
        } else {
            self.tokenizer_path.is_file()
        }
    }
}
