//! Candle-backed text encoder shared by the relevance scorers.
//!
//! Use [`EncoderConfig::stub`] for tests and demos without checkpoint files.

/// Encoder configuration.
pub mod config;


pub use config::EncoderConfig;

use std::sync::Arc;

use candle_core::{Device, Tensor};
use tokenizers::{Encoding, Tokenizer};
use tracing::{debug, info, warn};

use crate::embedding::TextEmbedder;
use crate::embedding::bert::BertEmbeddingModel;
use crate::embedding::error::EmbeddingError;
use crate::embedding::pooling::{l2_normalize, masked_mean, mean_of_rows};
use crate::embedding::utils::load_tokenizer_with_truncation;

enum EncoderBackend {
    Model {
        model: BertEmbeddingModel,
        tokenizer: Arc<Tokenizer>,
        device: Device,
    },
    Stub,
}

/// Text encoder producing pooled, L2-normalized embeddings.
///
/// [`TextEmbedder::embed`] mean-reduces overflow chunks into one vector;
/// [`TextEmbedder::embed_batch`] returns one vector per input with no
/// reduction. Both modes share the same masked mean pooling.
pub struct BertEncoder {
    backend: EncoderBackend,
    config: EncoderConfig,
}

impl std::fmt::Debug for BertEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BertEncoder")
            .field(
                "backend",
                &match &self.backend {
                    EncoderBackend::Model { device, .. } => format!("Model({device:?})"),
                    EncoderBackend::Stub => "Stub".to_string(),
                },
            )
            .field("embedding_dim", &self.embedding_dim())
            .field("max_seq_len", &self.config.max_seq_len)
            .finish()
    }
}

impl BertEncoder {
    /// Loads the encoder onto `device` (stub mode needs no files).
    ///
    /// Model mode expects a BERT-shaped checkpoint: a `config.json` parseable
    /// as a BERT config and token-type embeddings in the weights. Sentence
    /// encoders must be exported in that layout to load here.
    pub fn load(config: EncoderConfig, device: &Device) -> Result<Self, EmbeddingError> {
        config.validate()?;

        if config.testing_stub {
            warn!("Encoder running in STUB mode (testing only)");
            return Ok(Self {
                backend: EncoderBackend::Stub,
                config,
            });
        }

        if !config.model_available() {
            return Err(EmbeddingError::ModelNotFound {
                path: config.model_dir.clone(),
            });
        }

        if !config.tokenizer_available() {
            return Err(EmbeddingError::ModelNotFound {
                path: config.tokenizer_path.clone(),
            });
        }

        let tokenizer = load_tokenizer_with_truncation(&config.tokenizer_path, config.max_seq_len)
            .map_err(|e| EmbeddingError::TokenizationFailed {
                reason: format!("failed to load tokenizer: {e}"),
            })?;

        let model = BertEmbeddingModel::load(&config.model_dir, device).map_err(|e| {
            EmbeddingError::ModelLoadFailed {
                reason: format!("failed to load encoder checkpoint: {e}"),
            }
        })?;

        info!(
            model_dir = %config.model_dir.display(),
            hidden_size = model.hidden_size(),
            max_seq_len = config.max_seq_len,
            "Encoder checkpoint loaded"
        );

        Ok(Self {
            backend: EncoderBackend::Model {
                model,
                tokenizer: Arc::new(tokenizer),
                device: device.clone(),
            },
            config,
        })
    }

    /// Output embedding width.
    pub fn embedding_dim(&self) -> usize {
        match &self.backend {
            EncoderBackend::Model { model, .. } => model.hidden_size(),
            EncoderBackend::Stub => self.config.embedding_dim,
        }
    }

    /// Returns `true` when running without a checkpoint.
    pub fn is_stub(&self) -> bool {
        matches!(self.backend, EncoderBackend::Stub)
    }

    /// Returns `true` when a checkpoint is loaded.
    pub fn has_model(&self) -> bool {
        matches!(self.backend, EncoderBackend::Model { .. })
    }

    /// The encoder configuration.
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    fn embed_with_model(
        &self,
        text: &str,
        model: &BertEmbeddingModel,
        tokenizer: &Tokenizer,
        device: &Device,
    ) -> Result<Vec<f32>, EmbeddingError> {
        let encoding =
            tokenizer
                .encode(text, true)
                .map_err(|e| EmbeddingError::TokenizationFailed {
                    reason: e.to_string(),
                })?;

        // Truncation parks everything past max_seq_len on the overflow list;
        // each chunk is pooled separately, then the chunk vectors are
        // mean-reduced into the single returned embedding.
        let mut chunks: Vec<Vec<f32>> = Vec::with_capacity(1 + encoding.get_overflowing().len());
        for chunk in std::iter::once(&encoding).chain(encoding.get_overflowing().iter()) {
            if chunk.get_ids().is_empty() {
                continue;
            }
            chunks.push(self.pooled_chunk(chunk, model, device)?);
        }

        if chunks.is_empty() {
            return Ok(vec![0.0; model.hidden_size()]);
        }

        debug!(
            text_len = text.len(),
            chunks = chunks.len(),
            "Generated pooled embedding"
        );

        Ok(mean_of_rows(&chunks))
    }

    fn embed_each_with_model(
        &self,
        texts: &[&str],
        model: &BertEmbeddingModel,
        tokenizer: &Tokenizer,
        device: &Device,
    ) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        // One forward pass per input; padded batching buys nothing at the
        // one-element batch sizes the scorers use.
        texts
            .iter()
            .map(|text| {
                let encoding = tokenizer.encode(*text, true).map_err(|e| {
                    EmbeddingError::TokenizationFailed {
                        reason: e.to_string(),
                    }
                })?;

                if encoding.get_ids().is_empty() {
                    return Ok(vec![0.0; model.hidden_size()]);
                }

                self.pooled_chunk(&encoding, model, device)
            })
            .collect()
    }

    fn pooled_chunk(
        &self,
        encoding: &Encoding,
        model: &BertEmbeddingModel,
        device: &Device,
    ) -> Result<Vec<f32>, EmbeddingError> {
        let input_ids = Tensor::new(encoding.get_ids(), device)?.unsqueeze(0)?;
        let type_ids = Tensor::new(encoding.get_type_ids(), device)?.unsqueeze(0)?;
        let attention_mask = Tensor::new(encoding.get_attention_mask(), device)?.unsqueeze(0)?;

        let hidden = model
            .forward(&input_ids, &type_ids, Some(&attention_mask))
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: e.to_string(),
            })?;

        let pooled = masked_mean(&hidden, &attention_mask)?;
        let row = pooled.squeeze(0)?.to_vec1::<f32>()?;

        Ok(l2_normalize(row))
    }

    fn embed_stub(&self, text: &str) -> Vec<f32> {
        use std::hash::{DefaultHasher, Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        let mut state = hasher.finish().max(1);

        let mut embedding = Vec::with_capacity(self.config.embedding_dim);
        for _ in 0..self.config.embedding_dim {
            // xorshift64: deterministic per input text, nonzero state required.
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            embedding.push((state >> 40) as f32 / (1u32 << 24) as f32 - 0.5);
        }

        l2_normalize(embedding)
    }
}

impl TextEmbedder for BertEncoder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        match &self.backend {
            EncoderBackend::Model {
                model,
                tokenizer,
                device,
            } => self.embed_with_model(text, model, tokenizer, device),
            EncoderBackend::Stub => Ok(self.embed_stub(text)),
        }
    }

    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(vec![]);
        }

        match &self.backend {
            EncoderBackend::Model {
                model,
                tokenizer,
                device,
            } => self.embed_each_with_model(texts, model, tokenizer, device),
            EncoderBackend::Stub => Ok(texts.iter().map(|text| self.embed_stub(text)).collect()),
        }
    }
}
