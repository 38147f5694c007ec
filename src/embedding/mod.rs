//! Embedding models and pooling utilities.
//!
//! - [`encoder`] provides the candle-backed [`BertEncoder`] used by both
//!   relevance scorers.
//! - [`pooling`] holds the masked mean / normalization primitives.
//!
//! Scorers depend on the [`TextEmbedder`] trait rather than a concrete
//! encoder, so checkpoint-free doubles can stand in during tests.

/// BERT encoder stack wrapper.
pub mod bert;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
/// Text encoder with stub and checkpoint backends.
pub mod encoder;
mod error;
/// Mean pooling and L2 normalization.
pub mod pooling;
/// Tokenizer loading helpers.
pub mod utils;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(test)]
mod tests;

pub use bert::BertEmbeddingModel;
pub use device::select_device;
pub use encoder::{BertEncoder, EncoderConfig};
pub use error::EmbeddingError;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockEmbedder;

/// Text-to-vector interface the relevance scorers are written against.
///
/// Implementations return pooled, L2-normalized embeddings. `embed` collapses
/// a long input into one vector (overflow chunks are mean-reduced);
/// `embed_batch` embeds each input independently, one vector per input, in
/// input order.
pub trait TextEmbedder: Send + Sync {
    /// Embeds one text into a single pooled vector.
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Embeds each text independently; the result has one vector per input.
    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError>;
}
