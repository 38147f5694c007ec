//! Relevance gating for prompt/completion pairs.
//!
//! Two pretrained text encoders judge every completion against its prompt: a
//! token-level distance signal and a sentence-level similarity signal. Both
//! raw scores are thresholded and AND-combined into a binary reward, so
//! either signal scoring too low zeroes the reward on its own.
//!
//! # Public API Surface
//!
//! - [`RelevanceGate`], [`RelevanceGateConfig`] - the gate and its config
//! - [`RelevanceRewardEvent`] - per-completion scoring record
//! - [`TokenDistanceScorer`], [`SentenceSimilarityScorer`] - the two signals
//! - [`RelevanceSignal`] - trait for plugging in custom signals
//! - [`BertEncoder`], [`EncoderConfig`], [`TextEmbedder`] - embedding layer
//!
//! # Example
//!
//! Scoring with stub encoders (no checkpoint files needed):
//!
//! ```
//! use relevance_gate::{RelevanceGate, RelevanceGateConfig};
//!
//! # fn main() -> Result<(), relevance_gate::ScoringError> {
//! let gate = RelevanceGate::load(RelevanceGateConfig::stub())?;
//!
//! let prompt = "What causes ocean tides?";
//! let events = gate.score_many(prompt, &[prompt, "I like turtles."], "augment")?;
//!
//! assert_eq!(events.len(), 2);
//! assert!(events[0].is_accepted());
//! # Ok(())
//! # }
//! ```
//!
//! Checkpoint-backed gates are built the same way with
//! [`RelevanceGateConfig::new`] or [`RelevanceGateConfig::from_env`].
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod constants;
pub mod embedding;
pub mod reward;

pub use constants::{
    ACCEPTED_REWARD, REJECTED_REWARD, RELEVANCE_MODEL_NAME, SENTENCE_SIMILARITY_SIGNAL,
    SENTENCE_SIMILARITY_THRESHOLD, TOKEN_DISTANCE_SIGNAL, TOKEN_DISTANCE_THRESHOLD,
};
#[cfg(any(test, feature = "mock"))]
pub use embedding::MockEmbedder;
pub use embedding::{
    BertEmbeddingModel, BertEncoder, EmbeddingError, EncoderConfig, TextEmbedder, select_device,
};
#[cfg(any(test, feature = "mock"))]
pub use reward::{FailingSignal, FixedSignal};
pub use reward::{
    RelevanceGate, RelevanceGateConfig, RelevanceRewardEvent, RelevanceSignal, ScoringError,
    SentenceSimilarityScorer, TokenDistanceScorer,
};
