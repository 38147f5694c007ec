//! Relevance gating of prompt/completion pairs.
//!
//! Two embedding-backed signals score each pair: a token-level distance
//! ([`TokenDistanceScorer`]) and a sentence-level similarity
//! ([`SentenceSimilarityScorer`]). [`RelevanceGate`] AND-combines their
//! threshold checks into a binary reward and reports both raw scores on the
//! resulting [`RelevanceRewardEvent`].
//!
//! The gate is generic over [`RelevanceSignal`], so callers can swap in their
//! own signals via [`RelevanceGate::from_signals`].

pub mod config;
pub mod error;
pub mod gate;
pub mod sentence_similarity;
pub mod token_distance;
pub mod types;

#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use config::RelevanceGateConfig;
pub use error::ScoringError;
pub use gate::RelevanceGate;
pub use sentence_similarity::SentenceSimilarityScorer;
pub use token_distance::TokenDistanceScorer;
pub use types::RelevanceRewardEvent;

#[cfg(any(test, feature = "mock"))]
pub use mock::{FailingSignal, FixedSignal};

/// One thresholded signal inside the gate.
///
/// Implementations return a raw scalar; the gate rejects when the raw value
/// falls strictly below [`RelevanceSignal::threshold`]. Signals must be
/// usable from multiple threads at once.
pub trait RelevanceSignal: Send + Sync {
    /// Stable signal name used to slot raw scores into the event record.
    fn name(&self) -> &'static str;

    /// Rejection cutoff: raw scores strictly below this zero the reward.
    fn threshold(&self) -> f32;

    /// Computes the raw score for one prompt/completion pair.
    fn score(&self, prompt: &str, completion: &str) -> Result<f32, ScoringError>;
}
