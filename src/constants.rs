//! Cross-cutting, shared constants.
//!
//! The thresholds here are the stock gating bounds; per-signal overrides go
//! through [`RelevanceGateConfig`](crate::reward::RelevanceGateConfig) rather
//! than editing these.

/// Stock gating threshold for the token-distance signal. Raw scores strictly
/// below this veto the reward.
pub const TOKEN_DISTANCE_THRESHOLD: f32 = -0.0246;

/// Stock gating threshold for the sentence-similarity signal.
pub const SENTENCE_SIMILARITY_THRESHOLD: f32 = 0.3;

/// Reward sentinel for a completion that cleared every signal.
pub const ACCEPTED_REWARD: f32 = 1.0;

/// Reward sentinel for a completion vetoed by any signal.
pub const REJECTED_REWARD: f32 = 0.0;

/// Identifier the gate reports for itself downstream.
pub const RELEVANCE_MODEL_NAME: &str = "relevance";

/// Signal name under which the token-distance raw score is recorded.
pub const TOKEN_DISTANCE_SIGNAL: &str = "relevance_bert";

/// Signal name under which the sentence-similarity raw score is recorded.
pub const SENTENCE_SIMILARITY_SIGNAL: &str = "relevance_mpnet";

/// Default embedding dimension (BERT-base hidden size; also the stub width).
pub const DEFAULT_EMBEDDING_DIM: usize = 768;

/// Default per-chunk token limit fed to an encoder.
pub const DEFAULT_MAX_SEQ_LEN: usize = 512;
