use std::sync::Arc;

use tracing::{debug, info};

use super::RelevanceSignal;
use super::config::RelevanceGateConfig;
use super::error::ScoringError;
use super::sentence_similarity::SentenceSimilarityScorer;
use super::token_distance::TokenDistanceScorer;
use super::types::RelevanceRewardEvent;
use crate::constants::{REJECTED_REWARD, RELEVANCE_MODEL_NAME};
use crate::embedding::{BertEncoder, select_device};

/// AND-gate over thresholded relevance signals.
///
/// Signals run in registration order. Every raw score is recorded on the
/// event; a raw score strictly below its signal's threshold zeroes the final
/// reward, and no later signal can un-zero it.
pub struct RelevanceGate {
    signals: Vec<Box<dyn RelevanceSignal>>,
}

impl std::fmt::Debug for RelevanceGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelevanceGate")
            .field(
                "signals",
                &self.signals.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl RelevanceGate {
    /// Loads both encoder-backed signals onto one shared device.
    pub fn load(config: RelevanceGateConfig) -> Result<Self, ScoringError> {
        config.validate()?;

        let RelevanceGateConfig {
            bert,
            mpnet,
            bert_threshold,
            mpnet_threshold,
        } = config;

        let device = select_device()?;

        let bert_encoder = Arc::new(BertEncoder::load(bert, &device)?);
        let mpnet_encoder = Arc::new(BertEncoder::load(mpnet, &device)?);

        info!(
            bert_stub = bert_encoder.is_stub(),
            mpnet_stub = mpnet_encoder.is_stub(),
            bert_threshold,
            mpnet_threshold,
            "Relevance gate ready"
        );

        let token_distance = TokenDistanceScorer::new(bert_encoder).with_threshold(bert_threshold);
        let sentence_similarity =
            SentenceSimilarityScorer::new(mpnet_encoder).with_threshold(mpnet_threshold);

        Ok(Self::new(token_distance, sentence_similarity))
    }

    /// Stub-backed gate; deterministic hash embeddings, no checkpoints.
    pub fn stub() -> Result<Self, ScoringError> {
        Self::load(RelevanceGateConfig::stub())
    }

    /// Standard two-signal gate in evaluation order: token distance, then
    /// sentence similarity.
    pub fn new(
        token_distance: TokenDistanceScorer,
        sentence_similarity: SentenceSimilarityScorer,
    ) -> Self {
        Self {
            signals: vec![Box::new(token_distance), Box::new(sentence_similarity)],
        }
    }

    /// Builds a gate over an arbitrary signal list, evaluated in order.
    pub fn from_signals(signals: Vec<Box<dyn RelevanceSignal>>) -> Self {
        Self { signals }
    }

    /// Composer name used when reporting grouped rewards.
    pub fn name(&self) -> &'static str {
        RELEVANCE_MODEL_NAME
    }

    /// The signals in evaluation order.
    pub fn signals(&self) -> &[Box<dyn RelevanceSignal>] {
        &self.signals
    }

    /// Scores each completion against `prompt`, one event per completion, in
    /// input order.
    ///
    /// `name` tags the batch in logs only; scoring does not depend on it.
    pub fn score_many(
        &self,
        prompt: &str,
        completions: &[&str],
        name: &str,
    ) -> Result<Vec<RelevanceRewardEvent>, ScoringError> {
        debug!(
            name,
            completions = completions.len(),
            "Scoring completion batch"
        );

        completions
            .iter()
            .map(|completion| self.score_one(prompt, completion))
            .collect()
    }

    /// Runs every signal over one pair and gates the reward.
    pub fn score_one(
        &self,
        prompt: &str,
        completion: &str,
    ) -> Result<RelevanceRewardEvent, ScoringError> {
        let mut event = RelevanceRewardEvent::default();
        let mut accepted = true;

        for signal in &self.signals {
            let raw = signal.score(prompt, completion)?;

            // Strictly-below rejects; a NaN raw score never trips the gate.
            accepted &= !(raw < signal.threshold());
            event.record_raw(signal.name(), raw);

            debug!(
                signal = signal.name(),
                raw,
                threshold = signal.threshold(),
                "Signal scored"
            );
        }

        if !accepted {
            event.reward = REJECTED_REWARD;
        }

        Ok(event)
    }

    /// Pass-through normalization; gated rewards are already in {0, 1}.
    pub fn normalize(&self, rewards: Vec<f32>) -> Vec<f32> {
        rewards
    }
}
