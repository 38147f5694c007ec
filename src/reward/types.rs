use serde::{Deserialize, Serialize};

use crate::constants::{
    ACCEPTED_REWARD, REJECTED_REWARD, SENTENCE_SIMILARITY_SIGNAL, TOKEN_DISTANCE_SIGNAL,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Scoring record emitted for one prompt/completion pair.
///
/// The raw per-signal scores are kept alongside the gated reward so
/// downstream consumers can inspect why a completion was rejected.
pub struct RelevanceRewardEvent {
    /// Final gated reward: 1.0 accepted, 0.0 rejected.
    pub reward: f32,
    /// Raw token-distance score (negated RMS distance), if that signal ran.
    pub bert_score: Option<f32>,
    /// Raw sentence-similarity score (absolute cosine), if that signal ran.
    pub mpnet_score: Option<f32>,
    /// Marks this event as produced by a filtering model rather than a
    /// graded one.
    pub is_filter_model: bool,
}

impl Default for RelevanceRewardEvent {
    fn default() -> Self {
        Self {
            reward: ACCEPTED_REWARD,
            bert_score: None,
            mpnet_score: None,
            is_filter_model: true,
        }
    }
}

impl RelevanceRewardEvent {
    /// Returns `true` if the completion cleared every signal threshold.
    pub fn is_accepted(&self) -> bool {
        self.reward != REJECTED_REWARD
    }

    /// Stores `raw` under the slot matching `signal`. Unknown signal names
    /// have no dedicated slot and are skipped.
    pub(crate) fn record_raw(&mut self, signal: &str, raw: f32) {
        match signal {
            TOKEN_DISTANCE_SIGNAL => self.bert_score = Some(raw),
            SENTENCE_SIMILARITY_SIGNAL => self.mpnet_score = Some(raw),
            _ => {}
        }
    }
}

impl std::fmt::Display for RelevanceRewardEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = if self.is_accepted() {
            "ACCEPTED"
        } else {
            "REJECTED"
        };
        write!(f, "{} (reward: {:.1}", status, self.reward)?;
        if let Some(score) = self.bert_score {
            write!(f, ", bert: {:.4}", score)?;
        }
        if let Some(score) = self.mpnet_score {
            write!(f, ", mpnet: {:.4}", score)?;
        }
        write!(f, ")")
    }
}
