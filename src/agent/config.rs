//! Decision-agent configuration.

use serde::{Deserialize, Serialize};

use crate::search::{ActionScore, OpponentTreePolicy};

/// Configuration for a `DecisionAgent`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AgentConfig {
    /// How the tree represents the opponent's choices.
    pub policy: OpponentTreePolicy,

    /// Scoring rule for best-action extraction.
    pub score: ActionScore,

    /// Seed for the redeterminization RNG.
    /// Same seed produces reproducible decisions.
    pub seed: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            policy: OpponentTreePolicy::OneTree,
            score: ActionScore::MostVisited,
            seed: 42,
        }
    }
}

impl AgentConfig {
    /// Create a config with a custom opponent-model policy.
    #[must_use]
    pub fn with_policy(mut self, policy: OpponentTreePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Create a config with a custom scoring rule.
    #[must_use]
    pub fn with_score(mut self, score: ActionScore) -> Self {
        self.score = score;
        self
    }

    /// Create a config with a custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
