//! Opponent-model policies and best-action scoring rules.
//!
//! The recognized policies form a small closed set, dispatched by the
//! decision agent; the behaviors are enumerable and mutually exclusive
//! within one match, so tagged variants beat open subclassing here.

use serde::{Deserialize, Serialize};

/// How the tree represents and treats the opponent's choices.
///
/// Hidden-information handling is enabled exactly when the policy models
/// the opponent's choices inside the tree; self-only variants never
/// branch on them and so never need to resolve an unrevealed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpponentTreePolicy {
    /// Single tree containing only the searching player's decisions.
    SelfOnly,
    /// Single shared tree with opponent decision nodes.
    OneTree,
    /// One independent tree per player.
    MultiTree,
    /// Shared graph with transposition lookup (MCGS).
    Graph,
    /// Shared graph without opponent modeling.
    GraphSelfOnly,
}

impl OpponentTreePolicy {
    /// Whether this policy models the opponent's choices inside the tree.
    #[must_use]
    pub fn models_opponent(self) -> bool {
        matches!(
            self,
            OpponentTreePolicy::OneTree | OpponentTreePolicy::MultiTree | OpponentTreePolicy::Graph
        )
    }

    /// Whether this policy addresses nodes by state key.
    #[must_use]
    pub fn uses_transpositions(self) -> bool {
        matches!(
            self,
            OpponentTreePolicy::Graph | OpponentTreePolicy::GraphSelfOnly
        )
    }

    /// Whether this policy keeps one root per player.
    #[must_use]
    pub fn per_player_trees(self) -> bool {
        matches!(self, OpponentTreePolicy::MultiTree)
    }
}

/// Scoring rule for extracting the best action from a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionScore {
    /// Highest visit count (robust child).
    #[default]
    MostVisited,
    /// Highest mean reward for the deciding player.
    HighestMean,
}
