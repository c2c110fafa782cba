//! Error types for the decision layer.
//!
//! Fatal variants are contract violations: the search and the adapter
//! have diverged in their model of the game, and continuing would
//! silently corrupt statistics. They abort the decision with a
//! descriptive diagnostic; no recovery is attempted. The one *expected*
//! inconsistency — an inferred hidden action that is illegal under the
//! current determinization — is recovered locally by substitution and
//! never surfaces here.

use thiserror::Error;

use crate::core::{Action, PlayerId, StateKey};

/// Main error type for the decision layer.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DecisionError {
    #[error("inferred hidden action {action:?} for {player} is not a reveal action")]
    NotAReveal { player: PlayerId, action: Action },

    #[error("no node found for state key {key} from {player}'s perspective")]
    MissingTransposition { key: StateKey, player: PlayerId },

    #[error("no explored child for action {action:?} with {player} to move")]
    UnexploredBranch { player: PlayerId, action: Action },

    #[error("no search statistics to extract a best action for {player}")]
    NoSearchStatistics { player: PlayerId },

    #[error("no legal actions available for {player}")]
    NoLegalActions { player: PlayerId },
}

/// Convenience type alias for Results using the crate's error type.
pub type Result<T> = std::result::Result<T, DecisionError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TemplateId;

    #[test]
    fn test_error_messages() {
        let err = DecisionError::MissingTransposition {
            key: StateKey::new(0xbeef),
            player: PlayerId::new(1),
        };
        assert_eq!(
            err.to_string(),
            "no node found for state key 0x000000000000beef from Player 1's perspective"
        );

        let err = DecisionError::NotAReveal {
            player: PlayerId::new(0),
            action: Action::new(TemplateId::new(3)),
        };
        assert!(err.to_string().contains("is not a reveal action"));
    }
}
