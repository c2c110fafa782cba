//! Contracts for the external collaborators: game position and forward model.
//!
//! The decision layer never represents game state itself. Games implement
//! `GamePosition` for their state type and `ForwardModel` for their rules,
//! and the layer drives them through these traits.

use crate::core::{Action, GameConfig, GameRng, PlayerId, StateKey};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }
}

/// A game position as seen by the decision layer.
///
/// ## Hidden choices
///
/// A hidden choice is an action a player has committed but the opponent
/// cannot observe until a reveal/commit step. `hidden_choice` reports the
/// committed action (or `None` when nothing is pending);
/// `mask_hidden_choice` reverts a committed choice to an unresolved
/// placeholder in this view, putting that player back to move.
///
/// ## State keys
///
/// `state_key(perspective)` is an information-set-respecting fingerprint:
/// positions indistinguishable from `perspective`'s point of view must map
/// to the same key. Used only by graph-search topologies.
pub trait GamePosition: Clone {
    /// Number of players in the game.
    fn player_count(&self) -> usize;

    /// The player to move.
    fn active_player(&self) -> PlayerId;

    /// The action `player` has committed but not yet revealed, if any.
    fn hidden_choice(&self, player: PlayerId) -> Option<Action>;

    /// Revert `player`'s committed hidden choice to an unresolved
    /// placeholder in this view. `player` becomes the player to move.
    fn mask_hidden_choice(&mut self, player: PlayerId);

    /// Fingerprint of this position from `perspective`'s point of view.
    fn state_key(&self, perspective: PlayerId) -> StateKey;

    /// Resample the parts of this position that `perspective` cannot
    /// observe, preserving everything it can.
    fn redeterminize(&mut self, perspective: PlayerId, rng: &mut GameRng);
}

/// Forward model: the game's rules.
///
/// ## Implementation Notes
///
/// - `legal_actions`: return empty if the player can't act
/// - `apply`: must be deterministic for tree consistency
/// - `is_terminal`: return `None` if the game continues
pub trait ForwardModel {
    /// The game state type this model drives.
    type State: GamePosition;

    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Enumerate legal actions for a player.
    fn legal_actions(&self, state: &Self::State, player: PlayerId) -> Vec<Action>;

    /// Apply an action to the game state.
    fn apply(&mut self, state: &mut Self::State, player: PlayerId, action: &Action);

    /// Check if the game is over.
    fn is_terminal(&self, state: &Self::State) -> Option<GameResult>;
}
