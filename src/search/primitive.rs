//! Seam to the underlying search primitive.
//!
//! The generic MCTS loop (selection/expansion/rollout/backpropagation) is
//! an external collaborator: this layer wraps it but does not reimplement
//! it. Implementations run their iterations against the supplied
//! `SearchTree`, populating node and branch statistics as they go, and
//! return the action they recommend for the searched player.

use super::tree::SearchTree;
use crate::core::{Action, PlayerId};
use crate::error::Result;
use crate::rules::ForwardModel;

/// An MCTS-style search over a `SearchTree`.
///
/// ## Contract
///
/// - `actions` is the legal set for `player` at `state`; implementations
///   may still surface an action outside it when tree statistics
///   accumulated under other determinizations dominate (the caller
///   reconciles, see the decision agent).
/// - The tree's redeterminization perspective
///   (`TreeCore::redeterminization_player`) constrains any resampling the
///   implementation performs per iteration.
/// - Graph topologies: every expanded node must be registered in the
///   tree's transposition map under the state key computed from that
///   perspective.
/// - `state` may be mutated during the run but must represent the same
///   position when the call returns.
pub trait SearchPrimitive<M: ForwardModel> {
    /// Run a search for `player` and return the recommended action.
    fn search(
        &mut self,
        model: &mut M,
        state: &mut M::State,
        player: PlayerId,
        actions: &[Action],
        tree: &mut SearchTree,
    ) -> Result<Action>;
}
