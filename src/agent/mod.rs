//! The hidden-information decision agent.
//!
//! `DecisionAgent` wraps an external search primitive and produces a
//! single legal action for the acting player even when part of the
//! observable state — the opponent's pending hidden choice — is unknown,
//! keeping the tree's statistics consistent with whichever topology the
//! active opponent-model policy selects.
//!
//! ## Per-decision protocol
//!
//! 1. Carry-over cleanup: if the previous decision resolved a hidden
//!    action, advance the tree past it before computing anything new.
//! 2. Applicability: hidden handling engages only when the policy models
//!    opponents *and* the opponent holds an unresolved hidden choice;
//!    otherwise delegate straight to the search primitive.
//! 3. Mask the opponent's committed choice in the acting player's view.
//! 4. Run the primitive as if deciding for the opponent over its legal
//!    hidden options; the result must be a reveal action.
//! 5. If redeterminization made the inferred action illegal, substitute
//!    the first legal alternative and record the substitution.
//! 6. Apply the (possibly substituted) action to the forward model.
//! 7. Read the best action from the topology-appropriate node.
//! 8. Remember the resolved reveal for the next call's cleanup.

pub mod config;

pub use config::AgentConfig;

use log::{debug, warn};

use crate::core::{Action, GameRng, PlayerId, RevealRecord};
use crate::error::{DecisionError, Result};
use crate::rules::{ForwardModel, GamePosition};
use crate::search::{SearchPrimitive, SearchTree};

/// Decision-making agent for two-player hidden-information games.
///
/// Owns its search tree and transposition state exclusively; decisions
/// are synchronous and single-threaded. Cross-call state (the pending
/// reveal and the tree roots) mutates only at decision boundaries.
pub struct DecisionAgent<M: ForwardModel, P: SearchPrimitive<M>> {
    /// The game rules.
    model: M,

    /// The wrapped search primitive.
    primitive: P,

    /// Agent configuration.
    config: AgentConfig,

    /// The search tree, shaped by the configured policy.
    tree: SearchTree,

    /// Hidden action resolved during the previous decision, awaiting
    /// tree bookkeeping at the start of the next one.
    pending: Option<RevealRecord>,

    /// Last resolved reveal, kept for diagnostics and replay.
    last_reveal: Option<RevealRecord>,

    /// RNG driving redeterminization.
    rng: GameRng,
}

impl<M: ForwardModel, P: SearchPrimitive<M>> DecisionAgent<M, P> {
    /// Create a new agent.
    pub fn new(model: M, primitive: P, config: AgentConfig) -> Self {
        let player_count = model.config().player_count;
        let tree = SearchTree::for_policy(config.policy, player_count, PlayerId::new(0));
        let rng = GameRng::new(config.seed);

        Self {
            model,
            primitive,
            config,
            tree,
            pending: None,
            last_reveal: None,
            rng,
        }
    }

    /// Decide an action for the player to move at `state`.
    ///
    /// `actions` is the legal set for that player. May invoke a full
    /// nested search over the opponent's hidden options before
    /// returning, so one call's latency includes two search runs in the
    /// worst case.
    ///
    /// # Errors
    ///
    /// Fatal contract violations (`NotAReveal`, `MissingTransposition`,
    /// `UnexploredBranch`, `NoSearchStatistics`) abort the decision; see
    /// [`DecisionError`].
    pub fn choose_action(&mut self, state: &mut M::State, actions: &[Action]) -> Result<Action> {
        let acting = state.active_player();
        let opponent = acting.opponent();

        // 1. Carry-over cleanup from the previous decision.
        if let Some(pending) = self.pending.take() {
            debug!(
                "advancing tree past hidden action {:?} resolved for {}",
                pending.applied, pending.player
            );
            self.tree.advance(&pending.applied, acting);
        }

        // 2. Applicability check.
        let applies =
            self.config.policy.models_opponent() && state.hidden_choice(opponent).is_some();
        if !applies {
            self.build_root(state, acting, false);
            return self
                .primitive
                .search(&mut self.model, state, acting, actions, &mut self.tree);
        }

        // 3. Belief injection: revert the opponent's committed choice to
        // an unresolved placeholder in our view.
        state.mask_hidden_choice(opponent);

        // 4. Opponent-perspective search over the hidden options.
        let opponent_actions = self.model.legal_actions(state, opponent);
        if opponent_actions.is_empty() {
            return Err(DecisionError::NoLegalActions { player: opponent });
        }
        self.build_root(state, acting, true);
        let inferred = self.primitive.search(
            &mut self.model,
            state,
            opponent,
            &opponent_actions,
            &mut self.tree,
        )?;
        if !self.model.config().is_reveal(inferred.template) {
            return Err(DecisionError::NotAReveal {
                player: opponent,
                action: inferred,
            });
        }

        // 5. Redeterminization reconciliation: never force an illegal
        // action into the forward model.
        let substituted = !opponent_actions.contains(&inferred);
        let applied = if substituted {
            warn!(
                "inferred hidden action {:?} illegal under current determinization for {}; \
                 substituting first legal alternative",
                inferred, opponent
            );
            opponent_actions[0].clone()
        } else {
            inferred.clone()
        };

        // 6. Advance the forward model, solely to establish the lookup
        // key / child pointer for step 7.
        self.model.apply(state, opponent, &applied);

        // 7. Final action selection, by topology.
        let score = self.config.score;
        let chosen = match &self.tree {
            SearchTree::Multi(_) => self
                .tree
                .best_action(acting, score)
                .ok_or(DecisionError::NoSearchStatistics { player: acting })?,
            SearchTree::Graph {
                core,
                transpositions,
            } => {
                let key = state.state_key(acting);
                let node = transpositions
                    .lookup(key)
                    .ok_or(DecisionError::MissingTransposition {
                        key,
                        player: acting,
                    })?;
                core.best_action(node, acting, score)
                    .ok_or(DecisionError::NoSearchStatistics { player: acting })?
            }
            SearchTree::Single(core) => {
                let child = core
                    .child_of(core.root(), &applied, acting)
                    .ok_or_else(|| DecisionError::UnexploredBranch {
                        player: acting,
                        action: applied.clone(),
                    })?;
                core.best_action(child, acting, score)
                    .ok_or(DecisionError::NoSearchStatistics { player: acting })?
            }
        };

        // 8. Remember the resolved reveal for the next call's cleanup.
        let record = RevealRecord {
            player: acting,
            inferred,
            applied,
            substituted,
        };
        self.last_reveal = Some(record.clone());
        self.pending = Some(record);

        Ok(chosen)
    }

    /// Build or refresh the root(s) for a new decision.
    ///
    /// Under hidden handling the redeterminization perspective is pinned
    /// to the acting player and the state is resampled from that
    /// perspective; otherwise the perspective defaults to the
    /// root-owning player. Graph topologies rebuild from a fresh root and
    /// reseed their transposition map with exactly one entry, so the node
    /// arena never accumulates nodes the reseeded map can no longer reach.
    fn build_root(&mut self, state: &mut M::State, acting: PlayerId, hidden: bool) {
        let owner = state.active_player();
        let perspective = if hidden { acting } else { owner };

        if hidden {
            debug!(
                "root build: owner {}, redeterminization pinned to {}",
                owner, acting
            );
            state.redeterminize(acting, &mut self.rng);
        }

        match &mut self.tree {
            SearchTree::Multi(cores) => {
                for (_, core) in cores.iter_mut() {
                    core.set_redeterminization_player(perspective);
                }
            }
            SearchTree::Single(core) => {
                if core.root_node().visits == 0 && core.root_node().to_move != owner {
                    core.reset(owner);
                }
                core.set_redeterminization_player(perspective);
            }
            SearchTree::Graph {
                core,
                transpositions,
            } => {
                // Reseeding orphans every node from earlier decisions;
                // rebuilding from a fresh root reclaims them.
                core.reset(owner);
                core.set_redeterminization_player(perspective);
                let key = state.state_key(perspective);
                transpositions.reseed(perspective, key, core.root());
            }
        }
    }

    /// Reset the agent for a new game: discards the tree and any pending
    /// reveal. The pending reveal must never persist across a game reset.
    pub fn reset(&mut self) {
        let player_count = self.model.config().player_count;
        self.tree = SearchTree::for_policy(self.config.policy, player_count, PlayerId::new(0));
        self.pending = None;
        self.last_reveal = None;
    }

    /// The search tree.
    #[must_use]
    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }

    /// The agent configuration.
    #[must_use]
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// The forward model.
    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// The most recently resolved reveal, if any.
    ///
    /// Persists across decisions that resolve nothing new, so it reads as
    /// a replay trail rather than a per-call flag.
    #[must_use]
    pub fn last_reveal(&self) -> Option<&RevealRecord> {
        self.last_reveal.as_ref()
    }

    /// Whether a resolved reveal awaits cleanup at the next decision.
    #[must_use]
    pub fn has_pending_reveal(&self) -> bool {
        self.pending.is_some()
    }
}
