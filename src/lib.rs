//! # hidden-mcts
//!
//! A hidden-information decision layer for MCTS in two-player card games.
//!
//! ## The problem
//!
//! A search tree built from the acting player's point of view must still
//! make valid decisions when the opponent's next move is committed but
//! concealed (e.g. a face-down card each turn). This crate wraps a
//! pre-existing search primitive with the bookkeeping that makes that
//! work:
//!
//! - **Topologies**: one shared tree, per-player trees, or a shared graph
//!   with transposition lookup, selected per match via
//!   `OpponentTreePolicy`.
//! - **Hidden-move inference**: when the opponent holds an unresolved
//!   hidden choice, the agent masks it, runs a nested search from the
//!   opponent's perspective to infer it, reconciles the inference against
//!   what the current determinization actually allows, and advances the
//!   forward model consistently with the tree.
//! - **Perspective pinning**: redeterminization always samples from the
//!   acting player's information set, never the tree owner's.
//!
//! ## What this crate does NOT do
//!
//! The generic MCTS loop, the game's rules, and game-state representation
//! are external collaborators behind traits (`SearchPrimitive`,
//! `ForwardModel`, `GamePosition`). Utility estimation inside rollouts is
//! the primitive's own concern.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hidden_mcts::{AgentConfig, DecisionAgent, OpponentTreePolicy};
//!
//! let config = AgentConfig::default().with_policy(OpponentTreePolicy::Graph);
//! let mut agent = DecisionAgent::new(model, primitive, config);
//!
//! let actions = /* legal actions for the player to move */;
//! let action = agent.choose_action(&mut state, &actions)?;
//! ```
//!
//! ## Modules
//!
//! - `core`: players, entities, actions, state keys, RNG, configuration
//! - `rules`: `GamePosition` / `ForwardModel` contracts
//! - `search`: nodes, tree topologies, transposition map, primitive seam
//! - `agent`: the hidden-information decision agent
//! - `error`: decision-error taxonomy

pub mod agent;
pub mod core;
pub mod error;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    Action, EntityId, GameConfig, GameRng, PlayerId, PlayerMap, RevealRecord, StateKey,
    TemplateConfig, TemplateId, TemplateKind,
};

pub use crate::rules::{ForwardModel, GamePosition, GameResult};

pub use crate::search::{
    ActionScore, Branch, NodeId, OpponentTreePolicy, SearchNode, SearchPrimitive, SearchTree,
    TranspositionMap, TreeCore,
};

pub use crate::agent::{AgentConfig, DecisionAgent};

pub use crate::error::{DecisionError, Result};
