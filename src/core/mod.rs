//! Core types: players, entities, actions, state keys, RNG, configuration.
//!
//! This module contains the fundamental building blocks that are
//! game-agnostic. Games configure these via `GameConfig` rather than
//! modifying the core.

pub mod action;
pub mod config;
pub mod entity;
pub mod key;
pub mod player;
pub mod rng;

pub use action::{Action, RevealRecord};
pub use config::{GameConfig, TemplateConfig, TemplateId, TemplateKind};
pub use entity::EntityId;
pub use key::StateKey;
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
