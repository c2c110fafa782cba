//! Game rules contracts: `GamePosition`, `ForwardModel`, `GameResult`.

pub mod engine;

pub use engine::{ForwardModel, GamePosition, GameResult};
