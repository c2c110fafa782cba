//! Tree management for hidden-information search.
//!
//! ## Overview
//!
//! - **Topologies**: one shared tree, per-player trees, or a shared graph
//!   with state-deduplicating transposition lookup, selected by
//!   `OpponentTreePolicy` and wrapped in the `SearchTree` enum.
//! - **Arena nodes**: nodes live in a flat arena addressed by `NodeId`
//!   handles; branch child slots are indexed by player-to-move-next.
//! - **Search seam**: the actual simulation loop is an external
//!   collaborator behind the `SearchPrimitive` trait.

pub mod node;
pub mod policy;
pub mod primitive;
pub mod transposition;
pub mod tree;

pub use node::{Branch, NodeId, SearchNode};
pub use policy::{ActionScore, OpponentTreePolicy};
pub use primitive::SearchPrimitive;
pub use transposition::TranspositionMap;
pub use tree::{SearchTree, TreeCore};
