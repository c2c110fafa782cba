//! Entity identification.
//!
//! Game objects referenced by actions (cards, tokens) carry an `EntityId`.
//! The decision layer never interprets entity IDs; they are opaque
//! pointers owned by the game's forward model.

use serde::{Deserialize, Serialize};

/// Unique identifier for a game entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Create a new entity ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}
