//! State keys for transposition lookup.
//!
//! A `StateKey` is a canonicalized, information-set-respecting fingerprint
//! of a game position, computed by the game from a given player's
//! perspective (`GamePosition::state_key`). Two positions that are
//! indistinguishable from that perspective must produce the same key;
//! positions distinguishable from it must not.

use serde::{Deserialize, Serialize};

/// Fingerprint of a game position from one player's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateKey(pub u64);

impl StateKey {
    /// Create a new state key.
    #[must_use]
    pub const fn new(key: u64) -> Self {
        Self(key)
    }

    /// Get the raw key value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for StateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}
