//! Transposition map for graph-search topologies.
//!
//! Maps perspective-parameterized state keys to node handles, collapsing
//! repeated states into one node. Keys computed from different
//! perspectives are incompatible: within one decision's search the same
//! key always resolves to the same node, and the whole map is cleared and
//! reseeded whenever the redeterminization perspective changes, because
//! stale entries computed from the wrong perspective would leak
//! information or mis-attribute statistics.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::node::NodeId;
use crate::core::{PlayerId, StateKey};

/// Key-to-node lookup for graph search (MCGS).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TranspositionMap {
    entries: FxHashMap<StateKey, NodeId>,
    perspective: PlayerId,
}

impl TranspositionMap {
    /// Create an empty map with keys computed from `perspective`.
    #[must_use]
    pub fn new(perspective: PlayerId) -> Self {
        Self {
            entries: FxHashMap::default(),
            perspective,
        }
    }

    /// The perspective this map's keys were computed from.
    #[must_use]
    pub fn perspective(&self) -> PlayerId {
        self.perspective
    }

    /// Insert a key-to-node entry.
    pub fn insert(&mut self, key: StateKey, node: NodeId) {
        self.entries.insert(key, node);
    }

    /// Look up the node for a key.
    #[must_use]
    pub fn lookup(&self, key: StateKey) -> Option<NodeId> {
        self.entries.get(&key).copied()
    }

    /// Clear the map and reseed it with exactly one entry under a new
    /// perspective.
    pub fn reseed(&mut self, perspective: PlayerId, key: StateKey, root: NodeId) {
        self.entries.clear();
        self.perspective = perspective;
        self.entries.insert(key, root);
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut map = TranspositionMap::new(PlayerId::new(0));
        map.insert(StateKey::new(1), NodeId::new(0));
        map.insert(StateKey::new(2), NodeId::new(5));

        assert_eq!(map.lookup(StateKey::new(1)), Some(NodeId::new(0)));
        assert_eq!(map.lookup(StateKey::new(2)), Some(NodeId::new(5)));
        assert_eq!(map.lookup(StateKey::new(3)), None);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_reseed_leaves_exactly_one_entry() {
        let mut map = TranspositionMap::new(PlayerId::new(0));
        map.insert(StateKey::new(1), NodeId::new(0));
        map.insert(StateKey::new(2), NodeId::new(5));

        map.reseed(PlayerId::new(1), StateKey::new(9), NodeId::new(0));

        assert_eq!(map.len(), 1);
        assert_eq!(map.perspective(), PlayerId::new(1));
        assert_eq!(map.lookup(StateKey::new(9)), Some(NodeId::new(0)));
        assert_eq!(map.lookup(StateKey::new(1)), None);
    }

    #[test]
    fn test_same_key_same_node() {
        let mut map = TranspositionMap::new(PlayerId::new(0));
        map.insert(StateKey::new(7), NodeId::new(3));

        assert_eq!(map.lookup(StateKey::new(7)), map.lookup(StateKey::new(7)));
    }
}
