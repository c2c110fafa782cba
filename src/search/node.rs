//! Search-tree node and branch structures.
//!
//! Uses arena-based allocation with index references (NodeId): nodes in
//! graph topologies can be reached along multiple paths, so they are
//! addressed by stable handles rather than owned pointers, and the
//! transposition map stores handles too.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Action, PlayerId, PlayerMap};

/// Index into the `TreeCore` node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// Branch representing an action out of a node.
///
/// The same action can lead to different children depending on whose turn
/// follows, so each branch carries one child slot per player. Invariant:
/// `slots[p]` is populated only after this branch has been explored from
/// this node with `p` to move next.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Branch {
    /// The action this branch represents.
    pub action: Action,

    /// Child node per player-to-move-next (NONE if not yet explored).
    pub slots: PlayerMap<NodeId>,

    /// Visit count for this action.
    pub visits: u32,

    /// Total reward accumulated for this action (per player).
    pub total_reward: PlayerMap<f64>,
}

impl Branch {
    /// Create a new branch with the given action.
    pub fn new(action: Action, player_count: usize) -> Self {
        Self {
            action,
            slots: PlayerMap::with_value(player_count, NodeId::NONE),
            visits: 0,
            total_reward: PlayerMap::with_value(player_count, 0.0),
        }
    }

    /// Get the mean reward for a player.
    #[must_use]
    pub fn mean_reward(&self, player: PlayerId) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.total_reward[player] / self.visits as f64
        }
    }

    /// The child reached when `next_player` is to move after this action,
    /// if that combination has been explored.
    #[must_use]
    pub fn child(&self, next_player: PlayerId) -> Option<NodeId> {
        let slot = self.slots[next_player];
        if slot.is_none() {
            None
        } else {
            Some(slot)
        }
    }
}

/// A node in the search tree or graph.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchNode {
    /// Player to move at this node.
    pub to_move: PlayerId,

    /// Total visits to this node.
    pub visits: u32,

    /// Outgoing branches (explored actions).
    /// SmallVec optimizes for typical branching factor < 8.
    pub branches: SmallVec<[Branch; 8]>,
}

impl SearchNode {
    /// Create a new node.
    pub fn new(to_move: PlayerId) -> Self {
        Self {
            to_move,
            visits: 0,
            branches: SmallVec::new(),
        }
    }

    /// Find the branch for an action.
    #[must_use]
    pub fn branch(&self, action: &Action) -> Option<&Branch> {
        self.branches.iter().find(|b| &b.action == action)
    }

    /// Find the branch for an action, mutably.
    pub fn branch_mut(&mut self, action: &Action) -> Option<&mut Branch> {
        self.branches.iter_mut().find(|b| &b.action == action)
    }

    /// Find or add a branch for an action, returning its index.
    pub fn find_or_add_branch(&mut self, action: &Action, player_count: usize) -> usize {
        if let Some(i) = self.branches.iter().position(|b| &b.action == action) {
            return i;
        }
        self.branches.push(Branch::new(action.clone(), player_count));
        self.branches.len() - 1
    }

    /// Get the branch with the most visits.
    #[must_use]
    pub fn best_branch_by_visits(&self) -> Option<&Branch> {
        self.branches.iter().max_by_key(|b| b.visits)
    }

    /// Get the branch with the highest mean reward for a player.
    #[must_use]
    pub fn best_branch_by_reward(&self, player: PlayerId) -> Option<&Branch> {
        self.branches.iter().max_by(|a, b| {
            a.mean_reward(player)
                .partial_cmp(&b.mean_reward(player))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }
}
