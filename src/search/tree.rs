//! Arena-based search tree and the topology variants built on it.
//!
//! `TreeCore` is a flat `Vec<SearchNode>` with index-based references for
//! efficiency and serializability. `SearchTree` wraps one or more cores
//! into the topology the active opponent-model policy requires.

use serde::{Deserialize, Serialize};

use super::node::{NodeId, SearchNode};
use super::policy::{ActionScore, OpponentTreePolicy};
use super::transposition::TranspositionMap;
use crate::core::{Action, PlayerId, PlayerMap};

/// Arena of search nodes with a root handle.
///
/// Carries the redeterminization perspective for the current decision:
/// the player whose information set constrains resampling. Defaults to
/// the root-owning player; the decision agent pins it to the acting
/// player when hidden-information handling applies.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TreeCore {
    /// All nodes reachable from the root (plus garbage awaiting reroot).
    nodes: Vec<SearchNode>,

    /// The current root.
    root: NodeId,

    /// Number of players in the game.
    player_count: usize,

    /// Perspective that redeterminization must respect.
    redeterminization_player: PlayerId,
}

impl TreeCore {
    /// Create a new core with a root node for `root_player`.
    pub fn new(root_player: PlayerId, player_count: usize) -> Self {
        let mut core = Self {
            nodes: Vec::with_capacity(1024),
            root: NodeId::new(0),
            player_count,
            redeterminization_player: root_player,
        };
        core.nodes.push(SearchNode::new(root_player));
        core
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node, returning its ID.
    pub fn alloc(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the arena is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Player count for this core.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// The perspective redeterminization must respect.
    #[must_use]
    pub fn redeterminization_player(&self) -> PlayerId {
        self.redeterminization_player
    }

    /// Pin the redeterminization perspective.
    pub fn set_redeterminization_player(&mut self, player: PlayerId) {
        self.redeterminization_player = player;
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &SearchNode {
        self.get(self.root)
    }

    /// Get the root node mutably.
    pub fn root_node_mut(&mut self) -> &mut SearchNode {
        self.get_mut(self.root)
    }

    /// Record that `action` from `parent` with `next_player` to move next
    /// leads to `child`.
    pub fn link_child(
        &mut self,
        parent: NodeId,
        action: &Action,
        next_player: PlayerId,
        child: NodeId,
    ) {
        let player_count = self.player_count;
        let node = self.get_mut(parent);
        let idx = node.find_or_add_branch(action, player_count);
        node.branches[idx].slots[next_player] = child;
    }

    /// The child reached from `node` via `(action, next_player)`, if that
    /// branch has been explored.
    #[must_use]
    pub fn child_of(&self, node: NodeId, action: &Action, next_player: PlayerId) -> Option<NodeId> {
        self.get(node).branch(action).and_then(|b| b.child(next_player))
    }

    /// Promote `new_root` to be the root.
    ///
    /// Statistics of the promoted subtree are retained; ancestors and
    /// sibling subtrees become unreachable and are discarded by
    /// compacting the arena. Handles held outside the core (e.g. in a
    /// transposition map) are invalidated — graph topologies never
    /// reroot.
    pub fn reroot(&mut self, new_root: NodeId) {
        let mut remap = vec![u32::MAX; self.nodes.len()];
        let mut order: Vec<NodeId> = Vec::new();
        let mut queue = std::collections::VecDeque::new();

        queue.push_back(new_root);
        remap[new_root.0 as usize] = 0;
        order.push(new_root);

        while let Some(id) = queue.pop_front() {
            for branch in &self.get(id).branches {
                for (_, slot) in branch.slots.iter() {
                    if !slot.is_none() && remap[slot.0 as usize] == u32::MAX {
                        remap[slot.0 as usize] = order.len() as u32;
                        order.push(*slot);
                        queue.push_back(*slot);
                    }
                }
            }
        }

        let mut nodes = Vec::with_capacity(order.len());
        for id in &order {
            let mut node = self.nodes[id.0 as usize].clone();
            for branch in &mut node.branches {
                for (_, slot) in branch.slots.iter_mut() {
                    if !slot.is_none() {
                        *slot = NodeId::new(remap[slot.0 as usize]);
                    }
                }
            }
            nodes.push(node);
        }

        self.nodes = nodes;
        self.root = NodeId::new(0);
    }

    /// Clear the core and reset with a fresh root.
    pub fn reset(&mut self, root_player: PlayerId) {
        self.nodes.clear();
        self.nodes.push(SearchNode::new(root_player));
        self.root = NodeId::new(0);
        self.redeterminization_player = root_player;
    }

    /// Read the statistically-best action at `node` for `player` under
    /// the given scoring rule.
    #[must_use]
    pub fn best_action(&self, node: NodeId, player: PlayerId, score: ActionScore) -> Option<Action> {
        let node = self.get(node);
        let branch = match score {
            ActionScore::MostVisited => node.best_branch_by_visits(),
            ActionScore::HighestMean => node.best_branch_by_reward(player),
        };
        branch.map(|b| b.action.clone())
    }
}

/// Search tree shaped by the active opponent-model policy.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum SearchTree {
    /// One shared tree (SelfOnly, OneTree).
    Single(TreeCore),
    /// One independent tree per player (MultiTree).
    Multi(PlayerMap<TreeCore>),
    /// Shared graph addressed by state key (Graph, GraphSelfOnly).
    Graph {
        core: TreeCore,
        transpositions: TranspositionMap,
    },
}

impl SearchTree {
    /// Build the topology-appropriate root(s) for a policy.
    #[must_use]
    pub fn for_policy(
        policy: OpponentTreePolicy,
        player_count: usize,
        root_player: PlayerId,
    ) -> Self {
        if policy.per_player_trees() {
            SearchTree::Multi(PlayerMap::new(player_count, |p| {
                TreeCore::new(p, player_count)
            }))
        } else if policy.uses_transpositions() {
            SearchTree::Graph {
                core: TreeCore::new(root_player, player_count),
                transpositions: TranspositionMap::new(root_player),
            }
        } else {
            SearchTree::Single(TreeCore::new(root_player, player_count))
        }
    }

    /// The core relevant to `player`'s decisions.
    ///
    /// For Multi that is the player's own tree; Single and Graph share
    /// one core.
    #[must_use]
    pub fn core_for(&self, player: PlayerId) -> &TreeCore {
        match self {
            SearchTree::Single(core) => core,
            SearchTree::Multi(cores) => &cores[player],
            SearchTree::Graph { core, .. } => core,
        }
    }

    /// Mutable variant of [`core_for`](Self::core_for).
    pub fn core_mut_for(&mut self, player: PlayerId) -> &mut TreeCore {
        match self {
            SearchTree::Single(core) => core,
            SearchTree::Multi(cores) => &mut cores[player],
            SearchTree::Graph { core, .. } => core,
        }
    }

    /// The transposition map, for graph topologies.
    #[must_use]
    pub fn transpositions(&self) -> Option<&TranspositionMap> {
        match self {
            SearchTree::Graph { transpositions, .. } => Some(transpositions),
            _ => None,
        }
    }

    /// Mutable variant of [`transpositions`](Self::transpositions).
    pub fn transpositions_mut(&mut self) -> Option<&mut TranspositionMap> {
        match self {
            SearchTree::Graph { transpositions, .. } => Some(transpositions),
            _ => None,
        }
    }

    /// Update the tree's notion of the current position after `action`
    /// was taken and `next_player` is to move.
    ///
    /// - Single: promote the child reached via `(action, next_player)` to
    ///   root, retaining its statistics. If that branch was never
    ///   explored there is nothing to retain and the core resets.
    /// - Multi: reset only the opponent's root; its subtree reflects a
    ///   position no longer meaningfully reachable.
    /// - Graph: no-op — the next decision looks up nodes by state key.
    pub fn advance(&mut self, action: &Action, next_player: PlayerId) {
        match self {
            SearchTree::Single(core) => {
                match core.child_of(core.root(), action, next_player) {
                    Some(child) => core.reroot(child),
                    None => core.reset(next_player),
                }
            }
            SearchTree::Multi(cores) => {
                let opponent = next_player.opponent();
                cores[opponent].reset(opponent);
            }
            SearchTree::Graph { .. } => {}
        }
    }

    /// Read the statistically-best action for `player` from the relevant
    /// root.
    #[must_use]
    pub fn best_action(&self, player: PlayerId, score: ActionScore) -> Option<Action> {
        let core = self.core_for(player);
        core.best_action(core.root(), player, score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TemplateId;

    fn action(t: u16) -> Action {
        Action::new(TemplateId::new(t))
    }

    #[test]
    fn test_core_new() {
        let core = TreeCore::new(PlayerId::new(0), 2);

        assert_eq!(core.len(), 1);
        assert!(!core.is_empty());
        assert_eq!(core.player_count(), 2);
        assert_eq!(core.root(), NodeId::new(0));
        assert_eq!(core.redeterminization_player(), PlayerId::new(0));
    }

    #[test]
    fn test_core_alloc_and_link() {
        let mut core = TreeCore::new(PlayerId::new(0), 2);

        let child = core.alloc(SearchNode::new(PlayerId::new(1)));
        core.link_child(core.root(), &action(1), PlayerId::new(1), child);

        assert_eq!(core.len(), 2);
        assert_eq!(
            core.child_of(core.root(), &action(1), PlayerId::new(1)),
            Some(child)
        );
        assert_eq!(core.child_of(core.root(), &action(1), PlayerId::new(0)), None);
        assert_eq!(core.child_of(core.root(), &action(2), PlayerId::new(1)), None);
    }

    #[test]
    fn test_core_reroot_retains_statistics() {
        let mut core = TreeCore::new(PlayerId::new(0), 2);

        let keep = core.alloc(SearchNode::new(PlayerId::new(1)));
        let drop = core.alloc(SearchNode::new(PlayerId::new(1)));
        core.link_child(core.root(), &action(1), PlayerId::new(1), keep);
        core.link_child(core.root(), &action(2), PlayerId::new(1), drop);

        // A grandchild under the kept node
        let grandchild = core.alloc(SearchNode::new(PlayerId::new(0)));
        core.link_child(keep, &action(3), PlayerId::new(0), grandchild);

        core.get_mut(keep).visits = 77;

        core.reroot(keep);

        assert_eq!(core.len(), 2); // kept node + grandchild
        assert_eq!(core.root_node().visits, 77);
        assert_eq!(core.root_node().to_move, PlayerId::new(1));
        assert!(core
            .child_of(core.root(), &action(3), PlayerId::new(0))
            .is_some());
    }

    #[test]
    fn test_core_reset() {
        let mut core = TreeCore::new(PlayerId::new(0), 2);
        core.alloc(SearchNode::new(PlayerId::new(1)));
        core.set_redeterminization_player(PlayerId::new(1));

        core.reset(PlayerId::new(1));

        assert_eq!(core.len(), 1);
        assert_eq!(core.root_node().to_move, PlayerId::new(1));
        assert_eq!(core.redeterminization_player(), PlayerId::new(1));
    }

    #[test]
    fn test_core_best_action_by_score() {
        let mut core = TreeCore::new(PlayerId::new(0), 2);
        let root = core.root();

        let i1 = core.get_mut(root).find_or_add_branch(&action(1), 2);
        core.get_mut(root).branches[i1].visits = 10;
        core.get_mut(root).branches[i1].total_reward[PlayerId::new(0)] = 5.0;

        let i2 = core.get_mut(root).find_or_add_branch(&action(2), 2);
        core.get_mut(root).branches[i2].visits = 20;
        core.get_mut(root).branches[i2].total_reward[PlayerId::new(0)] = 8.0;

        assert_eq!(
            core.best_action(root, PlayerId::new(0), ActionScore::MostVisited),
            Some(action(2))
        );
        assert_eq!(
            core.best_action(root, PlayerId::new(0), ActionScore::HighestMean),
            Some(action(1))
        );
    }

    #[test]
    fn test_for_policy_shapes() {
        let single = SearchTree::for_policy(OpponentTreePolicy::OneTree, 2, PlayerId::new(0));
        assert!(matches!(single, SearchTree::Single(_)));
        assert!(single.transpositions().is_none());

        let multi = SearchTree::for_policy(OpponentTreePolicy::MultiTree, 2, PlayerId::new(0));
        assert!(matches!(multi, SearchTree::Multi(_)));
        assert_eq!(
            multi.core_for(PlayerId::new(1)).root_node().to_move,
            PlayerId::new(1)
        );

        let graph = SearchTree::for_policy(OpponentTreePolicy::Graph, 2, PlayerId::new(0));
        assert!(matches!(graph, SearchTree::Graph { .. }));
        assert!(graph.transpositions().is_some());
    }

    #[test]
    fn test_advance_single_promotes_child() {
        let mut tree = SearchTree::for_policy(OpponentTreePolicy::OneTree, 2, PlayerId::new(0));

        let core = tree.core_mut_for(PlayerId::new(0));
        let child = core.alloc(SearchNode::new(PlayerId::new(0)));
        let root = core.root();
        core.link_child(root, &action(1), PlayerId::new(0), child);
        core.get_mut(child).visits = 9;

        tree.advance(&action(1), PlayerId::new(0));

        assert_eq!(tree.core_for(PlayerId::new(0)).root_node().visits, 9);
    }

    #[test]
    fn test_advance_single_unexplored_resets() {
        let mut tree = SearchTree::for_policy(OpponentTreePolicy::OneTree, 2, PlayerId::new(0));

        tree.advance(&action(5), PlayerId::new(1));

        let core = tree.core_for(PlayerId::new(1));
        assert_eq!(core.len(), 1);
        assert_eq!(core.root_node().to_move, PlayerId::new(1));
    }

    #[test]
    fn test_advance_multi_resets_only_opponent() {
        let mut tree = SearchTree::for_policy(OpponentTreePolicy::MultiTree, 2, PlayerId::new(0));

        // Grow both trees a little
        for p in [PlayerId::new(0), PlayerId::new(1)] {
            let core = tree.core_mut_for(p);
            core.alloc(SearchNode::new(p));
            core.root_node_mut().visits = 5;
        }

        // Player 0 acts next; player 1's tree is the one reset
        tree.advance(&action(1), PlayerId::new(0));

        assert_eq!(tree.core_for(PlayerId::new(0)).root_node().visits, 5);
        assert_eq!(tree.core_for(PlayerId::new(0)).len(), 2);
        assert_eq!(tree.core_for(PlayerId::new(1)).root_node().visits, 0);
        assert_eq!(tree.core_for(PlayerId::new(1)).len(), 1);
    }

    #[test]
    fn test_advance_graph_is_noop() {
        let mut tree = SearchTree::for_policy(OpponentTreePolicy::Graph, 2, PlayerId::new(0));

        let core = tree.core_mut_for(PlayerId::new(0));
        core.alloc(SearchNode::new(PlayerId::new(1)));
        let before = core.len();

        tree.advance(&action(1), PlayerId::new(1));

        assert_eq!(tree.core_for(PlayerId::new(0)).len(), before);
    }

    #[test]
    fn test_tree_serialization() {
        let mut tree = SearchTree::for_policy(OpponentTreePolicy::OneTree, 2, PlayerId::new(0));
        tree.core_mut_for(PlayerId::new(0)).root_node_mut().visits = 50;

        let json = serde_json::to_string(&tree).unwrap();
        let deserialized: SearchTree = serde_json::from_str(&json).unwrap();

        assert_eq!(
            deserialized.core_for(PlayerId::new(0)).root_node().visits,
            50
        );
    }
}
