//! Action representation: template + entity pointers.
//!
//! Actions are compositional: a template (the "verb") plus entity pointers
//! (the "nouns"). For example:
//! - "Pass" = template only, no pointers
//! - "Play card X" = template + 1 pointer (the card)
//! - "Commit hidden card X" = reveal template + 1 pointer
//!
//! Games define their templates via `TemplateConfig`. The decision layer
//! doesn't interpret templates beyond their declared `TemplateKind`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::TemplateId;
use super::entity::EntityId;
use super::player::PlayerId;

/// A complete game action.
///
/// Actions consist of:
/// - A template ID (the type of action)
/// - Zero or more entity pointers (targets, sources, etc.)
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// The action template (type of action).
    pub template: TemplateId,

    /// Entity pointers for this action.
    /// SmallVec optimizes for 0-3 pointers (common case) without heap allocation.
    pub pointers: SmallVec<[EntityId; 3]>,
}

impl Action {
    /// Create an action with no pointers.
    #[must_use]
    pub fn new(template: TemplateId) -> Self {
        Self {
            template,
            pointers: SmallVec::new(),
        }
    }

    /// Create an action with the given pointers.
    #[must_use]
    pub fn with_pointers(template: TemplateId, pointers: &[EntityId]) -> Self {
        Self {
            template,
            pointers: SmallVec::from_slice(pointers),
        }
    }

    /// Get the number of pointers.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }
}

/// Record of one resolved hidden choice, kept for diagnostics and replay.
///
/// `inferred` is what the opponent-perspective search produced; `applied`
/// is what was actually driven through the forward model after
/// redeterminization reconciliation. They differ exactly when
/// `substituted` is true.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealRecord {
    /// The player who was deciding when the hidden choice was resolved.
    pub player: PlayerId,

    /// The hidden action the nested search inferred.
    pub inferred: Action,

    /// The action actually applied to the forward model.
    pub applied: Action,

    /// Whether `applied` replaced an inferred action that was illegal
    /// under the current determinization.
    pub substituted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_no_pointers() {
        let action = Action::new(TemplateId::new(0));

        assert_eq!(action.template, TemplateId::new(0));
        assert_eq!(action.pointer_count(), 0);
    }

    #[test]
    fn test_action_with_pointers() {
        let action = Action::with_pointers(TemplateId::new(1), &[EntityId(5), EntityId(10)]);

        assert_eq!(action.template, TemplateId::new(1));
        assert_eq!(action.pointer_count(), 2);
        assert_eq!(action.pointers[0], EntityId(5));
        assert_eq!(action.pointers[1], EntityId(10));
    }

    #[test]
    fn test_action_equality() {
        let a1 = Action::with_pointers(TemplateId::new(1), &[EntityId(5)]);
        let a2 = Action::with_pointers(TemplateId::new(1), &[EntityId(5)]);
        let a3 = Action::with_pointers(TemplateId::new(1), &[EntityId(6)]);
        let a4 = Action::with_pointers(TemplateId::new(2), &[EntityId(5)]);

        assert_eq!(a1, a2);
        assert_ne!(a1, a3);
        assert_ne!(a1, a4);
    }

    #[test]
    fn test_action_hash() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let hash = |a: &Action| {
            let mut h = DefaultHasher::new();
            a.hash(&mut h);
            h.finish()
        };

        let a1 = Action::with_pointers(TemplateId::new(1), &[EntityId(5)]);
        let a2 = Action::with_pointers(TemplateId::new(1), &[EntityId(5)]);
        let a3 = Action::with_pointers(TemplateId::new(1), &[EntityId(6)]);

        assert_eq!(hash(&a1), hash(&a2));
        assert_ne!(hash(&a1), hash(&a3));
    }

    #[test]
    fn test_reveal_record() {
        let inferred = Action::with_pointers(TemplateId::new(1), &[EntityId(5)]);
        let applied = Action::with_pointers(TemplateId::new(1), &[EntityId(6)]);

        let record = RevealRecord {
            player: PlayerId::new(0),
            inferred: inferred.clone(),
            applied: applied.clone(),
            substituted: true,
        };

        assert_eq!(record.inferred, inferred);
        assert_eq!(record.applied, applied);
        assert!(record.substituted);
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::with_pointers(TemplateId::new(1), &[EntityId(5), EntityId(10)]);
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();

        assert_eq!(action, deserialized);
    }
}
