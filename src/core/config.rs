//! Game configuration: action templates and their kinds.
//!
//! Games configure the decision layer at startup by registering their
//! action templates. The layer never hardcodes action types - in
//! particular, which templates are reveal/commit actions (the kind that
//! exposes a previously hidden choice) is declared here, not inferred.

use serde::{Deserialize, Serialize};

/// Action template identifier. Games define what templates exist.
///
/// The engine doesn't interpret template IDs - they're opaque identifiers.
/// Games assign meaning via `TemplateConfig`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateId(pub u16);

impl TemplateId {
    /// Create a new template ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Template({})", self.0)
    }
}

/// Classification of an action template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateKind {
    /// Ordinary action with no information-revealing effect.
    Standard,
    /// Reveal/commit action: resolving it exposes a previously hidden
    /// choice in the forward model.
    Reveal,
}

/// Configuration for a single action template.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Unique identifier for this template.
    pub id: TemplateId,

    /// Human-readable name (for debugging/display).
    pub name: String,

    /// Template classification.
    pub kind: TemplateKind,
}

impl TemplateConfig {
    /// Create a standard template configuration.
    pub fn new(id: TemplateId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: TemplateKind::Standard,
        }
    }

    /// Mark this template as a reveal/commit action.
    #[must_use]
    pub fn reveal(mut self) -> Self {
        self.kind = TemplateKind::Reveal;
        self
    }
}

/// Game configuration shared by the forward model and the decision layer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players.
    pub player_count: usize,

    /// Registered action templates.
    pub templates: Vec<TemplateConfig>,
}

impl GameConfig {
    /// Create a configuration with no templates registered.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");

        Self {
            player_count,
            templates: Vec::new(),
        }
    }

    /// Register a template.
    #[must_use]
    pub fn with_template(mut self, template: TemplateConfig) -> Self {
        self.templates.push(template);
        self
    }

    /// Look up a template's kind.
    ///
    /// Unregistered templates are treated as `Standard`.
    #[must_use]
    pub fn template_kind(&self, id: TemplateId) -> TemplateKind {
        self.templates
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.kind)
            .unwrap_or(TemplateKind::Standard)
    }

    /// Check whether a template is a reveal/commit action.
    #[must_use]
    pub fn is_reveal(&self, id: TemplateId) -> bool {
        self.template_kind(id) == TemplateKind::Reveal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_kind_lookup() {
        let config = GameConfig::new(2)
            .with_template(TemplateConfig::new(TemplateId::new(0), "pass"))
            .with_template(TemplateConfig::new(TemplateId::new(1), "commit").reveal());

        assert_eq!(config.template_kind(TemplateId::new(0)), TemplateKind::Standard);
        assert_eq!(config.template_kind(TemplateId::new(1)), TemplateKind::Reveal);
        assert!(config.is_reveal(TemplateId::new(1)));
        assert!(!config.is_reveal(TemplateId::new(0)));
    }

    #[test]
    fn test_unregistered_template_is_standard() {
        let config = GameConfig::new(2);
        assert_eq!(config.template_kind(TemplateId::new(42)), TemplateKind::Standard);
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::new(2)
            .with_template(TemplateConfig::new(TemplateId::new(1), "commit").reveal());

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.player_count, 2);
        assert!(deserialized.is_reveal(TemplateId::new(1)));
    }
}
