//! Global host configuration: typed view and partial update.
//!
//! The global file is the source of truth for provider topology and default
//! agent routing. These are pure types; parsing and persistence live in
//! `clawkit-store`.

use serde::{Deserialize, Serialize};

/// Default sub-agent concurrency ceiling.
pub const DEFAULT_SUBAGENT_MAX_CONCURRENT: u32 = 8;
/// Default sub-agent spawn depth.
pub const DEFAULT_SUBAGENT_MAX_SPAWN_DEPTH: u32 = 1;
/// Default children per agent.
pub const DEFAULT_SUBAGENT_MAX_CHILDREN: u32 = 5;

/// Sub-agent spawning limits from the global file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubagentLimits {
    pub max_concurrent: u32,
    pub max_spawn_depth: u32,
    pub max_children_per_agent: u32,
}

impl Default for SubagentLimits {
    fn default() -> Self {
        Self {
            max_concurrent: DEFAULT_SUBAGENT_MAX_CONCURRENT,
            max_spawn_depth: DEFAULT_SUBAGENT_MAX_SPAWN_DEPTH,
            max_children_per_agent: DEFAULT_SUBAGENT_MAX_CHILDREN,
        }
    }
}

/// Normalized view of the global configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfigView {
    /// Provider names from the global provider map, sorted.
    pub provider_names: Vec<String>,
    /// Default model for agents.
    pub primary_model: Option<String>,
    /// Ordered fallback models tried when the primary is unavailable.
    pub fallback_models: Vec<String>,
    /// Models agents are allowed to route to.
    pub allowed_models: Vec<String>,
    /// Concurrency ceiling for top-level agents.
    pub max_concurrent: Option<u32>,
    pub subagents: SubagentLimits,
}

impl GlobalConfigView {
    /// Whether the configured primary model appears in the allowed list.
    ///
    /// A primary outside the list is tolerated (legacy values exist in the
    /// wild); callers render it as "not in list" rather than rejecting.
    #[must_use]
    pub fn primary_in_allowed(&self) -> bool {
        match &self.primary_model {
            Some(primary) => self.allowed_models.iter().any(|m| m == primary),
            None => true,
        }
    }
}

/// Sparse update to the global configuration.
///
/// Each field is `Option<Option<T>>`:
/// - `None` = don't change this field
/// - `Some(None)` = clear the setting
/// - `Some(Some(value))` = set the value
///
/// Sub-agent limits are plain `Option` because the host always keeps the
/// section populated; clearing an individual limit is not meaningful.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfigUpdate {
    pub primary_model: Option<Option<String>>,
    pub fallback_models: Option<Option<Vec<String>>>,
    pub max_concurrent: Option<Option<u32>>,
    pub subagent_max_concurrent: Option<u32>,
    pub subagent_max_spawn_depth: Option<u32>,
    pub subagent_max_children_per_agent: Option<u32>,
}

impl GlobalConfigUpdate {
    /// True if the update carries no changes at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.primary_model.is_none()
            && self.fallback_models.is_none()
            && self.max_concurrent.is_none()
            && self.subagent_max_concurrent.is_none()
            && self.subagent_max_spawn_depth.is_none()
            && self.subagent_max_children_per_agent.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subagent_defaults() {
        let limits = SubagentLimits::default();
        assert_eq!(limits.max_concurrent, 8);
        assert_eq!(limits.max_spawn_depth, 1);
        assert_eq!(limits.max_children_per_agent, 5);
    }

    #[test]
    fn test_primary_in_allowed() {
        let mut view = GlobalConfigView {
            primary_model: Some("anthropic/claude-sonnet-4-5".into()),
            allowed_models: vec!["anthropic/claude-sonnet-4-5".into()],
            ..Default::default()
        };
        assert!(view.primary_in_allowed());

        view.primary_model = Some("openai/gpt-5-mini".into());
        assert!(!view.primary_in_allowed());

        // No primary configured is not a violation
        view.primary_model = None;
        assert!(view.primary_in_allowed());
    }

    #[test]
    fn test_update_is_empty() {
        assert!(GlobalConfigUpdate::default().is_empty());
        let update = GlobalConfigUpdate {
            primary_model: Some(None),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}
