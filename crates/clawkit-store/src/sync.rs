//! Provider sync orchestration: load, diff, apply, save.
//!
//! The algorithm itself is pure and lives in `clawkit_core::sync`; this
//! service wires it to the stores. Both stores re-read from disk inside
//! each call, so the diff-then-apply window is as small as one call, not
//! one session. Concurrent writers (a user editing by hand) remain a
//! last-writer-wins race by contract.

use tracing::info;

use clawkit_core::{AgentConfigView, ProviderSyncStatus, apply_sync, compute_sync_status};

use crate::agent::AgentStore;
use crate::error::StoreError;
use crate::global::ConfigStore;

/// Reconciles agent provider files against the global configuration.
#[derive(Debug, Clone)]
pub struct SyncService {
    config: ConfigStore,
    agents: AgentStore,
}

impl SyncService {
    #[must_use]
    pub const fn new(config: ConfigStore, agents: AgentStore) -> Self {
        Self { config, agents }
    }

    /// Stores backed by the host defaults under `~/.openclaw`.
    pub fn from_home() -> Result<Self, StoreError> {
        Ok(Self::new(ConfigStore::from_home()?, AgentStore::from_home()?))
    }

    /// Diff the global provider set against one agent's.
    ///
    /// An agent without a provider file compares as having no providers.
    pub fn status(&self, agent_name: &str) -> Result<ProviderSyncStatus, StoreError> {
        let global = self.config.load()?;
        let agent_names = self
            .agents
            .load(agent_name)?
            .map(|view| view.provider_names)
            .unwrap_or_default();
        Ok(compute_sync_status(&global.provider_names, &agent_names))
    }

    /// Merge the global provider definitions into one agent and persist.
    ///
    /// Re-reads both documents immediately before writing. Agent-local
    /// secrets and model lists survive; agent-only providers are never
    /// removed. Returns the merged view as written.
    pub fn sync_agent(&self, agent_name: &str) -> Result<AgentConfigView, StoreError> {
        if !self.agents.agent_exists(agent_name) {
            return Err(StoreError::NotFound(
                self.agents.agents_dir().join(agent_name),
            ));
        }

        let global_providers = self.config.providers()?;
        let agent = self
            .agents
            .load(agent_name)?
            .unwrap_or_else(|| AgentConfigView::new(agent_name, Default::default()));

        let merged = apply_sync(&global_providers, &agent);
        self.agents.save(&merged)?;
        info!(
            agent = agent_name,
            providers = merged.provider_names.len(),
            "agent providers synced from global config"
        );
        Ok(merged)
    }
}
