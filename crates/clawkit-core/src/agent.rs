//! Per-agent provider configuration and sync status.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::provider::ProviderEntry;

/// Typed view of one agent's provider file.
///
/// `providers` is keyed by provider name; `BTreeMap` keeps iteration and
/// serialization order deterministic. `provider_names` mirrors the keys,
/// sorted, for callers that only need the name list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentConfigView {
    pub agent_name: String,
    pub providers: BTreeMap<String, ProviderEntry>,
    pub provider_names: Vec<String>,
}

impl AgentConfigView {
    /// Build a view from a provider map, deriving the sorted name list.
    #[must_use]
    pub fn new(agent_name: impl Into<String>, providers: BTreeMap<String, ProviderEntry>) -> Self {
        let provider_names = providers.keys().cloned().collect();
        Self {
            agent_name: agent_name.into(),
            providers,
            provider_names,
        }
    }
}

/// Derived comparison of the global provider set against one agent's.
///
/// Never stored; recomputed from fresh loads of both documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSyncStatus {
    pub in_sync: bool,
    pub global_provider_names: Vec<String>,
    pub agent_provider_names: Vec<String>,
    /// Providers defined globally but absent from the agent.
    pub missing_in_agent: Vec<String>,
    /// Providers the agent has that the global file doesn't.
    pub extra_in_agent: Vec<String>,
}
