//! Provider reconciliation between the global file and one agent.
//!
//! Both operations are pure: set comparison over provider names and an
//! additive merge over provider entries. Loading and the atomic write-back
//! are orchestrated by `clawkit-store`.
//!
//! Merge contract: the global file owns connection topology (`baseUrl`,
//! `api`), the agent owns locally-acquired secrets (`apiKey`) and
//! locally-discovered `models`. Providers only the agent knows about are
//! never deleted.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::agent::{AgentConfigView, ProviderSyncStatus};
use crate::provider::ProviderEntry;

/// Compare the global provider name set against an agent's.
///
/// O(n) in provider count, no I/O. Output name lists are sorted so the
/// result is deterministic regardless of input order.
#[must_use]
pub fn compute_sync_status(
    global_names: &[String],
    agent_names: &[String],
) -> ProviderSyncStatus {
    let global_set: BTreeSet<&String> = global_names.iter().collect();
    let agent_set: BTreeSet<&String> = agent_names.iter().collect();

    let missing_in_agent: Vec<String> = global_set
        .difference(&agent_set)
        .map(|s| (*s).clone())
        .collect();
    let extra_in_agent: Vec<String> = agent_set
        .difference(&global_set)
        .map(|s| (*s).clone())
        .collect();
    let in_sync = missing_in_agent.is_empty() && extra_in_agent.is_empty();

    ProviderSyncStatus {
        in_sync,
        global_provider_names: global_set.into_iter().cloned().collect(),
        agent_provider_names: agent_set.into_iter().cloned().collect(),
        missing_in_agent,
        extra_in_agent,
    }
}

/// Merge the global provider definitions into an agent's view.
///
/// For each global provider:
/// - present in the agent: keep the agent's `apiKey` and `models`, take
///   `baseUrl`, `api` and any other global fields;
/// - absent: copy the global entry with no `apiKey` and no `models`.
///
/// Agent-only providers pass through untouched; the merge is additive and
/// corrective, never destructive.
#[must_use]
pub fn apply_sync(
    global_providers: &BTreeMap<String, ProviderEntry>,
    agent: &AgentConfigView,
) -> AgentConfigView {
    let mut merged = agent.providers.clone();

    for (name, global_entry) in global_providers {
        let entry = match agent.providers.get(name) {
            Some(existing) => {
                debug!(provider = %name, "merging existing provider");
                ProviderEntry {
                    base_url: global_entry.base_url.clone(),
                    api_kind: global_entry.api_kind.clone(),
                    api_key: existing.api_key.clone(),
                    models: existing.models.clone(),
                    extra: global_entry.extra.clone(),
                }
            }
            None => {
                debug!(provider = %name, "adding provider from global config");
                ProviderEntry {
                    api_key: None,
                    models: Vec::new(),
                    ..global_entry.clone()
                }
            }
        };
        merged.insert(name.clone(), entry);
    }

    AgentConfigView::new(agent.agent_name.clone(), merged)
}
