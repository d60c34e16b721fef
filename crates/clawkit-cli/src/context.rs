//! CLI context: store wiring shared by config/agent handlers.

use std::path::PathBuf;

use clawkit_store::{AgentStore, ConfigStore, StoreError, SyncService};

/// Stores resolved once at startup, from `--root` or the home default.
pub struct CliContext {
    pub config: ConfigStore,
    pub agents: AgentStore,
}

impl CliContext {
    pub fn new(root_override: Option<PathBuf>) -> Result<Self, StoreError> {
        match root_override {
            Some(root) => Ok(Self {
                config: ConfigStore::new(root.join("openclaw.json")),
                agents: AgentStore::new(root.join("agents")),
            }),
            None => Ok(Self {
                config: ConfigStore::from_home()?,
                agents: AgentStore::from_home()?,
            }),
        }
    }

    /// Sync service over the same stores.
    #[must_use]
    pub fn sync_service(&self) -> SyncService {
        SyncService::new(self.config.clone(), self.agents.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_override_layout() {
        let ctx = CliContext::new(Some(PathBuf::from("/tmp/clawroot"))).unwrap();
        assert_eq!(
            ctx.config.path(),
            std::path::Path::new("/tmp/clawroot/openclaw.json")
        );
        assert_eq!(
            ctx.agents.agents_dir(),
            std::path::Path::new("/tmp/clawroot/agents")
        );
    }
}
