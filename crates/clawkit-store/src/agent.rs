//! Agent store: enumeration and per-agent provider files.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;

use clawkit_core::{AgentConfigView, ProviderEntry};

use crate::atomic::write_atomic;
use crate::error::StoreError;
use crate::paths::{agent_models_path, agents_dir};

/// Store for per-agent provider files under one agents root.
///
/// Like [`crate::ConfigStore`], stateless between calls: loads re-parse
/// from disk, saves are atomic.
#[derive(Debug, Clone)]
pub struct AgentStore {
    agents_dir: PathBuf,
}

impl AgentStore {
    /// Store backed by an explicit agents directory.
    pub fn new(agents_dir: impl Into<PathBuf>) -> Self {
        Self {
            agents_dir: agents_dir.into(),
        }
    }

    /// Store backed by the host default, `~/.openclaw/agents`.
    pub fn from_home() -> Result<Self, StoreError> {
        Ok(Self::new(agents_dir()?))
    }

    #[must_use]
    pub fn agents_dir(&self) -> &Path {
        &self.agents_dir
    }

    /// Provider file path for one agent.
    #[must_use]
    pub fn models_path(&self, agent_name: &str) -> PathBuf {
        agent_models_path(&self.agents_dir, agent_name)
    }

    /// Whether the agent's directory exists.
    #[must_use]
    pub fn agent_exists(&self, agent_name: &str) -> bool {
        self.agents_dir.join(agent_name).is_dir()
    }

    /// Enumerate agent names: every subdirectory of the agents root, sorted.
    ///
    /// An agent without a provider file is still listed; it simply loads
    /// as an absent view. A missing agents root means "no agents yet",
    /// not an error.
    pub fn list_agents(&self) -> Result<Vec<String>, StoreError> {
        let entries = match fs::read_dir(&self.agents_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StoreError::Io {
                    path: self.agents_dir.clone(),
                    reason: e.to_string(),
                });
            }
        };
        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .filter(|entry| entry.path().is_dir())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        Ok(names)
    }

    /// Load one agent's provider file.
    ///
    /// `Ok(None)` when the file doesn't exist ("agent has no config yet");
    /// a present but malformed file is an error with the problem named.
    pub fn load(&self, agent_name: &str) -> Result<Option<AgentConfigView>, StoreError> {
        let path = self.models_path(agent_name);
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StoreError::Io {
                    path,
                    reason: e.to_string(),
                });
            }
        };
        let root: Value = serde_json::from_str(&content).map_err(|e| StoreError::Parse {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        let providers_value = root
            .get("providers")
            .ok_or(StoreError::MissingSection { section: "providers" })?;
        let providers: BTreeMap<String, ProviderEntry> =
            serde_json::from_value(providers_value.clone()).map_err(|e| StoreError::Parse {
                path,
                reason: format!("providers: {e}"),
            })?;
        Ok(Some(AgentConfigView::new(agent_name, providers)))
    }

    /// Persist an agent's provider map atomically.
    ///
    /// Merges into the existing document so top-level keys other than
    /// `providers` survive; creates the file (and directories) if needed.
    pub fn save(&self, view: &AgentConfigView) -> Result<(), StoreError> {
        let path = self.models_path(&view.agent_name);
        let mut root: Value = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).map_err(|e| StoreError::Parse {
                path: path.clone(),
                reason: e.to_string(),
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Value::Object(Map::new()),
            Err(e) => {
                return Err(StoreError::Io {
                    path,
                    reason: e.to_string(),
                });
            }
        };

        let providers = serde_json::to_value(&view.providers).map_err(|e| StoreError::Persist {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        match root.as_object_mut() {
            Some(obj) => {
                obj.insert("providers".to_string(), providers);
            }
            None => {
                return Err(StoreError::Parse {
                    path,
                    reason: "document root is not an object".to_string(),
                });
            }
        }

        let serialized = serde_json::to_string_pretty(&root).map_err(|e| StoreError::Persist {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        write_atomic(&path, &serialized)?;
        debug!(agent = %view.agent_name, path = %path.display(), "agent providers saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_agent(dir: &Path, name: &str, content: &str) {
        let path = agent_models_path(dir, name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_list_agents_includes_configless() {
        let dir = tempdir().unwrap();
        write_agent(dir.path(), "main", r#"{ "providers": {} }"#);
        fs::create_dir_all(dir.path().join("dev")).unwrap();
        fs::write(dir.path().join("stray-file"), "x").unwrap();

        let store = AgentStore::new(dir.path());
        // "dev" has no models.json but is still an agent
        assert_eq!(store.list_agents().unwrap(), ["dev", "main"]);
        assert!(store.load("dev").unwrap().is_none());
    }

    #[test]
    fn test_list_agents_missing_root_is_empty() {
        let dir = tempdir().unwrap();
        let store = AgentStore::new(dir.path().join("nope"));
        assert!(store.list_agents().unwrap().is_empty());
    }

    #[test]
    fn test_load_parses_providers() {
        let dir = tempdir().unwrap();
        write_agent(
            dir.path(),
            "main",
            r#"{ "providers": {
                "ollama": { "baseUrl": "http://127.0.0.1:11434/v1", "apiKey": "sk-1", "models": ["llama3.2"] }
            } }"#,
        );
        let store = AgentStore::new(dir.path());
        let view = store.load("main").unwrap().unwrap();
        assert_eq!(view.provider_names, ["ollama"]);
        assert_eq!(view.providers["ollama"].api_key.as_deref(), Some("sk-1"));
        assert_eq!(view.providers["ollama"].models, ["llama3.2"]);
    }

    #[test]
    fn test_load_malformed_is_error() {
        let dir = tempdir().unwrap();
        write_agent(dir.path(), "main", "not json");
        let store = AgentStore::new(dir.path());
        assert!(matches!(store.load("main"), Err(StoreError::Parse { .. })));

        write_agent(dir.path(), "bare", r#"{ "other": 1 }"#);
        assert!(matches!(
            store.load("bare"),
            Err(StoreError::MissingSection { section: "providers" })
        ));
    }

    #[test]
    fn test_save_round_trip_preserves_extras() {
        let dir = tempdir().unwrap();
        write_agent(
            dir.path(),
            "main",
            r#"{
                "version": 2,
                "providers": {
                    "ollama": { "baseUrl": "http://x", "quirkMode": true }
                }
            }"#,
        );
        let store = AgentStore::new(dir.path());
        let view = store.load("main").unwrap().unwrap();
        store.save(&view).unwrap();

        let on_disk: Value =
            serde_json::from_str(&fs::read_to_string(store.models_path("main")).unwrap()).unwrap();
        // Top-level and per-provider unknown keys both survive
        assert_eq!(on_disk["version"], 2);
        assert_eq!(on_disk["providers"]["ollama"]["quirkMode"], true);
    }

    #[test]
    fn test_save_creates_file_for_new_agent() {
        let dir = tempdir().unwrap();
        let store = AgentStore::new(dir.path());
        let mut providers = BTreeMap::new();
        providers.insert("ollama".to_string(), ProviderEntry::default());
        store.save(&AgentConfigView::new("fresh", providers)).unwrap();

        let view = store.load("fresh").unwrap().unwrap();
        assert_eq!(view.provider_names, ["ollama"]);
    }
}
