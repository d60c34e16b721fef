//! Global configuration store.
//!
//! Loads, validates and sparsely updates the host's `openclaw.json`.
//! The raw document is navigated as `serde_json::Value` for round-trip
//! safety: an update rewrites only the fields it names and preserves
//! everything else byte-for-byte at the JSON level.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value, json};
use tracing::debug;

use clawkit_core::config::{
    DEFAULT_SUBAGENT_MAX_CHILDREN, DEFAULT_SUBAGENT_MAX_CONCURRENT, DEFAULT_SUBAGENT_MAX_SPAWN_DEPTH,
};
use clawkit_core::{GlobalConfigUpdate, GlobalConfigView, ProviderEntry, SubagentLimits};

use crate::atomic::write_atomic;
use crate::error::StoreError;
use crate::paths::global_config_path;

/// Store for the global configuration file.
///
/// Stateless between calls: every operation re-reads the file, so callers
/// always see the latest persisted state.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store backed by an explicit file path (used by tests and tools
    /// pointed at a non-default root).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by the host default, `~/.openclaw/openclaw.json`.
    pub fn from_home() -> Result<Self, StoreError> {
        Ok(Self::new(global_config_path()?))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and validate the global configuration.
    ///
    /// Absent file is `NotFound`; a present file missing a required
    /// section fails with that section named, so callers can distinguish
    /// "no config yet" from "config needs fixing".
    pub fn load(&self) -> Result<GlobalConfigView, StoreError> {
        let root = self.read_document()?;
        parse_view(&root, &self.path)
    }

    /// The raw global provider map, typed.
    pub fn providers(&self) -> Result<BTreeMap<String, ProviderEntry>, StoreError> {
        let root = self.read_document()?;
        let providers = require_object(&root, &["models", "providers"], "models.providers")?;
        serde_json::from_value(Value::Object(providers.clone())).map_err(|e| StoreError::Parse {
            path: self.path.clone(),
            reason: format!("models.providers: {e}"),
        })
    }

    /// Apply a sparse update and return the resulting view.
    ///
    /// Unspecified fields are untouched; explicitly cleared fields are
    /// removed from the document. Creates the file with a minimal skeleton
    /// when absent. The write is all-or-nothing.
    pub fn update(&self, update: &GlobalConfigUpdate) -> Result<GlobalConfigView, StoreError> {
        let mut root = match self.read_document() {
            Ok(root) => root,
            Err(StoreError::NotFound(_)) => skeleton(),
            Err(e) => return Err(e),
        };
        ensure_sections(&mut root);

        apply_scalar(
            &mut root,
            &["agents", "defaults", "model", "primary"],
            update.primary_model.as_ref().map(|v| v.clone().map(Value::String)),
        );
        apply_scalar(
            &mut root,
            &["agents", "defaults", "model", "fallbacks"],
            update.fallback_models.as_ref().map(|v| {
                v.clone()
                    .map(|models| Value::Array(models.into_iter().map(Value::String).collect()))
            }),
        );
        apply_scalar(
            &mut root,
            &["agents", "defaults", "maxConcurrent"],
            update.max_concurrent.map(|v| v.map(|n| json!(n))),
        );
        if let Some(n) = update.subagent_max_concurrent {
            set_nested(&mut root, &["agents", "defaults", "subagents", "maxConcurrent"], json!(n));
        }
        if let Some(n) = update.subagent_max_spawn_depth {
            set_nested(&mut root, &["agents", "defaults", "subagents", "maxSpawnDepth"], json!(n));
        }
        if let Some(n) = update.subagent_max_children_per_agent {
            set_nested(
                &mut root,
                &["agents", "defaults", "subagents", "maxChildrenPerAgent"],
                json!(n),
            );
        }

        let serialized = serde_json::to_string_pretty(&root).map_err(|e| StoreError::Persist {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        write_atomic(&self.path, &serialized)?;
        debug!(path = %self.path.display(), "global config updated");
        self.load()
    }

    fn read_document(&self) -> Result<Value, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(self.path.clone()));
            }
            Err(e) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    reason: e.to_string(),
                });
            }
        };
        serde_json::from_str(&content).map_err(|e| StoreError::Parse {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }
}

/// Extract the typed view, validating required sections.
fn parse_view(root: &Value, path: &Path) -> Result<GlobalConfigView, StoreError> {
    if !root.is_object() {
        return Err(StoreError::Parse {
            path: path.to_path_buf(),
            reason: "document root is not an object".to_string(),
        });
    }

    let providers = require_object(root, &["models", "providers"], "models.providers")?;
    let mut provider_names: Vec<String> = providers.keys().cloned().collect();
    provider_names.sort();

    let defaults = require_object(root, &["agents", "defaults"], "agents.defaults")?;
    let model = defaults
        .get("model")
        .and_then(Value::as_object)
        .ok_or(StoreError::MissingSection {
            section: "agents.defaults.model",
        })?;
    let subagents = defaults
        .get("subagents")
        .and_then(Value::as_object)
        .ok_or(StoreError::MissingSection { section: "subagents" })?;

    let primary_model = model.get("primary").and_then(Value::as_str).map(String::from);
    let fallback_models = string_array(model.get("fallbacks"));
    let mut allowed_models: Vec<String> = defaults
        .get("models")
        .and_then(Value::as_object)
        .map(|o| o.keys().cloned().collect())
        .unwrap_or_default();
    allowed_models.sort();

    let max_concurrent = defaults
        .get("maxConcurrent")
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok());

    Ok(GlobalConfigView {
        provider_names,
        primary_model,
        fallback_models,
        allowed_models,
        max_concurrent,
        subagents: parse_subagents(subagents),
    })
}

fn parse_subagents(obj: &Map<String, Value>) -> SubagentLimits {
    let limit = |key: &str, default: u32| {
        obj.get(key)
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(default)
    };
    SubagentLimits {
        max_concurrent: limit("maxConcurrent", DEFAULT_SUBAGENT_MAX_CONCURRENT),
        max_spawn_depth: limit("maxSpawnDepth", DEFAULT_SUBAGENT_MAX_SPAWN_DEPTH),
        max_children_per_agent: limit("maxChildrenPerAgent", DEFAULT_SUBAGENT_MAX_CHILDREN),
    }
}

fn string_array(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|a| {
            a.iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

fn require_object<'a>(
    root: &'a Value,
    path: &[&str],
    section: &'static str,
) -> Result<&'a Map<String, Value>, StoreError> {
    let mut current = root;
    for key in path {
        current = match current.get(key) {
            Some(v) => v,
            None => return Err(StoreError::MissingSection { section }),
        };
    }
    current
        .as_object()
        .ok_or(StoreError::MissingSection { section })
}

/// Minimal document created when updating a config that doesn't exist yet.
fn skeleton() -> Value {
    json!({
        "agents": {
            "defaults": {
                "model": {},
                "subagents": {
                    "maxConcurrent": DEFAULT_SUBAGENT_MAX_CONCURRENT,
                    "maxSpawnDepth": DEFAULT_SUBAGENT_MAX_SPAWN_DEPTH,
                    "maxChildrenPerAgent": DEFAULT_SUBAGENT_MAX_CHILDREN
                }
            }
        },
        "models": { "providers": {} }
    })
}

/// Make sure the containers an update writes into exist.
fn ensure_sections(root: &mut Value) {
    for path in [
        &["agents", "defaults", "model"][..],
        &["agents", "defaults", "subagents"][..],
        &["models", "providers"][..],
    ] {
        let mut current = &mut *root;
        for key in path {
            let obj = match current.as_object_mut() {
                Some(o) => o,
                None => return,
            };
            current = obj
                .entry((*key).to_string())
                .or_insert_with(|| Value::Object(Map::new()));
        }
    }
}

/// Set-or-clear for one tagged scalar update.
///
/// `None` leaves the document untouched, `Some(None)` removes the key,
/// `Some(Some(value))` sets it.
fn apply_scalar(root: &mut Value, path: &[&str], change: Option<Option<Value>>) {
    match change {
        None => {}
        Some(None) => remove_nested(root, path),
        Some(Some(value)) => set_nested(root, path, value),
    }
}

fn set_nested(root: &mut Value, path: &[&str], value: Value) {
    let Some((last, parents)) = path.split_last() else {
        return;
    };
    let mut current = root;
    for key in parents {
        let Some(obj) = current.as_object_mut() else {
            return;
        };
        current = obj
            .entry((*key).to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }
    if let Some(obj) = current.as_object_mut() {
        obj.insert((*last).to_string(), value);
    }
}

fn remove_nested(root: &mut Value, path: &[&str]) {
    let Some((last, parents)) = path.split_last() else {
        return;
    };
    let mut current = root;
    for key in parents {
        match current.get_mut(key) {
            Some(v) => current = v,
            None => return,
        }
    }
    if let Some(obj) = current.as_object_mut() {
        obj.remove(*last);
    }
}
