//! Host directory layout.
//!
//! The OpenClaw host keeps everything under `~/.openclaw`:
//! `openclaw.json` (global config) and `agents/<name>/agent/models.json`
//! (one provider file per agent).

use std::path::{Path, PathBuf};

use crate::error::StoreError;

const OPENCLAW_DIR: &str = ".openclaw";
const GLOBAL_CONFIG_FILENAME: &str = "openclaw.json";
const AGENTS_DIR_NAME: &str = "agents";
const AGENT_SUBDIR: &str = "agent";
const MODELS_JSON: &str = "models.json";

/// Host root, `~/.openclaw`.
pub fn openclaw_root() -> Result<PathBuf, StoreError> {
    dirs::home_dir()
        .map(|home| home.join(OPENCLAW_DIR))
        .ok_or(StoreError::NoHomeDir)
}

/// Global configuration file, `~/.openclaw/openclaw.json`.
pub fn global_config_path() -> Result<PathBuf, StoreError> {
    Ok(openclaw_root()?.join(GLOBAL_CONFIG_FILENAME))
}

/// Agents root, `~/.openclaw/agents`.
pub fn agents_dir() -> Result<PathBuf, StoreError> {
    Ok(openclaw_root()?.join(AGENTS_DIR_NAME))
}

/// Provider file for one agent under a given agents root.
#[must_use]
pub fn agent_models_path(agents_dir: &Path, agent_name: &str) -> PathBuf {
    agents_dir.join(agent_name).join(AGENT_SUBDIR).join(MODELS_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_models_path_shape() {
        let p = agent_models_path(Path::new("/data/agents"), "main");
        assert_eq!(p, Path::new("/data/agents/main/agent/models.json"));
    }
}
