//! End-to-end provider reconciliation over real files.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tempfile::{TempDir, tempdir};

use clawkit_store::{AgentStore, ConfigStore, StoreError, SyncService};

const GLOBAL: &str = r#"{
    "models": {
        "providers": {
            "ollama": { "baseUrl": "http://127.0.0.1:11434/v1", "api": "openai-completions" },
            "anthropic": { "baseUrl": "https://api.anthropic.com", "api": "anthropic-messages" }
        }
    },
    "agents": {
        "defaults": {
            "model": { "primary": "anthropic/claude-sonnet-4-5" },
            "maxConcurrent": 4,
            "subagents": { "maxConcurrent": 8, "maxSpawnDepth": 1, "maxChildrenPerAgent": 5 }
        }
    }
}"#;

fn host(global: &str) -> (TempDir, SyncService) {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("openclaw.json"), global).unwrap();
    fs::create_dir_all(dir.path().join("agents")).unwrap();
    let service = SyncService::new(
        ConfigStore::new(dir.path().join("openclaw.json")),
        AgentStore::new(dir.path().join("agents")),
    );
    (dir, service)
}

fn write_agent(root: &Path, name: &str, content: &str) {
    let dir = root.join("agents").join(name).join("agent");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("models.json"), content).unwrap();
}

fn read_agent_json(root: &Path, name: &str) -> Value {
    let path = root.join("agents").join(name).join("agent").join("models.json");
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn sync_merges_without_discarding_secrets() {
    let (dir, service) = host(GLOBAL);
    write_agent(
        dir.path(),
        "main",
        r#"{
            "providers": {
                "ollama": {
                    "baseUrl": "http://old-host:11434",
                    "apiKey": "sk-1",
                    "models": ["llama3.2", "qwen2.5:7b"]
                },
                "my-lab": { "baseUrl": "http://lab:9999", "apiKey": "sk-lab" }
            }
        }"#,
    );

    let before = service.status("main").unwrap();
    assert!(!before.in_sync);
    assert_eq!(before.missing_in_agent, ["anthropic"]);
    assert_eq!(before.extra_in_agent, ["my-lab"]);

    service.sync_agent("main").unwrap();

    let on_disk = read_agent_json(dir.path(), "main");
    let providers = &on_disk["providers"];
    // Agent-owned fields survived
    assert_eq!(providers["ollama"]["apiKey"], "sk-1");
    assert_eq!(providers["ollama"]["models"][1], "qwen2.5:7b");
    // Topology came from the global file
    assert_eq!(providers["ollama"]["baseUrl"], "http://127.0.0.1:11434/v1");
    // New provider added without inventing a secret
    assert_eq!(providers["anthropic"]["baseUrl"], "https://api.anthropic.com");
    assert!(providers["anthropic"].get("apiKey").is_none());
    // Agent-only provider untouched
    assert_eq!(providers["my-lab"]["apiKey"], "sk-lab");

    let after = service.status("main").unwrap();
    // Extra providers are tolerated but keep the agent formally out of sync
    assert!(after.missing_in_agent.is_empty());
    assert_eq!(after.extra_in_agent, ["my-lab"]);
}

#[test]
fn sync_twice_is_stable() {
    let (dir, service) = host(GLOBAL);
    write_agent(
        dir.path(),
        "main",
        r#"{ "providers": { "ollama": { "apiKey": "sk-1", "models": ["llama3.2"] } } }"#,
    );

    let first = service.sync_agent("main").unwrap();
    let second = service.sync_agent("main").unwrap();
    assert_eq!(first.provider_names, second.provider_names);
    assert_eq!(
        second.providers["ollama"].api_key.as_deref(),
        Some("sk-1")
    );
    assert_eq!(second.providers["ollama"].models, ["llama3.2"]);
}

#[test]
fn broken_global_config_blocks_sync_with_named_section() {
    let (dir, service) = host(r#"{ "models": {}, "agents": { "defaults": {} } }"#);
    write_agent(dir.path(), "main", r#"{ "providers": {} }"#);

    match service.status("main") {
        Err(StoreError::MissingSection { section }) => assert_eq!(section, "models.providers"),
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn failed_sync_leaves_previous_file_intact() {
    let (dir, service) = host(GLOBAL);
    // models.json is a directory: the save cannot complete
    let bogus = dir.path().join("agents/broken/agent/models.json");
    fs::create_dir_all(&bogus).unwrap();

    assert!(service.sync_agent("broken").is_err());
    assert!(bogus.is_dir(), "target must be untouched after failed write");
}
