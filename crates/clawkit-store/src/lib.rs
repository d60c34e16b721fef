//! File-backed configuration stores for an OpenClaw host.
//!
//! Owns parsing and persistence of the global configuration file and the
//! per-agent provider files, plus the load/diff/apply/save orchestration
//! of provider sync. Every read re-parses from disk; nothing is cached
//! across calls, so callers always reconcile against the latest persisted
//! state. Writes are temp-file + atomic-rename so a crash mid-write never
//! corrupts the previous good state.

mod atomic;

pub mod agent;
pub mod error;
pub mod global;
pub mod paths;
pub mod sync;

pub use agent::AgentStore;
pub use error::StoreError;
pub use global::ConfigStore;
pub use paths::{agent_models_path, agents_dir, global_config_path, openclaw_root};
pub use sync::SyncService;
