//! Core domain types and port definitions for clawkit.
//!
//! This crate is pure: no I/O, no process spawning, no network access.
//! Active probing lives in `clawkit-probe`; file persistence lives in
//! `clawkit-store`. Both implement ports defined here.

pub mod agent;
pub mod config;
pub mod fit;
pub mod memory;
pub mod ports;
pub mod provider;
pub mod runtime;
pub mod sync;

// Re-export commonly used types for convenience
pub use agent::{AgentConfigView, ProviderSyncStatus};
pub use config::{GlobalConfigUpdate, GlobalConfigView, SubagentLimits};
pub use fit::{Recommendation, SystemDescription};
pub use memory::{MemorySnapshot, bytes_to_human};
pub use ports::{HardwareFitPort, RuntimeProbePort};
pub use provider::ProviderEntry;
pub use runtime::{DetectionResult, RuntimeKind, RuntimeStatus};
pub use sync::{apply_sync, compute_sync_status};
