//! Runtime probing port.
//!
//! Abstracts active system probing (TCP connects, command execution, HTTP
//! calls, memory queries) from the core domain. The default implementation
//! lives in `clawkit-probe`; the CLI injects it at its composition root.
//!
//! Every method is best-effort and infallible by contract: a probe that
//! fails degrades to "not installed / not running / no data" instead of
//! surfacing an error.

use async_trait::async_trait;

use crate::memory::MemorySnapshot;
use crate::runtime::{DetectionResult, RuntimeKind};

/// Port for probing local inference runtimes and system memory.
#[async_trait]
pub trait RuntimeProbePort: Send + Sync {
    /// Detect all known runtimes.
    ///
    /// The three checks run independently; a hang or failure in one
    /// degrades only that runtime's status.
    async fn detect_all(&self) -> DetectionResult;

    /// List models exposed by one runtime.
    ///
    /// `None` means the runtime has no listing mechanism ("unknown"),
    /// distinct from `Some(vec![])` ("reachable, zero models").
    async fn list_models(&self, kind: RuntimeKind) -> Option<Vec<String>>;

    /// Read total/available physical memory.
    fn memory_snapshot(&self) -> MemorySnapshot;
}
