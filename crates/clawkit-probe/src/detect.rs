//! Per-runtime detection strategies.
//!
//! Each runtime combines an executable probe (installed), a port probe
//! (running) and a version probe, built on the primitives in [`crate::probe`].
//! The three checks run independently so one wedged runtime cannot block
//! the others.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::task;
use tracing::{debug, warn};

use clawkit_core::{DetectionResult, MemorySnapshot, RuntimeKind, RuntimeProbePort, RuntimeStatus};

use crate::models;
use crate::probe::{COMMAND_TIMEOUT, PORT_PROBE_TIMEOUT, command_output, executable_version, find_executable, port_open};
use crate::system;

const LOCALHOST: &str = "127.0.0.1";

/// Snippet that prints the installed vllm version (vLLM ships as a Python
/// package, not a standalone binary).
const VLLM_VERSION_SNIPPET: &str = "import vllm; print(getattr(vllm, '__version__', 'unknown'))";

async fn probe_port(port: u16) -> bool {
    // TcpStream::connect_timeout blocks; keep it off the async workers.
    task::spawn_blocking(move || port_open(LOCALHOST, port, PORT_PROBE_TIMEOUT))
        .await
        .unwrap_or(false)
}

/// Path to the LM Studio CLI under its default install location.
#[must_use]
pub fn lms_install_path() -> Option<PathBuf> {
    let name = if cfg!(target_os = "windows") { "lms.exe" } else { "lms" };
    let path = dirs::home_dir()?.join(".lmstudio").join("bin").join(name);
    path.exists().then_some(path)
}

/// Detect the Ollama chat server.
pub async fn detect_ollama() -> RuntimeStatus {
    let path = find_executable("ollama");
    let installed = path.is_some();
    let running = probe_port(RuntimeKind::Ollama.default_port()).await;
    let version = if installed {
        executable_version("ollama", "--version").await
    } else {
        None
    };
    RuntimeStatus::new(
        installed,
        running,
        version,
        path.map(|p| p.display().to_string()),
    )
}

/// Detect LM Studio via its CLI (`lms`), preferring the default install
/// location over PATH.
pub async fn detect_lm_studio() -> RuntimeStatus {
    let path = lms_install_path().or_else(|| find_executable("lms"));
    let installed = path.is_some();
    let running = probe_port(RuntimeKind::LmStudio.default_port()).await;
    let version = match &path {
        Some(p) => executable_version(&p.display().to_string(), "--version").await,
        None => None,
    };
    RuntimeStatus::new(
        installed,
        running,
        version,
        path.map(|p| p.display().to_string()),
    )
}

/// Detect vLLM by importing the Python package.
pub async fn detect_vllm() -> RuntimeStatus {
    let mut version = None;
    let mut installed = false;
    for python in ["python3", "python"] {
        if let Some(stdout) = command_output(python, &["-c", VLLM_VERSION_SNIPPET], COMMAND_TIMEOUT).await {
            installed = true;
            let v = stdout.trim();
            if !v.is_empty() && v != "unknown" {
                version = Some(v.to_string());
            }
            break;
        }
    }
    let running = probe_port(RuntimeKind::Vllm.default_port()).await;
    RuntimeStatus::new(installed, running, version, None)
}

/// Detect all known runtimes concurrently.
///
/// Each check is spawned as its own task; a panic or failure in one
/// degrades that runtime to "absent" without aborting the whole call.
pub async fn detect_runtimes() -> DetectionResult {
    let ollama = task::spawn(detect_ollama());
    let lm_studio = task::spawn(detect_lm_studio());
    let vllm = task::spawn(detect_vllm());

    let recover = |name: &str, result: Result<RuntimeStatus, task::JoinError>| match result {
        Ok(status) => status,
        Err(e) => {
            warn!(runtime = name, error = %e, "runtime detection task failed");
            RuntimeStatus::absent()
        }
    };

    let (ollama, lm_studio, vllm) = tokio::join!(ollama, lm_studio, vllm);
    let result = DetectionResult {
        ollama: recover("ollama", ollama),
        lm_studio: recover("lmstudio", lm_studio),
        vllm: recover("vllm", vllm),
    };
    debug!(
        ollama = result.ollama.running,
        lm_studio = result.lm_studio.running,
        vllm = result.vllm.running,
        "runtime detection complete"
    );
    result
}

/// Default implementation of `RuntimeProbePort`.
///
/// Constructed at the CLI composition root and injected into handlers.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultRuntimeProbe;

impl DefaultRuntimeProbe {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RuntimeProbePort for DefaultRuntimeProbe {
    async fn detect_all(&self) -> DetectionResult {
        detect_runtimes().await
    }

    async fn list_models(&self, kind: RuntimeKind) -> Option<Vec<String>> {
        match kind {
            RuntimeKind::Ollama => Some(models::ollama_models().await),
            RuntimeKind::LmStudio => Some(models::lm_studio_models().await),
            // vLLM has no local model catalog; "unknown", not "zero models"
            RuntimeKind::Vllm => None,
        }
    }

    fn memory_snapshot(&self) -> MemorySnapshot {
        system::memory_snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_detect_runtimes_upholds_invariant() {
        let result = detect_runtimes().await;
        for kind in RuntimeKind::ALL {
            let status = result.get(kind);
            assert!(
                status.installed || !status.running,
                "{kind}: running without installed"
            );
        }
    }

    #[tokio::test]
    async fn test_port_listing_policy() {
        let probe = DefaultRuntimeProbe::new();
        // vLLM never reports a listing, reachable or not.
        assert!(probe.list_models(RuntimeKind::Vllm).await.is_none());
    }
}
