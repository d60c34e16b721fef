//! Detectable local LLM runtimes and their probe results.
//!
//! The set of runtimes is fixed: Ollama, LM Studio and vLLM. Each exposes a
//! well-known local port; detection itself happens in `clawkit-probe`.

use serde::{Deserialize, Serialize};

/// One of the locally detectable inference runtimes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuntimeKind {
    /// Ollama chat-completion server.
    Ollama,
    /// LM Studio desktop app (OpenAI-compatible local server).
    LmStudio,
    /// vLLM high-throughput inference server.
    Vllm,
}

impl RuntimeKind {
    /// All detectable runtimes, in display order.
    pub const ALL: [Self; 3] = [Self::Ollama, Self::LmStudio, Self::Vllm];

    /// Default local port the runtime listens on.
    #[must_use]
    pub const fn default_port(self) -> u16 {
        match self {
            Self::Ollama => 11434,
            Self::LmStudio => 1234,
            Self::Vllm => 8000,
        }
    }

    /// Stable identifier used on the CLI and in serialized output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ollama => "ollama",
            Self::LmStudio => "lmstudio",
            Self::Vllm => "vllm",
        }
    }

    /// Display name for human-facing output.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Ollama => "Ollama",
            Self::LmStudio => "LM Studio",
            Self::Vllm => "vLLM",
        }
    }

    /// Whether this runtime exposes a model listing at all.
    ///
    /// vLLM serves whatever it was launched with and has no local catalog,
    /// so its listing is "unknown" rather than empty.
    #[must_use]
    pub const fn supports_model_listing(self) -> bool {
        !matches!(self, Self::Vllm)
    }

    /// Parse a CLI/serialized identifier.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "ollama" => Some(Self::Ollama),
            "lmstudio" | "lm-studio" | "lm_studio" => Some(Self::LmStudio),
            "vllm" => Some(Self::Vllm),
            _ => None,
        }
    }
}

impl std::fmt::Display for RuntimeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Probe result for a single runtime.
///
/// Ephemeral: recomputed on every detection cycle, never persisted.
/// Invariant: `running` implies `installed`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeStatus {
    pub installed: bool,
    pub running: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl RuntimeStatus {
    /// Build a status upholding the `running => installed` invariant.
    ///
    /// An answering port is evidence of an installation even when the
    /// executable probe came up empty (e.g. installed outside PATH).
    #[must_use]
    pub fn new(installed: bool, running: bool, version: Option<String>, path: Option<String>) -> Self {
        Self {
            installed: installed || running,
            running,
            version,
            path,
        }
    }

    /// Degraded status used when a runtime's check failed entirely.
    #[must_use]
    pub const fn absent() -> Self {
        Self {
            installed: false,
            running: false,
            version: None,
            path: None,
        }
    }
}

/// Fresh detection results for all known runtimes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectionResult {
    pub ollama: RuntimeStatus,
    pub lm_studio: RuntimeStatus,
    pub vllm: RuntimeStatus,
}

impl DetectionResult {
    /// Status for one runtime.
    #[must_use]
    pub const fn get(&self, kind: RuntimeKind) -> &RuntimeStatus {
        match kind {
            RuntimeKind::Ollama => &self.ollama,
            RuntimeKind::LmStudio => &self.lm_studio,
            RuntimeKind::Vllm => &self.vllm,
        }
    }
}
