//! Subcommand definitions.

use clap::{Args, Subcommand};

/// Top-level commands, mapping one-to-one to the engine's operations.
#[derive(Subcommand)]
pub enum Commands {
    /// Detect locally installed inference runtimes (Ollama, LM Studio, vLLM)
    Detect,

    /// List models exposed by one runtime
    Models {
        /// Runtime identifier: ollama, lmstudio or vllm
        runtime: String,
    },

    /// Show system memory
    System,

    /// Show hardware-fit recommendations from the llmfit advisor, if installed
    Fit {
        /// Maximum number of recommendations (1-20)
        #[arg(long, default_value_t = 5)]
        limit: u8,
    },

    /// Inspect or edit the global configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Inspect and reconcile per-agent provider files
    #[command(subcommand)]
    Agents(AgentsCommand),
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the global configuration view
    Show,
    /// Update parts of the global configuration
    Set(ConfigSetArgs),
}

/// Sparse global-config edits. Omitted flags leave the file untouched;
/// `--clear-*` flags remove the setting.
#[derive(Args, Default)]
pub struct ConfigSetArgs {
    /// Set the default model for agents
    #[arg(long, conflicts_with = "clear_primary")]
    pub primary: Option<String>,

    /// Remove the default model setting
    #[arg(long)]
    pub clear_primary: bool,

    /// Set fallback models (comma-separated, in order)
    #[arg(long, value_delimiter = ',', conflicts_with = "clear_fallbacks")]
    pub fallbacks: Option<Vec<String>>,

    /// Remove the fallback list
    #[arg(long)]
    pub clear_fallbacks: bool,

    /// Set the agent concurrency ceiling
    #[arg(long, conflicts_with = "clear_max_concurrent")]
    pub max_concurrent: Option<u32>,

    /// Remove the agent concurrency ceiling
    #[arg(long)]
    pub clear_max_concurrent: bool,

    /// Set the sub-agent concurrency ceiling
    #[arg(long)]
    pub subagent_max_concurrent: Option<u32>,

    /// Set the sub-agent spawn depth limit
    #[arg(long)]
    pub subagent_max_spawn_depth: Option<u32>,

    /// Set the per-agent children limit
    #[arg(long)]
    pub subagent_max_children: Option<u32>,
}

#[derive(Subcommand)]
pub enum AgentsCommand {
    /// List agents under the host's agents directory
    List,
    /// Show one agent's provider configuration
    Show { name: String },
    /// Compare one agent's providers against the global configuration
    Status { name: String },
    /// Merge global provider definitions into one agent (keeps agent secrets)
    Sync { name: String },
}

impl ConfigSetArgs {
    /// True if no edit was requested.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.primary.is_none()
            && !self.clear_primary
            && self.fallbacks.is_none()
            && !self.clear_fallbacks
            && self.max_concurrent.is_none()
            && !self.clear_max_concurrent
            && self.subagent_max_concurrent.is_none()
            && self.subagent_max_spawn_depth.is_none()
            && self.subagent_max_children.is_none()
    }
}
