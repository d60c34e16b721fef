//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Inspect and reconcile configuration for an OpenClaw host.
#[derive(Parser)]
#[command(name = "clawkit")]
#[command(about = "Inspect local LLM runtimes and reconcile OpenClaw provider configuration")]
#[command(version)]
pub struct Cli {
    /// Override the host root directory (default: ~/.openclaw)
    #[arg(long = "root", global = true, env = "CLAWKIT_ROOT")]
    pub root: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from(["clawkit", "--verbose", "--root", "/tmp/claw", "detect"]);
        assert!(cli.verbose);
        assert_eq!(cli.root.as_deref(), Some(std::path::Path::new("/tmp/claw")));
    }

    #[test]
    fn test_agents_sync_parses() {
        let cli = Cli::parse_from(["clawkit", "agents", "sync", "main"]);
        match cli.command {
            Commands::Agents(crate::commands::AgentsCommand::Sync { name }) => {
                assert_eq!(name, "main");
            }
            _ => panic!("wrong command parsed"),
        }
    }
}
