//! CLI entry point - the composition root.
//!
//! The only place where adapters are constructed: probe implementations
//! from `clawkit-probe`, stores from `clawkit-store`. Handlers receive
//! them as ports/context and never build their own.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use clawkit_cli::{AgentsCommand, Cli, CliContext, Commands, ConfigCommand, handlers};
use clawkit_probe::{DefaultHardwareFit, DefaultRuntimeProbe};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let probe = DefaultRuntimeProbe::new();
    let advisor = DefaultHardwareFit::new();

    match cli.command {
        Commands::Detect => handlers::probe::detect(&probe).await,
        Commands::Models { runtime } => handlers::probe::models(&probe, &runtime).await,
        Commands::System => handlers::probe::system(&probe),
        Commands::Fit { limit } => handlers::fit::execute(&advisor, limit).await,
        Commands::Config(command) => {
            let ctx = CliContext::new(cli.root)?;
            match command {
                ConfigCommand::Show => handlers::config::show(&ctx),
                ConfigCommand::Set(args) => handlers::config::set(&ctx, args),
            }
        }
        Commands::Agents(command) => {
            let ctx = CliContext::new(cli.root)?;
            match command {
                AgentsCommand::List => handlers::agents::list(&ctx),
                AgentsCommand::Show { name } => handlers::agents::show(&ctx, &name),
                AgentsCommand::Status { name } => handlers::agents::status(&ctx, &name),
                AgentsCommand::Sync { name } => handlers::agents::sync(&ctx, &name),
            }
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
