//! Agent command handlers.

use anyhow::Result;

use clawkit_core::{AgentConfigView, ProviderSyncStatus, compute_sync_status};

use crate::context::CliContext;

/// Execute `agents list`: every agent directory, with config and sync state.
pub fn list(ctx: &CliContext) -> Result<()> {
    let names = ctx.agents.list_agents()?;
    if names.is_empty() {
        println!("No agents under {}", ctx.agents.agents_dir().display());
        return Ok(());
    }
    let global = ctx.config.load()?;
    for name in names {
        match ctx.agents.load(&name)? {
            Some(view) => {
                let status = compute_sync_status(&global.provider_names, &view.provider_names);
                let marker = if status.in_sync { "in sync" } else { "out of sync" };
                println!("{name}  ({} providers, {marker})", view.provider_names.len());
            }
            None => println!("{name}  (no provider config yet)"),
        }
    }
    Ok(())
}

/// Execute `agents show <name>`.
pub fn show(ctx: &CliContext, name: &str) -> Result<()> {
    let Some(view) = ctx.agents.load(name)? else {
        println!("Agent '{name}' has no provider config at {}", ctx.agents.models_path(name).display());
        return Ok(());
    };
    print_agent(&view);
    Ok(())
}

/// Execute `agents status <name>`.
pub fn status(ctx: &CliContext, name: &str) -> Result<()> {
    let status = ctx.sync_service().status(name)?;
    print_status(name, &status);
    Ok(())
}

/// Execute `agents sync <name>`.
pub fn sync(ctx: &CliContext, name: &str) -> Result<()> {
    let merged = ctx.sync_service().sync_agent(name)?;
    println!("Synced agent '{name}' ({} providers)", merged.provider_names.len());
    print_agent(&merged);
    Ok(())
}

fn print_agent(view: &AgentConfigView) {
    println!("Agent: {}", view.agent_name);
    for name in &view.provider_names {
        let entry = &view.providers[name];
        let key = if entry.has_api_key() { "key set" } else { "no key" };
        let url = entry.base_url.as_deref().unwrap_or("-");
        println!("  {name:<16} {url}  [{key}, {} models]", entry.models.len());
    }
}

fn print_status(name: &str, status: &ProviderSyncStatus) {
    if status.in_sync {
        println!("Agent '{name}' is in sync with the global provider list.");
        return;
    }
    println!("Agent '{name}' is out of sync.");
    if !status.missing_in_agent.is_empty() {
        println!("  missing in agent: {}", status.missing_in_agent.join(", "));
    }
    if !status.extra_in_agent.is_empty() {
        println!("  extra in agent:   {}", status.extra_in_agent.join(", "));
    }
}
