//! Global config command handlers.

use anyhow::{Result, bail};

use clawkit_core::{GlobalConfigUpdate, GlobalConfigView};

use crate::commands::ConfigSetArgs;
use crate::context::CliContext;

/// Execute `config show`.
pub fn show(ctx: &CliContext) -> Result<()> {
    let view = ctx.config.load()?;
    print_view(&view);
    Ok(())
}

/// Execute `config set`: translate flags into a sparse update and apply it.
pub fn set(ctx: &CliContext, args: ConfigSetArgs) -> Result<()> {
    if args.is_empty() {
        bail!("nothing to update; pass at least one --set or --clear flag");
    }
    let update = build_update(args);
    let view = ctx.config.update(&update)?;
    println!("Updated {}", ctx.config.path().display());
    print_view(&view);
    Ok(())
}

/// Fold a set flag and a clear flag into the unset/clear/set shape.
/// clap enforces that set and clear are mutually exclusive per field.
fn tagged<T>(set: Option<T>, clear: bool) -> Option<Option<T>> {
    match (set, clear) {
        (Some(v), _) => Some(Some(v)),
        (None, true) => Some(None),
        (None, false) => None,
    }
}

fn build_update(args: ConfigSetArgs) -> GlobalConfigUpdate {
    GlobalConfigUpdate {
        primary_model: tagged(args.primary, args.clear_primary),
        fallback_models: tagged(args.fallbacks, args.clear_fallbacks),
        max_concurrent: tagged(args.max_concurrent, args.clear_max_concurrent),
        subagent_max_concurrent: args.subagent_max_concurrent,
        subagent_max_spawn_depth: args.subagent_max_spawn_depth,
        subagent_max_children_per_agent: args.subagent_max_children,
    }
}

fn print_view(view: &GlobalConfigView) {
    match &view.primary_model {
        Some(primary) if view.primary_in_allowed() => println!("Primary model: {primary}"),
        Some(primary) => println!("Primary model: {primary} (not in allowed list)"),
        None => println!("Primary model: (unset)"),
    }
    println!("Fallbacks:     {}", join_or_dash(&view.fallback_models));
    println!("Allowed:       {}", join_or_dash(&view.allowed_models));
    match view.max_concurrent {
        Some(n) => println!("Max concurrent: {n}"),
        None => println!("Max concurrent: (unset)"),
    }
    let sub = &view.subagents;
    println!(
        "Subagents:     maxConcurrent={} maxSpawnDepth={} maxChildrenPerAgent={}",
        sub.max_concurrent, sub.max_spawn_depth, sub.max_children_per_agent
    );
    println!("Providers:     {}", join_or_dash(&view.provider_names));
}

fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_update_tagged_fields() {
        let update = build_update(ConfigSetArgs {
            primary: Some("ollama/llama3.2".to_string()),
            clear_max_concurrent: true,
            subagent_max_spawn_depth: Some(2),
            ..Default::default()
        });
        assert_eq!(update.primary_model, Some(Some("ollama/llama3.2".to_string())));
        assert_eq!(update.max_concurrent, Some(None));
        assert_eq!(update.fallback_models, None);
        assert_eq!(update.subagent_max_spawn_depth, Some(2));
    }
}
