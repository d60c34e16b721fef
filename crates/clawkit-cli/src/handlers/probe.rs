//! Detection, model listing and system memory handlers.

use anyhow::{Result, bail};

use clawkit_core::{RuntimeKind, RuntimeProbePort, RuntimeStatus};

/// Execute the detect command: probe all runtimes and print their status.
pub async fn detect(probe: &dyn RuntimeProbePort) -> Result<()> {
    let detection = probe.detect_all().await;
    for kind in RuntimeKind::ALL {
        print_status(kind, detection.get(kind));
    }
    Ok(())
}

fn print_status(kind: RuntimeKind, status: &RuntimeStatus) {
    let state = match (status.installed, status.running) {
        (_, true) => "running",
        (true, false) => "installed, not running",
        (false, false) => "not installed",
    };
    print!("{:<10} {state}", kind.display_name());
    if let Some(version) = &status.version {
        print!("  (v{version})");
    }
    if let Some(path) = &status.path {
        print!("  [{path}]");
    }
    println!();
}

/// Execute the models command for one runtime.
pub async fn models(probe: &dyn RuntimeProbePort, runtime: &str) -> Result<()> {
    let Some(kind) = RuntimeKind::parse(runtime) else {
        bail!("unknown runtime '{runtime}' (expected one of: ollama, lmstudio, vllm)");
    };
    match probe.list_models(kind).await {
        None => println!("{} does not expose a model listing", kind.display_name()),
        Some(models) if models.is_empty() => {
            println!("No models found ({} not reachable or empty)", kind.display_name());
        }
        Some(models) => {
            println!("{} models:", kind.display_name());
            for model in models {
                println!("  {model}");
            }
        }
    }
    Ok(())
}

/// Execute the system command: print total/available memory.
pub fn system(probe: &dyn RuntimeProbePort) -> Result<()> {
    let mem = probe.memory_snapshot();
    println!("Total memory:     {}", mem.total_human);
    println!("Available memory: {}", mem.available_human);
    Ok(())
}
