//! Hardware-fit command handler.

use anyhow::Result;

use clawkit_core::HardwareFitPort;

/// Execute the fit command: query the external advisor and print its
/// system description and ranked recommendations.
pub async fn execute(advisor: &dyn HardwareFitPort, limit: u8) -> Result<()> {
    let Some((system, recommendations)) = advisor.hardware_fit(limit).await else {
        println!("Hardware-fit advisor (llmfit) not available; skipping.");
        return Ok(());
    };

    if let Some(ram) = system.total_ram_gb {
        println!("RAM:     {ram:.1} GB");
    }
    if let Some(vram) = system.vram_gb {
        println!("VRAM:    {vram:.1} GB");
    }
    if let Some(gpu) = &system.gpu_name {
        println!("GPU:     {gpu}");
    }
    if let Some(backend) = &system.backend {
        println!("Backend: {backend}");
    }

    if recommendations.is_empty() {
        println!("No model recommendations.");
        return Ok(());
    }
    println!("\nRecommended models:");
    for rec in recommendations {
        let name = rec.name.as_deref().unwrap_or("?");
        print!("  {name}");
        if let Some(params) = rec.params_b {
            print!("  {params:.1}B");
        }
        if let Some(fit) = &rec.fit {
            print!("  [{fit}]");
        }
        if let Some(score) = rec.score {
            print!("  score {score:.2}");
        }
        if let Some(use_case) = &rec.use_case {
            print!("  - {use_case}");
        }
        println!();
    }
    Ok(())
}
