//! Device subcommand handlers for DeskHands.

use std::sync::Arc;

use tracing::info;

use deskhands_backend_native::NativePcService;
use deskhands_config::Config;
use deskhands_device::PcDevice;

use crate::cli::{ActionFormat, Commands};

/// Handle a subcommand against the native backend.
pub(crate) async fn handle_command(
    command: Commands,
    config: Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let device = PcDevice::builder()
        .service(Arc::new(NativePcService::new()))
        .config(&config)
        .build()?;

    match command {
        Commands::Monitors => list_monitors(&device).await,
        Commands::Windows => list_windows(&device).await,
        Commands::Actions { format } => print_actions(&device, format),
        Commands::Size => {
            device.launch().await?;
            let size = device.size().await?;
            println!("{}", serde_json::to_string_pretty(&size)?);
            Ok(())
        }
        Commands::Screenshot { output } => {
            device.launch().await?;
            let png = device.screenshot_png().await?;
            std::fs::write(&output, &png)?;
            info!("Saved {} bytes to {}", png.len(), output.display());
            println!("{}", output.display());
            Ok(())
        }
        Commands::Run { action, params } => {
            let params: serde_json::Value = serde_json::from_str(&params)?;
            device.launch().await?;
            let result = device.execute(&action, params).await;
            device.destroy().await;
            println!("{}", serde_json::to_string_pretty(&result?)?);
            Ok(())
        }
    }
}

async fn list_monitors(device: &PcDevice) -> Result<(), Box<dyn std::error::Error>> {
    let monitors = device.monitors().await?;
    if monitors.is_empty() {
        println!("No monitors found.");
        return Ok(());
    }

    println!("{:<12} {:<12} {:<24} {:<6} PRIMARY", "ID", "NAME", "RECT", "SCALE");
    println!("{}", "-".repeat(64));
    for monitor in monitors {
        println!(
            "{:<12} {:<12} {:<24} {:<6} {}",
            monitor.id,
            monitor.name,
            monitor.rect.to_string(),
            monitor.scale_factor,
            if monitor.is_primary { "yes" } else { "" }
        );
    }
    Ok(())
}

async fn list_windows(device: &PcDevice) -> Result<(), Box<dyn std::error::Error>> {
    let windows = device.windows().await?;
    if windows.is_empty() {
        println!("No windows found.");
        return Ok(());
    }

    println!("{:<12} {:<20} {:<24} {:<8} TITLE", "ID", "APP", "RECT", "MONITOR");
    println!("{}", "-".repeat(80));
    for window in windows {
        println!(
            "{:<12} {:<20} {:<24} {:<8} {}",
            window.id,
            truncate(&window.app_name, 20),
            window.rect.to_string(),
            window.monitor.id,
            window.title
        );
    }
    Ok(())
}

fn print_actions(device: &PcDevice, format: ActionFormat) -> Result<(), Box<dyn std::error::Error>> {
    let definitions = device.action_space();
    match format {
        ActionFormat::Table => {
            println!("{:<20} {:<24} DESCRIPTION", "NAME", "ALIAS");
            println!("{}", "-".repeat(72));
            for def in definitions {
                println!(
                    "{:<20} {:<24} {}",
                    def.name,
                    def.interface_alias.as_deref().unwrap_or("-"),
                    def.description
                );
            }
        }
        ActionFormat::Openai => {
            let tools: Vec<_> = definitions.iter().map(|d| d.to_openai_function()).collect();
            println!("{}", serde_json::to_string_pretty(&tools)?);
        }
        ActionFormat::Anthropic => {
            let tools: Vec<_> = definitions.iter().map(|d| d.to_anthropic_tool()).collect();
            println!("{}", serde_json::to_string_pretty(&tools)?);
        }
    }
    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
