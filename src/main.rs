//! DeskHands - desktop automation device for vision-driven agents.
//!
//! Main entry point for the DeskHands CLI.

mod cli;
mod cmd_device;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use clap::Parser;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use deskhands_config::{Config, ConfigLoader, ConfigValidator, LoggingConfig};

use crate::cli::Cli;
use crate::cmd_device::handle_command;

/// Initialize tracing with console output and an optional daily-rolling log file.
fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let file_layer = if logging.file {
        let log_dir = PathBuf::from(ConfigLoader::expand_path(&logging.log_dir));
        std::fs::create_dir_all(&log_dir)?;

        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("deskhands")
            .filename_suffix("log")
            .max_log_files(logging.max_log_files)
            .build(&log_dir)?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        // Dropping the guard stops the writer thread.
        static GUARD: OnceLock<WorkerGuard> = OnceLock::new();
        let _ = GUARD.set(guard);

        Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(env_filter)
        // Console on stderr so command output on stdout stays clean.
        .with(
            fmt::layer()
                .with_target(true)
                .with_ansi(true)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(())
}

/// Load the config file, or defaults when it does not exist.
fn load_config(path: &Path) -> Result<(Config, bool), Box<dyn std::error::Error>> {
    if !path.exists() {
        return Ok((Config::default(), false));
    }
    Ok((ConfigLoader::load(path)?, true))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let (config, found) = load_config(&cli.config)?;
    init_tracing(&config.logging)?;

    if found {
        info!("Loaded configuration from {}", cli.config.display());
    } else {
        warn!(
            "Config file {} not found, using defaults",
            cli.config.display()
        );
    }

    let warnings = ConfigValidator::validate(&config)?.into_result()?;
    for warning in warnings {
        warn!("Config {}: {}", warning.path, warning.message);
    }

    handle_command(cli.command, config).await
}
