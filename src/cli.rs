//! CLI definitions for DeskHands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// DeskHands CLI.
#[derive(Parser)]
#[command(name = "deskhands")]
#[command(about = "Desktop automation device for vision-driven agents")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List monitors reported by the backend
    Monitors,

    /// List top-level windows reported by the backend
    Windows,

    /// Print the action catalog
    Actions {
        /// Output format
        #[arg(long, value_enum, default_value_t = ActionFormat::Table)]
        format: ActionFormat,
    },

    /// Launch the device and print the capture target size
    Size,

    /// Launch the device and save a screenshot of the capture target
    Screenshot {
        /// Output PNG path
        #[arg(short, long, default_value = "screenshot.png")]
        output: PathBuf,
    },

    /// Launch the device and run one action
    Run {
        /// Action name or interface alias (e.g. Tap, aiScroll)
        action: String,

        /// Action parameters as a JSON object
        #[arg(short, long, default_value = "{}")]
        params: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum ActionFormat {
    Table,
    Openai,
    Anthropic,
}
