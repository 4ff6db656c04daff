//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

mod schema_device;
mod schema_launch;

pub use schema_device::*;
pub use schema_launch::*;

/// Shared default helper used by submodules.
pub(crate) fn default_true() -> bool {
    true
}

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub launch: LaunchConfig,

    #[serde(default)]
    pub device: DeviceConfig,

    #[serde(default)]
    pub tunables: TunablesConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for rolling log files. `~` is expanded.
    #[serde(default = "default_log_dir")]
    pub log_dir: String,

    /// Write logs to files in addition to the console.
    #[serde(default = "default_true")]
    pub file: bool,

    /// Number of daily log files to keep.
    #[serde(default = "default_max_log_files")]
    pub max_log_files: usize,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> String {
    "~/.deskhands/logs".to_string()
}

fn default_max_log_files() -> usize {
    30
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_dir: default_log_dir(),
            file: true,
            max_log_files: default_max_log_files(),
        }
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
