//! Device behaviour and action tunables.

use serde::{Deserialize, Serialize};

/// Device behaviour switches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Click the target before typing in the default input mode.
    #[serde(default)]
    pub click_before_input: bool,

    /// Platform identifier used for the paste chord. Defaults to the build target OS.
    #[serde(default)]
    pub platform: Option<String>,
}

impl DeviceConfig {
    /// The configured platform, or the OS this binary was built for.
    pub fn platform(&self) -> &str {
        self.platform.as_deref().unwrap_or(std::env::consts::OS)
    }
}

/// Timing and scroll constants used by actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TunablesConfig {
    /// Wait after an action so the UI can react.
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,

    #[serde(default = "default_hover_delay_ms")]
    pub hover_delay_ms: u64,

    /// Hold time for long press when the caller gives none.
    #[serde(default = "default_long_press_ms")]
    pub long_press_ms: u64,

    /// Largest wheel amount sent in one backend call.
    #[serde(default = "default_wheel_once_max")]
    pub wheel_once_max: u32,

    /// Wheel units per pixel of requested scroll distance.
    #[serde(default = "default_wheel_to_pixel")]
    pub wheel_to_pixel: f64,

    /// Pause between batched wheel chunks.
    #[serde(default = "default_wheel_chunk_delay_ms")]
    pub wheel_chunk_delay_ms: u64,

    #[serde(default = "default_scroll_distance")]
    pub default_scroll_distance: f64,

    /// Pixel distance used for scrolling to the left or right edge.
    #[serde(default = "default_edge_scroll_distance")]
    pub edge_scroll_distance: f64,
}

fn default_settle_delay_ms() -> u64 {
    500
}

fn default_hover_delay_ms() -> u64 {
    2000
}

fn default_long_press_ms() -> u64 {
    2000
}

fn default_wheel_once_max() -> u32 {
    1000
}

fn default_wheel_to_pixel() -> f64 {
    1.6
}

fn default_wheel_chunk_delay_ms() -> u64 {
    50
}

fn default_scroll_distance() -> f64 {
    500.0
}

fn default_edge_scroll_distance() -> f64 {
    20000.0
}

impl Default for TunablesConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: default_settle_delay_ms(),
            hover_delay_ms: default_hover_delay_ms(),
            long_press_ms: default_long_press_ms(),
            wheel_once_max: default_wheel_once_max(),
            wheel_to_pixel: default_wheel_to_pixel(),
            wheel_chunk_delay_ms: default_wheel_chunk_delay_ms(),
            default_scroll_distance: default_scroll_distance(),
            edge_scroll_distance: default_edge_scroll_distance(),
        }
    }
}

impl TunablesConfig {
    /// Same scroll constants, no waiting. Useful for tests and dry runs.
    pub fn without_delays() -> Self {
        Self {
            settle_delay_ms: 0,
            hover_delay_ms: 0,
            long_press_ms: 0,
            wheel_chunk_delay_ms: 0,
            ..Self::default()
        }
    }
}
