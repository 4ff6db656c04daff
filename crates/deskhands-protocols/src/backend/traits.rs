//! Backend service traits.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{ManualSelection, MonitorDescriptor, WindowDescriptor};
use crate::error::BackendError;
use crate::types::{Bitmap, KeyCode, Point};

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl Default for MouseButton {
    fn default() -> Self {
        Self::Left
    }
}

/// Wheel direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    Up,
    Down,
    Left,
    Right,
}

impl ScrollDirection {
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }
}

impl Default for ScrollDirection {
    fn default() -> Self {
        Self::Down
    }
}

/// Mouse primitives.
#[async_trait]
pub trait Mouse: Send + Sync {
    /// Move the pointer to an absolute screen point.
    async fn set_position(&self, point: Point) -> Result<(), BackendError>;

    async fn click(&self, button: MouseButton) -> Result<(), BackendError>;

    async fn double_click(&self, button: MouseButton) -> Result<(), BackendError>;

    async fn press_button(&self, button: MouseButton) -> Result<(), BackendError>;

    async fn release_button(&self, button: MouseButton) -> Result<(), BackendError>;

    /// Scroll the wheel. `amount` is in backend wheel units and may be negative,
    /// which reverses `direction`.
    async fn scroll(&self, direction: ScrollDirection, amount: i32) -> Result<(), BackendError>;
}

/// Keyboard primitives.
#[async_trait]
pub trait Keyboard: Send + Sync {
    /// Press every key of the set, in order.
    async fn press_keys(&self, keys: &[KeyCode]) -> Result<(), BackendError>;

    /// Release every key of the set.
    async fn release_keys(&self, keys: &[KeyCode]) -> Result<(), BackendError>;
}

/// Clipboard access.
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn set_text(&self, text: &str) -> Result<(), BackendError>;
}

/// Something that can produce a fresh bitmap of a screen region.
#[async_trait]
pub trait CaptureSource: Send + Sync {
    async fn capture(&self) -> Result<Bitmap, BackendError>;
}

/// The low-level input and capture service a device drives.
#[async_trait]
pub trait PcService: Send + Sync {
    /// Backend name used in logs and descriptions.
    fn name(&self) -> &str;

    fn mouse(&self) -> &dyn Mouse;

    fn keyboard(&self) -> &dyn Keyboard;

    fn clipboard(&self) -> &dyn Clipboard;

    /// Enumerate top-level windows. Called fresh on every resolution.
    async fn all_windows(&self) -> Result<Vec<WindowDescriptor>, BackendError>;

    /// Enumerate monitors. Called fresh on every resolution.
    async fn all_monitors(&self) -> Result<Vec<MonitorDescriptor>, BackendError>;

    /// Let the user pick a monitor area interactively.
    ///
    /// `Ok(None)` means the user cancelled. When `save_path` is given the
    /// backend may persist a screenshot of the selection there.
    async fn select_area(
        &self,
        save_path: Option<&Path>,
    ) -> Result<Option<ManualSelection>, BackendError> {
        let _ = save_path;
        Ok(None)
    }
}

#[cfg(test)]
#[path = "traits_tests.rs"]
mod tests;
