//! Launch targeting: which window or monitor area a device observes.

use deskhands_protocols::Rect;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::default_true;

/// How a device picks its capture target at launch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaunchConfig {
    /// Target a specific window. Takes priority over `screen_area`.
    #[serde(default)]
    pub window: Option<WindowFilter>,

    /// Target a monitor, or an area of one.
    #[serde(default)]
    pub screen_area: Option<ScreenArea>,

    /// Where the backend may save the screenshot of an interactive selection.
    #[serde(default)]
    pub manual_screenshot_save_path: Option<PathBuf>,
}

/// Window filter. Every configured field must match; absent fields match anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowFilter {
    #[serde(default)]
    pub id: Option<u64>,

    /// Substring of the window title.
    #[serde(default)]
    pub title: Option<String>,

    /// Substring of the owning application name.
    #[serde(default)]
    pub app_name: Option<String>,

    /// Capture the monitor and crop to the window instead of capturing the window itself.
    #[serde(default = "default_true")]
    pub only_for_rect: bool,

    /// Resolve the window once at launch and reuse its geometry.
    #[serde(default = "default_true")]
    pub fixed_window: bool,
}

impl Default for WindowFilter {
    fn default() -> Self {
        Self {
            id: None,
            title: None,
            app_name: None,
            only_for_rect: true,
            fixed_window: true,
        }
    }
}

impl WindowFilter {
    pub fn by_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: Some(app_name.into()),
            ..Default::default()
        }
    }

    pub fn by_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Whether at least one of id, title or app name is set to something non-empty.
    pub fn is_configured(&self) -> bool {
        self.id.is_some()
            || self.title.as_deref().is_some_and(|t| !t.is_empty())
            || self.app_name.as_deref().is_some_and(|a| !a.is_empty())
    }

    /// Whether a window with these properties passes the filter.
    pub fn matches(&self, id: u64, title: &str, app_name: &str) -> bool {
        let id_ok = self.id.is_none_or(|want| want == id);
        let title_ok = self
            .title
            .as_deref()
            .is_none_or(|want| want.is_empty() || title.contains(want));
        let app_ok = self
            .app_name
            .as_deref()
            .is_none_or(|want| want.is_empty() || app_name.contains(want));
        id_ok && title_ok && app_ok
    }

    /// Short label for logs and errors: app name, else title, else id.
    pub fn label(&self) -> String {
        if let Some(app) = self.app_name.as_deref().filter(|a| !a.is_empty()) {
            return app.to_string();
        }
        if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
            return title.to_string();
        }
        self.id.map(|id| id.to_string()).unwrap_or_default()
    }
}

/// Monitor area selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenArea {
    #[serde(default)]
    pub monitor_id: Option<u32>,

    /// Index into the monitor list, clamped to the valid range.
    #[serde(default)]
    pub monitor_index: Option<i64>,

    /// Area relative to the monitor origin. Absent means the whole monitor.
    #[serde(default)]
    pub area: Option<Rect>,

    /// Ask the user to pick the area interactively before falling back.
    #[serde(default)]
    pub prefer_manual: bool,
}
