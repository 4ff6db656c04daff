//! Monitor and window descriptors returned by enumeration.

use std::fmt;
use std::sync::Arc;

use super::CaptureSource;
use crate::error::BackendError;
use crate::types::{Bitmap, Rect};

/// A physical monitor.
#[derive(Clone)]
pub struct MonitorDescriptor {
    pub id: u32,
    pub name: String,
    /// Absolute rectangle on the virtual screen.
    pub rect: Rect,
    pub scale_factor: f64,
    pub is_primary: bool,
    capture: Arc<dyn CaptureSource>,
}

impl MonitorDescriptor {
    pub fn new(id: u32, rect: Rect, capture: Arc<dyn CaptureSource>) -> Self {
        Self {
            id,
            name: format!("monitor-{}", id),
            rect,
            scale_factor: 1.0,
            is_primary: false,
            capture,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    pub fn with_primary(mut self, is_primary: bool) -> Self {
        self.is_primary = is_primary;
        self
    }

    /// Capture the whole monitor.
    pub async fn capture(&self) -> Result<Bitmap, BackendError> {
        self.capture.capture().await
    }
}

impl fmt::Debug for MonitorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MonitorDescriptor")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("rect", &self.rect)
            .field("scale_factor", &self.scale_factor)
            .field("is_primary", &self.is_primary)
            .finish_non_exhaustive()
    }
}

/// A top-level window.
#[derive(Clone)]
pub struct WindowDescriptor {
    pub id: u64,
    pub title: String,
    pub app_name: String,
    /// Absolute rectangle on the virtual screen.
    pub rect: Rect,
    /// The monitor the window lives on.
    pub monitor: MonitorDescriptor,
    capture: Arc<dyn CaptureSource>,
}

impl WindowDescriptor {
    pub fn new(
        id: u64,
        title: impl Into<String>,
        app_name: impl Into<String>,
        rect: Rect,
        monitor: MonitorDescriptor,
        capture: Arc<dyn CaptureSource>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            app_name: app_name.into(),
            rect,
            monitor,
            capture,
        }
    }

    /// Capture just this window.
    pub async fn capture(&self) -> Result<Bitmap, BackendError> {
        self.capture.capture().await
    }
}

impl fmt::Debug for WindowDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowDescriptor")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("app_name", &self.app_name)
            .field("rect", &self.rect)
            .field("monitor", &self.monitor.id)
            .finish_non_exhaustive()
    }
}

/// Outcome of an interactive area selection.
#[derive(Debug, Clone)]
pub struct ManualSelection {
    pub monitor: MonitorDescriptor,
    /// Selected area relative to the monitor; `None` means the full monitor.
    pub rect: Option<Rect>,
}
