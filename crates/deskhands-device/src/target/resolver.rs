//! Capture target resolution policy.

use deskhands_config::{LaunchConfig, ScreenArea, WindowFilter};
use deskhands_protocols::{MonitorDescriptor, PcService, WindowDescriptor};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::CaptureTarget;
use crate::error::DeviceError;

/// Where capture targets come from after launch.
#[derive(Debug, Clone)]
pub enum TargetSource {
    /// Geometry computed at launch and reused for every call.
    Fixed(CaptureTarget),
    /// Re-enumerate windows on every call and pick the first match.
    Dynamic(WindowFilter),
}

impl TargetSource {
    pub fn describe(&self) -> String {
        match self {
            TargetSource::Fixed(target) => format!("fixed {}", target.describe()),
            TargetSource::Dynamic(filter) => format!("dynamic window '{}'", filter.label()),
        }
    }
}

/// Applies the launch configuration against a backend.
pub struct TargetResolver {
    service: Arc<dyn PcService>,
    launch: LaunchConfig,
}

impl TargetResolver {
    pub fn new(service: Arc<dyn PcService>, launch: LaunchConfig) -> Self {
        Self { service, launch }
    }

    pub fn launch_config(&self) -> &LaunchConfig {
        &self.launch
    }

    /// Decide the target source. Windows take priority; a window that cannot
    /// be found falls back to monitor selection.
    pub async fn resolve_source(&self) -> Result<TargetSource, DeviceError> {
        if let Some(filter) = self.launch.window.as_ref().filter(|f| f.is_configured()) {
            match self.find_window(filter).await? {
                Some(window) if filter.fixed_window => {
                    info!("Using window '{}' ({})", window.title, window.app_name);
                    return Ok(TargetSource::Fixed(CaptureTarget::for_window(
                        window,
                        filter.only_for_rect,
                    )));
                }
                Some(window) => {
                    info!(
                        "Tracking window '{}' ({}) dynamically",
                        window.title, window.app_name
                    );
                    return Ok(TargetSource::Dynamic(filter.clone()));
                }
                None => {
                    warn!(
                        "Window {} not found, falling back to screen area",
                        filter.label()
                    );
                }
            }
        }

        Ok(TargetSource::Fixed(self.resolve_screen_area().await?))
    }

    /// Resolve the target for the next call.
    pub async fn current(&self, source: &TargetSource) -> Result<CaptureTarget, DeviceError> {
        match source {
            TargetSource::Fixed(target) => Ok(target.clone()),
            TargetSource::Dynamic(filter) => {
                let window = self
                    .find_window(filter)
                    .await?
                    .ok_or_else(|| DeviceError::WindowNotFound(filter.label()))?;
                Ok(CaptureTarget::for_window(window, filter.only_for_rect))
            }
        }
    }

    async fn find_window(
        &self,
        filter: &WindowFilter,
    ) -> Result<Option<WindowDescriptor>, DeviceError> {
        let windows = self.service.all_windows().await?;
        debug!("Enumerated {} windows", windows.len());
        Ok(windows
            .into_iter()
            .find(|w| filter.matches(w.id, &w.title, &w.app_name)))
    }

    async fn resolve_screen_area(&self) -> Result<CaptureTarget, DeviceError> {
        let screen_area = self.launch.screen_area.clone().unwrap_or_default();

        if screen_area.prefer_manual {
            let save_path = self.launch.manual_screenshot_save_path.as_deref();
            match self.service.select_area(save_path).await {
                Ok(Some(selection)) => {
                    info!(
                        "Using manually selected area on monitor {}",
                        selection.monitor.name
                    );
                    return Ok(CaptureTarget::for_monitor(selection.monitor, selection.rect));
                }
                Ok(None) => warn!("Manual selection cancelled, selecting monitor automatically"),
                Err(e) => warn!(
                    "Manual selection failed: {}, selecting monitor automatically",
                    e
                ),
            }
        }

        let monitors = self.service.all_monitors().await?;
        let monitor = select_monitor(monitors, &screen_area)?;
        info!("Using monitor {} ({})", monitor.name, monitor.rect);
        Ok(CaptureTarget::for_monitor(monitor, screen_area.area))
    }
}

/// Pick a monitor: explicit id, then index (clamped), then primary, then first.
pub fn select_monitor(
    monitors: Vec<MonitorDescriptor>,
    screen_area: &ScreenArea,
) -> Result<MonitorDescriptor, DeviceError> {
    if monitors.is_empty() {
        return Err(DeviceError::NoMonitors);
    }

    if let Some(id) = screen_area.monitor_id {
        if let Some(monitor) = monitors.iter().find(|m| m.id == id) {
            return Ok(monitor.clone());
        }
        warn!("Monitor id {} not found", id);
    }

    if let Some(index) = screen_area.monitor_index {
        let clamped = index.clamp(0, monitors.len() as i64 - 1) as usize;
        return Ok(monitors[clamped].clone());
    }

    if let Some(primary) = monitors.iter().find(|m| m.is_primary) {
        return Ok(primary.clone());
    }

    monitors.into_iter().next().ok_or(DeviceError::NoMonitors)
}
