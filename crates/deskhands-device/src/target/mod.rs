//! Capture targets: the screen region a device observes and acts on.
//!
//! Every screenshot and every coordinate an agent hands back is relative to
//! the active [`CaptureTarget`]. At launch the device decides where targets
//! come from ([`TargetSource`]) and from then on resolves the current one
//! before each capture or action.

mod resolver;
mod state;

pub use resolver::{TargetResolver, TargetSource, select_monitor};
pub use state::TargetState;

use deskhands_protocols::{ActionError, MonitorDescriptor, Point, Rect, WindowDescriptor};
use image::RgbaImage;

use crate::error::DeviceError;
use crate::imaging;

/// What a capture target grabs pixels from.
#[derive(Debug, Clone)]
enum TargetKind {
    Window {
        window: WindowDescriptor,
        only_for_rect: bool,
    },
    Monitor {
        monitor: MonitorDescriptor,
        cropped: bool,
    },
}

/// The active observed region.
#[derive(Debug, Clone)]
pub struct CaptureTarget {
    /// Absolute rectangle on the virtual screen.
    pub rect_in_global: Rect,
    /// The same rectangle relative to the owning monitor's origin.
    pub rect_in_monitor: Rect,
    pub scale_factor: f64,
    kind: TargetKind,
}

impl CaptureTarget {
    /// Target a window, clamped to its monitor.
    pub fn for_window(window: WindowDescriptor, only_for_rect: bool) -> Self {
        let monitor = &window.monitor;
        let rect_in_global = window.rect.clamp_to(&monitor.rect);
        let rect_in_monitor = rect_in_global.relative_to(monitor.rect.origin());
        Self {
            rect_in_global,
            rect_in_monitor,
            scale_factor: monitor.scale_factor,
            kind: TargetKind::Window {
                window,
                only_for_rect,
            },
        }
    }

    /// Target a monitor, or an area of it given relative to its origin.
    pub fn for_monitor(monitor: MonitorDescriptor, area: Option<Rect>) -> Self {
        let rect_in_monitor =
            area.unwrap_or_else(|| Rect::from_size(monitor.rect.width, monitor.rect.height));
        let rect_in_global = rect_in_monitor.translate(monitor.rect.origin());
        Self {
            rect_in_global,
            rect_in_monitor,
            scale_factor: monitor.scale_factor,
            kind: TargetKind::Monitor {
                monitor,
                cropped: area.is_some(),
            },
        }
    }

    /// Map a point in capture-image space to an absolute screen point.
    ///
    /// Non-finite coordinates and points that fall outside the `i32` screen
    /// space are rejected.
    pub fn to_screen(&self, image_point: [f64; 2]) -> Result<Point, ActionError> {
        let origin = self.rect_in_global.origin();
        match (
            offset_axis(origin.x, image_point[0]),
            offset_axis(origin.y, image_point[1]),
        ) {
            (Some(x), Some(y)) => Ok(Point::new(x, y)),
            _ => Err(ActionError::InvalidParameters(format!(
                "Located point [{}, {}] is outside the screen",
                image_point[0], image_point[1]
            ))),
        }
    }

    pub fn width(&self) -> i32 {
        self.rect_in_global.width
    }

    pub fn height(&self) -> i32 {
        self.rect_in_global.height
    }

    /// The monitor the target lives on.
    pub fn monitor(&self) -> &MonitorDescriptor {
        match &self.kind {
            TargetKind::Window { window, .. } => &window.monitor,
            TargetKind::Monitor { monitor, .. } => monitor,
        }
    }

    /// The window being observed, if any.
    pub fn window(&self) -> Option<&WindowDescriptor> {
        match &self.kind {
            TargetKind::Window { window, .. } => Some(window),
            TargetKind::Monitor { .. } => None,
        }
    }

    /// Short human-readable label.
    pub fn describe(&self) -> String {
        match &self.kind {
            TargetKind::Window { window, .. } => format!(
                "window '{}' ({}) at {}",
                window.title, window.app_name, self.rect_in_global
            ),
            TargetKind::Monitor { monitor, .. } => {
                format!("monitor {} area {}", monitor.name, self.rect_in_global)
            }
        }
    }

    /// Capture a fresh image of the region, in logical pixels.
    ///
    /// Backends may hand back physical pixels on scaled displays; the result
    /// is always resized so image coordinates line up with `rect_in_global`.
    pub async fn capture_image(&self) -> Result<RgbaImage, DeviceError> {
        match &self.kind {
            TargetKind::Window {
                window,
                only_for_rect: false,
            } => {
                let image = imaging::bitmap_to_image(window.capture().await?)?;
                Ok(imaging::to_logical(image, self.scale_factor, self.scale_factor))
            }
            TargetKind::Window {
                window,
                only_for_rect: true,
            } => self.crop_from(&window.monitor).await,
            TargetKind::Monitor {
                monitor,
                cropped: true,
            } => self.crop_from(monitor).await,
            TargetKind::Monitor {
                monitor,
                cropped: false,
            } => {
                let full = imaging::bitmap_to_image(monitor.capture().await?)?;
                let (sx, sy) = capture_scale(&full, monitor);
                Ok(imaging::to_logical(full, sx, sy))
            }
        }
    }

    /// Cut `rect_in_monitor` out of a full monitor capture.
    async fn crop_from(&self, monitor: &MonitorDescriptor) -> Result<RgbaImage, DeviceError> {
        let full = imaging::bitmap_to_image(monitor.capture().await?)?;
        let (sx, sy) = capture_scale(&full, monitor);
        let cropped = imaging::crop(&full, &imaging::scale_rect(&self.rect_in_monitor, sx, sy));
        Ok(imaging::to_logical(cropped, sx, sy))
    }
}

/// Physical pixels per logical pixel of a monitor capture, per axis.
fn capture_scale(capture: &RgbaImage, monitor: &MonitorDescriptor) -> (f64, f64) {
    let ratio = |pixels: u32, logical: i32| {
        if logical > 0 {
            f64::from(pixels) / f64::from(logical)
        } else {
            1.0
        }
    };
    (
        ratio(capture.width(), monitor.rect.width),
        ratio(capture.height(), monitor.rect.height),
    )
}

fn offset_axis(origin: i32, value: f64) -> Option<i32> {
    let value = value.round();
    if !value.is_finite() || value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return None;
    }
    origin.checked_add(value as i32)
}

#[cfg(test)]
#[path = "target_tests.rs"]
mod tests;
