//! Monitor enumeration and capture through the screenshots crate.

use std::sync::Arc;

use async_trait::async_trait;
use deskhands_protocols::{BackendError, Bitmap, CaptureSource, MonitorDescriptor, Point, Rect};
use screenshots::Screen;

use crate::run_blocking;

/// Captures one display, or an area of it relative to the display origin.
///
/// Only the display id is kept; the screen is looked up again on every
/// capture so a reconfigured display is picked up.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScreenCapture {
    display_id: u32,
    area: Option<Rect>,
}

impl ScreenCapture {
    pub(crate) fn full(display_id: u32) -> Self {
        Self {
            display_id,
            area: None,
        }
    }

    pub(crate) fn area(display_id: u32, area: Rect) -> Self {
        Self {
            display_id,
            area: Some(area),
        }
    }

    /// Grab pixels on the current thread.
    pub(crate) fn capture_blocking(&self) -> Result<Bitmap, String> {
        let screen = Screen::all()
            .map_err(|e| e.to_string())?
            .into_iter()
            .find(|s| s.display_info.id == self.display_id)
            .ok_or_else(|| format!("display {} disconnected", self.display_id))?;

        let image = match self.area {
            Some(area) if area.is_empty() => {
                return Err(format!("empty capture area {}", area));
            }
            Some(area) => screen.capture_area(area.x, area.y, area.width as u32, area.height as u32),
            None => screen.capture(),
        }
        .map_err(|e| e.to_string())?;

        let (width, height) = (image.width(), image.height());
        Ok(Bitmap::new(width, height, image.into_raw()))
    }
}

#[async_trait]
impl CaptureSource for ScreenCapture {
    async fn capture(&self) -> Result<Bitmap, BackendError> {
        let source = *self;
        run_blocking(BackendError::Capture, move || source.capture_blocking()).await
    }
}

/// Enumerate displays on the current thread.
pub(crate) fn list_monitors() -> Result<Vec<MonitorDescriptor>, String> {
    let screens = Screen::all().map_err(|e| e.to_string())?;

    Ok(screens
        .into_iter()
        .enumerate()
        .map(|(idx, s)| {
            let info = s.display_info;
            MonitorDescriptor::new(
                info.id,
                Rect::new(info.x, info.y, info.width as i32, info.height as i32),
                Arc::new(ScreenCapture::full(info.id)),
            )
            .with_name(format!("Monitor {}", idx + 1))
            .with_scale_factor(info.scale_factor as f64)
            .with_primary(info.is_primary)
        })
        .collect())
}

/// The monitor containing `point`, else the primary, else the first.
pub(crate) fn monitor_at(monitors: &[MonitorDescriptor], point: Point) -> Option<&MonitorDescriptor> {
    monitors
        .iter()
        .find(|m| m.rect.contains_point(point))
        .or_else(|| monitors.iter().find(|m| m.is_primary))
        .or_else(|| monitors.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Blank;

    #[async_trait]
    impl CaptureSource for Blank {
        async fn capture(&self) -> Result<Bitmap, BackendError> {
            Ok(Bitmap::filled(1, 1, [0, 0, 0, 255]))
        }
    }

    fn monitors() -> Vec<MonitorDescriptor> {
        vec![
            MonitorDescriptor::new(10, Rect::new(0, 0, 1920, 1080), Arc::new(Blank)),
            MonitorDescriptor::new(20, Rect::new(1920, 0, 1280, 1024), Arc::new(Blank))
                .with_primary(true),
        ]
    }

    #[test]
    fn test_monitor_at_contains_point() {
        let monitors = monitors();
        assert_eq!(monitor_at(&monitors, Point::new(100, 100)).unwrap().id, 10);
        assert_eq!(monitor_at(&monitors, Point::new(2000, 500)).unwrap().id, 20);
    }

    #[test]
    fn test_monitor_at_off_screen_prefers_primary() {
        let monitors = monitors();
        assert_eq!(monitor_at(&monitors, Point::new(-500, -500)).unwrap().id, 20);
    }

    #[test]
    fn test_monitor_at_empty() {
        assert!(monitor_at(&[], Point::new(0, 0)).is_none());
    }

    #[test]
    #[ignore = "needs a desktop session"]
    fn test_list_monitors() {
        let monitors = list_monitors().unwrap();
        assert!(!monitors.is_empty());
    }
}
