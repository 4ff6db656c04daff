//! The native `PcService`.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use deskhands_protocols::{
    BackendError, Bitmap, Clipboard, Keyboard, ManualSelection, MonitorDescriptor, Mouse,
    PcService, WindowDescriptor,
};
use tracing::{debug, info, warn};

use crate::clipboard::NativeClipboard;
use crate::input::NativeInput;
use crate::run_blocking;
use crate::screens::{self, ScreenCapture};
use crate::selection;
use crate::windows;

/// Drives the machine this process runs on.
#[derive(Default, Clone)]
pub struct NativePcService {
    input: NativeInput,
    clipboard: NativeClipboard,
}

impl NativePcService {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PcService for NativePcService {
    fn name(&self) -> &str {
        "native"
    }

    fn mouse(&self) -> &dyn Mouse {
        &self.input
    }

    fn keyboard(&self) -> &dyn Keyboard {
        &self.input
    }

    fn clipboard(&self) -> &dyn Clipboard {
        &self.clipboard
    }

    async fn all_windows(&self) -> Result<Vec<WindowDescriptor>, BackendError> {
        let monitors = self.all_monitors().await?;
        let records = run_blocking(BackendError::Enumeration, windows::list_windows).await?;
        debug!("Platform reported {} windows", records.len());

        Ok(records
            .into_iter()
            .filter(|w| !w.rect.is_empty())
            .filter_map(|w| {
                let monitor = screens::monitor_at(&monitors, w.rect.center())?.clone();
                let area = w
                    .rect
                    .clamp_to(&monitor.rect)
                    .relative_to(monitor.rect.origin());
                let capture = Arc::new(ScreenCapture::area(monitor.id, area));
                Some(WindowDescriptor::new(
                    w.id, w.title, w.app_name, w.rect, monitor, capture,
                ))
            })
            .collect())
    }

    async fn all_monitors(&self) -> Result<Vec<MonitorDescriptor>, BackendError> {
        run_blocking(BackendError::Enumeration, screens::list_monitors).await
    }

    async fn select_area(
        &self,
        save_path: Option<&Path>,
    ) -> Result<Option<ManualSelection>, BackendError> {
        let Some(selected) = run_blocking(BackendError::Selection, selection::select_rect).await?
        else {
            return Ok(None);
        };

        let monitors = self.all_monitors().await?;
        let Some(monitor) = screens::monitor_at(&monitors, selected.origin()).cloned() else {
            return Err(BackendError::Selection("no monitor for selection".to_string()));
        };
        let rect = selected
            .clamp_to(&monitor.rect)
            .relative_to(monitor.rect.origin());
        info!("Selected {} on {}", rect, monitor.name);

        if let Some(path) = save_path {
            let capture = ScreenCapture::area(monitor.id, rect);
            let path = path.to_path_buf();
            let saved = run_blocking(BackendError::Capture, move || {
                save_png(&capture.capture_blocking()?, &path)
            })
            .await;
            if let Err(e) = saved {
                warn!("Failed to save selection screenshot: {}", e);
            }
        }

        Ok(Some(ManualSelection {
            monitor,
            rect: Some(rect),
        }))
    }
}

fn save_png(bitmap: &Bitmap, path: &Path) -> Result<(), String> {
    let image = image::RgbaImage::from_raw(bitmap.width, bitmap.height, bitmap.rgba.clone())
        .ok_or_else(|| "bitmap size mismatch".to_string())?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
    }
    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| e.to_string())?;
    debug!("Saved selection screenshot to {}", path.display());
    Ok(())
}
