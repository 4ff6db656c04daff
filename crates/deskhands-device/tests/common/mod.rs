//! Recording mock backend shared by the integration suites.

#![allow(dead_code)]

use async_trait::async_trait;
use deskhands_config::{LaunchConfig, TunablesConfig};
use deskhands_device::PcDevice;
use deskhands_protocols::{
    BackendError, Bitmap, CaptureSource, Clipboard, KeyCode, Keyboard, ManualSelection,
    MonitorDescriptor, Mouse, MouseButton, PcService, Point, Rect, ScrollDirection,
    WindowDescriptor,
};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A primitive the mock backend received.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Move(Point),
    Click(MouseButton),
    DoubleClick(MouseButton),
    Press(MouseButton),
    Release(MouseButton),
    Scroll(ScrollDirection, i32),
    KeysDown(Vec<KeyCode>),
    KeysUp(Vec<KeyCode>),
    Clipboard(String),
}

pub struct SolidCapture {
    pub width: u32,
    pub height: u32,
}

#[async_trait]
impl CaptureSource for SolidCapture {
    async fn capture(&self) -> Result<Bitmap, BackendError> {
        Ok(Bitmap::filled(self.width, self.height, [200, 100, 50, 255]))
    }
}

pub fn monitor(id: u32, rect: Rect) -> MonitorDescriptor {
    MonitorDescriptor::new(
        id,
        rect,
        Arc::new(SolidCapture {
            width: rect.width as u32,
            height: rect.height as u32,
        }),
    )
}

#[derive(Debug, Clone)]
pub struct WindowSpec {
    pub id: u64,
    pub title: String,
    pub app_name: String,
    pub rect: Rect,
    pub monitor: u32,
}

impl WindowSpec {
    pub fn new(id: u64, title: &str, app_name: &str, rect: Rect) -> Self {
        Self {
            id,
            title: title.to_string(),
            app_name: app_name.to_string(),
            rect,
            monitor: 1,
        }
    }
}

#[derive(Default)]
pub struct MockPcService {
    pub events: Mutex<Vec<Event>>,
    pub monitors: Mutex<Vec<MonitorDescriptor>>,
    pub windows: Mutex<Vec<WindowSpec>>,
    pub selection: Mutex<Option<ManualSelection>>,
    pub selection_paths: Mutex<Vec<Option<PathBuf>>>,
    pub window_enumerations: Mutex<usize>,
}

impl MockPcService {
    /// One 1920x1080 primary monitor at the origin.
    pub fn new() -> Self {
        let service = Self::default();
        service
            .monitors
            .lock()
            .push(monitor(1, Rect::new(0, 0, 1920, 1080)).with_primary(true));
        service
    }

    pub fn with_window(self, spec: WindowSpec) -> Self {
        self.windows.lock().push(spec);
        self
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    pub fn clear_events(&self) {
        self.events.lock().clear();
    }

    pub fn move_window(&self, id: u64, rect: Rect) {
        if let Some(window) = self.windows.lock().iter_mut().find(|w| w.id == id) {
            window.rect = rect;
        }
    }

    pub fn close_window(&self, id: u64) {
        self.windows.lock().retain(|w| w.id != id);
    }

    fn record(&self, event: Event) {
        self.events.lock().push(event);
    }
}

#[async_trait]
impl Mouse for MockPcService {
    async fn set_position(&self, point: Point) -> Result<(), BackendError> {
        self.record(Event::Move(point));
        Ok(())
    }

    async fn click(&self, button: MouseButton) -> Result<(), BackendError> {
        self.record(Event::Click(button));
        Ok(())
    }

    async fn double_click(&self, button: MouseButton) -> Result<(), BackendError> {
        self.record(Event::DoubleClick(button));
        Ok(())
    }

    async fn press_button(&self, button: MouseButton) -> Result<(), BackendError> {
        self.record(Event::Press(button));
        Ok(())
    }

    async fn release_button(&self, button: MouseButton) -> Result<(), BackendError> {
        self.record(Event::Release(button));
        Ok(())
    }

    async fn scroll(&self, direction: ScrollDirection, amount: i32) -> Result<(), BackendError> {
        self.record(Event::Scroll(direction, amount));
        Ok(())
    }
}

#[async_trait]
impl Keyboard for MockPcService {
    async fn press_keys(&self, keys: &[KeyCode]) -> Result<(), BackendError> {
        self.record(Event::KeysDown(keys.to_vec()));
        Ok(())
    }

    async fn release_keys(&self, keys: &[KeyCode]) -> Result<(), BackendError> {
        self.record(Event::KeysUp(keys.to_vec()));
        Ok(())
    }
}

#[async_trait]
impl Clipboard for MockPcService {
    async fn set_text(&self, text: &str) -> Result<(), BackendError> {
        self.record(Event::Clipboard(text.to_string()));
        Ok(())
    }
}

#[async_trait]
impl PcService for MockPcService {
    fn name(&self) -> &str {
        "mock"
    }

    fn mouse(&self) -> &dyn Mouse {
        self
    }

    fn keyboard(&self) -> &dyn Keyboard {
        self
    }

    fn clipboard(&self) -> &dyn Clipboard {
        self
    }

    async fn all_windows(&self) -> Result<Vec<WindowDescriptor>, BackendError> {
        *self.window_enumerations.lock() += 1;
        let monitors = self.monitors.lock().clone();
        let windows = self.windows.lock().clone();
        windows
            .into_iter()
            .map(|spec| {
                let owner = monitors
                    .iter()
                    .find(|m| m.id == spec.monitor)
                    .cloned()
                    .ok_or_else(|| BackendError::Enumeration("window without monitor".into()))?;
                Ok(WindowDescriptor::new(
                    spec.id,
                    spec.title,
                    spec.app_name,
                    spec.rect,
                    owner,
                    Arc::new(SolidCapture {
                        width: spec.rect.width as u32,
                        height: spec.rect.height as u32,
                    }),
                ))
            })
            .collect()
    }

    async fn all_monitors(&self) -> Result<Vec<MonitorDescriptor>, BackendError> {
        Ok(self.monitors.lock().clone())
    }

    async fn select_area(
        &self,
        save_path: Option<&Path>,
    ) -> Result<Option<ManualSelection>, BackendError> {
        self.selection_paths
            .lock()
            .push(save_path.map(Path::to_path_buf));
        Ok(self.selection.lock().clone())
    }
}

/// A launched device over the mock, with zero delays.
pub async fn launched_device(service: Arc<MockPcService>, launch: LaunchConfig) -> PcDevice {
    let device = device_with(service, launch, "linux");
    device.launch().await.unwrap();
    device
}

pub fn device_with(service: Arc<MockPcService>, launch: LaunchConfig, platform: &str) -> PcDevice {
    PcDevice::builder()
        .service(service)
        .launch_config(launch)
        .device_config(deskhands_config::DeviceConfig {
            click_before_input: false,
            platform: Some(platform.to_string()),
        })
        .tunables(TunablesConfig::without_delays())
        .build()
        .unwrap()
}
