//! The PC device facade.

use deskhands_config::{Config, DeviceConfig, LaunchConfig, TunablesConfig};
use deskhands_protocols::{
    ActionDefinition, ActionError, ActionResult, MonitorDescriptor, PcService, WindowDescriptor,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

use crate::actions;
use crate::error::DeviceError;
use crate::executor::ActionExecutor;
use crate::imaging;
use crate::listener::{ListenerHandle, OutputListenerRegistry};
use crate::registry::ActionRegistry;
use crate::target::{CaptureTarget, TargetResolver, TargetState};

/// Interface type reported to the agent.
pub const INTERFACE_TYPE: &str = "pc";

/// Size of the active capture target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeviceSize {
    pub width: i32,
    pub height: i32,
    /// Device pixel ratio of the owning monitor.
    pub dpr: f64,
}

/// Builder for [`PcDevice`].
#[derive(Default)]
pub struct PcDeviceBuilder {
    service: Option<Arc<dyn PcService>>,
    launch: LaunchConfig,
    device: DeviceConfig,
    tunables: TunablesConfig,
}

impl PcDeviceBuilder {
    pub fn service(mut self, service: Arc<dyn PcService>) -> Self {
        self.service = Some(service);
        self
    }

    pub fn launch_config(mut self, launch: LaunchConfig) -> Self {
        self.launch = launch;
        self
    }

    pub fn device_config(mut self, device: DeviceConfig) -> Self {
        self.device = device;
        self
    }

    pub fn tunables(mut self, tunables: TunablesConfig) -> Self {
        self.tunables = tunables;
        self
    }

    /// Take launch, device and tunables sections from a loaded config.
    pub fn config(self, config: &Config) -> Self {
        self.launch_config(config.launch.clone())
            .device_config(config.device.clone())
            .tunables(config.tunables.clone())
    }

    pub fn build(self) -> Result<PcDevice, DeviceError> {
        let service = self.service.ok_or_else(|| {
            DeviceError::Configuration("a PcService backend is required".to_string())
        })?;

        let targets = Arc::new(TargetState::new(TargetResolver::new(
            service.clone(),
            self.launch,
        )));
        let listeners = Arc::new(OutputListenerRegistry::new());
        let executor = Arc::new(ActionExecutor::new(
            service.clone(),
            targets.clone(),
            listeners.clone(),
            self.tunables,
            self.device.click_before_input,
            self.device.platform(),
        ));

        let registry = ActionRegistry::new();
        for action in actions::catalog(executor.clone()) {
            registry
                .register(action)
                .map_err(|e| DeviceError::Configuration(e.to_string()))?;
        }

        Ok(PcDevice {
            service,
            targets,
            listeners,
            executor,
            registry,
        })
    }
}

/// A desktop an agent observes through screenshots and drives through actions.
pub struct PcDevice {
    service: Arc<dyn PcService>,
    targets: Arc<TargetState>,
    listeners: Arc<OutputListenerRegistry>,
    executor: Arc<ActionExecutor>,
    registry: ActionRegistry,
}

impl PcDevice {
    pub fn builder() -> PcDeviceBuilder {
        PcDeviceBuilder::default()
    }

    /// Resolve the capture target source. Runs once; later calls only warn.
    pub async fn launch(&self) -> Result<(), DeviceError> {
        self.targets.launch().await?;
        info!("PC device launched on backend {}", self.service.name());
        Ok(())
    }

    pub fn has_launched(&self) -> bool {
        self.targets.has_launched()
    }

    /// The target the next capture or action will use.
    pub async fn resolve_target(&self) -> Result<CaptureTarget, DeviceError> {
        self.targets.current().await
    }

    pub fn interface_type(&self) -> &'static str {
        INTERFACE_TYPE
    }

    pub fn describe(&self) -> String {
        format!(
            "This is a pc device for desktop automation (backend: {})",
            self.service.name()
        )
    }

    pub async fn size(&self) -> Result<DeviceSize, DeviceError> {
        let target = self.resolve_target().await?;
        Ok(DeviceSize {
            width: target.width(),
            height: target.height(),
            dpr: target.scale_factor,
        })
    }

    /// PNG bytes of the current target.
    pub async fn screenshot_png(&self) -> Result<Vec<u8>, DeviceError> {
        let target = self.resolve_target().await?;
        let image = target.capture_image().await?;
        debug!(
            "Captured {}x{} from {}",
            image.width(),
            image.height(),
            target.describe()
        );
        imaging::encode_png(&image)
    }

    /// The current target as a `data:image/png;base64,` URI.
    pub async fn screenshot_base64(&self) -> Result<String, DeviceError> {
        let png = self.screenshot_png().await?;
        Ok(imaging::png_data_uri(&png))
    }

    pub async fn monitors(&self) -> Result<Vec<MonitorDescriptor>, DeviceError> {
        Ok(self.service.all_monitors().await?)
    }

    pub async fn windows(&self) -> Result<Vec<WindowDescriptor>, DeviceError> {
        Ok(self.service.all_windows().await?)
    }

    /// Definitions of every supported action.
    pub fn action_space(&self) -> Vec<ActionDefinition> {
        self.registry.list()
    }

    pub fn actions(&self) -> &ActionRegistry {
        &self.registry
    }

    pub fn executor(&self) -> &Arc<ActionExecutor> {
        &self.executor
    }

    /// Validate and run an action by name or interface alias.
    pub async fn execute(
        &self,
        name: &str,
        params: serde_json::Value,
    ) -> Result<ActionResult, ActionError> {
        let action = self
            .registry
            .get(name)
            .ok_or_else(|| ActionError::NotFound(name.to_string()))?;
        action.validate(&params)?;
        debug!("Executing {}", action.definition().name);
        action.execute(params).await
    }

    /// Register a callback for final answers sent with `id`.
    pub fn listen_output<F>(&self, id: impl Into<String>, callback: F) -> ListenerHandle
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.listeners.listen(id, callback)
    }

    pub fn remove_output_listener(&self, handle: &ListenerHandle) -> bool {
        self.listeners.remove(handle)
    }

    /// Release listeners. The device stays usable for actions.
    pub async fn destroy(&self) {
        self.listeners.clear();
        info!("PC device destroyed");
    }
}
