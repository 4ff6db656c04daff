//! # DeskHands Device
//!
//! A PC device an automation agent drives through a fixed action catalog.
//!
//! The device resolves which screen region is observed (a window or a
//! monitor area), keeps the mapping between capture-image coordinates and
//! real screen coordinates, and turns abstract actions into primitive
//! mouse and keyboard events on a [`PcService`](deskhands_protocols::PcService).
//!
//! ```ignore
//! let device = PcDevice::builder()
//!     .service(Arc::new(NativePcService::new()))
//!     .launch_config(config.launch.clone())
//!     .build()?;
//! device.launch().await?;
//! device.execute("Tap", json!({"locate": {"center": [50, 50]}})).await?;
//! ```

pub mod actions;
mod device;
mod error;
mod executor;
mod imaging;
mod keymap;
mod listener;
mod registry;
mod scroll;
pub mod target;

pub use device::{DeviceSize, PcDevice, PcDeviceBuilder, INTERFACE_TYPE};
pub use error::DeviceError;
pub use executor::{ActionExecutor, InputMode, ScrollType};
pub use keymap::{KeyCombo, KeyMapper};
pub use listener::{ListenerHandle, OutputCallback, OutputListenerRegistry};
pub use registry::ActionRegistry;
pub use scroll::ScrollBatcher;
pub use target::{CaptureTarget, TargetResolver, TargetSource, TargetState};
