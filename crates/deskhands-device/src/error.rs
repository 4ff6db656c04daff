//! Device errors.

use deskhands_protocols::{ActionError, BackendError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("Invalid device configuration: {0}")]
    Configuration(String),

    #[error("No monitors available")]
    NoMonitors,

    #[error("Device has not been launched")]
    NotLaunched,

    #[error("Window:\n {0}\n not found")]
    WindowNotFound(String),

    #[error("Malformed bitmap: {0}")]
    MalformedBitmap(String),

    #[error("Image processing failed: {0}")]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl From<DeviceError> for ActionError {
    fn from(err: DeviceError) -> Self {
        match err {
            DeviceError::NotLaunched => ActionError::NotLaunched,
            DeviceError::NoMonitors => ActionError::NoMonitors,
            DeviceError::WindowNotFound(label) => ActionError::WindowNotFound(label),
            DeviceError::Backend(e) => ActionError::Backend(e),
            DeviceError::MalformedBitmap(msg) => ActionError::Capture(msg),
            DeviceError::Image(e) => ActionError::Capture(e.to_string()),
            DeviceError::Configuration(msg) => ActionError::InvalidParameters(msg),
        }
    }
}
