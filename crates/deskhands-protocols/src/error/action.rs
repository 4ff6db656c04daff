//! Action execution errors.

use thiserror::Error;

use super::BackendError;

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Action not found: {0}")]
    NotFound(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Parameter validation failed: {0}")]
    ValidationFailed(String),

    #[error("Key {0} not found")]
    UnmappedKey(String),

    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("Window:\n {0}\n not found")]
    WindowNotFound(String),

    #[error("Device has not been launched")]
    NotLaunched,

    #[error("No monitors available")]
    NoMonitors,

    #[error("Capture failed: {0}")]
    Capture(String),

    #[error(transparent)]
    Backend(#[from] BackendError),
}
