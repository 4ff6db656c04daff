//! Errors reported by a [`PcService`](crate::PcService) implementation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Mouse operation failed: {0}")]
    Mouse(String),

    #[error("Keyboard operation failed: {0}")]
    Keyboard(String),

    #[error("Clipboard operation failed: {0}")]
    Clipboard(String),

    #[error("Enumeration failed: {0}")]
    Enumeration(String),

    #[error("Capture failed: {0}")]
    Capture(String),

    #[error("Area selection failed: {0}")]
    Selection(String),

    #[error("Not supported by this backend: {0}")]
    Unsupported(String),
}
