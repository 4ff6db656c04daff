//! Native desktop backend for DeskHands.
//!
//! Implements the [`PcService`](deskhands_protocols::PcService) seam on top of
//! the host machine:
//!
//! - mouse and keyboard through `enigo`
//! - clipboard through `arboard`
//! - monitor enumeration and capture through `screenshots`
//! - window enumeration through `wmctrl` (Linux) or System Events (macOS)
//! - interactive area selection through `slop` (Linux)

mod clipboard;
mod input;
mod screens;
mod selection;
mod service;
mod windows;

pub use clipboard::NativeClipboard;
pub use input::{NativeInput, to_enigo_key, wheel_steps};
pub use service::NativePcService;
pub use windows::{WindowRecord, parse_applescript_windows, parse_wmctrl_windows};

use deskhands_protocols::BackendError;

/// Run blocking platform code on the blocking pool, tagging failures with `kind`.
pub(crate) async fn run_blocking<F, T>(
    kind: fn(String) -> BackendError,
    f: F,
) -> Result<T, BackendError>
where
    F: FnOnce() -> Result<T, String> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| kind(e.to_string()))?
        .map_err(kind)
}
