//! Launch-once target state.

use once_cell::sync::OnceCell;
use tracing::{info, warn};

use super::{CaptureTarget, TargetResolver, TargetSource};
use crate::error::DeviceError;

/// Holds the target source chosen at launch and resolves the current target from it.
pub struct TargetState {
    resolver: TargetResolver,
    source: OnceCell<TargetSource>,
}

impl TargetState {
    pub fn new(resolver: TargetResolver) -> Self {
        Self {
            resolver,
            source: OnceCell::new(),
        }
    }

    /// Pick the target source. Later calls are a no-op.
    pub async fn launch(&self) -> Result<(), DeviceError> {
        if self.source.get().is_some() {
            warn!("Device already launched, skip");
            return Ok(());
        }

        let source = self.resolver.resolve_source().await?;
        info!("Capture target source: {}", source.describe());
        if self.source.set(source).is_err() {
            warn!("Device launched concurrently, keeping the first target source");
        }
        Ok(())
    }

    pub fn has_launched(&self) -> bool {
        self.source.get().is_some()
    }

    pub fn source(&self) -> Option<&TargetSource> {
        self.source.get()
    }

    /// The target to use for the next capture or action.
    pub async fn current(&self) -> Result<CaptureTarget, DeviceError> {
        let source = self.source.get().ok_or(DeviceError::NotLaunched)?;
        self.resolver.current(source).await
    }

    pub fn resolver(&self) -> &TargetResolver {
        &self.resolver
    }
}
