//! Action execution result types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::Metadata;

/// Result of an action execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResult {
    /// Whether the action dispatched input. Skipped actions report `false`.
    pub performed: bool,

    /// Human-readable summary.
    pub content: String,

    /// Additional metadata about the execution.
    #[serde(default)]
    pub metadata: Metadata,
}

impl ActionResult {
    /// The action ran and dispatched its input.
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            performed: true,
            content: content.into(),
            metadata: HashMap::new(),
        }
    }

    /// The action was skipped without error, e.g. for an unlocated element.
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self {
            performed: false,
            content: reason.into(),
            metadata: HashMap::new(),
        }
    }

    /// Add metadata to the result.
    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}
