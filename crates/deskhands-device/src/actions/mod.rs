//! The device action catalog.
//!
//! Each action pairs an [`ActionDefinition`] (name, interface alias, JSON
//! parameter schema) with a handler on the shared [`ActionExecutor`].

mod output;
mod pointer;
mod scroll;
mod text;

pub use output::*;
pub use pointer::*;
pub use scroll::*;
pub use text::*;

use deskhands_protocols::{Action, ActionError};
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::executor::ActionExecutor;

/// Every action a PC device supports, bound to one executor.
pub fn catalog(executor: Arc<ActionExecutor>) -> Vec<Arc<dyn Action>> {
    vec![
        Arc::new(TapAction::new(executor.clone())),
        Arc::new(DoubleClickAction::new(executor.clone())),
        Arc::new(RightClickAction::new(executor.clone())),
        Arc::new(HoverAction::new(executor.clone())),
        Arc::new(LongPressAction::new(executor.clone())),
        Arc::new(DragAndDropAction::new(executor.clone())),
        Arc::new(InputAction::new(executor.clone())),
        Arc::new(ClearInputAction::new(executor.clone())),
        Arc::new(KeyboardPressAction::new(executor.clone())),
        Arc::new(ScrollAction::new(executor.clone())),
        Arc::new(SwipeAction::new(executor.clone())),
        Arc::new(OutputFinalAnswerAction::new(executor)),
    ]
}

pub(crate) fn parse_params<T: DeserializeOwned>(params: serde_json::Value) -> Result<T, ActionError> {
    serde_json::from_value(params)
        .map_err(|e| ActionError::InvalidParameters(format!("Invalid params: {}", e)))
}

/// Schema of a located element.
pub(crate) fn locate_schema(description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "description": description,
        "properties": {
            "center": {
                "type": "array",
                "items": {"type": "number"},
                "minItems": 2,
                "maxItems": 2,
                "description": "Center point [x, y] in screenshot coordinates"
            },
            "rect": {
                "type": "object",
                "properties": {
                    "x": {"type": "integer"},
                    "y": {"type": "integer"},
                    "width": {"type": "integer"},
                    "height": {"type": "integer"}
                }
            },
            "id": {"type": "string"},
            "description": {"type": "string"}
        }
    })
}

/// Schema for actions that only take a target element.
pub(crate) fn locate_only_schema(description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "locate": locate_schema(description)
        },
        "required": ["locate"]
    })
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
