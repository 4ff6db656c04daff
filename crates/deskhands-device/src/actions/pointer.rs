//! Pointer actions.

use async_trait::async_trait;
use deskhands_protocols::{Action, ActionDefinition, ActionError, ActionResult, LocatedElement};
use serde::Deserialize;
use std::sync::Arc;

use super::{locate_only_schema, locate_schema, parse_params};
use crate::executor::ActionExecutor;

/// Parameters shared by actions that act on one element.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocateParams {
    #[serde(default)]
    pub locate: Option<LocatedElement>,
}

// ============================================================================
// Tap
// ============================================================================

/// Left-click an element.
pub struct TapAction {
    definition: ActionDefinition,
    executor: Arc<ActionExecutor>,
}

impl TapAction {
    pub fn new(executor: Arc<ActionExecutor>) -> Self {
        Self {
            definition: ActionDefinition::new("Tap", "Tap the element")
                .with_interface_alias("aiTap")
                .with_parameters_schema(locate_only_schema("The element to be tapped")),
            executor,
        }
    }
}

#[async_trait]
impl Action for TapAction {
    fn definition(&self) -> &ActionDefinition {
        &self.definition
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ActionResult, ActionError> {
        let params: LocateParams = parse_params(params)?;
        self.executor.tap(params.locate.as_ref()).await
    }
}

// ============================================================================
// DoubleClick
// ============================================================================

/// Double left-click an element.
pub struct DoubleClickAction {
    definition: ActionDefinition,
    executor: Arc<ActionExecutor>,
}

impl DoubleClickAction {
    pub fn new(executor: Arc<ActionExecutor>) -> Self {
        Self {
            definition: ActionDefinition::new("DoubleClick", "Double click the element")
                .with_interface_alias("aiDoubleClick")
                .with_parameters_schema(locate_only_schema("The element to be double clicked")),
            executor,
        }
    }
}

#[async_trait]
impl Action for DoubleClickAction {
    fn definition(&self) -> &ActionDefinition {
        &self.definition
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ActionResult, ActionError> {
        let params: LocateParams = parse_params(params)?;
        self.executor.double_click(params.locate.as_ref()).await
    }
}

// ============================================================================
// RightClick
// ============================================================================

/// Right-click an element.
pub struct RightClickAction {
    definition: ActionDefinition,
    executor: Arc<ActionExecutor>,
}

impl RightClickAction {
    pub fn new(executor: Arc<ActionExecutor>) -> Self {
        Self {
            definition: ActionDefinition::new("RightClick", "Right click the element")
                .with_interface_alias("aiRightClick")
                .with_parameters_schema(locate_only_schema("The element to be right clicked")),
            executor,
        }
    }
}

#[async_trait]
impl Action for RightClickAction {
    fn definition(&self) -> &ActionDefinition {
        &self.definition
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ActionResult, ActionError> {
        let params: LocateParams = parse_params(params)?;
        self.executor.right_click(params.locate.as_ref()).await
    }
}

// ============================================================================
// Hover
// ============================================================================

/// Move the pointer over an element and wait.
pub struct HoverAction {
    definition: ActionDefinition,
    executor: Arc<ActionExecutor>,
}

impl HoverAction {
    pub fn new(executor: Arc<ActionExecutor>) -> Self {
        Self {
            definition: ActionDefinition::new("Hover", "Move the mouse to the element")
                .with_interface_alias("aiHover")
                .with_parameters_schema(locate_only_schema("The element to be hovered")),
            executor,
        }
    }
}

#[async_trait]
impl Action for HoverAction {
    fn definition(&self) -> &ActionDefinition {
        &self.definition
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ActionResult, ActionError> {
        let params: LocateParams = parse_params(params)?;
        self.executor.hover(params.locate.as_ref()).await
    }
}

// ============================================================================
// LongPress
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LongPressParams {
    #[serde(default)]
    pub locate: Option<LocatedElement>,
    /// Hold time in milliseconds.
    #[serde(default)]
    pub duration: Option<u64>,
}

/// Press and hold the left button on an element.
pub struct LongPressAction {
    definition: ActionDefinition,
    executor: Arc<ActionExecutor>,
}

impl LongPressAction {
    pub fn new(executor: Arc<ActionExecutor>) -> Self {
        let default_ms = executor.tunables().long_press_ms;
        Self {
            definition: ActionDefinition::new("LongPress", "Long press the element")
                .with_interface_alias("aiLongPress")
                .with_parameters_schema(serde_json::json!({
                    "type": "object",
                    "properties": {
                        "locate": locate_schema("The element to be long pressed"),
                        "duration": {
                            "type": "integer",
                            "minimum": 0,
                            "description": format!("Hold time in milliseconds (default {})", default_ms)
                        }
                    },
                    "required": ["locate"]
                })),
            executor,
        }
    }
}

#[async_trait]
impl Action for LongPressAction {
    fn definition(&self) -> &ActionDefinition {
        &self.definition
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ActionResult, ActionError> {
        let params: LongPressParams = parse_params(params)?;
        self.executor
            .long_press(params.locate.as_ref(), params.duration)
            .await
    }
}

// ============================================================================
// DragAndDrop
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DragAndDropParams {
    #[serde(default)]
    pub from: Option<LocatedElement>,
    #[serde(default)]
    pub to: Option<LocatedElement>,
}

/// Drag from one element to another with the left button held.
pub struct DragAndDropAction {
    definition: ActionDefinition,
    executor: Arc<ActionExecutor>,
}

impl DragAndDropAction {
    pub fn new(executor: Arc<ActionExecutor>) -> Self {
        Self {
            definition: ActionDefinition::new(
                "DragAndDrop",
                "Drag an element and drop it onto another position",
            )
            .with_interface_alias("aiDragAndDrop")
            .with_parameters_schema(serde_json::json!({
                "type": "object",
                "properties": {
                    "from": locate_schema("The position to drag from"),
                    "to": locate_schema("The position to drop at")
                },
                "required": ["from", "to"]
            })),
            executor,
        }
    }
}

#[async_trait]
impl Action for DragAndDropAction {
    fn definition(&self) -> &ActionDefinition {
        &self.definition
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ActionResult, ActionError> {
        let params: DragAndDropParams = parse_params(params)?;
        self.executor
            .drag_and_drop(params.from.as_ref(), params.to.as_ref())
            .await
    }
}
