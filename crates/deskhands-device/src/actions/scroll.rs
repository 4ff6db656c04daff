//! Scroll and swipe actions.

use async_trait::async_trait;
use deskhands_protocols::{
    Action, ActionDefinition, ActionError, ActionResult, LocatedElement, ScrollDirection,
};
use serde::Deserialize;
use std::sync::Arc;

use super::{locate_schema, parse_params};
use crate::executor::{ActionExecutor, ScrollType};

// ============================================================================
// Scroll
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollParams {
    #[serde(default)]
    pub direction: Option<ScrollDirection>,
    #[serde(default)]
    pub scroll_type: Option<ScrollType>,
    /// Distance in pixels.
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub locate: Option<LocatedElement>,
}

/// Scroll the wheel, or jump to an edge.
pub struct ScrollAction {
    definition: ActionDefinition,
    executor: Arc<ActionExecutor>,
}

impl ScrollAction {
    pub fn new(executor: Arc<ActionExecutor>) -> Self {
        let default_distance = executor.tunables().default_scroll_distance;
        Self {
            definition: ActionDefinition::new(
                "Scroll",
                "Scroll the page or an element. Use scrollType to jump to an edge",
            )
            .with_interface_alias("aiScroll")
            .with_parameters_schema(serde_json::json!({
                "type": "object",
                "properties": {
                    "direction": {
                        "type": "string",
                        "enum": ["up", "down", "left", "right"],
                        "description": "Scroll direction (default down)"
                    },
                    "scrollType": {
                        "type": "string",
                        "enum": ["once", "untilTop", "untilBottom", "untilLeft", "untilRight"],
                        "description": "once scrolls by distance; the others scroll to an edge"
                    },
                    "distance": {
                        "type": "number",
                        "minimum": 0,
                        "description": format!("Distance in pixels (default {})", default_distance)
                    },
                    "locate": locate_schema("The element to scroll in")
                }
            })),
            executor,
        }
    }
}

#[async_trait]
impl Action for ScrollAction {
    fn definition(&self) -> &ActionDefinition {
        &self.definition
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ActionResult, ActionError> {
        let params: ScrollParams = parse_params(params)?;
        self.executor
            .scroll(
                params.scroll_type.unwrap_or_default(),
                params.direction.unwrap_or_default(),
                params.distance,
                params.locate.as_ref(),
            )
            .await
    }
}

// ============================================================================
// Swipe
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SwipeParams {
    #[serde(default)]
    pub start: Option<LocatedElement>,
    #[serde(default)]
    pub end: Option<LocatedElement>,
    #[serde(default)]
    pub direction: Option<ScrollDirection>,
}

/// Swipe from one point to another as a single wheel scroll.
pub struct SwipeAction {
    definition: ActionDefinition,
    executor: Arc<ActionExecutor>,
}

impl SwipeAction {
    pub fn new(executor: Arc<ActionExecutor>) -> Self {
        Self {
            definition: ActionDefinition::new("Swipe", "Swipe from the start point to the end point")
                .with_interface_alias("aiSwipe")
                .with_parameters_schema(serde_json::json!({
                    "type": "object",
                    "properties": {
                        "start": locate_schema("Where the swipe starts"),
                        "end": locate_schema("Where the swipe ends"),
                        "direction": {
                            "type": "string",
                            "enum": ["up", "down", "left", "right"],
                            "description": "Swipe axis; inferred from start and end when omitted"
                        }
                    },
                    "required": ["start", "end"]
                })),
            executor,
        }
    }
}

#[async_trait]
impl Action for SwipeAction {
    fn definition(&self) -> &ActionDefinition {
        &self.definition
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ActionResult, ActionError> {
        let params: SwipeParams = parse_params(params)?;
        self.executor
            .swipe(params.start.as_ref(), params.end.as_ref(), params.direction)
            .await
    }
}
