//! Text and keyboard actions.

use async_trait::async_trait;
use deskhands_protocols::{Action, ActionDefinition, ActionError, ActionResult, LocatedElement};
use serde::Deserialize;
use std::sync::Arc;

use super::pointer::LocateParams;
use super::{locate_only_schema, locate_schema, parse_params};
use crate::executor::{ActionExecutor, InputMode};

// ============================================================================
// Input
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputParams {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub locate: Option<LocatedElement>,
    #[serde(default)]
    pub mode: Option<InputMode>,
}

/// Type text into an element through the clipboard.
pub struct InputAction {
    definition: ActionDefinition,
    executor: Arc<ActionExecutor>,
}

impl InputAction {
    pub fn new(executor: Arc<ActionExecutor>) -> Self {
        Self {
            definition: ActionDefinition::new("Input", "Replace the input field with a new value")
                .with_interface_alias("aiInput")
                .with_parameters_schema(serde_json::json!({
                    "type": "object",
                    "properties": {
                        "value": {
                            "type": "string",
                            "description": "The final value that should be filled in the input box"
                        },
                        "locate": locate_schema("The input field to be filled"),
                        "mode": {
                            "type": "string",
                            "enum": ["replace", "clear", "append"],
                            "description": "replace: select existing content and overwrite it; clear: erase the field; append: type at the field without clearing"
                        }
                    },
                    "required": ["value"]
                })),
            executor,
        }
    }
}

#[async_trait]
impl Action for InputAction {
    fn definition(&self) -> &ActionDefinition {
        &self.definition
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ActionResult, ActionError> {
        let params: InputParams = parse_params(params)?;
        self.executor
            .input(
                &params.value,
                params.locate.as_ref(),
                params.mode.unwrap_or_default(),
            )
            .await
    }
}

// ============================================================================
// ClearInput
// ============================================================================

/// Erase the content of an input field.
pub struct ClearInputAction {
    definition: ActionDefinition,
    executor: Arc<ActionExecutor>,
}

impl ClearInputAction {
    pub fn new(executor: Arc<ActionExecutor>) -> Self {
        Self {
            definition: ActionDefinition::new(
                "ClearInput",
                "Clear the text content of an input field",
            )
            .with_interface_alias("aiClearInput")
            .with_parameters_schema(locate_only_schema("The input field to be cleared")),
            executor,
        }
    }
}

#[async_trait]
impl Action for ClearInputAction {
    fn definition(&self) -> &ActionDefinition {
        &self.definition
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ActionResult, ActionError> {
        let params: LocateParams = parse_params(params)?;
        self.executor.clear_input(params.locate.as_ref()).await
    }
}

// ============================================================================
// KeyboardPress
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyboardPressParams {
    pub key_name: String,
    #[serde(default)]
    pub locate: Option<LocatedElement>,
}

/// Press a key or a "+"-joined key combination.
pub struct KeyboardPressAction {
    definition: ActionDefinition,
    executor: Arc<ActionExecutor>,
}

impl KeyboardPressAction {
    pub fn new(executor: Arc<ActionExecutor>) -> Self {
        Self {
            definition: ActionDefinition::new(
                "KeyboardPress",
                "Press a key or key combination, like \"Enter\", \"Tab\", \"Escape\", or \"Control+A\"",
            )
            .with_interface_alias("aiKeyboardPress")
            .with_parameters_schema(serde_json::json!({
                "type": "object",
                "properties": {
                    "keyName": {
                        "type": "string",
                        "description": "The key to press; join keys with '+' for a combination"
                    },
                    "locate": locate_schema("The element to focus before pressing")
                },
                "required": ["keyName"]
            })),
            executor,
        }
    }
}

#[async_trait]
impl Action for KeyboardPressAction {
    fn definition(&self) -> &ActionDefinition {
        &self.definition
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ActionResult, ActionError> {
        let params: KeyboardPressParams = parse_params(params)?;
        self.executor
            .keyboard_press(&params.key_name, params.locate.as_ref())
            .await
    }
}
