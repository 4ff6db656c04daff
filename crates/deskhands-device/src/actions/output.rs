//! Final answer output.

use async_trait::async_trait;
use deskhands_protocols::{Action, ActionDefinition, ActionError, ActionResult};
use serde::Deserialize;
use std::sync::Arc;

use super::parse_params;
use crate::executor::ActionExecutor;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputFinalAnswerParams {
    #[serde(default)]
    pub value: String,
    /// Output listener id.
    #[serde(default)]
    pub uuid: Option<String>,
}

/// Hand the agent's final answer to the listeners registered under `uuid`.
pub struct OutputFinalAnswerAction {
    definition: ActionDefinition,
    executor: Arc<ActionExecutor>,
}

impl OutputFinalAnswerAction {
    pub fn new(executor: Arc<ActionExecutor>) -> Self {
        Self {
            definition: ActionDefinition::new(
                "OutputFinalAnswer",
                "Output the final, summarized answer to the user's question. Only call this when the original request asks for an answer",
            )
            .with_interface_alias("aiOutputFinalAnswer")
            .with_parameters_schema(serde_json::json!({
                "type": "object",
                "properties": {
                    "value": {
                        "type": "string",
                        "description": "The final answer to output"
                    },
                    "uuid": {
                        "type": "string",
                        "description": "Id of the output listener that receives the answer"
                    }
                },
                "required": ["value"]
            })),
            executor,
        }
    }
}

#[async_trait]
impl Action for OutputFinalAnswerAction {
    fn definition(&self) -> &ActionDefinition {
        &self.definition
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ActionResult, ActionError> {
        let params: OutputFinalAnswerParams = parse_params(params)?;
        Ok(self
            .executor
            .output_final_answer(&params.value, params.uuid.as_deref()))
    }
}
