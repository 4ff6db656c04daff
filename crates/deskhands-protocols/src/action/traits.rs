//! Action trait definition.

use async_trait::async_trait;

use super::{ActionDefinition, ActionResult};
use crate::error::ActionError;

/// Core trait for device actions.
#[async_trait]
pub trait Action: Send + Sync {
    /// Returns the action definition.
    fn definition(&self) -> &ActionDefinition;

    /// Execute the action with the given parameters.
    async fn execute(&self, params: serde_json::Value) -> Result<ActionResult, ActionError>;

    /// Validate the parameters before execution.
    fn validate(&self, params: &serde_json::Value) -> Result<(), ActionError> {
        let definition = self.definition();
        if let Some(schema) = &definition.parameters_schema {
            if schema.get("type") == Some(&serde_json::json!("object")) && !params.is_object() {
                return Err(ActionError::ValidationFailed(
                    "Parameters must be an object".to_string(),
                ));
            }
        }
        Ok(())
    }
}
