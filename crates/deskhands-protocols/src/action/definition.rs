//! Action definition types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::Metadata;

/// Definition of an action: what the agent sees in its action space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionDefinition {
    /// Unique action name, e.g. `Tap`.
    pub name: String,

    /// Description of what the action does.
    pub description: String,

    /// Alias the agent-side API exposes the action under, e.g. `aiTap`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface_alias: Option<String>,

    /// JSON Schema for the parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters_schema: Option<serde_json::Value>,

    /// Additional metadata.
    #[serde(default)]
    pub metadata: Metadata,
}

impl ActionDefinition {
    /// Create a new action definition.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            interface_alias: None,
            parameters_schema: None,
            metadata: HashMap::new(),
        }
    }

    /// Set the interface alias.
    pub fn with_interface_alias(mut self, alias: impl Into<String>) -> Self {
        self.interface_alias = Some(alias.into());
        self
    }

    /// Set the parameters schema.
    pub fn with_parameters_schema(mut self, schema: serde_json::Value) -> Self {
        self.parameters_schema = Some(schema);
        self
    }

    /// Add a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Whether `name` refers to this action, by name or interface alias.
    pub fn answers_to(&self, name: &str) -> bool {
        self.name == name || self.interface_alias.as_deref() == Some(name)
    }

    /// Convert to OpenAI function calling format.
    pub fn to_openai_function(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "function",
            "function": {
                "name": self.name,
                "description": self.description,
                "parameters": self.parameters_schema.clone().unwrap_or_else(empty_object_schema)
            }
        })
    }

    /// Convert to Anthropic tool format.
    pub fn to_anthropic_tool(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "description": self.description,
            "input_schema": self.parameters_schema.clone().unwrap_or_else(empty_object_schema)
        })
    }
}

fn empty_object_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {},
        "required": []
    })
}

#[cfg(test)]
#[path = "definition_tests.rs"]
mod tests;
