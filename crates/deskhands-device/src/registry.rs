//! Action registry.

use dashmap::DashMap;
use deskhands_protocols::{Action, ActionDefinition, ActionError};
use parking_lot::RwLock;
use std::sync::Arc;

/// Actions by name, also reachable by interface alias.
///
/// Listing preserves registration order.
pub struct ActionRegistry {
    actions: DashMap<String, Arc<dyn Action>>,
    aliases: DashMap<String, String>,
    order: RwLock<Vec<String>>,
}

impl ActionRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            actions: DashMap::new(),
            aliases: DashMap::new(),
            order: RwLock::new(Vec::new()),
        }
    }

    /// Register an action. Names and aliases must be unique.
    pub fn register(&self, action: Arc<dyn Action>) -> Result<(), ActionError> {
        let definition = action.definition();
        let name = definition.name.clone();

        if self.contains(&name) {
            return Err(ActionError::InvalidParameters(format!(
                "Action already registered: {}",
                name
            )));
        }
        if let Some(alias) = &definition.interface_alias {
            if self.contains(alias) {
                return Err(ActionError::InvalidParameters(format!(
                    "Action alias already registered: {}",
                    alias
                )));
            }
            self.aliases.insert(alias.clone(), name.clone());
        }

        self.actions.insert(name.clone(), action);
        self.order.write().push(name);
        Ok(())
    }

    /// Get an action by name or interface alias.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Action>> {
        if let Some(action) = self.actions.get(name) {
            return Some(action.clone());
        }
        let target = self.aliases.get(name)?.clone();
        self.actions.get(&target).map(|action| action.clone())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.actions.contains_key(name) || self.aliases.contains_key(name)
    }

    /// Action names in registration order.
    pub fn names(&self) -> Vec<String> {
        self.order.read().clone()
    }

    /// All action definitions in registration order.
    pub fn list(&self) -> Vec<ActionDefinition> {
        self.order
            .read()
            .iter()
            .filter_map(|name| self.actions.get(name).map(|a| a.definition().clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
