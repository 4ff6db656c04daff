//! Output listeners: callbacks that receive the agent's final answer.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Callback invoked with the final answer text.
pub type OutputCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Identifies one registration so it can be removed on its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListenerHandle {
    id: String,
    seq: u64,
}

impl ListenerHandle {
    /// The listener id this handle was registered under.
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Map of listener id to callbacks in registration order.
pub struct OutputListenerRegistry {
    next_seq: AtomicU64,
    listeners: Mutex<HashMap<String, Vec<(u64, OutputCallback)>>>,
}

impl OutputListenerRegistry {
    pub fn new() -> Self {
        Self {
            next_seq: AtomicU64::new(0),
            listeners: Mutex::new(HashMap::new()),
        }
    }

    /// Register a callback under `id`. Registering the same id again appends.
    pub fn listen<F>(&self, id: impl Into<String>, callback: F) -> ListenerHandle
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let id = id.into();
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.listeners
            .lock()
            .entry(id.clone())
            .or_default()
            .push((seq, Arc::new(callback)));
        debug!("Output listener registered for {}", id);
        ListenerHandle { id, seq }
    }

    /// Remove a single registration. Ids left without listeners are dropped.
    pub fn remove(&self, handle: &ListenerHandle) -> bool {
        let mut listeners = self.listeners.lock();
        let Some(callbacks) = listeners.get_mut(&handle.id) else {
            return false;
        };

        let before = callbacks.len();
        callbacks.retain(|(seq, _)| *seq != handle.seq);
        let removed = callbacks.len() != before;

        if callbacks.is_empty() {
            listeners.remove(&handle.id);
        }
        removed
    }

    /// Invoke every callback registered under `id`, in order.
    ///
    /// Returns how many callbacks ran. Callbacks run outside the lock, so they
    /// may register or remove listeners themselves.
    pub fn emit(&self, id: &str, value: &str) -> usize {
        let callbacks: Vec<OutputCallback> = match self.listeners.lock().get(id) {
            Some(callbacks) => callbacks.iter().map(|(_, cb)| cb.clone()).collect(),
            None => return 0,
        };

        for callback in &callbacks {
            callback(value);
        }
        callbacks.len()
    }

    pub fn listener_count(&self, id: &str) -> usize {
        self.listeners.lock().get(id).map_or(0, Vec::len)
    }

    pub fn ids(&self) -> Vec<String> {
        self.listeners.lock().keys().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.lock().is_empty()
    }

    /// Drop every listener.
    pub fn clear(&self) {
        self.listeners.lock().clear();
    }
}

impl Default for OutputListenerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for OutputListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputListenerRegistry")
            .field("ids", &self.ids())
            .finish()
    }
}

#[cfg(test)]
#[path = "listener_tests.rs"]
mod tests;
