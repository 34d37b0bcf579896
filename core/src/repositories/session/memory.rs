//! In-memory session store

use std::collections::HashMap;
use std::sync::Mutex;

use super::trait_::SessionStore;

/// A single session held in memory, for tests and non-HTTP callers.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no slot is set
    pub fn is_empty(&self) -> bool {
        self.slots.lock().map(|slots| slots.is_empty()).unwrap_or(true)
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        let slots = self.slots.lock().map_err(|e| e.to_string())?;
        Ok(slots.get(key).cloned())
    }

    fn insert(&self, key: &str, value: &str) -> Result<(), String> {
        let mut slots = self.slots.lock().map_err(|e| e.to_string())?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<Option<String>, String> {
        let mut slots = self.slots.lock().map_err(|e| e.to_string())?;
        Ok(slots.remove(key))
    }
}
