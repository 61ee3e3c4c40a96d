//! In-process session storage

use std::collections::HashMap;

use parking_lot::RwLock;
use portalkit_core::SessionStorage;
use portalkit_domain::Result;

/// Session-scoped storage held in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.read().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.items.write().remove(key);
    }
}
