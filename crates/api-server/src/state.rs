//! Application state

use taskboard_core::store::MemoryStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    store: MemoryStore,
}

impl AppState {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    /// Get reference to the store
    pub fn store(&self) -> &MemoryStore {
        &self.store
    }
}
