use std::sync::Arc;

use crate::db::{DataStore, InMemoryStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DataStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self { store }
    }

    /// State backed by an in-memory store
    pub fn in_memory(store: InMemoryStore) -> Self {
        Self::new(Arc::new(store))
    }
}
