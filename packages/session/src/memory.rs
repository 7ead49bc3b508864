use std::sync::{Arc, Mutex};

use crate::store::SessionStore;

/// In-memory SessionStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    async fn load(&self) -> Option<String> {
        self.slot.lock().unwrap().clone()
    }

    async fn save(&self, value: &str) {
        *self.slot.lock().unwrap() = Some(value.to_string());
    }

    async fn clear(&self) {
        *self.slot.lock().unwrap() = None;
    }
}
