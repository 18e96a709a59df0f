use crate::store::RecordStore;
use std::sync::Arc;

/// Shared by every handler. The store serializes its own writers, so the
/// state itself is just a cheap handle.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RecordStore>,
}

impl AppState {
    pub fn new(store: RecordStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
