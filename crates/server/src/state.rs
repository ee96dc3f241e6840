use std::sync::Arc;

use db::TaskStore;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: RwLock<TaskStore>,
}

impl AppState {
    pub fn new(store: TaskStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store: RwLock::new(store),
            }),
        }
    }

    pub fn store(&self) -> &RwLock<TaskStore> {
        &self.inner.store
    }
}
