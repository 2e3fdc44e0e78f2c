//! Application state

use std::sync::Arc;

use upcoming_core::task::{MemoryTaskStore, TaskRepository};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    task_store: Arc<dyn TaskRepository>,
}

impl AppState {
    /// Create a new AppState backed by an empty in-memory store
    pub fn new() -> Self {
        Self::with_repository(Arc::new(MemoryTaskStore::new()))
    }

    /// Create a new AppState over an existing repository
    pub fn with_repository(task_store: Arc<dyn TaskRepository>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { task_store }),
        }
    }

    /// Get reference to the task store
    pub fn task_store(&self) -> &dyn TaskRepository {
        self.inner.task_store.as_ref()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
