//! Shared in-memory task storage
//!
//! Wraps a single `TaskListController` behind an async lock so that concurrent
//! callers each see one whole operation at a time. Nothing is persisted.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::controller::TaskListController;
use super::model::{Task, TaskDraft, TaskId};
use super::repository::TaskRepository;
use crate::Result;

/// In-memory task store
#[derive(Debug, Default)]
pub struct MemoryTaskStore {
    controller: RwLock<TaskListController>,
}

impl MemoryTaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored tasks, past-due ones included
    pub async fn len(&self) -> usize {
        self.controller.read().await.len()
    }
}

#[async_trait]
impl TaskRepository for MemoryTaskStore {
    async fn list_visible(&self, now: DateTime<Utc>) -> Result<Vec<Task>> {
        let controller = self.controller.read().await;
        Ok(controller.list_visible(now))
    }

    async fn list_all(&self) -> Result<Vec<Task>> {
        let controller = self.controller.read().await;
        Ok(controller.tasks().to_vec())
    }

    async fn get(&self, id: TaskId) -> Result<Option<Task>> {
        let controller = self.controller.read().await;
        Ok(controller.get(id).cloned())
    }

    async fn add(&self, draft: TaskDraft) -> Result<Task> {
        let mut controller = self.controller.write().await;
        controller.add(&draft)
    }

    async fn edit(&self, id: TaskId, updated: TaskDraft) -> Result<Task> {
        let mut controller = self.controller.write().await;
        controller.edit(id, &updated)
    }

    async fn delete(&self, id: TaskId) -> Result<bool> {
        let mut controller = self.controller.write().await;
        Ok(controller.delete(id))
    }

    async fn evict_past_due(&self, now: DateTime<Utc>) -> Result<Vec<Task>> {
        let mut controller = self.controller.write().await;
        Ok(controller.evict_past_due(now))
    }
}
