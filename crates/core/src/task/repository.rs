//! Task repository trait
//!
//! Defines the interface shared task storage exposes to async callers.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::model::{Task, TaskDraft, TaskId};
use crate::Result;

/// Repository interface for task CRUD operations
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Tasks due strictly after `now`, in insertion order
    async fn list_visible(&self, now: DateTime<Utc>) -> Result<Vec<Task>>;

    /// Every stored task, past-due ones included
    async fn list_all(&self) -> Result<Vec<Task>>;

    /// Get a task by ID
    async fn get(&self, id: TaskId) -> Result<Option<Task>>;

    /// Validate a draft and store it as a new task
    async fn add(&self, draft: TaskDraft) -> Result<Task>;

    /// Replace an existing task's fields
    async fn edit(&self, id: TaskId, updated: TaskDraft) -> Result<Task>;

    /// Delete a task by ID, returning whether it existed
    async fn delete(&self, id: TaskId) -> Result<bool>;

    /// Remove every task no longer upcoming at `now`
    async fn evict_past_due(&self, now: DateTime<Utc>) -> Result<Vec<Task>>;
}
