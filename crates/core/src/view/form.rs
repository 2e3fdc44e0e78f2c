//! Add and edit dialog drafts
//!
//! A form owns the values typed into a dialog until they are submitted.
//! Cancelling throws them away; the controller never sees an uncommitted draft.

use crate::task::{Task, TaskDraft, TaskId, TaskListController};
use crate::Result;

/// Draft state behind the "Add Task" dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddTaskForm {
    draft: TaskDraft,
    open: bool,
    error: Option<String>,
}

impl AddTaskForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    /// Message from the last failed submit, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    pub fn set_due_date(&mut self, due_date: impl Into<String>) {
        self.draft.due_date = due_date.into();
    }

    /// Close the dialog and discard whatever was typed
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Commit the draft as a new task.
    ///
    /// On success the draft is cleared and the dialog closes. On failure the
    /// dialog stays open with the draft intact and the error recorded.
    pub fn submit(&mut self, controller: &mut TaskListController) -> Result<Task> {
        match controller.add(&self.draft) {
            Ok(task) => {
                *self = Self::default();
                Ok(task)
            }
            Err(e) => {
                self.open = true;
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }
}

/// Draft state behind one task card's "Edit Task" dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTaskForm {
    task_id: TaskId,
    draft: TaskDraft,
    open: bool,
    error: Option<String>,
}

impl EditTaskForm {
    /// Create a closed form bound to `task`, seeded with its values
    pub fn new(task: &Task) -> Self {
        Self {
            task_id: task.id,
            draft: TaskDraft::from_task(task),
            open: false,
            error: None,
        }
    }

    /// Open the dialog, re-seeding the draft from the task's current values
    pub fn open(&mut self, task: &Task) {
        *self = Self::new(task);
        self.open = true;
    }

    pub fn task_id(&self) -> TaskId {
        self.task_id
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    pub fn set_due_date(&mut self, due_date: impl Into<String>) {
        self.draft.due_date = due_date.into();
    }

    /// Close the dialog. The edits are dropped on the next `open`.
    pub fn cancel(&mut self) {
        self.open = false;
        self.error = None;
    }

    /// Commit the draft over the bound task
    pub fn submit(&mut self, controller: &mut TaskListController) -> Result<Task> {
        match controller.edit(self.task_id, &self.draft) {
            Ok(task) => {
                *self = Self::new(&task);
                Ok(task)
            }
            Err(e) => {
                self.open = true;
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }
}
