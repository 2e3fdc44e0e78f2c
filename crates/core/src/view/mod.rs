//! Upcoming tasks page state
//!
//! Pairs the controller with the dialog drafts a page keeps around: one add
//! form and one edit form per rendered card. Rendering itself belongs to
//! whatever UI sits on top.

mod form;

pub use form::{AddTaskForm, EditTaskForm};

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::task::{Task, TaskId, TaskListController};
use crate::{Error, Result};

/// Page-level state for the upcoming tasks view
#[derive(Debug, Default)]
pub struct UpcomingView {
    controller: TaskListController,
    add_form: AddTaskForm,
    edit_forms: HashMap<TaskId, EditTaskForm>,
}

impl UpcomingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn controller(&self) -> &TaskListController {
        &self.controller
    }

    /// The tasks to render as cards, re-derived on every call
    pub fn cards(&self, now: DateTime<Utc>) -> Vec<Task> {
        self.controller.list_visible(now)
    }

    pub fn add_form(&self) -> &AddTaskForm {
        &self.add_form
    }

    pub fn add_form_mut(&mut self) -> &mut AddTaskForm {
        &mut self.add_form
    }

    /// Submit the add dialog
    pub fn submit_add(&mut self) -> Result<Task> {
        self.add_form.submit(&mut self.controller)
    }

    /// Open the edit dialog of a card, seeded from the task's current values
    pub fn open_edit(&mut self, id: TaskId) -> Result<&mut EditTaskForm> {
        let task = self
            .controller
            .get(id)
            .ok_or_else(|| Error::TaskNotFound(id.to_string()))?;

        let form = self
            .edit_forms
            .entry(id)
            .or_insert_with(|| EditTaskForm::new(task));
        form.open(task);
        Ok(form)
    }

    pub fn edit_form(&self, id: TaskId) -> Option<&EditTaskForm> {
        self.edit_forms.get(&id)
    }

    pub fn edit_form_mut(&mut self, id: TaskId) -> Option<&mut EditTaskForm> {
        self.edit_forms.get_mut(&id)
    }

    /// Submit a card's edit dialog
    pub fn submit_edit(&mut self, id: TaskId) -> Result<Task> {
        let form = self
            .edit_forms
            .get_mut(&id)
            .ok_or_else(|| Error::TaskNotFound(id.to_string()))?;
        form.submit(&mut self.controller)
    }

    /// Delete a card's task and drop its edit draft. Unknown ids are ignored.
    pub fn delete(&mut self, id: TaskId) {
        self.edit_forms.remove(&id);
        self.controller.delete(id);
    }
}
