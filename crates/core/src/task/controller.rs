//! Task list controller
//!
//! Owns the ordered task collection. The upcoming filter is a derived read:
//! it never removes anything from the collection.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::model::{Task, TaskDraft, TaskId};
use crate::{Error, Result};

/// In-memory, insertion-ordered task collection
#[derive(Debug, Clone, Default)]
pub struct TaskListController {
    tasks: Vec<Task>,
}

impl TaskListController {
    /// Create an empty controller
    pub fn new() -> Self {
        Self::default()
    }

    /// Tasks due strictly after `now`, in insertion order
    pub fn list_visible(&self, now: DateTime<Utc>) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.is_upcoming(now))
            .cloned()
            .collect()
    }

    /// Validate a draft and append it as a new task
    pub fn add(&mut self, draft: &TaskDraft) -> Result<Task> {
        let fields = draft.validate()?;
        let task = Task::new(fields);
        debug!("Added task {} due {}", task.id, task.due_date);
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Replace every field of task `id` except the id itself, keeping its position
    pub fn edit(&mut self, id: TaskId, updated: &TaskDraft) -> Result<Task> {
        let index = self
            .position(id)
            .ok_or_else(|| Error::TaskNotFound(id.to_string()))?;
        let fields = updated.validate()?;

        let task = &mut self.tasks[index];
        task.apply(fields);
        debug!("Edited task {}", id);
        Ok(task.clone())
    }

    /// Remove task `id`. Unknown ids are ignored.
    pub fn delete(&mut self, id: TaskId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.tasks.remove(index);
                debug!("Deleted task {}", id);
                true
            }
            None => {
                debug!("Delete of unknown task {} ignored", id);
                false
            }
        }
    }

    /// Remove and return every task that is no longer upcoming at `now`
    pub fn evict_past_due(&mut self, now: DateTime<Utc>) -> Vec<Task> {
        let (kept, evicted): (Vec<Task>, Vec<Task>) =
            std::mem::take(&mut self.tasks)
                .into_iter()
                .partition(|t| t.is_upcoming(now));
        self.tasks = kept;

        if !evicted.is_empty() {
            info!("Evicted {} past-due task(s)", evicted.len());
        }
        evicted
    }

    /// Get a task by ID
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// The full collection, past-due tasks included
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 6, 15, 9, 30, 0).unwrap()
    }

    fn draft(title: &str, due: &str) -> TaskDraft {
        TaskDraft::new(title, "", due)
    }

    #[test]
    fn test_report_scenario() {
        let mut controller = TaskListController::new();

        let task = controller
            .add(&TaskDraft::new("Report", "", "2099-01-01"))
            .unwrap();
        assert_eq!(controller.len(), 1);
        assert_eq!(controller.list_visible(Utc::now()), vec![task.clone()]);

        controller
            .edit(task.id, &TaskDraft::new("Report v2", "done", "2099-01-01"))
            .unwrap();
        let visible = controller.list_visible(Utc::now());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Report v2");
        assert_eq!(visible[0].description, "done");

        controller.delete(task.id);
        assert!(controller.list_visible(Utc::now()).is_empty());
    }

    #[test]
    fn test_past_due_task_is_hidden_but_kept() {
        let mut controller = TaskListController::new();
        let yesterday = (now() - Duration::days(1)).format("%Y-%m-%d").to_string();

        controller.add(&draft("Old", &yesterday)).unwrap();

        assert!(controller.list_visible(now()).is_empty());
        assert_eq!(controller.len(), 1);
    }

    #[test]
    fn test_task_due_today_is_not_visible() {
        let mut controller = TaskListController::new();
        controller.add(&draft("Today", "2030-06-15")).unwrap();
        controller.add(&draft("Tomorrow", "2030-06-16")).unwrap();

        let visible = controller.list_visible(now());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Tomorrow");
    }

    #[test]
    fn test_list_visible_keeps_insertion_order() {
        let mut controller = TaskListController::new();
        controller.add(&draft("C", "2031-03-01")).unwrap();
        controller.add(&draft("Past", "2020-01-01")).unwrap();
        controller.add(&draft("A", "2030-07-01")).unwrap();
        controller.add(&draft("B", "2032-01-01")).unwrap();

        let titles: Vec<String> = controller
            .list_visible(now())
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["C", "A", "B"]);

        // Repeated reads never shrink the collection
        controller.list_visible(now());
        controller.list_visible(now() + Duration::days(10_000));
        assert_eq!(controller.len(), 4);
    }

    #[test]
    fn test_add_assigns_fresh_ids() {
        let mut controller = TaskListController::new();
        let a = controller.add(&draft("Same", "2099-01-01")).unwrap();
        let b = controller.add(&draft("Same", "2099-01-01")).unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(controller.tasks(), &[a, b]);
    }

    #[test]
    fn test_add_invalid_draft_leaves_collection_unchanged() {
        let mut controller = TaskListController::new();

        let result = controller.add(&draft("", "2099-01-01"));
        assert!(matches!(result, Err(Error::Validation(_))));

        let result = controller.add(&draft("Report", "not a date"));
        assert!(matches!(result, Err(Error::Validation(_))));

        assert!(controller.is_empty());
    }

    #[test]
    fn test_edit_changes_only_target_in_place() {
        let mut controller = TaskListController::new();
        let first = controller.add(&draft("First", "2099-01-01")).unwrap();
        let second = controller.add(&draft("Second", "2099-02-01")).unwrap();
        let third = controller.add(&draft("Third", "2099-03-01")).unwrap();

        let updated = controller
            .edit(second.id, &TaskDraft::new("Second v2", "more", "2098-12-31"))
            .unwrap();

        assert_eq!(updated.id, second.id);
        assert_eq!(updated.title, "Second v2");
        assert_eq!(controller.tasks()[0], first);
        assert_eq!(controller.tasks()[1], updated);
        assert_eq!(controller.tasks()[2], third);
    }

    #[test]
    fn test_edit_unknown_id() {
        let mut controller = TaskListController::new();
        controller.add(&draft("Only", "2099-01-01")).unwrap();

        let result = controller.edit(TaskId::new(), &draft("Other", "2099-01-01"));
        match result {
            Err(Error::TaskNotFound(_)) => {}
            other => panic!("Expected TaskNotFound error, got: {:?}", other),
        }

        // Not-found wins over an invalid draft
        let result = controller.edit(TaskId::new(), &draft("", ""));
        assert!(matches!(result, Err(Error::TaskNotFound(_))));
    }

    #[test]
    fn test_edit_invalid_draft_leaves_task_unchanged() {
        let mut controller = TaskListController::new();
        let task = controller.add(&draft("Report", "2099-01-01")).unwrap();

        let result = controller.edit(task.id, &draft("  ", "2099-01-01"));
        assert!(matches!(result, Err(Error::Validation(_))));
        assert_eq!(controller.get(task.id), Some(&task));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut controller = TaskListController::new();
        let keep = controller.add(&draft("Keep", "2099-01-01")).unwrap();
        let gone = controller.add(&draft("Gone", "2099-01-01")).unwrap();

        assert!(controller.delete(gone.id));
        assert_eq!(controller.len(), 1);

        assert!(!controller.delete(gone.id));
        assert!(!controller.delete(TaskId::new()));
        assert_eq!(controller.tasks(), &[keep]);
    }

    #[test]
    fn test_evict_past_due() {
        let mut controller = TaskListController::new();
        controller.add(&draft("Past", "2020-01-01")).unwrap();
        let future = controller.add(&draft("Future", "2099-01-01")).unwrap();
        controller.add(&draft("Today", "2030-06-15")).unwrap();

        let evicted = controller.evict_past_due(now());
        let titles: Vec<&str> = evicted.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Past", "Today"]);
        assert_eq!(controller.tasks(), &[future]);

        assert!(controller.evict_past_due(now()).is_empty());
    }
}
