//! Task model definitions

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

/// Date format produced by a browser date input
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Unique identifier for a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub Uuid);

impl TaskId {
    /// Create a new unique task identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TaskId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A task in the upcoming list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
}

impl Task {
    /// Create a task from validated fields with a fresh id
    pub fn new(fields: TaskFields) -> Self {
        Self {
            id: TaskId::new(),
            title: fields.title,
            description: fields.description,
            due_date: fields.due_date,
        }
    }

    /// Replace every field except the id
    pub fn apply(&mut self, fields: TaskFields) {
        self.title = fields.title;
        self.description = fields.description;
        self.due_date = fields.due_date;
    }

    /// The instant the task falls due: midnight UTC at the start of its due date
    pub fn due_at(&self) -> DateTime<Utc> {
        self.due_date.and_time(NaiveTime::MIN).and_utc()
    }

    /// Whether the task is still ahead of `now`
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.due_at() > now
    }
}

/// Unvalidated field values collected from an add or edit form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due_date: String,
}

impl TaskDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            due_date: due_date.into(),
        }
    }

    /// Seed a draft from a task's current values
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: task.due_date.format(DUE_DATE_FORMAT).to_string(),
        }
    }

    /// Check the draft and convert it into typed fields.
    ///
    /// The title must contain something other than whitespace and the due
    /// date must be a `YYYY-MM-DD` calendar date.
    pub fn validate(&self) -> Result<TaskFields> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation("Title cannot be empty".to_string()));
        }

        let raw_date = self.due_date.trim();
        if raw_date.is_empty() {
            return Err(Error::Validation("Due date is required".to_string()));
        }

        let due_date = NaiveDate::parse_from_str(raw_date, DUE_DATE_FORMAT).map_err(|_| {
            Error::Validation(format!("Invalid due date '{}', expected YYYY-MM-DD", raw_date))
        })?;

        Ok(TaskFields {
            title: self.title.clone(),
            description: self.description.clone(),
            due_date,
        })
    }
}

/// Validated task fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields {
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
}
