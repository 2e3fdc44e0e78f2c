//! Task API endpoints
//!
//! RESTful API for the upcoming task list.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use upcoming_core::task::{Task, TaskDraft, TaskId, DUE_DATE_FORMAT};

use super::{bad_request, json_payload, route_error, ErrorResponse, RouteError};
use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTasksQuery {
    #[serde(default)]
    pub include_past_due: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub due_date: String,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id.0,
            title: task.title,
            description: task.description,
            due_date: task.due_date.format(DUE_DATE_FORMAT).to_string(),
        }
    }
}

fn parse_task_id(raw: &str) -> Result<TaskId, RouteError> {
    raw.parse()
        .map_err(|_| bad_request(format!("Invalid task id: {}", raw)))
}

fn into_responses(tasks: Vec<Task>) -> Json<Vec<TaskResponse>> {
    Json(tasks.into_iter().map(TaskResponse::from).collect())
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/tasks - List upcoming tasks, or every task with `includePastDue=true`
async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<ListTasksQuery>,
) -> Result<Json<Vec<TaskResponse>>, RouteError> {
    let result = if query.include_past_due {
        state.task_store().list_all().await
    } else {
        state.task_store().list_visible(Utc::now()).await
    };
    let tasks = result.map_err(route_error)?;

    Ok(into_responses(tasks))
}

/// POST /api/tasks - Create a new task
async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<TaskDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskResponse>), RouteError> {
    let draft = json_payload(payload)?;
    let created = state.task_store().add(draft).await.map_err(route_error)?;
    Ok((StatusCode::CREATED, Json(TaskResponse::from(created))))
}

/// GET /api/tasks/:id - Get a single task
async fn get_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<TaskResponse>, RouteError> {
    let id = parse_task_id(&raw_id)?;
    let task = state
        .task_store()
        .get(id)
        .await
        .map_err(route_error)?;

    match task {
        Some(t) => Ok(Json(TaskResponse::from(t))),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Task {} not found", id),
            }),
        )),
    }
}

/// PUT /api/tasks/:id - Replace a task's title, description and due date
async fn update_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<TaskDraft>, JsonRejection>,
) -> Result<Json<TaskResponse>, RouteError> {
    let id = parse_task_id(&raw_id)?;
    let draft = json_payload(payload)?;
    let updated = state
        .task_store()
        .edit(id, draft)
        .await
        .map_err(route_error)?;

    Ok(Json(TaskResponse::from(updated)))
}

/// DELETE /api/tasks/:id - Delete a task; unknown ids are not an error
async fn delete_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, RouteError> {
    let id = parse_task_id(&raw_id)?;
    let deleted = state
        .task_store()
        .delete(id)
        .await
        .map_err(route_error)?;

    if !deleted {
        tracing::debug!("Delete for unknown task {} ignored", id);
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/tasks/evict - Drop every past-due task and return them
async fn evict_past_due(
    State(state): State<AppState>,
) -> Result<Json<Vec<TaskResponse>>, RouteError> {
    let evicted = state
        .task_store()
        .evict_past_due(Utc::now())
        .await
        .map_err(route_error)?;

    Ok(into_responses(evicted))
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route("/api/tasks/evict", post(evict_past_due))
        .route(
            "/api/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
}
