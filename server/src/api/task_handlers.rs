//! Task Endpoints
//!
//! Each handler maps 1:1 onto a `TaskRepository` call.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::domain::{Task, TaskTitle};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    /// Kept loose so a non-string title is a validation error, not a parse error
    #[serde(default)]
    pub title: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub completed: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct TasksBody {
    pub tasks: Vec<Task>,
}

#[derive(Debug, Serialize)]
pub struct TaskBody {
    pub task: Task,
}

#[derive(Debug, Serialize)]
pub struct OkBody {
    pub ok: bool,
}

/// GET /api/tasks
pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<TasksBody>, ApiError> {
    let tasks = state.tasks.list().await?;
    tracing::debug!(count = tasks.len(), "listed tasks");
    Ok(Json(TasksBody { tasks }))
}

/// POST /api/tasks
pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<Json<TaskBody>, ApiError> {
    let Json(request) = payload?;
    let raw = request
        .title
        .as_ref()
        .and_then(|value| value.as_str())
        .unwrap_or_default();
    let title = TaskTitle::parse(raw)?;

    let task = state.tasks.create(title).await?;
    tracing::info!(task_id = %task.id, "task created");
    Ok(Json(TaskBody { task }))
}

/// PATCH /api/tasks/{id}
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> Result<Json<TaskBody>, ApiError> {
    let Json(request) = payload?;
    let completed = request.completed.unwrap_or(false);

    let task = state.tasks.set_completed(&id, completed).await?;
    tracing::info!(task_id = %task.id, completed, "task updated");
    Ok(Json(TaskBody { task }))
}

/// DELETE /api/tasks/{id}
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OkBody>, ApiError> {
    state.tasks.delete(&id).await?;
    tracing::info!(task_id = %id, "task deleted");
    Ok(Json(OkBody { ok: true }))
}
