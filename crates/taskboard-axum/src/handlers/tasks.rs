//! Task handlers - CRUD operations for the task list.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::dto::{ApiJson, ClearCompletedResponse, DeleteTaskResponse, TaskDto, TaskRequest};
use crate::error::{HttpError, TASK_NOT_FOUND_MESSAGE};
use crate::state::AppState;
use taskboard_core::TaskId;

/// A string that is not a UUID can never name a stored task.
fn parse_id(raw: &str) -> Result<TaskId, HttpError> {
    TaskId::parse(raw).ok_or_else(|| HttpError::NotFound(TASK_NOT_FOUND_MESSAGE.to_string()))
}

/// List all tasks ordered by number.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<TaskDto>>, HttpError> {
    let tasks = state.tasks.list().await?;
    Ok(Json(tasks.into_iter().map(TaskDto::from).collect()))
}

/// Get a single task by ID.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TaskDto>, HttpError> {
    let id = parse_id(&id)?;
    Ok(Json(state.tasks.get(id).await?.into()))
}

/// Create a task.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<TaskRequest>,
) -> Result<(StatusCode, Json<TaskDto>), HttpError> {
    let task = state.tasks.create(req.into_draft()).await?;
    Ok((StatusCode::CREATED, Json(task.into())))
}

/// Replace every editable field of a task.
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<TaskRequest>,
) -> Result<Json<TaskDto>, HttpError> {
    let id = parse_id(&id)?;
    let task = state.tasks.replace(id, req.into_replacement()).await?;
    Ok(Json(task.into()))
}

/// Flip the completion flag.
pub async fn toggle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TaskDto>, HttpError> {
    let id = parse_id(&id)?;
    Ok(Json(state.tasks.toggle(id).await?.into()))
}

/// Remove a task.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteTaskResponse>, HttpError> {
    let id = parse_id(&id)?;
    let task = state.tasks.delete(id).await?;
    Ok(Json(DeleteTaskResponse {
        message: "Task deleted successfully".to_string(),
        task: task.into(),
    }))
}

/// Remove every completed task.
pub async fn clear_completed(
    State(state): State<AppState>,
) -> Result<Json<ClearCompletedResponse>, HttpError> {
    let deleted_count = state.tasks.clear_completed().await?;
    Ok(Json(ClearCompletedResponse {
        message: format!("{deleted_count} completed tasks deleted"),
        deleted_count,
    }))
}

/// JSON 404 for unknown paths under `/api`.
pub async fn api_not_found() -> HttpError {
    HttpError::NotFound("Route not found".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_id_is_not_found() {
        assert!(matches!(
            parse_id("not-a-uuid"),
            Err(HttpError::NotFound(ref m)) if m == TASK_NOT_FOUND_MESSAGE
        ));
    }

    #[test]
    fn uuid_parses() {
        let id = TaskId::new();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
    }
}
