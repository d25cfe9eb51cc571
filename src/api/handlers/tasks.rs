//! Task creation, patching, and batch deletion handlers.

use crate::api::{Actor, ApiError, AppState};
use crate::directory::domain::UserId;
use crate::project::domain::{
    Priority, ProjectId, TaskDraft, TaskId, TaskKind, TaskPatch, TaskStatus,
};
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::routing::{post, put};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for creating a task.
#[derive(Debug, Deserialize)]
pub struct CreateTaskBody {
    /// Owning project identifier.
    #[serde(rename = "projectId")]
    pub project_id: Uuid,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Category of work (defaults to `FEATURE`).
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Initial status (defaults to `TODO`).
    pub status: Option<String>,
    /// Initial priority (defaults to `MEDIUM`).
    pub priority: Option<String>,
    /// Assignee's user identifier.
    #[serde(rename = "assigneeId")]
    pub assignee_id: Option<String>,
    /// Optional due timestamp.
    pub due_date: Option<DateTime<Utc>>,
}

/// Request body for patching a task; absent fields stay unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskBody {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New category of work.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// New status.
    pub status: Option<String>,
    /// New priority.
    pub priority: Option<String>,
    /// New assignee's user identifier.
    #[serde(rename = "assigneeId")]
    pub assignee_id: Option<String>,
    /// New due timestamp.
    pub due_date: Option<DateTime<Utc>>,
}

/// Request body for deleting a batch of tasks.
#[derive(Debug, Deserialize)]
pub struct DeleteTasksBody {
    /// Identifiers of the tasks to delete; must share one project.
    #[serde(rename = "taskIds")]
    pub task_ids: Vec<Uuid>,
}

/// Response body carrying only a confirmation message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: String,
}

fn parse_kind(value: Option<&str>) -> Result<TaskKind, ApiError> {
    value.map_or(Ok(TaskKind::Feature), |kind| {
        TaskKind::try_from(kind).map_err(|err| ApiError::validation(err.to_string()))
    })
}

fn parse_status(value: Option<&str>) -> Result<TaskStatus, ApiError> {
    value.map_or(Ok(TaskStatus::Todo), |status| {
        TaskStatus::try_from(status).map_err(|err| ApiError::validation(err.to_string()))
    })
}

fn parse_priority(value: Option<&str>) -> Result<Priority, ApiError> {
    value.map_or(Ok(Priority::Medium), |priority| {
        Priority::try_from(priority).map_err(|err| ApiError::validation(err.to_string()))
    })
}

fn parse_assignee(value: Option<String>) -> Result<Option<UserId>, ApiError> {
    value
        .map(UserId::new)
        .transpose()
        .map_err(|err| ApiError::validation(err.to_string()))
}

fn request_origin(headers: &HeaderMap) -> Option<String> {
    headers
        .get("origin")
        .and_then(|value| value.to_str().ok())
        .map(ToOwned::to_owned)
}

async fn create_task(
    State(state): State<AppState>,
    Actor(actor): Actor,
    headers: HeaderMap,
    Json(body): Json<CreateTaskBody>,
) -> Result<Json<MessageResponse>, ApiError> {
    let draft = TaskDraft {
        project: ProjectId::from_uuid(body.project_id),
        title: body.title,
        description: body.description,
        kind: parse_kind(body.kind.as_deref())?,
        status: parse_status(body.status.as_deref())?,
        priority: parse_priority(body.priority.as_deref())?,
        assignee: parse_assignee(body.assignee_id)?,
        due_date: body.due_date,
    };
    let origin = request_origin(&headers);

    state.tasks.create_task(&actor, draft, origin).await?;
    Ok(Json(MessageResponse {
        message: "task created successfully".to_owned(),
    }))
}

async fn update_task(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateTaskBody>,
) -> Result<Json<MessageResponse>, ApiError> {
    let patch = TaskPatch {
        title: body.title,
        description: body.description,
        kind: body
            .kind
            .as_deref()
            .map(TaskKind::try_from)
            .transpose()
            .map_err(|err| ApiError::validation(err.to_string()))?,
        status: body
            .status
            .as_deref()
            .map(TaskStatus::try_from)
            .transpose()
            .map_err(|err| ApiError::validation(err.to_string()))?,
        priority: body
            .priority
            .as_deref()
            .map(Priority::try_from)
            .transpose()
            .map_err(|err| ApiError::validation(err.to_string()))?,
        assignee: parse_assignee(body.assignee_id)?,
        due_date: body.due_date,
    };

    state
        .tasks
        .update_task(&actor, TaskId::from_uuid(id), patch)
        .await?;
    Ok(Json(MessageResponse {
        message: "task updated successfully".to_owned(),
    }))
}

async fn delete_tasks(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Json(body): Json<DeleteTasksBody>,
) -> Result<Json<MessageResponse>, ApiError> {
    let ids: Vec<TaskId> = body.task_ids.into_iter().map(TaskId::from_uuid).collect();
    state.tasks.delete_tasks(&actor, &ids).await?;
    Ok(Json(MessageResponse {
        message: "tasks deleted successfully".to_owned(),
    }))
}

/// Routes for task resources.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tasks", post(create_task).delete(delete_tasks))
        .route("/tasks/:id", put(update_task))
}
