//! Task comment handlers.

use crate::api::{Actor, ApiError, AppState};
use crate::project::domain::TaskId;
use crate::project::services::CommentView;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for adding a comment.
#[derive(Debug, Deserialize)]
pub struct AddCommentBody {
    /// Comment content.
    pub content: String,
}

/// Response body for a created comment.
#[derive(Debug, Serialize)]
pub struct AddCommentResponse {
    /// The created comment with its author resolved.
    pub comment: CommentView,
    /// Human-readable confirmation.
    pub message: String,
}

/// Response body for the comment listing.
#[derive(Debug, Serialize)]
pub struct CommentsResponse {
    /// Comments on the task, oldest first, authors resolved.
    pub comments: Vec<CommentView>,
    /// Human-readable confirmation.
    pub message: String,
}

async fn add_comment(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Path(task_id): Path<Uuid>,
    Json(body): Json<AddCommentBody>,
) -> Result<Json<AddCommentResponse>, ApiError> {
    let comment = state
        .comments
        .add_comment(&actor, TaskId::from_uuid(task_id), body.content)
        .await?;
    Ok(Json(AddCommentResponse {
        comment,
        message: "comment added successfully".to_owned(),
    }))
}

async fn list_comments(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Path(task_id): Path<Uuid>,
) -> Result<Json<CommentsResponse>, ApiError> {
    let comments = state
        .comments
        .list_comments(&actor, TaskId::from_uuid(task_id))
        .await?;
    Ok(Json(CommentsResponse {
        comments,
        message: "comments fetched successfully".to_owned(),
    }))
}

/// Routes for comment resources.
pub fn router() -> Router<AppState> {
    Router::new().route("/tasks/:id/comments", get(list_comments).post(add_comment))
}
