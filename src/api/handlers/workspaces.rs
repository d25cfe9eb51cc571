//! Workspace listing and membership handlers.

use crate::api::{Actor, ApiError, AppState};
use crate::directory::domain::{WorkspaceId, WorkspaceMember};
use crate::directory::services::AddMemberRequest;
use crate::project::services::WorkspaceView;
use axum::extract::State;
use axum::{Json, Router, routing::get, routing::post};
use serde::{Deserialize, Serialize};

/// Response body for the workspace listing.
#[derive(Debug, Serialize)]
pub struct WorkspacesResponse {
    /// Every workspace the actor belongs to, fully populated.
    pub workspaces: Vec<WorkspaceView>,
}

/// Request body for adding a workspace member.
#[derive(Debug, Deserialize)]
pub struct AddMemberBody {
    /// Target user's email address.
    pub email: Option<String>,
    /// Requested role, `ADMIN` or `MEMBER` (case-insensitive).
    pub role: Option<String>,
    /// Target workspace identifier.
    #[serde(rename = "workspaceId")]
    pub workspace_id: Option<String>,
    /// Optional invitation message.
    pub message: Option<String>,
}

/// Response body for a successful member addition.
#[derive(Debug, Serialize)]
pub struct AddMemberResponse {
    /// The created membership row.
    pub member: WorkspaceMember,
    /// Human-readable confirmation.
    pub message: String,
}

async fn list_workspaces(
    State(state): State<AppState>,
    Actor(actor): Actor,
) -> Result<Json<WorkspacesResponse>, ApiError> {
    let workspaces = state.overview.list_user_workspaces(&actor).await?;
    Ok(Json(WorkspacesResponse { workspaces }))
}

async fn add_member(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Json(body): Json<AddMemberBody>,
) -> Result<Json<AddMemberResponse>, ApiError> {
    let (Some(email), Some(role), Some(workspace_id)) = (body.email, body.role, body.workspace_id)
    else {
        return Err(ApiError::validation(
            "missing required parameters: email, role, workspaceId",
        ));
    };
    let workspace = WorkspaceId::new(workspace_id)
        .map_err(|err| ApiError::validation(err.to_string()))?;

    let mut request = AddMemberRequest::new(workspace, email, role);
    if let Some(message) = body.message {
        request = request.with_message(message);
    }
    let member = state.membership.add_member(&actor, request).await?;
    Ok(Json(AddMemberResponse {
        member,
        message: "member added successfully".to_owned(),
    }))
}

/// Routes for workspace resources.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/workspaces", get(list_workspaces))
        .route("/workspaces/members", post(add_member))
}
