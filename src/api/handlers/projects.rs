//! Project creation and update handlers.

use crate::api::{Actor, ApiError, AppState};
use crate::directory::domain::WorkspaceId;
use crate::project::domain::{
    Priority, Progress, Project, ProjectId, ProjectStatus, ProjectUpdate,
};
use crate::project::services::{CreateProjectRequest, ProjectView};
use axum::extract::{Path, State};
use axum::{Json, Router, routing::post, routing::put};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for creating a project.
#[derive(Debug, Deserialize)]
pub struct CreateProjectBody {
    /// Owning workspace identifier.
    #[serde(rename = "workspaceId")]
    pub workspace_id: String,
    /// Project name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Initial status (defaults to `PLANNING`).
    pub status: Option<String>,
    /// Initial priority (defaults to `MEDIUM`).
    pub priority: Option<String>,
    /// Initial completion percentage (defaults to 0).
    pub progress: Option<u8>,
    /// Team lead's email address.
    pub team_lead: Option<String>,
    /// Emails of workspace members to add to the project team.
    pub team_members: Option<Vec<String>>,
    /// Optional start timestamp.
    pub start_date: Option<DateTime<Utc>>,
    /// Optional end timestamp.
    pub end_date: Option<DateTime<Utc>>,
}

/// Request body for updating a project (full field replacement).
#[derive(Debug, Deserialize)]
pub struct UpdateProjectBody {
    /// New project name.
    pub name: String,
    /// New description.
    pub description: Option<String>,
    /// New status (defaults to `PLANNING`).
    pub status: Option<String>,
    /// New priority (defaults to `MEDIUM`).
    pub priority: Option<String>,
    /// New completion percentage (defaults to 0).
    pub progress: Option<u8>,
    /// New start timestamp.
    pub start_date: Option<DateTime<Utc>>,
    /// New end timestamp.
    pub end_date: Option<DateTime<Utc>>,
}

/// Response body for a created project.
#[derive(Debug, Serialize)]
pub struct CreateProjectResponse {
    /// The created project, populated with members and team lead.
    pub project: ProjectView,
    /// Human-readable confirmation.
    pub message: String,
}

/// Response body for an updated project.
#[derive(Debug, Serialize)]
pub struct UpdateProjectResponse {
    /// The updated project.
    pub project: Project,
    /// Human-readable confirmation.
    pub message: String,
}

fn parse_status(value: Option<&str>) -> Result<ProjectStatus, ApiError> {
    value.map_or(Ok(ProjectStatus::Planning), |status| {
        ProjectStatus::try_from(status).map_err(|err| ApiError::validation(err.to_string()))
    })
}

fn parse_priority(value: Option<&str>) -> Result<Priority, ApiError> {
    value.map_or(Ok(Priority::Medium), |priority| {
        Priority::try_from(priority).map_err(|err| ApiError::validation(err.to_string()))
    })
}

fn parse_progress(value: Option<u8>) -> Result<Progress, ApiError> {
    value.map_or(Ok(Progress::default()), |percent| {
        Progress::new(percent).map_err(|err| ApiError::validation(err.to_string()))
    })
}

async fn create_project(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Json(body): Json<CreateProjectBody>,
) -> Result<Json<CreateProjectResponse>, ApiError> {
    let workspace = WorkspaceId::new(body.workspace_id)
        .map_err(|err| ApiError::validation(err.to_string()))?;
    let mut request = CreateProjectRequest::new(workspace, body.name)
        .with_status(parse_status(body.status.as_deref())?)
        .with_priority(parse_priority(body.priority.as_deref())?)
        .with_progress(parse_progress(body.progress)?)
        .with_schedule(body.start_date, body.end_date);
    if let Some(description) = body.description {
        request = request.with_description(description);
    }
    if let Some(team_lead) = body.team_lead {
        request = request.with_team_lead(team_lead);
    }
    if let Some(team_members) = body.team_members {
        request = request.with_team_members(team_members);
    }

    let project = state.projects.create_project(&actor, request).await?;
    Ok(Json(CreateProjectResponse {
        project,
        message: "project created successfully".to_owned(),
    }))
}

async fn update_project(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateProjectBody>,
) -> Result<Json<UpdateProjectResponse>, ApiError> {
    let update = ProjectUpdate {
        name: body.name,
        description: body.description,
        status: parse_status(body.status.as_deref())?,
        priority: parse_priority(body.priority.as_deref())?,
        progress: parse_progress(body.progress)?,
        start_date: body.start_date,
        end_date: body.end_date,
    };
    let project = state
        .projects
        .update_project(&actor, ProjectId::from_uuid(id), update)
        .await?;
    Ok(Json(UpdateProjectResponse {
        project,
        message: "project updated successfully".to_owned(),
    }))
}

/// Routes for project resources.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", post(create_project))
        .route("/projects/:id", put(update_project))
}
