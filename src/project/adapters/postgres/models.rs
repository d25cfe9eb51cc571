//! Diesel row models and domain conversions for project persistence.

use super::schema::{comments, project_members, projects, tasks};
use crate::directory::domain::{UserId, WorkspaceId};
use crate::project::{
    domain::{
        Comment, CommentId, PersistedProjectData, PersistedTaskData, Priority, Progress, Project,
        ProjectId, ProjectMember, ProjectStatus, Task, TaskId, TaskKind, TaskStatus,
    },
    ports::{ProjectStoreError, ProjectStoreResult},
};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for project records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectRow {
    /// Project identifier.
    pub id: uuid::Uuid,
    /// Owning workspace identifier.
    pub workspace_id: String,
    /// Project name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Lifecycle status string.
    pub status: String,
    /// Priority string.
    pub priority: String,
    /// Completion percentage.
    pub progress: i16,
    /// Team lead's user identifier.
    pub team_lead: Option<String>,
    /// Optional start timestamp.
    pub start_date: Option<DateTime<Utc>>,
    /// Optional end timestamp.
    pub end_date: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for project records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = projects)]
pub struct NewProjectRow {
    /// Project identifier.
    pub id: uuid::Uuid,
    /// Owning workspace identifier.
    pub workspace_id: String,
    /// Project name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Lifecycle status string.
    pub status: String,
    /// Priority string.
    pub priority: String,
    /// Completion percentage.
    pub progress: i16,
    /// Team lead's user identifier.
    pub team_lead: Option<String>,
    /// Optional start timestamp.
    pub start_date: Option<DateTime<Utc>>,
    /// Optional end timestamp.
    pub end_date: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Row model for project membership records.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = project_members)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectMemberRow {
    /// Owning project identifier.
    pub project_id: uuid::Uuid,
    /// Member's user identifier.
    pub user_id: String,
}

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning project identifier.
    pub project_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Category string.
    pub kind: String,
    /// Lifecycle status string.
    pub status: String,
    /// Priority string.
    pub priority: String,
    /// Assignee's user identifier.
    pub assignee_id: Option<String>,
    /// Optional due timestamp.
    pub due_date: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning project identifier.
    pub project_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Category string.
    pub kind: String,
    /// Lifecycle status string.
    pub status: String,
    /// Priority string.
    pub priority: String,
    /// Assignee's user identifier.
    pub assignee_id: Option<String>,
    /// Optional due timestamp.
    pub due_date: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Row model for comment records.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CommentRow {
    /// Comment identifier.
    pub id: uuid::Uuid,
    /// Owning task identifier.
    pub task_id: uuid::Uuid,
    /// Author's user identifier.
    pub author_id: String,
    /// Comment content.
    pub content: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Converts a project aggregate into its insert model.
#[must_use]
pub fn project_to_new_row(project: &Project) -> NewProjectRow {
    NewProjectRow {
        id: project.id().into_inner(),
        workspace_id: project.workspace().as_str().to_owned(),
        name: project.name().to_owned(),
        description: project.description().map(ToOwned::to_owned),
        status: project.status().as_str().to_owned(),
        priority: project.priority().as_str().to_owned(),
        progress: i16::from(project.progress().percent()),
        team_lead: project.team_lead().map(|lead| lead.as_str().to_owned()),
        start_date: project.start_date(),
        end_date: project.end_date(),
        created_at: project.created_at(),
        updated_at: project.updated_at(),
    }
}

/// Converts a project row back into the domain aggregate.
///
/// # Errors
///
/// Returns a persistence error when stored strings fail domain parsing.
pub fn row_to_project(row: ProjectRow) -> ProjectStoreResult<Project> {
    let workspace =
        WorkspaceId::new(row.workspace_id).map_err(ProjectStoreError::persistence)?;
    let status =
        ProjectStatus::try_from(row.status.as_str()).map_err(ProjectStoreError::persistence)?;
    let priority =
        Priority::try_from(row.priority.as_str()).map_err(ProjectStoreError::persistence)?;
    let progress = Progress::from_persisted(row.progress).map_err(ProjectStoreError::persistence)?;
    let team_lead = row
        .team_lead
        .map(UserId::new)
        .transpose()
        .map_err(ProjectStoreError::persistence)?;
    Ok(Project::from_persisted(PersistedProjectData {
        id: ProjectId::from_uuid(row.id),
        workspace,
        name: row.name,
        description: row.description,
        status,
        priority,
        progress,
        team_lead,
        start_date: row.start_date,
        end_date: row.end_date,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }))
}

/// Converts a membership row back into the domain pair.
///
/// # Errors
///
/// Returns a persistence error when the stored user id fails validation.
pub fn row_to_project_member(row: ProjectMemberRow) -> ProjectStoreResult<ProjectMember> {
    let user = UserId::new(row.user_id).map_err(ProjectStoreError::persistence)?;
    Ok(ProjectMember::new(ProjectId::from_uuid(row.project_id), user))
}

/// Converts a task aggregate into its insert model.
#[must_use]
pub fn task_to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        project_id: task.project().into_inner(),
        title: task.title().to_owned(),
        description: task.description().map(ToOwned::to_owned),
        kind: task.kind().as_str().to_owned(),
        status: task.status().as_str().to_owned(),
        priority: task.priority().as_str().to_owned(),
        assignee_id: task.assignee().map(|user| user.as_str().to_owned()),
        due_date: task.due_date(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

/// Converts a task row back into the domain aggregate.
///
/// # Errors
///
/// Returns a persistence error when stored strings fail domain parsing.
pub fn row_to_task(row: TaskRow) -> ProjectStoreResult<Task> {
    let kind = TaskKind::try_from(row.kind.as_str()).map_err(ProjectStoreError::persistence)?;
    let status =
        TaskStatus::try_from(row.status.as_str()).map_err(ProjectStoreError::persistence)?;
    let priority =
        Priority::try_from(row.priority.as_str()).map_err(ProjectStoreError::persistence)?;
    let assignee = row
        .assignee_id
        .map(UserId::new)
        .transpose()
        .map_err(ProjectStoreError::persistence)?;
    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(row.id),
        project: ProjectId::from_uuid(row.project_id),
        title: row.title,
        description: row.description,
        kind,
        status,
        priority,
        assignee,
        due_date: row.due_date,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }))
}

/// Converts a comment aggregate into its row model.
#[must_use]
pub fn comment_to_row(comment: &Comment) -> CommentRow {
    CommentRow {
        id: comment.id().into_inner(),
        task_id: comment.task().into_inner(),
        author_id: comment.author().as_str().to_owned(),
        content: comment.content().to_owned(),
        created_at: comment.created_at(),
    }
}

/// Converts a comment row back into the domain type.
///
/// # Errors
///
/// Returns a persistence error when the stored author id fails validation.
pub fn row_to_comment(row: CommentRow) -> ProjectStoreResult<Comment> {
    let author = UserId::new(row.author_id).map_err(ProjectStoreError::persistence)?;
    Ok(Comment::from_persisted(
        CommentId::from_uuid(row.id),
        TaskId::from_uuid(row.task_id),
        author,
        row.content,
        row.created_at,
    ))
}
