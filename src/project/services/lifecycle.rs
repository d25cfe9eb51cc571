//! Service layer for project creation and updates.

use super::views::{PopulateError, ProjectMemberView, ProjectView, load_users};
use crate::directory::domain::{EmailAddress, UserId, WorkspaceId, is_workspace_admin};
use crate::directory::ports::{DirectoryRepositoryError, UserRepository, WorkspaceRepository};
use crate::project::{
    domain::{
        Priority, Progress, Project, ProjectDomainError, ProjectDraft, ProjectId, ProjectMember,
        ProjectStatus, ProjectUpdate, can_manage_project,
    },
    ports::{ProjectRepository, ProjectStoreError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    workspace: WorkspaceId,
    name: String,
    description: Option<String>,
    status: ProjectStatus,
    priority: Priority,
    progress: Progress,
    team_lead: Option<String>,
    team_members: Vec<String>,
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
}

impl CreateProjectRequest {
    /// Creates a request with required fields and defaults.
    #[must_use]
    pub fn new(workspace: WorkspaceId, name: impl Into<String>) -> Self {
        Self {
            workspace,
            name: name.into(),
            description: None,
            status: ProjectStatus::Planning,
            priority: Priority::Medium,
            progress: Progress::default(),
            team_lead: None,
            team_members: Vec::new(),
            start_date: None,
            end_date: None,
        }
    }

    /// Sets the project description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the initial priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the initial completion percentage.
    #[must_use]
    pub const fn with_progress(mut self, progress: Progress) -> Self {
        self.progress = progress;
        self
    }

    /// Sets the team lead by email address.
    #[must_use]
    pub fn with_team_lead(mut self, email: impl Into<String>) -> Self {
        self.team_lead = Some(email.into());
        self
    }

    /// Sets the team member email list.
    #[must_use]
    pub fn with_team_members(mut self, emails: impl IntoIterator<Item = String>) -> Self {
        self.team_members = emails.into_iter().collect();
        self
    }

    /// Sets the start and end timestamps.
    #[must_use]
    pub const fn with_schedule(
        mut self,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
    ) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }
}

/// Service-level errors for project lifecycle operations.
#[derive(Debug, Error)]
pub enum ProjectLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Validation(#[from] ProjectDomainError),

    /// The target workspace does not exist.
    #[error("workspace not found: {0}")]
    WorkspaceNotFound(WorkspaceId),

    /// The target project does not exist.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// The acting user may not manage projects in this scope.
    #[error("user {0} does not have permission to manage this project")]
    PermissionDenied(UserId),

    /// Directory lookup failed.
    #[error(transparent)]
    Directory(#[from] DirectoryRepositoryError),

    /// Project store operation failed.
    #[error(transparent)]
    Store(#[from] ProjectStoreError),
}

impl From<PopulateError> for ProjectLifecycleError {
    fn from(err: PopulateError) -> Self {
        match err {
            PopulateError::Directory(err) => Self::Directory(err),
            PopulateError::Store(err) => Self::Store(err),
        }
    }
}

/// Result type for project lifecycle operations.
pub type ProjectLifecycleResult<T> = Result<T, ProjectLifecycleError>;

/// Project lifecycle orchestration service.
pub struct ProjectLifecycleService<W, U, P, C>
where
    W: WorkspaceRepository,
    U: UserRepository,
    P: ProjectRepository,
    C: Clock + Send + Sync,
{
    workspaces: Arc<W>,
    users: Arc<U>,
    projects: Arc<P>,
    clock: Arc<C>,
}

impl<W, U, P, C> Clone for ProjectLifecycleService<W, U, P, C>
where
    W: WorkspaceRepository,
    U: UserRepository,
    P: ProjectRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            workspaces: Arc::clone(&self.workspaces),
            users: Arc::clone(&self.users),
            projects: Arc::clone(&self.projects),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<W, U, P, C> ProjectLifecycleService<W, U, P, C>
where
    W: WorkspaceRepository,
    U: UserRepository,
    P: ProjectRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new project lifecycle service.
    #[must_use]
    pub const fn new(workspaces: Arc<W>, users: Arc<U>, projects: Arc<P>, clock: Arc<C>) -> Self {
        Self {
            workspaces,
            users,
            projects,
            clock,
        }
    }

    /// Creates a project in a workspace on behalf of `actor`.
    ///
    /// The actor must be a workspace ADMIN. The team lead is resolved
    /// from an email address; an unresolvable address yields a project
    /// without a lead rather than an error. Team member emails matching
    /// workspace members become project members; others are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectLifecycleError`] when the workspace is missing,
    /// the actor lacks the ADMIN role, validation fails, or persistence
    /// fails.
    pub async fn create_project(
        &self,
        actor: &UserId,
        request: CreateProjectRequest,
    ) -> ProjectLifecycleResult<ProjectView> {
        let workspace = self
            .workspaces
            .find_by_id(&request.workspace)
            .await?
            .ok_or_else(|| ProjectLifecycleError::WorkspaceNotFound(request.workspace.clone()))?;
        let members = self.workspaces.members_of(workspace.id()).await?;

        if !is_workspace_admin(&members, actor) {
            return Err(ProjectLifecycleError::PermissionDenied(actor.clone()));
        }

        let team_lead = match request.team_lead.as_deref().map(EmailAddress::new) {
            Some(Ok(email)) => self.users.find_by_email(&email).await?,
            // Unresolvable or malformed lead emails leave the project
            // without a lead.
            Some(Err(_)) | None => None,
        };

        let draft = ProjectDraft {
            workspace: workspace.id().clone(),
            name: request.name,
            description: request.description,
            status: request.status,
            priority: request.priority,
            progress: request.progress,
            team_lead: team_lead.as_ref().map(|user| user.id().clone()),
            start_date: request.start_date,
            end_date: request.end_date,
        };
        let project = Project::create(draft, &*self.clock)?;

        let member_ids: Vec<UserId> =
            members.iter().map(|member| member.user().clone()).collect();
        let member_users = load_users(&*self.users, member_ids).await?;
        let wanted: Vec<EmailAddress> = request
            .team_members
            .iter()
            .filter_map(|email| EmailAddress::new(email.as_str()).ok())
            .collect();
        let project_members: Vec<ProjectMember> = members
            .iter()
            .filter_map(|member| member_users.get(member.user()))
            .filter(|user| wanted.contains(user.email()))
            .map(|user| ProjectMember::new(project.id(), user.id().clone()))
            .collect();

        self.projects.insert(&project, &project_members).await?;

        let member_views = project_members
            .iter()
            .map(|member| ProjectMemberView {
                member: member.clone(),
                user: member_users.get(member.user()).cloned(),
            })
            .collect();
        Ok(ProjectView {
            project,
            members: member_views,
            tasks: Vec::new(),
            team_lead,
        })
    }

    /// Applies a full-field update to a project on behalf of `actor`.
    ///
    /// Workspace ADMINs and the project's own team lead may update; the
    /// owning workspace and identifier are not updatable.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectLifecycleError`] when the project or workspace is
    /// missing, the actor is neither admin nor lead, validation fails, or
    /// persistence fails.
    pub async fn update_project(
        &self,
        actor: &UserId,
        project_id: ProjectId,
        update: ProjectUpdate,
    ) -> ProjectLifecycleResult<Project> {
        let mut project = self
            .projects
            .find_by_id(project_id)
            .await?
            .ok_or(ProjectLifecycleError::ProjectNotFound(project_id))?;
        let workspace = self
            .workspaces
            .find_by_id(project.workspace())
            .await?
            .ok_or_else(|| {
                ProjectLifecycleError::WorkspaceNotFound(project.workspace().clone())
            })?;
        let members = self.workspaces.members_of(workspace.id()).await?;

        if !can_manage_project(&members, &project, actor) {
            return Err(ProjectLifecycleError::PermissionDenied(actor.clone()));
        }

        project.apply_update(update, &*self.clock)?;
        self.projects.update(&project).await?;
        Ok(project)
    }
}
