//! Read-side aggregation of a user's workspaces.
//!
//! Builds the fully populated tree the frontend loads on session start:
//! every workspace the user belongs to, with members, projects, tasks,
//! and comments resolved down to their users.

use super::views::{
    CommentView, MemberView, PopulateError, ProjectMemberView, ProjectView, TaskView,
    WorkspaceView, load_users,
};
use crate::directory::domain::{UserId, Workspace};
use crate::directory::ports::{UserRepository, WorkspaceRepository};
use crate::project::domain::Project;
use crate::project::ports::{CommentRepository, ProjectRepository, TaskRepository};
use std::sync::Arc;
use thiserror::Error;

/// Errors returned by the overview service.
#[derive(Debug, Clone, Error)]
pub enum OverviewError {
    /// A lookup behind the view failed.
    #[error(transparent)]
    Populate(#[from] PopulateError),
}

impl From<crate::directory::ports::DirectoryRepositoryError> for OverviewError {
    fn from(err: crate::directory::ports::DirectoryRepositoryError) -> Self {
        Self::Populate(PopulateError::Directory(err))
    }
}

impl From<crate::project::ports::ProjectStoreError> for OverviewError {
    fn from(err: crate::project::ports::ProjectStoreError) -> Self {
        Self::Populate(PopulateError::Store(err))
    }
}

/// Result type for overview operations.
pub type OverviewResult<T> = Result<T, OverviewError>;

/// Workspace overview aggregation service.
#[derive(Clone)]
pub struct OverviewService<W, U, P, T, Co>
where
    W: WorkspaceRepository,
    U: UserRepository,
    P: ProjectRepository,
    T: TaskRepository,
    Co: CommentRepository,
{
    workspaces: Arc<W>,
    users: Arc<U>,
    projects: Arc<P>,
    tasks: Arc<T>,
    comments: Arc<Co>,
}

impl<W, U, P, T, Co> OverviewService<W, U, P, T, Co>
where
    W: WorkspaceRepository,
    U: UserRepository,
    P: ProjectRepository,
    T: TaskRepository,
    Co: CommentRepository,
{
    /// Creates a new overview service.
    #[must_use]
    pub const fn new(
        workspaces: Arc<W>,
        users: Arc<U>,
        projects: Arc<P>,
        tasks: Arc<T>,
        comments: Arc<Co>,
    ) -> Self {
        Self {
            workspaces,
            users,
            projects,
            tasks,
            comments,
        }
    }

    /// Returns every workspace the actor belongs to, fully populated.
    ///
    /// Membership is the only gate: a user with no memberships receives
    /// an empty list, never an error.
    ///
    /// # Errors
    ///
    /// Returns [`OverviewError`] when any underlying lookup fails.
    pub async fn list_user_workspaces(
        &self,
        actor: &UserId,
    ) -> OverviewResult<Vec<WorkspaceView>> {
        let workspaces = self.workspaces.workspaces_for_user(actor).await?;
        let mut views = Vec::with_capacity(workspaces.len());
        for workspace in workspaces {
            views.push(self.workspace_view(workspace).await?);
        }
        Ok(views)
    }

    async fn workspace_view(&self, workspace: Workspace) -> OverviewResult<WorkspaceView> {
        let members = self.workspaces.members_of(workspace.id()).await?;
        let member_ids: Vec<UserId> = members
            .iter()
            .map(|member| member.user().clone())
            .chain(std::iter::once(workspace.owner().clone()))
            .collect();
        let member_users = load_users(&*self.users, member_ids).await?;

        let owner = member_users.get(workspace.owner()).cloned();
        let member_views = members
            .into_iter()
            .map(|member| {
                let user = member_users.get(member.user()).cloned();
                MemberView { member, user }
            })
            .collect();

        let projects = self.projects.projects_in_workspace(workspace.id()).await?;
        let mut project_views = Vec::with_capacity(projects.len());
        for project in projects {
            project_views.push(self.project_view(project).await?);
        }

        Ok(WorkspaceView {
            workspace,
            owner,
            members: member_views,
            projects: project_views,
        })
    }

    async fn project_view(&self, project: Project) -> OverviewResult<ProjectView> {
        let members = self.projects.members_of(project.id()).await?;
        let tasks = self.tasks.tasks_in_project(project.id()).await?;

        let mut task_views = Vec::with_capacity(tasks.len());
        for task in tasks {
            let comments = self.comments.comments_for_task(task.id()).await?;
            let comment_author_ids: Vec<UserId> = comments
                .iter()
                .map(|comment| comment.author().clone())
                .chain(task.assignee().cloned())
                .collect();
            let users = load_users(&*self.users, comment_author_ids).await?;
            let assignee = task.assignee().and_then(|id| users.get(id).cloned());
            let comment_views = comments
                .into_iter()
                .map(|comment| {
                    let author = users.get(comment.author()).cloned();
                    CommentView { comment, author }
                })
                .collect();
            task_views.push(TaskView {
                task,
                assignee,
                comments: comment_views,
            });
        }

        let lead_ids: Vec<_> = project.team_lead().cloned().into_iter().collect();
        let lead_users = load_users(&*self.users, lead_ids).await?;
        let team_lead = project
            .team_lead()
            .and_then(|id| lead_users.get(id).cloned());

        let member_ids: Vec<UserId> =
            members.iter().map(|member| member.user().clone()).collect();
        let member_users = load_users(&*self.users, member_ids).await?;
        let member_views = members
            .into_iter()
            .map(|member| {
                let user = member_users.get(member.user()).cloned();
                ProjectMemberView { member, user }
            })
            .collect();

        Ok(ProjectView {
            project,
            members: member_views,
            tasks: task_views,
            team_lead,
        })
    }
}
