//! Service layer for task comments.

use super::views::{CommentView, PopulateError, load_users};
use crate::directory::domain::UserId;
use crate::directory::ports::{DirectoryRepositoryError, UserRepository};
use crate::project::{
    domain::{Comment, ProjectDomainError, ProjectId, TaskId},
    ports::{CommentRepository, ProjectRepository, ProjectStoreError, TaskRepository},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for comment operations.
#[derive(Debug, Error)]
pub enum CommentServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Validation(#[from] ProjectDomainError),

    /// The target task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The task's owning project does not exist.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// The acting user is not a member of the project's team.
    #[error("user {0} is not a member of this project")]
    NotProjectMember(UserId),

    /// Directory lookup failed.
    #[error(transparent)]
    Directory(#[from] DirectoryRepositoryError),

    /// Project store operation failed.
    #[error(transparent)]
    Store(#[from] ProjectStoreError),
}

impl From<PopulateError> for CommentServiceError {
    fn from(err: PopulateError) -> Self {
        match err {
            PopulateError::Directory(err) => Self::Directory(err),
            PopulateError::Store(err) => Self::Store(err),
        }
    }
}

/// Result type for comment service operations.
pub type CommentServiceResult<T> = Result<T, CommentServiceError>;

/// Comment orchestration service.
pub struct CommentService<T, P, Co, U, C>
where
    T: TaskRepository,
    P: ProjectRepository,
    Co: CommentRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    projects: Arc<P>,
    comments: Arc<Co>,
    users: Arc<U>,
    clock: Arc<C>,
}

impl<T, P, Co, U, C> Clone for CommentService<T, P, Co, U, C>
where
    T: TaskRepository,
    P: ProjectRepository,
    Co: CommentRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            projects: Arc::clone(&self.projects),
            comments: Arc::clone(&self.comments),
            users: Arc::clone(&self.users),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<T, P, Co, U, C> CommentService<T, P, Co, U, C>
where
    T: TaskRepository,
    P: ProjectRepository,
    Co: CommentRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new comment service.
    #[must_use]
    pub const fn new(
        tasks: Arc<T>,
        projects: Arc<P>,
        comments: Arc<Co>,
        users: Arc<U>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            tasks,
            projects,
            comments,
            users,
            clock,
        }
    }

    /// Adds a comment to a task on behalf of `actor`.
    ///
    /// The actor must be a member of the task's project.
    ///
    /// # Errors
    ///
    /// Returns [`CommentServiceError`] when the task or project is
    /// missing, the actor is outside the team, the content is blank, or
    /// persistence fails.
    pub async fn add_comment(
        &self,
        actor: &UserId,
        task_id: TaskId,
        content: impl Into<String> + Send,
    ) -> CommentServiceResult<CommentView> {
        let task = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or(CommentServiceError::TaskNotFound(task_id))?;
        self.require_project_member(task.project(), actor).await?;

        let comment = Comment::new(task.id(), actor.clone(), content, &*self.clock)?;
        self.comments.insert(&comment).await?;

        let author = self.users.find_by_id(actor).await?;
        Ok(CommentView { comment, author })
    }

    /// Lists the comments on a task, oldest first, on behalf of `actor`.
    ///
    /// Reading comments requires project membership, the same as writing
    /// them.
    ///
    /// # Errors
    ///
    /// Returns [`CommentServiceError`] when the task or project is
    /// missing, the actor is outside the team, or lookups fail.
    pub async fn list_comments(
        &self,
        actor: &UserId,
        task_id: TaskId,
    ) -> CommentServiceResult<Vec<CommentView>> {
        let task = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or(CommentServiceError::TaskNotFound(task_id))?;
        self.require_project_member(task.project(), actor).await?;

        let comments = self.comments.comments_for_task(task.id()).await?;
        let author_ids: Vec<UserId> =
            comments.iter().map(|comment| comment.author().clone()).collect();
        let authors = load_users(&*self.users, author_ids).await?;
        Ok(comments
            .into_iter()
            .map(|comment| {
                let author = authors.get(comment.author()).cloned();
                CommentView { comment, author }
            })
            .collect())
    }

    async fn require_project_member(
        &self,
        project_id: ProjectId,
        actor: &UserId,
    ) -> CommentServiceResult<()> {
        let project = self
            .projects
            .find_by_id(project_id)
            .await?
            .ok_or(CommentServiceError::ProjectNotFound(project_id))?;
        let members = self.projects.members_of(project.id()).await?;
        if members.iter().any(|member| member.user() == actor) {
            Ok(())
        } else {
            Err(CommentServiceError::NotProjectMember(actor.clone()))
        }
    }
}
