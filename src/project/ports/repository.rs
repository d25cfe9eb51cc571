//! Repository ports for project, task, and comment persistence.

use crate::directory::domain::WorkspaceId;
use crate::project::domain::{
    Comment, CommentId, Project, ProjectId, ProjectMember, Task, TaskId,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for project store operations.
pub type ProjectStoreResult<T> = Result<T, ProjectStoreError>;

/// Project persistence contract.
///
/// Project member rows are part of the project aggregate and are stored
/// together with it.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Stores a new project together with its member rows.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectStoreError::DuplicateProject`] when the project
    /// identifier already exists.
    async fn insert(&self, project: &Project, members: &[ProjectMember])
    -> ProjectStoreResult<()>;

    /// Persists changes to an existing project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectStoreError::ProjectNotFound`] when the project
    /// does not exist.
    async fn update(&self, project: &Project) -> ProjectStoreResult<()>;

    /// Finds a project by identifier.
    ///
    /// Returns `None` when the project does not exist.
    async fn find_by_id(&self, id: ProjectId) -> ProjectStoreResult<Option<Project>>;

    /// Returns the member rows of a project.
    async fn members_of(&self, id: ProjectId) -> ProjectStoreResult<Vec<ProjectMember>>;

    /// Returns every project owned by the workspace.
    async fn projects_in_workspace(
        &self,
        workspace: &WorkspaceId,
    ) -> ProjectStoreResult<Vec<Project>>;
}

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectStoreError::DuplicateTask`] when the task
    /// identifier already exists.
    async fn insert(&self, task: &Task) -> ProjectStoreResult<()>;

    /// Persists changes to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectStoreError::TaskNotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &Task) -> ProjectStoreResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> ProjectStoreResult<Option<Task>>;

    /// Returns the tasks matching the given identifiers, skipping ids
    /// with no backing row.
    async fn find_many(&self, ids: &[TaskId]) -> ProjectStoreResult<Vec<Task>>;

    /// Deletes the tasks matching the given identifiers, returning how
    /// many rows were removed.
    async fn delete_many(&self, ids: &[TaskId]) -> ProjectStoreResult<usize>;

    /// Returns every task in the project.
    async fn tasks_in_project(&self, project: ProjectId) -> ProjectStoreResult<Vec<Task>>;
}

/// Comment persistence contract.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Stores a new comment.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectStoreError::DuplicateComment`] when the comment
    /// identifier already exists.
    async fn insert(&self, comment: &Comment) -> ProjectStoreResult<()>;

    /// Returns every comment on the task, oldest first.
    async fn comments_for_task(&self, task: TaskId) -> ProjectStoreResult<Vec<Comment>>;
}

/// Errors returned by project store implementations.
#[derive(Debug, Clone, Error)]
pub enum ProjectStoreError {
    /// A project with the same identifier already exists.
    #[error("duplicate project identifier: {0}")]
    DuplicateProject(ProjectId),

    /// The project was not found.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// A comment with the same identifier already exists.
    #[error("duplicate comment identifier: {0}")]
    DuplicateComment(CommentId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProjectStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
