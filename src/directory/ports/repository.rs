//! Repository ports for user, workspace, and membership persistence.

use crate::directory::domain::{EmailAddress, User, UserId, Workspace, WorkspaceId, WorkspaceMember};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for directory repository operations.
pub type DirectoryRepositoryResult<T> = Result<T, DirectoryRepositoryError>;

/// User persistence contract.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new user.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::DuplicateUser`] when the
    /// identifier already exists.
    async fn insert(&self, user: &User) -> DirectoryRepositoryResult<()>;

    /// Persists updated profile data for an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::UserNotFound`] when the user
    /// does not exist.
    async fn update(&self, user: &User) -> DirectoryRepositoryResult<()>;

    /// Removes a user.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::UserNotFound`] when the user
    /// does not exist.
    async fn delete(&self, id: &UserId) -> DirectoryRepositoryResult<()>;

    /// Finds a user by identifier.
    ///
    /// Returns `None` when the user does not exist.
    async fn find_by_id(&self, id: &UserId) -> DirectoryRepositoryResult<Option<User>>;

    /// Finds a user by email address.
    ///
    /// Returns `None` when no user is registered for the address.
    async fn find_by_email(&self, email: &EmailAddress) -> DirectoryRepositoryResult<Option<User>>;
}

/// Workspace and membership persistence contract.
///
/// Membership rows are part of the workspace aggregate: they are stored
/// and loaded through this port, and deleting a workspace removes its
/// member rows (the relational store cascades; in-memory adapters mirror
/// that behavior).
#[async_trait]
pub trait WorkspaceRepository: Send + Sync {
    /// Stores a new workspace.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::DuplicateWorkspace`] when the
    /// identifier already exists.
    async fn insert(&self, workspace: &Workspace) -> DirectoryRepositoryResult<()>;

    /// Persists updated organization data for an existing workspace.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::WorkspaceNotFound`] when the
    /// workspace does not exist.
    async fn update(&self, workspace: &Workspace) -> DirectoryRepositoryResult<()>;

    /// Removes a workspace and its membership rows.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::WorkspaceNotFound`] when the
    /// workspace does not exist.
    async fn delete(&self, id: &WorkspaceId) -> DirectoryRepositoryResult<()>;

    /// Finds a workspace by identifier.
    ///
    /// Returns `None` when the workspace does not exist.
    async fn find_by_id(&self, id: &WorkspaceId) -> DirectoryRepositoryResult<Option<Workspace>>;

    /// Returns every workspace in which the user holds a membership.
    ///
    /// A user with no memberships yields an empty list, never an error.
    async fn workspaces_for_user(
        &self,
        user: &UserId,
    ) -> DirectoryRepositoryResult<Vec<Workspace>>;

    /// Returns the membership rows of a workspace.
    async fn members_of(
        &self,
        id: &WorkspaceId,
    ) -> DirectoryRepositoryResult<Vec<WorkspaceMember>>;

    /// Stores a new membership row.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::DuplicateMember`] when the
    /// (workspace, user) pair already exists.
    async fn add_member(&self, member: &WorkspaceMember) -> DirectoryRepositoryResult<()>;
}

/// Errors returned by directory repository implementations.
#[derive(Debug, Clone, Error)]
pub enum DirectoryRepositoryError {
    /// A user with the same identifier already exists.
    #[error("duplicate user identifier: {0}")]
    DuplicateUser(UserId),

    /// The user was not found.
    #[error("user not found: {0}")]
    UserNotFound(UserId),

    /// A workspace with the same identifier already exists.
    #[error("duplicate workspace identifier: {0}")]
    DuplicateWorkspace(WorkspaceId),

    /// The workspace was not found.
    #[error("workspace not found: {0}")]
    WorkspaceNotFound(WorkspaceId),

    /// The (workspace, user) membership pair already exists.
    #[error("user {user} is already a member of workspace {workspace}")]
    DuplicateMember {
        /// Workspace whose membership was duplicated.
        workspace: WorkspaceId,
        /// User already present in the workspace.
        user: UserId,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl DirectoryRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
