//! Service layer for workspace membership management.

use crate::directory::{
    domain::{
        DirectoryDomainError, EmailAddress, UserId, WorkspaceId, WorkspaceMember, WorkspaceRole,
        is_workspace_admin,
    },
    ports::{DirectoryRepositoryError, UserRepository, WorkspaceRepository},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for adding a member to a workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddMemberRequest {
    workspace: WorkspaceId,
    email: String,
    role: String,
    message: Option<String>,
}

impl AddMemberRequest {
    /// Creates a request with required fields.
    #[must_use]
    pub fn new(
        workspace: WorkspaceId,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            workspace,
            email: email.into(),
            role: role.into(),
            message: None,
        }
    }

    /// Attaches an invitation message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Service-level errors for membership operations.
#[derive(Debug, Error)]
pub enum MembershipError {
    /// Input validation failed (malformed email or unknown role).
    #[error(transparent)]
    Validation(#[from] DirectoryDomainError),

    /// The target workspace does not exist.
    #[error("workspace not found: {0}")]
    WorkspaceNotFound(WorkspaceId),

    /// No user is registered for the given email address.
    #[error("no user registered for {0}")]
    UserNotFound(EmailAddress),

    /// The acting user lacks admin privileges in the workspace.
    #[error("user {0} does not have admin privileges for this workspace")]
    NotAdmin(UserId),

    /// The target user already belongs to the workspace.
    #[error("user {user} is already a member of workspace {workspace}")]
    AlreadyMember {
        /// Workspace the duplicate was attempted against.
        workspace: WorkspaceId,
        /// User who is already a member.
        user: UserId,
    },

    /// Repository operation failed.
    #[error(transparent)]
    Repository(DirectoryRepositoryError),
}

/// Result type for membership service operations.
pub type MembershipResult<T> = Result<T, MembershipError>;

/// Workspace membership orchestration service.
pub struct MembershipService<W, U, C>
where
    W: WorkspaceRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    workspaces: Arc<W>,
    users: Arc<U>,
    clock: Arc<C>,
}

impl<W, U, C> Clone for MembershipService<W, U, C>
where
    W: WorkspaceRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            workspaces: Arc::clone(&self.workspaces),
            users: Arc::clone(&self.users),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<W, U, C> MembershipService<W, U, C>
where
    W: WorkspaceRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new membership service.
    #[must_use]
    pub const fn new(workspaces: Arc<W>, users: Arc<U>, clock: Arc<C>) -> Self {
        Self {
            workspaces,
            users,
            clock,
        }
    }

    /// Adds a member to a workspace on behalf of `actor`.
    ///
    /// The actor must hold the ADMIN role in the workspace; the target is
    /// resolved by email and must not already be a member. The role string
    /// is parsed case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`MembershipError`] when validation, authorization, or
    /// persistence fails; duplicate membership surfaces as
    /// [`MembershipError::AlreadyMember`].
    pub async fn add_member(
        &self,
        actor: &UserId,
        request: AddMemberRequest,
    ) -> MembershipResult<WorkspaceMember> {
        let email = EmailAddress::new(request.email)?;
        let role = WorkspaceRole::try_from(request.role.as_str())
            .map_err(DirectoryDomainError::from)?;

        let target = self
            .users
            .find_by_email(&email)
            .await
            .map_err(MembershipError::Repository)?
            .ok_or_else(|| MembershipError::UserNotFound(email.clone()))?;

        let workspace = self
            .workspaces
            .find_by_id(&request.workspace)
            .await
            .map_err(MembershipError::Repository)?
            .ok_or_else(|| MembershipError::WorkspaceNotFound(request.workspace.clone()))?;

        let members = self
            .workspaces
            .members_of(workspace.id())
            .await
            .map_err(MembershipError::Repository)?;

        if !is_workspace_admin(&members, actor) {
            return Err(MembershipError::NotAdmin(actor.clone()));
        }

        // This pre-check improves semantic error reporting but is not relied
        // on for correctness: the composite key still enforces uniqueness in
        // the TOCTOU window between check and insert.
        if members.iter().any(|member| member.user() == target.id()) {
            return Err(MembershipError::AlreadyMember {
                workspace: workspace.id().clone(),
                user: target.id().clone(),
            });
        }

        let member = WorkspaceMember::new(
            workspace.id().clone(),
            target.id().clone(),
            role,
            request.message,
            &*self.clock,
        );
        self.workspaces
            .add_member(&member)
            .await
            .map_err(|err| match err {
                DirectoryRepositoryError::DuplicateMember { workspace, user } => {
                    MembershipError::AlreadyMember { workspace, user }
                }
                other => MembershipError::Repository(other),
            })?;
        Ok(member)
    }
}
