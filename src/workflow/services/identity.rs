//! Application of identity-provider lifecycle events to the directory.

use crate::directory::{
    domain::{
        DirectoryDomainError, EmailAddress, User, UserId, Workspace, WorkspaceId, WorkspaceMember,
        WorkspaceRole,
    },
    ports::{DirectoryRepositoryError, UserRepository, WorkspaceRepository},
};
use crate::workflow::domain::{IdentityEvent, OrganizationCreated, OrganizationUpdated, UserPayload};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while applying an identity event.
#[derive(Debug, Error)]
pub enum IdentitySyncError {
    /// The provider payload failed domain validation.
    #[error(transparent)]
    Validation(#[from] DirectoryDomainError),

    /// The directory rejected the mutation. Duplicate-key conflicts from
    /// re-delivered creation events land here and are terminal.
    #[error(transparent)]
    Repository(#[from] DirectoryRepositoryError),
}

/// Result type for identity synchronization.
pub type IdentitySyncResult<T> = Result<T, IdentitySyncError>;

/// Applies identity lifecycle events to the directory, 1:1.
pub struct IdentityService<U, W, C>
where
    U: UserRepository,
    W: WorkspaceRepository,
    C: Clock + Send + Sync,
{
    users: Arc<U>,
    workspaces: Arc<W>,
    clock: Arc<C>,
}

impl<U, W, C> Clone for IdentityService<U, W, C>
where
    U: UserRepository,
    W: WorkspaceRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            workspaces: Arc::clone(&self.workspaces),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<U, W, C> IdentityService<U, W, C>
where
    U: UserRepository,
    W: WorkspaceRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new identity synchronization service.
    #[must_use]
    pub const fn new(users: Arc<U>, workspaces: Arc<W>, clock: Arc<C>) -> Self {
        Self {
            users,
            workspaces,
            clock,
        }
    }

    /// Applies one lifecycle event.
    ///
    /// # Errors
    ///
    /// Returns [`IdentitySyncError`] when the payload is malformed or the
    /// directory mutation fails.
    pub async fn apply(&self, event: IdentityEvent) -> IdentitySyncResult<()> {
        match event {
            IdentityEvent::UserCreated(payload) => {
                let user = user_from_payload(payload)?;
                self.users.insert(&user).await?;
                tracing::info!(user = %user.id(), "user synced from identity provider");
            }
            IdentityEvent::UserUpdated(payload) => {
                let user = user_from_payload(payload)?;
                self.users.update(&user).await?;
                tracing::info!(user = %user.id(), "user profile updated");
            }
            IdentityEvent::UserDeleted { id } => {
                let user_id = UserId::new(id)?;
                self.users.delete(&user_id).await?;
                tracing::info!(user = %user_id, "user removed");
            }
            IdentityEvent::OrganizationCreated(payload) => {
                self.apply_organization_created(payload).await?;
            }
            IdentityEvent::OrganizationUpdated(payload) => {
                self.apply_organization_updated(payload).await?;
            }
            IdentityEvent::OrganizationDeleted { id } => {
                let workspace_id = WorkspaceId::new(id)?;
                self.workspaces.delete(&workspace_id).await?;
                tracing::info!(workspace = %workspace_id, "workspace removed");
            }
        }
        Ok(())
    }

    async fn apply_organization_created(
        &self,
        payload: OrganizationCreated,
    ) -> IdentitySyncResult<()> {
        let id = WorkspaceId::new(payload.id)?;
        let owner = UserId::new(payload.created_by)?;
        let workspace = Workspace::new(
            id.clone(),
            payload.name,
            payload.slug,
            owner.clone(),
            payload.image_url,
        );
        self.workspaces.insert(&workspace).await?;

        // The creator is seeded as the workspace's first ADMIN member.
        let member = WorkspaceMember::new(
            id.clone(),
            owner,
            WorkspaceRole::Admin,
            None,
            &*self.clock,
        );
        self.workspaces.add_member(&member).await?;
        tracing::info!(workspace = %id, "workspace synced from identity provider");
        Ok(())
    }

    async fn apply_organization_updated(
        &self,
        payload: OrganizationUpdated,
    ) -> IdentitySyncResult<()> {
        let id = WorkspaceId::new(payload.id)?;
        let mut workspace = self
            .workspaces
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DirectoryRepositoryError::WorkspaceNotFound(id.clone()))?;
        workspace.update_details(payload.name, payload.slug, payload.image_url);
        self.workspaces.update(&workspace).await?;
        tracing::info!(workspace = %id, "workspace details updated");
        Ok(())
    }
}

fn user_from_payload(payload: UserPayload) -> IdentitySyncResult<User> {
    let id = UserId::new(payload.id)?;
    let email = EmailAddress::new(payload.email)?;
    Ok(User::new(id, email, payload.name, payload.image))
}
