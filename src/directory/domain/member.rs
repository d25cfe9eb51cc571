//! Workspace membership rows and roles.

use super::{ParseWorkspaceRoleError, UserId, WorkspaceId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Role a member holds within a workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkspaceRole {
    /// Elevated role: may manage projects and membership.
    Admin,
    /// Regular role: may read everything within the workspace.
    Member,
}

impl WorkspaceRole {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Member => "MEMBER",
        }
    }
}

impl TryFrom<&str> for WorkspaceRole {
    type Error = ParseWorkspaceRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "ADMIN" => Ok(Self::Admin),
            "MEMBER" => Ok(Self::Member),
            _ => Err(ParseWorkspaceRoleError(value.to_owned())),
        }
    }
}

/// A user's membership in a workspace.
///
/// The (workspace, user) pair is unique; duplicate inserts surface as
/// conflicts at the repository layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceMember {
    workspace: WorkspaceId,
    user: UserId,
    role: WorkspaceRole,
    message: Option<String>,
    joined_at: DateTime<Utc>,
}

impl WorkspaceMember {
    /// Creates a membership row joining now.
    #[must_use]
    pub fn new(
        workspace: WorkspaceId,
        user: UserId,
        role: WorkspaceRole,
        message: Option<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            workspace,
            user,
            role,
            message,
            joined_at: clock.utc(),
        }
    }

    /// Reconstructs a membership row from persisted storage.
    #[must_use]
    pub const fn from_persisted(
        workspace: WorkspaceId,
        user: UserId,
        role: WorkspaceRole,
        message: Option<String>,
        joined_at: DateTime<Utc>,
    ) -> Self {
        Self {
            workspace,
            user,
            role,
            message,
            joined_at,
        }
    }

    /// Returns the workspace this membership belongs to.
    #[must_use]
    pub const fn workspace(&self) -> &WorkspaceId {
        &self.workspace
    }

    /// Returns the member's user identifier.
    #[must_use]
    pub const fn user(&self) -> &UserId {
        &self.user
    }

    /// Returns the member's role.
    #[must_use]
    pub const fn role(&self) -> WorkspaceRole {
        self.role
    }

    /// Returns the invitation message, when one was recorded.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns when the member joined.
    #[must_use]
    pub const fn joined_at(&self) -> DateTime<Utc> {
        self.joined_at
    }
}
