//! Domain types for the user/workspace directory.

mod authorization;
mod error;
mod ids;
mod member;
mod user;
mod workspace;

pub use authorization::is_workspace_admin;
pub use error::{DirectoryDomainError, ParseWorkspaceRoleError};
pub use ids::{EmailAddress, UserId, WorkspaceId};
pub use member::{WorkspaceMember, WorkspaceRole};
pub use user::User;
pub use workspace::Workspace;
