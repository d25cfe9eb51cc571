//! Error types for directory domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing directory domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryDomainError {
    /// The user identifier is empty.
    #[error("user identifier must not be empty")]
    EmptyUserId,

    /// The workspace identifier is empty.
    #[error("workspace identifier must not be empty")]
    EmptyWorkspaceId,

    /// The email address is malformed.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// The workspace role string is not a recognized role.
    #[error(transparent)]
    InvalidRole(#[from] ParseWorkspaceRoleError),
}

/// Error returned while parsing workspace roles from persistence or input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown workspace role '{0}', expected ADMIN or MEMBER")]
pub struct ParseWorkspaceRoleError(pub String);
