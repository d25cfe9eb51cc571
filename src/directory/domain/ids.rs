//! Identifier and validated scalar types for the directory domain.
//!
//! User and workspace identifiers are minted by the identity provider and
//! treated as opaque non-empty strings; this service never generates them.

use super::DirectoryDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for a user record, issued by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a validated user identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::EmptyUserId`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, DirectoryDomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DirectoryDomainError::EmptyUserId);
        }
        Ok(Self(value))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identifier and returns the wrapped string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier for a workspace, issued by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkspaceId(String);

impl WorkspaceId {
    /// Creates a validated workspace identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::EmptyWorkspaceId`] when the value
    /// is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, DirectoryDomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DirectoryDomainError::EmptyWorkspaceId);
        }
        Ok(Self(value))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identifier and returns the wrapped string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated, case-normalized email address.
///
/// Addresses are lowercased on construction so lookups by email are
/// case-insensitive throughout the service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::InvalidEmail`] when the value is
    /// empty or lacks a local part or domain.
    pub fn new(value: impl Into<String>) -> Result<Self, DirectoryDomainError> {
        let value = value.into();
        let trimmed = value.trim();
        let valid = trimmed
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
        if !valid {
            return Err(DirectoryDomainError::InvalidEmail(value));
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the address and returns the wrapped string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
