//! Diesel row models for directory persistence.

use super::schema::{users, workspace_members, workspaces};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for user records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// Provider-issued user identifier.
    pub id: String,
    /// Email address, lowercased.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Optional avatar image URL.
    pub image: Option<String>,
}

/// Insert model for user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow {
    /// Provider-issued user identifier.
    pub id: String,
    /// Email address, lowercased.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Optional avatar image URL.
    pub image: Option<String>,
}

/// Query result row for workspace records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = workspaces)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct WorkspaceRow {
    /// Provider-issued workspace identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Owning user's identifier.
    pub owner_id: String,
    /// Optional workspace image URL.
    pub image_url: Option<String>,
}

/// Insert model for workspace records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = workspaces)]
pub struct NewWorkspaceRow {
    /// Provider-issued workspace identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Owning user's identifier.
    pub owner_id: String,
    /// Optional workspace image URL.
    pub image_url: Option<String>,
}

/// Query result row for membership records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = workspace_members)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct WorkspaceMemberRow {
    /// Owning workspace identifier.
    pub workspace_id: String,
    /// Member's user identifier.
    pub user_id: String,
    /// Membership role string.
    pub role: String,
    /// Optional invitation message.
    pub message: Option<String>,
    /// When the member joined.
    pub joined_at: DateTime<Utc>,
}

/// Insert model for membership records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = workspace_members)]
pub struct NewWorkspaceMemberRow {
    /// Owning workspace identifier.
    pub workspace_id: String,
    /// Member's user identifier.
    pub user_id: String,
    /// Membership role string.
    pub role: String,
    /// Optional invitation message.
    pub message: Option<String>,
    /// When the member joined.
    pub joined_at: DateTime<Utc>,
}
