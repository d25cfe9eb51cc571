//! Identity-provider lifecycle events.
//!
//! Payload fields arrive as raw provider strings and are validated when
//! the event is applied to the directory, not at deserialization time.

use serde::{Deserialize, Serialize};

/// Provider payload for user creation and update events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    /// Provider-issued user identifier.
    pub id: String,
    /// Primary email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Optional avatar image URL.
    pub image: Option<String>,
}

/// Provider payload for organization creation events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationCreated {
    /// Provider-issued organization identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// User who created the organization; seeded as the ADMIN member.
    pub created_by: String,
    /// Optional organization image URL.
    pub image_url: Option<String>,
}

/// Provider payload for organization update events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationUpdated {
    /// Provider-issued organization identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Optional organization image URL.
    pub image_url: Option<String>,
}

/// Lifecycle event emitted by the identity provider.
///
/// Each variant maps 1:1 to a directory mutation. Delivery is
/// at-least-once; re-delivered creation events surface as duplicate-key
/// conflicts from the repository and are treated as terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum IdentityEvent {
    /// A user signed up.
    UserCreated(UserPayload),
    /// A user changed profile data.
    UserUpdated(UserPayload),
    /// A user account was removed.
    UserDeleted {
        /// Provider-issued user identifier.
        id: String,
    },
    /// An organization was created.
    OrganizationCreated(OrganizationCreated),
    /// An organization changed its details.
    OrganizationUpdated(OrganizationUpdated),
    /// An organization was removed.
    OrganizationDeleted {
        /// Provider-issued organization identifier.
        id: String,
    },
}
