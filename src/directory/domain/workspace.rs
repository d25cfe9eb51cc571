//! Workspace records mirrored from the identity provider.

use super::{UserId, WorkspaceId};
use serde::{Deserialize, Serialize};

/// A workspace (organization), the top-level tenant container.
///
/// Like [`super::User`], workspace rows follow the identity provider's
/// organization lifecycle; the creator becomes the owner and is seeded as
/// an ADMIN member when the organization-created event is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    id: WorkspaceId,
    name: String,
    slug: String,
    owner: UserId,
    image_url: Option<String>,
}

impl Workspace {
    /// Creates a workspace record from provider-supplied organization data.
    #[must_use]
    pub fn new(
        id: WorkspaceId,
        name: impl Into<String>,
        slug: impl Into<String>,
        owner: UserId,
        image_url: Option<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            slug: slug.into(),
            owner,
            image_url,
        }
    }

    /// Returns the workspace identifier.
    #[must_use]
    pub const fn id(&self) -> &WorkspaceId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the URL slug.
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Returns the owning user's identifier.
    #[must_use]
    pub const fn owner(&self) -> &UserId {
        &self.owner
    }

    /// Returns the workspace image URL, when one was supplied.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Replaces the mutable organization fields with updated provider data.
    pub fn update_details(
        &mut self,
        name: impl Into<String>,
        slug: impl Into<String>,
        image_url: Option<String>,
    ) {
        self.name = name.into();
        self.slug = slug.into();
        self.image_url = image_url;
    }
}
