//! User records mirrored from the identity provider.

use super::{EmailAddress, UserId};
use serde::{Deserialize, Serialize};

/// A user known to the directory.
///
/// Users are created, updated, and deleted exclusively in reaction to
/// identity-provider lifecycle events; the domain service never mints
/// user rows itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    email: EmailAddress,
    name: String,
    image: Option<String>,
}

impl User {
    /// Creates a user record from provider-supplied profile data.
    #[must_use]
    pub fn new(
        id: UserId,
        email: EmailAddress,
        name: impl Into<String>,
        image: Option<String>,
    ) -> Self {
        Self {
            id,
            email,
            name: name.into(),
            image,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the user's email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the avatar image URL, when the provider supplied one.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Replaces the profile fields with updated provider data.
    pub fn update_profile(
        &mut self,
        email: EmailAddress,
        name: impl Into<String>,
        image: Option<String>,
    ) {
        self.email = email;
        self.name = name.into();
        self.image = image;
    }
}
