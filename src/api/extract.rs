//! Actor extraction from the verified session header.

use super::error::ApiError;
use crate::directory::domain::UserId;
use async_trait::async_trait;
use axum::http::request::Parts;
use axum::extract::FromRequestParts;

/// Header populated by the deployment's session-verification middleware.
const ACTOR_HEADER: &str = "x-actor-id";

/// The authenticated actor behind a request.
///
/// The identity provider's middleware verifies the session token and
/// injects the resolved user id; a request arriving without it has no
/// verified session and is rejected with 401 before any operation runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for Actor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(ACTOR_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        let id = UserId::new(value).map_err(|_| ApiError::unauthorized())?;
        Ok(Self(id))
    }
}
