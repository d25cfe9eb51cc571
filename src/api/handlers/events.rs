//! Identity lifecycle event ingestion.
//!
//! The deployment fronts this route with the identity provider's
//! webhook-signature middleware; by the time a request lands here its
//! authenticity has been established.

use crate::api::{ApiError, AppState};
use crate::workflow::domain::IdentityEvent;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;

/// Response body carrying only a confirmation message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: String,
}

async fn apply_identity_event(
    State(state): State<AppState>,
    Json(event): Json<IdentityEvent>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.identity.apply(event).await?;
    Ok(Json(MessageResponse {
        message: "event applied".to_owned(),
    }))
}

/// Routes for identity event ingestion.
pub fn router() -> Router<AppState> {
    Router::new().route("/events/identity", post(apply_identity_event))
}
