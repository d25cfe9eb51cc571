//! Router assembly for the HTTP surface.

use super::handlers::{comments, events, projects, tasks, workspaces};
use super::state::AppState;
use axum::Router;

/// Builds the `/api` router over the production service stack.
#[must_use]
pub fn api_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(workspaces::router())
        .merge(projects::router())
        .merge(tasks::router())
        .merge(comments::router())
        .merge(events::router());
    Router::new().nest("/api", api).with_state(state)
}
