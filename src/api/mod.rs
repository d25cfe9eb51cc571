//! HTTP surface of the service.
//!
//! A thin axum edge over the domain services: request DTOs, uniform
//! error-to-status mapping, and actor extraction from the verified
//! session header. Session verification itself is the deployment's
//! identity middleware; this layer only consumes its result.

mod error;
mod extract;
mod handlers;
mod routes;
mod state;

pub use error::ApiError;
pub use extract::Actor;
pub use routes::api_router;
pub use state::AppState;
