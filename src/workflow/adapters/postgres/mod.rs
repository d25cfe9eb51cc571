//! `PostgreSQL` adapters for workflow persistence.

mod models;
mod repository;
pub(crate) mod schema;

pub use repository::{PostgresReminderRunRepository, WorkflowPgPool};
