//! `PostgreSQL` adapters for directory persistence.

mod models;
mod repository;
pub(crate) mod schema;

pub use repository::{DirectoryPgPool, PostgresUserRepository, PostgresWorkspaceRepository};
