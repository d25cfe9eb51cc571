//! `PostgreSQL` adapters for project persistence.

mod comments;
mod models;
mod projects;
pub(crate) mod schema;
mod tasks;

pub use comments::PostgresCommentRepository;
pub use projects::PostgresProjectRepository;
pub use tasks::PostgresTaskRepository;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by project adapters.
pub type ProjectPgPool = Pool<ConnectionManager<PgConnection>>;
