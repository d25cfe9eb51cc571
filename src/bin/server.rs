//! Atelier HTTP server and reminder scheduler.
//!
//! Wires the production stack: a `PostgreSQL` pool behind the Diesel
//! repositories, the domain services, the durable reminder scheduler as
//! a background task, and the axum router on the configured address.
//!
//! Configuration comes from the environment; see [`atelier::config`].

use std::sync::Arc;

use atelier::api::{AppState, api_router};
use atelier::config::ServerConfig;
use atelier::directory::adapters::postgres::PostgresUserRepository;
use atelier::project::adapters::postgres::{PostgresProjectRepository, PostgresTaskRepository};
use atelier::workflow::adapters::LogMailer;
use atelier::workflow::adapters::postgres::PostgresReminderRunRepository;
use atelier::workflow::services::{EmailTemplates, ReminderScheduler, ReminderWorkflow};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use tracing_subscriber::EnvFilter;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;
    let manager = ConnectionManager::<PgConnection>::new(&config.database_url);
    let pool = Pool::builder().build(manager)?;

    let state = AppState::from_pool(&pool);

    let clock = Arc::new(DefaultClock);
    let workflow = ReminderWorkflow::new(
        Arc::new(PostgresTaskRepository::new(pool.clone())),
        Arc::new(PostgresProjectRepository::new(pool.clone())),
        Arc::new(PostgresUserRepository::new(pool.clone())),
        Arc::new(LogMailer::new()),
        EmailTemplates::new()?,
        Arc::clone(&clock),
    );
    let scheduler = ReminderScheduler::new(
        workflow,
        Arc::new(PostgresReminderRunRepository::new(pool.clone())),
        clock,
        config.poll_interval,
    );
    tokio::spawn(async move { scheduler.run().await });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "atelier listening");
    axum::serve(listener, api_router(state)).await?;
    Ok(())
}
