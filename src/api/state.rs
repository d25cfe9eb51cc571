//! Shared application state for the HTTP surface.
//!
//! Handlers are monomorphized over the production stack: `PostgreSQL`
//! repositories, the run-store event sink, and the system clock. Tests
//! exercise the generic services directly with in-memory adapters.

use crate::directory::adapters::postgres::{
    DirectoryPgPool, PostgresUserRepository, PostgresWorkspaceRepository,
};
use crate::directory::services::MembershipService;
use crate::project::adapters::postgres::{
    PostgresCommentRepository, PostgresProjectRepository, PostgresTaskRepository,
};
use crate::project::services::{
    CommentService, OverviewService, ProjectLifecycleService, TaskService,
};
use crate::workflow::adapters::ReminderEnqueueSink;
use crate::workflow::adapters::postgres::PostgresReminderRunRepository;
use crate::workflow::services::IdentityService;
use mockable::DefaultClock;
use std::sync::Arc;

/// Production event sink: task events become durable reminder runs.
pub type ProductionEvents = ReminderEnqueueSink<PostgresReminderRunRepository, DefaultClock>;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Workspace overview aggregation.
    pub overview: OverviewService<
        PostgresWorkspaceRepository,
        PostgresUserRepository,
        PostgresProjectRepository,
        PostgresTaskRepository,
        PostgresCommentRepository,
    >,
    /// Workspace membership management.
    pub membership:
        MembershipService<PostgresWorkspaceRepository, PostgresUserRepository, DefaultClock>,
    /// Project lifecycle management.
    pub projects: ProjectLifecycleService<
        PostgresWorkspaceRepository,
        PostgresUserRepository,
        PostgresProjectRepository,
        DefaultClock,
    >,
    /// Task management.
    pub tasks: TaskService<
        PostgresProjectRepository,
        PostgresTaskRepository,
        ProductionEvents,
        DefaultClock,
    >,
    /// Comment management.
    pub comments: CommentService<
        PostgresTaskRepository,
        PostgresProjectRepository,
        PostgresCommentRepository,
        PostgresUserRepository,
        DefaultClock,
    >,
    /// Identity lifecycle application.
    pub identity:
        IdentityService<PostgresUserRepository, PostgresWorkspaceRepository, DefaultClock>,
}

impl AppState {
    /// Wires the full production service stack from one connection pool.
    #[must_use]
    pub fn from_pool(pool: &DirectoryPgPool) -> Self {
        let clock = Arc::new(DefaultClock);
        let users = Arc::new(PostgresUserRepository::new(pool.clone()));
        let workspaces = Arc::new(PostgresWorkspaceRepository::new(pool.clone()));
        let projects = Arc::new(PostgresProjectRepository::new(pool.clone()));
        let tasks = Arc::new(PostgresTaskRepository::new(pool.clone()));
        let comments = Arc::new(PostgresCommentRepository::new(pool.clone()));
        let runs = Arc::new(PostgresReminderRunRepository::new(pool.clone()));
        let events = Arc::new(ReminderEnqueueSink::new(runs, Arc::clone(&clock)));

        Self {
            overview: OverviewService::new(
                Arc::clone(&workspaces),
                Arc::clone(&users),
                Arc::clone(&projects),
                Arc::clone(&tasks),
                Arc::clone(&comments),
            ),
            membership: MembershipService::new(
                Arc::clone(&workspaces),
                Arc::clone(&users),
                Arc::clone(&clock),
            ),
            projects: ProjectLifecycleService::new(
                Arc::clone(&workspaces),
                Arc::clone(&users),
                Arc::clone(&projects),
                Arc::clone(&clock),
            ),
            tasks: TaskService::new(
                Arc::clone(&projects),
                Arc::clone(&tasks),
                events,
                Arc::clone(&clock),
            ),
            comments: CommentService::new(
                Arc::clone(&tasks),
                Arc::clone(&projects),
                comments,
                Arc::clone(&users),
                Arc::clone(&clock),
            ),
            identity: IdentityService::new(users, workspaces, clock),
        }
    }
}
