//! Shared world state for reminder workflow BDD scenarios.

use std::sync::Arc;
use std::time::Duration;

use atelier::directory::{
    adapters::memory::InMemoryUserRepository,
    domain::{EmailAddress, User, UserId, WorkspaceId},
    ports::UserRepository,
};
use atelier::project::{
    adapters::memory::{InMemoryProjectRepository, InMemoryTaskRepository},
    domain::{
        Priority, Progress, Project, ProjectDraft, ProjectId, ProjectMember, ProjectStatus, Task,
        TaskDraft, TaskKind, TaskStatus,
    },
    ports::{ProjectRepository, TaskAssignedEvent, TaskRepository},
};
use atelier::workflow::{
    adapters::memory::{InMemoryReminderRunRepository, RecordingMailer},
    domain::ReminderRun,
    ports::ReminderRunRepository,
    services::{EmailTemplates, ReminderScheduler, ReminderWorkflow},
};
use chrono::{DateTime, Utc};
use rstest::fixture;

use crate::test_helpers::{FixedClock, timestamp};

/// Scheduler type used by the BDD world.
pub type TestScheduler = ReminderScheduler<
    InMemoryTaskRepository,
    InMemoryProjectRepository,
    InMemoryUserRepository,
    InMemoryReminderRunRepository,
    RecordingMailer,
    FixedClock,
>;

/// Scenario world for reminder workflow behaviour tests.
pub struct ReminderWorld {
    pub tasks: Arc<InMemoryTaskRepository>,
    pub runs: Arc<InMemoryReminderRunRepository>,
    pub mailer: Arc<RecordingMailer>,
    pub clock: FixedClock,
    pub scheduler: TestScheduler,
    pub project: ProjectId,
    pub task: Option<Task>,
    pub run: Option<ReminderRun>,
    pub due_date: Option<DateTime<Utc>>,
}

impl ReminderWorld {
    /// Creates a world with one seeded project and an empty run store.
    #[must_use]
    pub fn new() -> Self {
        let clock = FixedClock::at(timestamp(2026, 8, 6, 9));
        let users = Arc::new(InMemoryUserRepository::new());
        let projects = Arc::new(InMemoryProjectRepository::new());
        let tasks = Arc::new(InMemoryTaskRepository::new());
        let runs = Arc::new(InMemoryReminderRunRepository::new());
        let mailer = Arc::new(RecordingMailer::new());

        let project = seed(&clock, &users, &projects);

        let workflow = ReminderWorkflow::new(
            Arc::clone(&tasks),
            Arc::clone(&projects),
            Arc::clone(&users),
            Arc::clone(&mailer),
            EmailTemplates::new().expect("templates compile"),
            Arc::new(clock.clone()),
        );
        let scheduler = ReminderScheduler::new(
            workflow,
            Arc::clone(&runs),
            Arc::new(clock.clone()),
            Duration::from_secs(1),
        );

        Self {
            tasks,
            runs,
            mailer,
            clock,
            scheduler,
            project,
            task: None,
            run: None,
            due_date: None,
        }
    }

    /// Creates the scenario task with the given due date and enqueues
    /// its reminder run.
    pub fn assign_task(&mut self, due_date: DateTime<Utc>) {
        let task = Task::create(
            TaskDraft {
                project: self.project,
                title: "Ship the beta".to_owned(),
                description: None,
                kind: TaskKind::Feature,
                status: TaskStatus::Todo,
                priority: Priority::High,
                assignee: Some(UserId::new("user_dev").expect("valid user id")),
                due_date: Some(due_date),
            },
            &self.clock,
        )
        .expect("valid task draft");
        let run = ReminderRun::new(
            TaskAssignedEvent {
                task: task.id(),
                origin: Some("https://app.example.com".to_owned()),
            },
            &self.clock,
        );
        run_async(async {
            self.tasks.insert(&task).await.expect("task insert succeeds");
            self.runs.enqueue(&run).await.expect("run enqueue succeeds");
        });
        self.due_date = Some(due_date);
        self.task = Some(task);
        self.run = Some(run);
    }
}

impl Default for ReminderWorld {
    fn default() -> Self {
        Self::new()
    }
}

fn seed(
    clock: &FixedClock,
    users: &InMemoryUserRepository,
    projects: &InMemoryProjectRepository,
) -> ProjectId {
    run_async(async {
        let assignee = UserId::new("user_dev").expect("valid user id");
        users
            .insert(&User::new(
                assignee.clone(),
                EmailAddress::new("dev@example.com").expect("valid email"),
                "Dev",
                None,
            ))
            .await
            .expect("user insert succeeds");

        let project = Project::create(
            ProjectDraft {
                workspace: WorkspaceId::new("ws_main").expect("valid workspace id"),
                name: "Launch".to_owned(),
                description: None,
                status: ProjectStatus::Active,
                priority: Priority::High,
                progress: Progress::default(),
                team_lead: Some(UserId::new("user_lead").expect("valid user id")),
                start_date: None,
                end_date: None,
            },
            clock,
        )
        .expect("valid project draft");
        projects
            .insert(&project, &[ProjectMember::new(project.id(), assignee)])
            .await
            .expect("project insert succeeds");
        project.id()
    })
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ReminderWorld {
    ReminderWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
