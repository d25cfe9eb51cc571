//! Shared fixtures for workflow tests.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::directory::{
    adapters::memory::InMemoryUserRepository,
    domain::{EmailAddress, User, UserId},
    ports::UserRepository,
};
use crate::project::{
    adapters::memory::{InMemoryProjectRepository, InMemoryTaskRepository},
    domain::{
        Priority, Progress, Project, ProjectDraft, ProjectId, ProjectMember, ProjectStatus, Task,
        TaskDraft, TaskKind, TaskStatus,
    },
    ports::{ProjectRepository, TaskRepository},
};
use crate::workflow::{
    adapters::memory::{InMemoryReminderRunRepository, RecordingMailer},
    services::{EmailTemplates, ReminderScheduler, ReminderWorkflow},
};

/// Clock with an externally settable instant, for driving suspensions.
#[derive(Debug, Clone)]
pub(crate) struct FixedClock {
    now: Arc<RwLock<DateTime<Utc>>>,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(RwLock::new(now)),
        }
    }

    pub fn advance_to(&self, now: DateTime<Utc>) {
        if let Ok(mut guard) = self.now.write() {
            *guard = now;
        }
    }

    fn read(&self) -> DateTime<Utc> {
        self.now.read().map(|guard| *guard).unwrap_or_default()
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.read().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.read()
    }
}

pub(crate) fn timestamp(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).single().expect("valid timestamp")
}

pub(crate) type TestWorkflow = ReminderWorkflow<
    InMemoryTaskRepository,
    InMemoryProjectRepository,
    InMemoryUserRepository,
    RecordingMailer,
    FixedClock,
>;
pub(crate) type TestScheduler = ReminderScheduler<
    InMemoryTaskRepository,
    InMemoryProjectRepository,
    InMemoryUserRepository,
    InMemoryReminderRunRepository,
    RecordingMailer,
    FixedClock,
>;

pub(crate) struct WorkflowFixture {
    pub users: Arc<InMemoryUserRepository>,
    pub projects: Arc<InMemoryProjectRepository>,
    pub tasks: Arc<InMemoryTaskRepository>,
    pub runs: Arc<InMemoryReminderRunRepository>,
    pub mailer: Arc<RecordingMailer>,
    pub clock: FixedClock,
    pub assignee: UserId,
    pub project: ProjectId,
}

impl WorkflowFixture {
    /// Seeds one project led by `user_lead` with member `user_dev` as the
    /// default assignee. The clock starts at the given instant.
    pub async fn seed(now: DateTime<Utc>) -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        let projects = Arc::new(InMemoryProjectRepository::new());
        let clock = FixedClock::at(now);

        let assignee = UserId::new("user_dev").expect("valid user id");
        let user = User::new(
            assignee.clone(),
            EmailAddress::new("dev@example.com").expect("valid email"),
            "Dev",
            None,
        );
        users.insert(&user).await.expect("user insert succeeds");

        let project = Project::create(
            ProjectDraft {
                workspace: crate::directory::domain::WorkspaceId::new("ws_main")
                    .expect("valid workspace id"),
                name: "Launch".to_owned(),
                description: None,
                status: ProjectStatus::Active,
                priority: Priority::High,
                progress: Progress::default(),
                team_lead: Some(UserId::new("user_lead").expect("valid user id")),
                start_date: None,
                end_date: None,
            },
            &clock,
        )
        .expect("valid project draft");
        let members = vec![ProjectMember::new(project.id(), assignee.clone())];
        projects
            .insert(&project, &members)
            .await
            .expect("project insert succeeds");

        Self {
            users,
            projects,
            tasks: Arc::new(InMemoryTaskRepository::new()),
            runs: Arc::new(InMemoryReminderRunRepository::new()),
            mailer: Arc::new(RecordingMailer::new()),
            clock,
            assignee,
            project: project.id(),
        }
    }

    pub async fn seed_task(&self, due_date: Option<DateTime<Utc>>) -> Task {
        let task = Task::create(
            TaskDraft {
                project: self.project,
                title: "Ship the beta".to_owned(),
                description: None,
                kind: TaskKind::Feature,
                status: TaskStatus::Todo,
                priority: Priority::High,
                assignee: Some(self.assignee.clone()),
                due_date,
            },
            &self.clock,
        )
        .expect("valid task draft");
        self.tasks.insert(&task).await.expect("task insert succeeds");
        task
    }

    pub fn workflow(&self) -> TestWorkflow {
        ReminderWorkflow::new(
            Arc::clone(&self.tasks),
            Arc::clone(&self.projects),
            Arc::clone(&self.users),
            Arc::clone(&self.mailer),
            EmailTemplates::new().expect("templates compile"),
            Arc::new(self.clock.clone()),
        )
    }

    pub fn scheduler(&self) -> TestScheduler {
        ReminderScheduler::new(
            self.workflow(),
            Arc::clone(&self.runs),
            Arc::new(self.clock.clone()),
            Duration::from_secs(1),
        )
    }
}
