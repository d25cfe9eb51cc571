//! End-to-end exercise of the service stack over in-memory adapters.
//!
//! Follows the product flow: identity events mirror users and a
//! workspace, the founder invites members, creates a project led by one
//! of them, the lead assigns a task, the scheduler delivers the
//! assignment email, and the team discusses the task in comments.

mod test_helpers;

use std::sync::Arc;
use std::time::Duration;

use atelier::directory::{
    adapters::memory::{InMemoryUserRepository, InMemoryWorkspaceRepository},
    domain::WorkspaceId,
    services::{AddMemberRequest, MembershipService},
};
use atelier::project::{
    adapters::memory::{
        InMemoryCommentRepository, InMemoryProjectRepository, InMemoryTaskRepository,
    },
    domain::{Priority, TaskDraft, TaskKind, TaskStatus},
    services::{CommentService, CreateProjectRequest, OverviewService, ProjectLifecycleService, TaskService},
};
use atelier::workflow::{
    adapters::{
        ReminderEnqueueSink,
        memory::{InMemoryReminderRunRepository, RecordingMailer},
    },
    domain::{IdentityEvent, OrganizationCreated, UserPayload},
    services::{
        EmailTemplates, IdentityService, ReminderScheduler, ReminderWorkflow,
    },
};
use test_helpers::{FixedClock, timestamp};

fn user_payload(id: &str, email: &str, name: &str) -> UserPayload {
    UserPayload {
        id: id.to_owned(),
        email: email.to_owned(),
        name: name.to_owned(),
        image: None,
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn full_product_flow_over_memory_adapters() {
    let clock = Arc::new(FixedClock::at(timestamp(2026, 8, 6, 9)));
    let users = Arc::new(InMemoryUserRepository::new());
    let workspaces = Arc::new(InMemoryWorkspaceRepository::new());
    let projects = Arc::new(InMemoryProjectRepository::new());
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let comments = Arc::new(InMemoryCommentRepository::new());
    let runs = Arc::new(InMemoryReminderRunRepository::new());
    let mailer = Arc::new(RecordingMailer::new());

    let identity = IdentityService::new(
        Arc::clone(&users),
        Arc::clone(&workspaces),
        Arc::clone(&clock),
    );
    let membership = MembershipService::new(
        Arc::clone(&workspaces),
        Arc::clone(&users),
        Arc::clone(&clock),
    );
    let project_service = ProjectLifecycleService::new(
        Arc::clone(&workspaces),
        Arc::clone(&users),
        Arc::clone(&projects),
        Arc::clone(&clock),
    );
    let events = Arc::new(ReminderEnqueueSink::new(
        Arc::clone(&runs),
        Arc::clone(&clock),
    ));
    let task_service = TaskService::new(
        Arc::clone(&projects),
        Arc::clone(&tasks),
        events,
        Arc::clone(&clock),
    );
    let comment_service = CommentService::new(
        Arc::clone(&tasks),
        Arc::clone(&projects),
        Arc::clone(&comments),
        Arc::clone(&users),
        Arc::clone(&clock),
    );
    let overview = OverviewService::new(
        Arc::clone(&workspaces),
        Arc::clone(&users),
        Arc::clone(&projects),
        Arc::clone(&tasks),
        Arc::clone(&comments),
    );
    let workflow = ReminderWorkflow::new(
        Arc::clone(&tasks),
        Arc::clone(&projects),
        Arc::clone(&users),
        Arc::clone(&mailer),
        EmailTemplates::new().expect("templates compile"),
        Arc::clone(&clock),
    );
    let scheduler = ReminderScheduler::new(
        workflow,
        Arc::clone(&runs),
        Arc::clone(&clock),
        Duration::from_secs(1),
    );

    // Identity provider mirrors three users and the founder's workspace.
    for (id, email, name) in [
        ("user_founder", "founder@example.com", "Founder"),
        ("user_lead", "lead@example.com", "Lead"),
        ("user_dev", "dev@example.com", "Dev"),
    ] {
        identity
            .apply(IdentityEvent::UserCreated(user_payload(id, email, name)))
            .await
            .expect("user event applies");
    }
    identity
        .apply(IdentityEvent::OrganizationCreated(OrganizationCreated {
            id: "ws_acme".to_owned(),
            name: "Acme".to_owned(),
            slug: "acme".to_owned(),
            created_by: "user_founder".to_owned(),
            image_url: None,
        }))
        .await
        .expect("organization event applies");

    let founder = atelier::directory::domain::UserId::new("user_founder").expect("valid id");
    let workspace = WorkspaceId::new("ws_acme").expect("valid id");

    // The founder (seeded ADMIN) invites the lead and the developer.
    for email in ["lead@example.com", "dev@example.com"] {
        membership
            .add_member(
                &founder,
                AddMemberRequest::new(workspace.clone(), email, "MEMBER"),
            )
            .await
            .expect("member addition succeeds");
    }

    // The founder creates a project led by the lead.
    let project = project_service
        .create_project(
            &founder,
            CreateProjectRequest::new(workspace.clone(), "Beta launch")
                .with_team_lead("lead@example.com")
                .with_team_members(vec![
                    "lead@example.com".to_owned(),
                    "dev@example.com".to_owned(),
                ]),
        )
        .await
        .expect("project creation succeeds");

    // The lead assigns a task due today; the event sink enqueues a run.
    let lead = atelier::directory::domain::UserId::new("user_lead").expect("valid id");
    let dev = atelier::directory::domain::UserId::new("user_dev").expect("valid id");
    let task = task_service
        .create_task(
            &lead,
            TaskDraft {
                project: project.project.id(),
                title: "Ship the beta".to_owned(),
                description: Some("Cut the release branch".to_owned()),
                kind: TaskKind::Feature,
                status: TaskStatus::Todo,
                priority: Priority::High,
                assignee: Some(dev.clone()),
                due_date: Some(timestamp(2026, 8, 6, 17)),
            },
            Some("https://app.example.com".to_owned()),
        )
        .await
        .expect("task creation succeeds");

    // One poll delivers the assignment email; due-today means no wait.
    let advanced = scheduler.poll_once().await.expect("poll succeeds");
    assert_eq!(advanced, 1);
    let sent = mailer.sent().expect("mail record readable");
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent.first().expect("one mail").to.as_str(),
        "dev@example.com"
    );

    // The developer comments; the overview shows the whole tree.
    comment_service
        .add_comment(&dev, task.id(), "On it")
        .await
        .expect("comment succeeds");

    let tree = overview
        .list_user_workspaces(&dev)
        .await
        .expect("overview succeeds");
    assert_eq!(tree.len(), 1);
    let workspace_view = tree.first().expect("one workspace");
    assert_eq!(workspace_view.members.len(), 3);
    let project_view = workspace_view.projects.first().expect("one project");
    assert_eq!(project_view.members.len(), 2);
    let task_view = project_view.tasks.first().expect("one task");
    assert_eq!(task_view.task.id(), task.id());
    assert_eq!(task_view.comments.len(), 1);
    assert_eq!(
        task_view.assignee.as_ref().map(|user| user.name().to_owned()),
        Some("Dev".to_owned())
    );
}
