//! Tests for the workspace overview aggregation.

use super::fixtures::{Scenario, user_id};
use crate::project::domain::{Priority, TaskDraft, TaskKind, TaskStatus};

#[tokio::test(flavor = "multi_thread")]
async fn member_sees_fully_populated_workspace_tree() {
    let scenario = Scenario::seed().await;
    let task = scenario
        .task_service()
        .create_task(
            &scenario.lead,
            TaskDraft {
                project: scenario.project,
                title: "Ship the beta".to_owned(),
                description: None,
                kind: TaskKind::Feature,
                status: TaskStatus::InProgress,
                priority: Priority::High,
                assignee: Some(scenario.dev.clone()),
                due_date: None,
            },
            None,
        )
        .await
        .expect("task creation should succeed");
    scenario
        .comment_service()
        .add_comment(&scenario.dev, task.id(), "Started on this")
        .await
        .expect("comment should be added");

    let overview = scenario
        .overview_service()
        .list_user_workspaces(&scenario.dev)
        .await
        .expect("overview should succeed");

    assert_eq!(overview.len(), 1);
    let workspace = overview.first().expect("one workspace");
    assert_eq!(workspace.workspace.id(), &scenario.workspace);
    assert_eq!(
        workspace.owner.as_ref().map(|user| user.id().clone()),
        Some(scenario.admin.clone())
    );
    assert_eq!(workspace.members.len(), 4);
    assert!(workspace.members.iter().all(|member| member.user.is_some()));

    let project = workspace.projects.first().expect("one project");
    assert_eq!(project.project.id(), scenario.project);
    assert_eq!(
        project.team_lead.as_ref().map(|user| user.id().clone()),
        Some(scenario.lead.clone())
    );

    let task_view = project.tasks.first().expect("one task");
    assert_eq!(task_view.task.id(), task.id());
    assert_eq!(
        task_view.assignee.as_ref().map(|user| user.id().clone()),
        Some(scenario.dev.clone())
    );
    assert_eq!(task_view.comments.len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn user_without_memberships_gets_empty_list() {
    let scenario = Scenario::seed().await;

    let overview = scenario
        .overview_service()
        .list_user_workspaces(&user_id("user_stranger"))
        .await
        .expect("overview should succeed");

    assert!(overview.is_empty());
}
