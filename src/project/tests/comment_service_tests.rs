//! Service orchestration tests for task comments.

use super::fixtures::Scenario;
use crate::project::{
    domain::{Priority, TaskDraft, TaskId, TaskKind, TaskStatus},
    services::CommentServiceError,
};

async fn seeded_task(scenario: &Scenario) -> TaskId {
    let task = scenario
        .task_service()
        .create_task(
            &scenario.lead,
            TaskDraft {
                project: scenario.project,
                title: "Discuss me".to_owned(),
                description: None,
                kind: TaskKind::Feature,
                status: TaskStatus::Todo,
                priority: Priority::Medium,
                assignee: None,
                due_date: None,
            },
            None,
        )
        .await
        .expect("task creation should succeed");
    task.id()
}

#[tokio::test(flavor = "multi_thread")]
async fn project_member_comments_and_author_is_resolved() {
    let scenario = Scenario::seed().await;
    let task = seeded_task(&scenario).await;

    let view = scenario
        .comment_service()
        .add_comment(&scenario.dev, task, "Looks good to me")
        .await
        .expect("comment should be added");

    assert_eq!(view.comment.content(), "Looks good to me");
    assert_eq!(view.comment.author(), &scenario.dev);
    assert_eq!(
        view.author.map(|user| user.id().clone()),
        Some(scenario.dev.clone())
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn non_member_cannot_comment() {
    let scenario = Scenario::seed().await;
    let task = seeded_task(&scenario).await;

    let result = scenario
        .comment_service()
        .add_comment(&scenario.watcher, task, "Drive-by remark")
        .await;

    assert!(matches!(
        result,
        Err(CommentServiceError::NotProjectMember(_))
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn blank_comment_is_rejected() {
    let scenario = Scenario::seed().await;
    let task = seeded_task(&scenario).await;

    let result = scenario
        .comment_service()
        .add_comment(&scenario.dev, task, "   ")
        .await;

    assert!(matches!(result, Err(CommentServiceError::Validation(_))));
}

#[tokio::test(flavor = "multi_thread")]
async fn listing_returns_comments_oldest_first_with_authors() {
    let scenario = Scenario::seed().await;
    let task = seeded_task(&scenario).await;
    let service = scenario.comment_service();
    service
        .add_comment(&scenario.lead, task, "First pass done")
        .await
        .expect("comment should be added");
    service
        .add_comment(&scenario.dev, task, "Reviewing now")
        .await
        .expect("comment should be added");

    let comments = service
        .list_comments(&scenario.dev, task)
        .await
        .expect("listing should succeed");

    assert_eq!(comments.len(), 2);
    let contents: Vec<_> = comments
        .iter()
        .map(|view| view.comment.content().to_owned())
        .collect();
    assert_eq!(contents, vec!["First pass done", "Reviewing now"]);
    assert!(comments.iter().all(|view| view.author.is_some()));
}

#[tokio::test(flavor = "multi_thread")]
async fn listing_requires_project_membership() {
    let scenario = Scenario::seed().await;
    let task = seeded_task(&scenario).await;

    let result = scenario
        .comment_service()
        .list_comments(&scenario.watcher, task)
        .await;

    assert!(matches!(
        result,
        Err(CommentServiceError::NotProjectMember(_))
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn commenting_on_missing_task_is_not_found() {
    let scenario = Scenario::seed().await;

    let result = scenario
        .comment_service()
        .add_comment(&scenario.dev, TaskId::new(), "Into the void")
        .await;

    assert!(matches!(result, Err(CommentServiceError::TaskNotFound(_))));
}
