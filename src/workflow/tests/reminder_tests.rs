//! Tests for the durable task-assignment reminder workflow.

use super::fixtures::{WorkflowFixture, timestamp};
use crate::project::ports::{TaskAssignedEvent, TaskRepository};
use crate::workflow::{
    domain::{ReminderRun, RunStep},
    ports::ReminderRunRepository,
};

fn run_for(fixture_task: crate::project::domain::TaskId, fixture: &WorkflowFixture) -> ReminderRun {
    ReminderRun::new(
        TaskAssignedEvent {
            task: fixture_task,
            origin: Some("https://app.example.com".to_owned()),
        },
        &fixture.clock,
    )
}

#[tokio::test(flavor = "multi_thread")]
async fn task_due_today_sends_assignment_only_and_completes() {
    let now = timestamp(2026, 8, 6, 9);
    let fixture = WorkflowFixture::seed(now).await;
    let task = fixture.seed_task(Some(timestamp(2026, 8, 6, 17))).await;
    let mut run = run_for(task.id(), &fixture);

    fixture
        .workflow()
        .execute(&mut run)
        .await
        .expect("step should succeed");

    assert_eq!(run.step(), RunStep::Completed);
    assert_eq!(run.wake_at(), None);
    let sent = fixture.mailer.sent().expect("mail record readable");
    assert_eq!(sent.len(), 1);
    let mail = sent.first().expect("one mail");
    assert_eq!(mail.subject, "New task assignment in Launch");
    assert!(mail.html_body.contains("Ship the beta"));
}

#[tokio::test(flavor = "multi_thread")]
async fn task_due_later_suspends_until_due_date() {
    let now = timestamp(2026, 8, 6, 9);
    let due = timestamp(2026, 8, 9, 17);
    let fixture = WorkflowFixture::seed(now).await;
    let task = fixture.seed_task(Some(due)).await;
    let mut run = run_for(task.id(), &fixture);

    fixture
        .workflow()
        .execute(&mut run)
        .await
        .expect("step should succeed");

    assert_eq!(run.step(), RunStep::AwaitDueDate);
    assert_eq!(run.wake_at(), Some(due));
    assert!(!run.is_due(now));
    assert!(run.is_due(due));
    // Only the assignment email so far.
    assert_eq!(fixture.mailer.sent().expect("mail record readable").len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn woken_run_reminds_when_task_is_still_open() {
    let now = timestamp(2026, 8, 6, 9);
    let due = timestamp(2026, 8, 9, 17);
    let fixture = WorkflowFixture::seed(now).await;
    let task = fixture.seed_task(Some(due)).await;
    let run = run_for(task.id(), &fixture);
    fixture.runs.enqueue(&run).await.expect("enqueue succeeds");

    let scheduler = fixture.scheduler();
    assert_eq!(scheduler.poll_once().await.expect("poll succeeds"), 1);

    // Before the due date the suspended run is not reclaimed.
    assert_eq!(scheduler.poll_once().await.expect("poll succeeds"), 0);

    fixture.clock.advance_to(timestamp(2026, 8, 9, 18));
    assert_eq!(scheduler.poll_once().await.expect("poll succeeds"), 1);

    let sent = fixture.mailer.sent().expect("mail record readable");
    assert_eq!(sent.len(), 2);
    let reminder = sent.get(1).expect("reminder mail");
    assert_eq!(reminder.subject, "Reminder: \"Ship the beta\" in Launch is due");
    let stored = fixture
        .runs
        .find_by_id(run.id())
        .await
        .expect("lookup succeeds")
        .expect("run persisted");
    assert_eq!(stored.step(), RunStep::Completed);
}

#[tokio::test(flavor = "multi_thread")]
async fn woken_run_stays_silent_when_task_is_done() {
    let now = timestamp(2026, 8, 6, 9);
    let due = timestamp(2026, 8, 9, 17);
    let fixture = WorkflowFixture::seed(now).await;
    let task = fixture.seed_task(Some(due)).await;
    let run = run_for(task.id(), &fixture);
    fixture.runs.enqueue(&run).await.expect("enqueue succeeds");

    let scheduler = fixture.scheduler();
    scheduler.poll_once().await.expect("poll succeeds");

    // The assignee finishes the task before the due date.
    let mut done = fixture
        .tasks
        .find_by_id(task.id())
        .await
        .expect("lookup succeeds")
        .expect("task exists");
    done.apply_patch(
        crate::project::domain::TaskPatch {
            status: Some(crate::project::domain::TaskStatus::Done),
            ..crate::project::domain::TaskPatch::default()
        },
        &fixture.clock,
    )
    .expect("patch applies");
    fixture.tasks.update(&done).await.expect("update succeeds");

    fixture.clock.advance_to(timestamp(2026, 8, 9, 18));
    scheduler.poll_once().await.expect("poll succeeds");

    assert_eq!(fixture.mailer.sent().expect("mail record readable").len(), 1);
    let stored = fixture
        .runs
        .find_by_id(run.id())
        .await
        .expect("lookup succeeds")
        .expect("run persisted");
    assert_eq!(stored.step(), RunStep::Completed);
}

#[tokio::test(flavor = "multi_thread")]
async fn deleted_task_completes_run_without_mail() {
    let now = timestamp(2026, 8, 6, 9);
    let due = timestamp(2026, 8, 9, 17);
    let fixture = WorkflowFixture::seed(now).await;
    let task = fixture.seed_task(Some(due)).await;
    let run = run_for(task.id(), &fixture);
    fixture.runs.enqueue(&run).await.expect("enqueue succeeds");

    let scheduler = fixture.scheduler();
    scheduler.poll_once().await.expect("poll succeeds");

    // Cancellation is unsupported: the run survives task deletion and
    // degrades gracefully at the recheck step.
    fixture
        .tasks
        .delete_many(&[task.id()])
        .await
        .expect("delete succeeds");
    fixture.clock.advance_to(timestamp(2026, 8, 9, 18));
    scheduler.poll_once().await.expect("poll succeeds");

    assert_eq!(fixture.mailer.sent().expect("mail record readable").len(), 1);
    let stored = fixture
        .runs
        .find_by_id(run.id())
        .await
        .expect("lookup succeeds")
        .expect("run persisted");
    assert_eq!(stored.step(), RunStep::Completed);
}

#[tokio::test(flavor = "multi_thread")]
async fn unassigned_task_completes_without_mail() {
    let now = timestamp(2026, 8, 6, 9);
    let fixture = WorkflowFixture::seed(now).await;
    let unassigned = crate::project::domain::Task::create(
        crate::project::domain::TaskDraft {
            project: fixture.project,
            title: "Nobody's task".to_owned(),
            description: None,
            kind: crate::project::domain::TaskKind::Chore,
            status: crate::project::domain::TaskStatus::Todo,
            priority: crate::project::domain::Priority::Low,
            assignee: None,
            due_date: None,
        },
        &fixture.clock,
    )
    .expect("valid draft");
    fixture
        .tasks
        .insert(&unassigned)
        .await
        .expect("insert succeeds");

    let mut run = run_for(unassigned.id(), &fixture);
    fixture
        .workflow()
        .execute(&mut run)
        .await
        .expect("step should succeed");

    assert_eq!(run.step(), RunStep::Completed);
    assert!(fixture.mailer.sent().expect("mail record readable").is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn task_without_due_date_gets_assignment_only() {
    let now = timestamp(2026, 8, 6, 9);
    let fixture = WorkflowFixture::seed(now).await;
    let task = fixture.seed_task(None).await;
    let mut run = run_for(task.id(), &fixture);

    fixture
        .workflow()
        .execute(&mut run)
        .await
        .expect("step should succeed");

    assert_eq!(run.step(), RunStep::Completed);
    assert_eq!(fixture.mailer.sent().expect("mail record readable").len(), 1);
}
