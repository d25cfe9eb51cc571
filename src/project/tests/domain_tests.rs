//! Domain validation tests for project value types and aggregates.

use crate::directory::domain::WorkspaceId;
use crate::project::domain::{
    Priority, Progress, Project, ProjectDomainError, ProjectDraft, ProjectStatus, Task, TaskDraft,
    TaskKind, TaskPatch, TaskStatus,
};
use mockable::DefaultClock;
use rstest::rstest;

fn draft(name: &str) -> ProjectDraft {
    ProjectDraft {
        workspace: WorkspaceId::new("ws_1").expect("valid workspace id"),
        name: name.to_owned(),
        description: None,
        status: ProjectStatus::Planning,
        priority: Priority::Medium,
        progress: Progress::default(),
        team_lead: None,
        start_date: None,
        end_date: None,
    }
}

fn task_draft(title: &str) -> TaskDraft {
    TaskDraft {
        project: crate::project::domain::ProjectId::new(),
        title: title.to_owned(),
        description: None,
        kind: TaskKind::Feature,
        status: TaskStatus::Todo,
        priority: Priority::Medium,
        assignee: None,
        due_date: None,
    }
}

#[rstest]
#[case("PLANNING", ProjectStatus::Planning)]
#[case("active", ProjectStatus::Active)]
#[case(" on_hold ", ProjectStatus::OnHold)]
#[case("Completed", ProjectStatus::Completed)]
fn project_status_parses_case_insensitively(
    #[case] input: &str,
    #[case] expected: ProjectStatus,
) {
    assert_eq!(ProjectStatus::try_from(input), Ok(expected));
}

#[rstest]
#[case("todo", TaskStatus::Todo)]
#[case("IN_PROGRESS", TaskStatus::InProgress)]
#[case("done", TaskStatus::Done)]
fn task_status_parses_case_insensitively(#[case] input: &str, #[case] expected: TaskStatus) {
    assert_eq!(TaskStatus::try_from(input), Ok(expected));
}

#[test]
fn unknown_enum_strings_are_rejected() {
    assert!(ProjectStatus::try_from("ARCHIVED").is_err());
    assert!(Priority::try_from("URGENT").is_err());
    assert!(TaskStatus::try_from("BLOCKED").is_err());
    assert!(TaskKind::try_from("EPIC").is_err());
}

#[test]
fn progress_rejects_values_above_one_hundred() {
    assert!(Progress::new(100).is_ok());
    assert!(matches!(
        Progress::new(101),
        Err(ProjectDomainError::ProgressOutOfRange(101))
    ));
    assert!(matches!(
        Progress::from_persisted(-3),
        Err(ProjectDomainError::ProgressOutOfRange(-3))
    ));
}

#[test]
fn blank_project_name_is_rejected() {
    assert!(matches!(
        Project::create(draft("   "), &DefaultClock),
        Err(ProjectDomainError::EmptyProjectName)
    ));
}

#[test]
fn blank_task_title_is_rejected_on_create_and_patch() {
    assert!(matches!(
        Task::create(task_draft(""), &DefaultClock),
        Err(ProjectDomainError::EmptyTaskTitle)
    ));

    let mut task = Task::create(task_draft("Ship it"), &DefaultClock).expect("valid draft");
    let patch = TaskPatch {
        title: Some("  ".to_owned()),
        ..TaskPatch::default()
    };
    assert!(matches!(
        task.apply_patch(patch, &DefaultClock),
        Err(ProjectDomainError::EmptyTaskTitle)
    ));
    assert_eq!(task.title(), "Ship it");
}

#[test]
fn patch_leaves_absent_fields_unchanged() {
    let mut task = Task::create(task_draft("Ship it"), &DefaultClock).expect("valid draft");
    let patch = TaskPatch {
        status: Some(TaskStatus::Done),
        ..TaskPatch::default()
    };
    task.apply_patch(patch, &DefaultClock).expect("patch applies");

    assert_eq!(task.status(), TaskStatus::Done);
    assert_eq!(task.title(), "Ship it");
    assert_eq!(task.kind(), TaskKind::Feature);
    assert!(task.is_done());
}
