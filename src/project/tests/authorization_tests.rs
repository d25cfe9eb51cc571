//! Tests for the pure authorization predicates.

use super::fixtures::user_id;
use crate::directory::domain::{WorkspaceId, WorkspaceMember, WorkspaceRole};
use crate::project::domain::{
    Priority, Progress, Project, ProjectDraft, ProjectStatus, can_manage_project, can_manage_task,
    is_project_team_lead,
};
use mockable::DefaultClock;

fn project_led_by(lead: &str) -> Project {
    Project::create(
        ProjectDraft {
            workspace: WorkspaceId::new("ws_1").expect("valid workspace id"),
            name: "Launch".to_owned(),
            description: None,
            status: ProjectStatus::Active,
            priority: Priority::Medium,
            progress: Progress::default(),
            team_lead: Some(user_id(lead)),
            start_date: None,
            end_date: None,
        },
        &DefaultClock,
    )
    .expect("valid project draft")
}

fn member(user: &str, role: WorkspaceRole) -> WorkspaceMember {
    WorkspaceMember::new(
        WorkspaceId::new("ws_1").expect("valid workspace id"),
        user_id(user),
        role,
        None,
        &DefaultClock,
    )
}

#[test]
fn team_lead_predicate_matches_only_the_lead() {
    let project = project_led_by("user_lead");
    assert!(is_project_team_lead(&project, &user_id("user_lead")));
    assert!(!is_project_team_lead(&project, &user_id("user_admin")));
}

#[test]
fn admin_or_lead_may_manage_project() {
    let project = project_led_by("user_lead");
    let members = vec![
        member("user_admin", WorkspaceRole::Admin),
        member("user_lead", WorkspaceRole::Member),
        member("user_dev", WorkspaceRole::Member),
    ];

    assert!(can_manage_project(&members, &project, &user_id("user_admin")));
    assert!(can_manage_project(&members, &project, &user_id("user_lead")));
    assert!(!can_manage_project(&members, &project, &user_id("user_dev")));
}

#[test]
fn only_the_lead_may_manage_tasks() {
    // Task management is deliberately stricter than project management:
    // a workspace ADMIN who does not lead the project is refused.
    let project = project_led_by("user_lead");

    assert!(can_manage_task(&project, &user_id("user_lead")));
    assert!(!can_manage_task(&project, &user_id("user_admin")));
}

#[test]
fn leadless_project_has_no_task_manager() {
    let project = Project::create(
        ProjectDraft {
            workspace: WorkspaceId::new("ws_1").expect("valid workspace id"),
            name: "Orphan".to_owned(),
            description: None,
            status: ProjectStatus::Planning,
            priority: Priority::Low,
            progress: Progress::default(),
            team_lead: None,
            start_date: None,
            end_date: None,
        },
        &DefaultClock,
    )
    .expect("valid project draft");

    assert!(!can_manage_task(&project, &user_id("user_lead")));
    assert!(!can_manage_task(&project, &user_id("user_admin")));
}
