//! Service orchestration tests for project creation and updates.

use super::fixtures::Scenario;
use crate::project::{
    domain::{Priority, Progress, ProjectStatus, ProjectUpdate},
    services::{CreateProjectRequest, ProjectLifecycleError},
};

fn update(name: &str) -> ProjectUpdate {
    ProjectUpdate {
        name: name.to_owned(),
        description: Some("revised scope".to_owned()),
        status: ProjectStatus::OnHold,
        priority: Priority::Low,
        progress: Progress::new(40).expect("valid progress"),
        start_date: None,
        end_date: None,
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn admin_creates_project_with_resolved_lead_and_members() {
    let scenario = Scenario::seed().await;
    let request = CreateProjectRequest::new(scenario.workspace.clone(), "Platform rework")
        .with_description("Rebuild the ingestion pipeline")
        .with_status(ProjectStatus::Planning)
        .with_team_lead("lead@example.com")
        .with_team_members(vec![
            "lead@example.com".to_owned(),
            "dev@example.com".to_owned(),
            "stranger@elsewhere.com".to_owned(),
        ]);

    let view = scenario
        .project_service()
        .create_project(&scenario.admin, request)
        .await
        .expect("project creation should succeed");

    assert_eq!(view.project.name(), "Platform rework");
    assert_eq!(view.project.team_lead(), Some(&scenario.lead));
    assert_eq!(
        view.team_lead.as_ref().map(|user| user.id().clone()),
        Some(scenario.lead.clone())
    );
    // The stranger email matches no workspace member and is skipped.
    let member_ids: Vec<_> = view
        .members
        .iter()
        .map(|member| member.member.user().clone())
        .collect();
    assert_eq!(member_ids.len(), 2);
    assert!(member_ids.contains(&scenario.lead));
    assert!(member_ids.contains(&scenario.dev));
    assert!(view.tasks.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn unresolvable_lead_email_leaves_project_without_lead() {
    let scenario = Scenario::seed().await;
    let request = CreateProjectRequest::new(scenario.workspace.clone(), "Sidecar")
        .with_team_lead("nobody@example.com");

    let view = scenario
        .project_service()
        .create_project(&scenario.admin, request)
        .await
        .expect("project creation should succeed");

    assert_eq!(view.project.team_lead(), None);
    assert!(view.team_lead.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn non_admin_cannot_create_project() {
    let scenario = Scenario::seed().await;
    let request = CreateProjectRequest::new(scenario.workspace.clone(), "Skunkworks");

    // Even the team lead of an existing project is not enough: creation
    // requires the workspace ADMIN role.
    let result = scenario
        .project_service()
        .create_project(&scenario.lead, request)
        .await;

    assert!(matches!(
        result,
        Err(ProjectLifecycleError::PermissionDenied(_))
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_workspace_is_not_found() {
    let scenario = Scenario::seed().await;
    let missing = crate::directory::domain::WorkspaceId::new("ws_missing")
        .expect("valid workspace id");
    let request = CreateProjectRequest::new(missing, "Nowhere");

    let result = scenario
        .project_service()
        .create_project(&scenario.admin, request)
        .await;

    assert!(matches!(
        result,
        Err(ProjectLifecycleError::WorkspaceNotFound(_))
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn admin_and_lead_may_update_project() {
    let scenario = Scenario::seed().await;
    let service = scenario.project_service();

    let updated = service
        .update_project(&scenario.admin, scenario.project, update("Renamed by admin"))
        .await
        .expect("admin update should succeed");
    assert_eq!(updated.name(), "Renamed by admin");
    assert_eq!(updated.status(), ProjectStatus::OnHold);

    let updated = service
        .update_project(&scenario.lead, scenario.project, update("Renamed by lead"))
        .await
        .expect("lead update should succeed");
    assert_eq!(updated.name(), "Renamed by lead");
}

#[tokio::test(flavor = "multi_thread")]
async fn regular_member_cannot_update_project() {
    let scenario = Scenario::seed().await;

    let result = scenario
        .project_service()
        .update_project(&scenario.dev, scenario.project, update("Hijacked"))
        .await;

    assert!(matches!(
        result,
        Err(ProjectLifecycleError::PermissionDenied(_))
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn update_does_not_touch_owning_workspace() {
    let scenario = Scenario::seed().await;

    let updated = scenario
        .project_service()
        .update_project(&scenario.admin, scenario.project, update("Still here"))
        .await
        .expect("update should succeed");

    assert_eq!(updated.workspace(), &scenario.workspace);
    assert_eq!(updated.id(), scenario.project);
}
