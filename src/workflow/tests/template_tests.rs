//! Tests for notification email rendering.

use crate::workflow::services::{EmailTemplates, TaskNotification};

fn notification<'a>(origin: Option<&'a str>) -> TaskNotification<'a> {
    TaskNotification {
        assignee_name: "Dev",
        task_title: "Ship the beta",
        project_name: "Launch",
        due_date: Some("2026-08-09".to_owned()),
        origin,
    }
}

#[test]
fn assignment_body_carries_task_details_and_link() {
    let templates = EmailTemplates::new().expect("templates compile");

    let body = templates
        .render_assignment(&notification(Some("https://app.example.com")))
        .expect("render succeeds");

    assert!(body.contains("Hi <strong>Dev</strong>"));
    assert!(body.contains("Ship the beta"));
    assert!(body.contains("2026-08-09"));
    assert!(body.contains("https://app.example.com"));
}

#[test]
fn missing_origin_omits_the_view_task_button() {
    let templates = EmailTemplates::new().expect("templates compile");

    let body = templates
        .render_assignment(&notification(None))
        .expect("render succeeds");

    assert!(!body.contains("View Task"));
}

#[test]
fn reminder_body_and_subjects_name_the_project() {
    let templates = EmailTemplates::new().expect("templates compile");

    let body = templates
        .render_reminder(&notification(None))
        .expect("render succeeds");

    assert!(body.contains("Friendly Reminder"));
    assert!(body.contains("Launch"));
    assert_eq!(
        EmailTemplates::assignment_subject("Launch"),
        "New task assignment in Launch"
    );
    assert_eq!(
        EmailTemplates::reminder_subject("Ship the beta", "Launch"),
        "Reminder: \"Ship the beta\" in Launch is due"
    );
}
