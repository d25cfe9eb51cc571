//! Tests for identity lifecycle event application.

use std::sync::Arc;

use crate::directory::{
    adapters::memory::{InMemoryUserRepository, InMemoryWorkspaceRepository},
    domain::{UserId, WorkspaceId, WorkspaceRole},
    ports::{DirectoryRepositoryError, UserRepository, WorkspaceRepository},
};
use crate::workflow::{
    domain::{IdentityEvent, OrganizationCreated, OrganizationUpdated, UserPayload},
    services::{IdentityService, IdentitySyncError},
};
use mockable::DefaultClock;

type TestService =
    IdentityService<InMemoryUserRepository, InMemoryWorkspaceRepository, DefaultClock>;

struct Fixture {
    users: Arc<InMemoryUserRepository>,
    workspaces: Arc<InMemoryWorkspaceRepository>,
    service: TestService,
}

fn fixture() -> Fixture {
    let users = Arc::new(InMemoryUserRepository::new());
    let workspaces = Arc::new(InMemoryWorkspaceRepository::new());
    let service = IdentityService::new(
        Arc::clone(&users),
        Arc::clone(&workspaces),
        Arc::new(DefaultClock),
    );
    Fixture {
        users,
        workspaces,
        service,
    }
}

fn user_payload(id: &str, email: &str) -> UserPayload {
    UserPayload {
        id: id.to_owned(),
        email: email.to_owned(),
        name: "Ada".to_owned(),
        image: None,
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn user_created_is_mirrored_into_the_directory() {
    let fixture = fixture();

    fixture
        .service
        .apply(IdentityEvent::UserCreated(user_payload(
            "user_ada",
            "ada@example.com",
        )))
        .await
        .expect("event should apply");

    let id = UserId::new("user_ada").expect("valid user id");
    let user = fixture
        .users
        .find_by_id(&id)
        .await
        .expect("lookup succeeds")
        .expect("user exists");
    assert_eq!(user.email().as_str(), "ada@example.com");
}

#[tokio::test(flavor = "multi_thread")]
async fn redelivered_creation_is_a_terminal_conflict() {
    let fixture = fixture();
    let event = IdentityEvent::UserCreated(user_payload("user_ada", "ada@example.com"));
    fixture
        .service
        .apply(event.clone())
        .await
        .expect("first delivery applies");

    let result = fixture.service.apply(event).await;

    assert!(matches!(
        result,
        Err(IdentitySyncError::Repository(
            DirectoryRepositoryError::DuplicateUser(_)
        ))
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn user_update_and_delete_follow_the_provider() {
    let fixture = fixture();
    fixture
        .service
        .apply(IdentityEvent::UserCreated(user_payload(
            "user_ada",
            "ada@example.com",
        )))
        .await
        .expect("creation applies");

    fixture
        .service
        .apply(IdentityEvent::UserUpdated(user_payload(
            "user_ada",
            "ada@new.example.com",
        )))
        .await
        .expect("update applies");
    let id = UserId::new("user_ada").expect("valid user id");
    let user = fixture
        .users
        .find_by_id(&id)
        .await
        .expect("lookup succeeds")
        .expect("user exists");
    assert_eq!(user.email().as_str(), "ada@new.example.com");

    fixture
        .service
        .apply(IdentityEvent::UserDeleted {
            id: "user_ada".to_owned(),
        })
        .await
        .expect("deletion applies");
    assert!(
        fixture
            .users
            .find_by_id(&id)
            .await
            .expect("lookup succeeds")
            .is_none()
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn organization_created_seeds_the_creator_as_admin() {
    let fixture = fixture();

    fixture
        .service
        .apply(IdentityEvent::OrganizationCreated(OrganizationCreated {
            id: "ws_acme".to_owned(),
            name: "Acme".to_owned(),
            slug: "acme".to_owned(),
            created_by: "user_founder".to_owned(),
            image_url: None,
        }))
        .await
        .expect("event should apply");

    let id = WorkspaceId::new("ws_acme").expect("valid workspace id");
    let workspace = fixture
        .workspaces
        .find_by_id(&id)
        .await
        .expect("lookup succeeds")
        .expect("workspace exists");
    assert_eq!(workspace.name(), "Acme");

    let members = fixture
        .workspaces
        .members_of(&id)
        .await
        .expect("members load");
    assert_eq!(members.len(), 1);
    let creator = members.first().expect("one member");
    assert_eq!(creator.user().as_str(), "user_founder");
    assert_eq!(creator.role(), WorkspaceRole::Admin);
}

#[tokio::test(flavor = "multi_thread")]
async fn organization_update_and_delete_follow_the_provider() {
    let fixture = fixture();
    fixture
        .service
        .apply(IdentityEvent::OrganizationCreated(OrganizationCreated {
            id: "ws_acme".to_owned(),
            name: "Acme".to_owned(),
            slug: "acme".to_owned(),
            created_by: "user_founder".to_owned(),
            image_url: None,
        }))
        .await
        .expect("creation applies");

    fixture
        .service
        .apply(IdentityEvent::OrganizationUpdated(OrganizationUpdated {
            id: "ws_acme".to_owned(),
            name: "Acme Corp".to_owned(),
            slug: "acme-corp".to_owned(),
            image_url: None,
        }))
        .await
        .expect("update applies");
    let id = WorkspaceId::new("ws_acme").expect("valid workspace id");
    let workspace = fixture
        .workspaces
        .find_by_id(&id)
        .await
        .expect("lookup succeeds")
        .expect("workspace exists");
    assert_eq!(workspace.name(), "Acme Corp");
    assert_eq!(workspace.slug(), "acme-corp");

    fixture
        .service
        .apply(IdentityEvent::OrganizationDeleted {
            id: "ws_acme".to_owned(),
        })
        .await
        .expect("deletion applies");
    assert!(
        fixture
            .workspaces
            .find_by_id(&id)
            .await
            .expect("lookup succeeds")
            .is_none()
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_payload_is_a_validation_error() {
    let fixture = fixture();

    let result = fixture
        .service
        .apply(IdentityEvent::UserCreated(user_payload(
            "user_bad",
            "not-an-email",
        )))
        .await;

    assert!(matches!(result, Err(IdentitySyncError::Validation(_))));
}
