//! Domain validation tests for directory scalar types.

use crate::directory::domain::{
    DirectoryDomainError, EmailAddress, UserId, WorkspaceId, WorkspaceRole,
};
use rstest::rstest;

#[rstest]
#[case("ADMIN", WorkspaceRole::Admin)]
#[case("admin", WorkspaceRole::Admin)]
#[case(" Member ", WorkspaceRole::Member)]
#[case("MEMBER", WorkspaceRole::Member)]
fn role_parses_case_insensitively(#[case] input: &str, #[case] expected: WorkspaceRole) {
    assert_eq!(WorkspaceRole::try_from(input), Ok(expected));
}

#[rstest]
#[case("OWNER")]
#[case("")]
#[case("adm in")]
fn role_rejects_unknown_values(#[case] input: &str) {
    assert!(WorkspaceRole::try_from(input).is_err());
}

#[test]
fn role_round_trips_through_storage_form() {
    for role in [WorkspaceRole::Admin, WorkspaceRole::Member] {
        assert_eq!(WorkspaceRole::try_from(role.as_str()), Ok(role));
    }
}

#[test]
fn email_is_lowercased_and_trimmed() {
    let email = EmailAddress::new("  Lead@Example.COM ").expect("valid email");
    assert_eq!(email.as_str(), "lead@example.com");
}

#[rstest]
#[case("")]
#[case("no-at-sign")]
#[case("@domain.only")]
#[case("local@")]
fn email_rejects_malformed_addresses(#[case] input: &str) {
    assert!(matches!(
        EmailAddress::new(input),
        Err(DirectoryDomainError::InvalidEmail(_))
    ));
}

#[test]
fn identifiers_reject_blank_values() {
    assert!(matches!(
        UserId::new("   "),
        Err(DirectoryDomainError::EmptyUserId)
    ));
    assert!(matches!(
        WorkspaceId::new(""),
        Err(DirectoryDomainError::EmptyWorkspaceId)
    ));
}
