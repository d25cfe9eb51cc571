//! Pure authorization predicates over loaded workspace membership rows.
//!
//! Predicates never perform I/O and never fail; absence of a grant is
//! expressed by returning `false`. Project-scoped predicates in the
//! project context build on [`is_workspace_admin`].

use super::{UserId, WorkspaceMember, WorkspaceRole};

/// Returns `true` when `user` holds the ADMIN role among `members`.
#[must_use]
pub fn is_workspace_admin(members: &[WorkspaceMember], user: &UserId) -> bool {
    members
        .iter()
        .any(|member| member.user() == user && member.role() == WorkspaceRole::Admin)
}

#[cfg(test)]
mod tests {
    use super::is_workspace_admin;
    use crate::directory::domain::{UserId, WorkspaceId, WorkspaceMember, WorkspaceRole};
    use mockable::DefaultClock;

    fn member(user_id: &str, role: WorkspaceRole) -> WorkspaceMember {
        let workspace = WorkspaceId::new("ws_1").expect("valid workspace id");
        let user = UserId::new(user_id).expect("valid user id");
        WorkspaceMember::new(workspace, user, role, None, &DefaultClock)
    }

    #[test]
    fn admin_member_is_admin() {
        let members = vec![
            member("user_a", WorkspaceRole::Admin),
            member("user_b", WorkspaceRole::Member),
        ];
        let user = UserId::new("user_a").expect("valid user id");
        assert!(is_workspace_admin(&members, &user));
    }

    #[test]
    fn regular_member_is_not_admin() {
        let members = vec![member("user_b", WorkspaceRole::Member)];
        let user = UserId::new("user_b").expect("valid user id");
        assert!(!is_workspace_admin(&members, &user));
    }

    #[test]
    fn non_member_is_not_admin() {
        let members = vec![member("user_a", WorkspaceRole::Admin)];
        let user = UserId::new("user_z").expect("valid user id");
        assert!(!is_workspace_admin(&members, &user));
    }
}
