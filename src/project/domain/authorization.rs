//! Pure authorization predicates for project and task management.
//!
//! Each predicate takes already-loaded rows, performs no I/O, and fails
//! only by returning `false`. Operations keep their authorization branch
//! to a single call so the rules stay testable in isolation.

use super::Project;
use crate::directory::domain::{UserId, WorkspaceMember, is_workspace_admin};

/// Returns `true` when `user` is the project's team lead.
#[must_use]
pub fn is_project_team_lead(project: &Project, user: &UserId) -> bool {
    project.team_lead() == Some(user)
}

/// Returns `true` when `user` may create or update the project: either a
/// workspace ADMIN or the project's own team lead.
#[must_use]
pub fn can_manage_project(members: &[WorkspaceMember], project: &Project, user: &UserId) -> bool {
    is_workspace_admin(members, user) || is_project_team_lead(project, user)
}

/// Returns `true` when `user` may create, update, or delete tasks in the
/// project.
///
/// Task management is stricter than project management: only the team
/// lead qualifies. A workspace ADMIN who does not lead the project is
/// refused.
#[must_use]
pub fn can_manage_task(project: &Project, user: &UserId) -> bool {
    is_project_team_lead(project, user)
}
