//! Populated read models returned by project services.
//!
//! These mirror the response shapes the frontend consumes: entities with
//! their related users resolved. Missing users (deleted between write and
//! read) surface as `None` rather than failing the whole view.

use crate::directory::domain::{User, UserId, Workspace, WorkspaceMember};
use crate::directory::ports::{DirectoryRepositoryError, UserRepository};
use crate::project::domain::{Comment, Project, ProjectMember, Task};
use crate::project::ports::ProjectStoreError;
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

/// A workspace member with its user resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberView {
    /// The membership row.
    pub member: WorkspaceMember,
    /// The member's user record, when it still exists.
    pub user: Option<User>,
}

/// A project member with its user resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectMemberView {
    /// The membership row.
    pub member: ProjectMember,
    /// The member's user record, when it still exists.
    pub user: Option<User>,
}

/// A comment with its author resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentView {
    /// The comment.
    pub comment: Comment,
    /// The author's user record, when it still exists.
    pub author: Option<User>,
}

/// A task with its assignee and comments resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskView {
    /// The task.
    pub task: Task,
    /// The assignee's user record, when one is set and still exists.
    pub assignee: Option<User>,
    /// Comments on the task, oldest first.
    pub comments: Vec<CommentView>,
}

/// A project with members, tasks, and team lead resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectView {
    /// The project.
    pub project: Project,
    /// The project's team members.
    pub members: Vec<ProjectMemberView>,
    /// The project's tasks, oldest first.
    pub tasks: Vec<TaskView>,
    /// The team lead's user record, when one is set and still exists.
    pub team_lead: Option<User>,
}

/// A workspace with owner, members, and projects resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkspaceView {
    /// The workspace.
    pub workspace: Workspace,
    /// The owner's user record, when it still exists.
    pub owner: Option<User>,
    /// The workspace's members.
    pub members: Vec<MemberView>,
    /// The workspace's projects, oldest first.
    pub projects: Vec<ProjectView>,
}

/// Errors raised while resolving related records for a view.
#[derive(Debug, Clone, Error)]
pub enum PopulateError {
    /// Directory lookup failed.
    #[error(transparent)]
    Directory(#[from] DirectoryRepositoryError),

    /// Project store lookup failed.
    #[error(transparent)]
    Store(#[from] ProjectStoreError),
}

/// Loads the users behind a set of identifiers into a lookup map.
///
/// Identifiers with no backing user are silently absent from the map.
pub(crate) async fn load_users<U: UserRepository>(
    users: &U,
    ids: impl IntoIterator<Item = UserId>,
) -> Result<HashMap<UserId, User>, PopulateError> {
    let mut map = HashMap::new();
    for id in ids {
        if map.contains_key(&id) {
            continue;
        }
        if let Some(user) = users.find_by_id(&id).await? {
            map.insert(id, user);
        }
    }
    Ok(map)
}
