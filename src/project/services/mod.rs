//! Orchestration services for the project context.

mod comments;
mod lifecycle;
mod overview;
mod tasks;
mod views;

pub use comments::{CommentService, CommentServiceError, CommentServiceResult};
pub use lifecycle::{
    CreateProjectRequest, ProjectLifecycleError, ProjectLifecycleResult, ProjectLifecycleService,
};
pub use overview::{OverviewError, OverviewResult, OverviewService};
pub use tasks::{TaskService, TaskServiceError, TaskServiceResult};
pub use views::{
    CommentView, MemberView, PopulateError, ProjectMemberView, ProjectView, TaskView,
    WorkspaceView,
};
