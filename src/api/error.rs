//! Error-to-status mapping for the HTTP surface.
//!
//! Every service error funnels into [`ApiError`], which renders as a
//! status code plus a human-readable message. Unexpected failures are
//! logged and reported generically so internals never leak to callers.

use crate::directory::ports::DirectoryRepositoryError;
use crate::directory::services::MembershipError;
use crate::project::services::{
    CommentServiceError, OverviewError, ProjectLifecycleError, TaskServiceError,
};
use crate::workflow::services::IdentitySyncError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// An HTTP-mapped operation failure.
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl ApiError {
    /// 400 with the given message.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// 401 for requests without a verified actor.
    #[must_use]
    pub fn unauthorized() -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: "unauthorized: no verified session".to_owned(),
        }
    }

    /// 403 with the given message.
    #[must_use]
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::FORBIDDEN,
            message: message.into(),
        }
    }

    /// 404 with the given message.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    /// 409 with the given message.
    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: message.into(),
        }
    }

    /// 500 with a generic message; the cause is logged, not returned.
    #[must_use]
    pub fn internal(err: &dyn std::fmt::Display) -> Self {
        tracing::error!(error = %err, "request failed unexpectedly");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "something went wrong".to_owned(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<MembershipError> for ApiError {
    fn from(err: MembershipError) -> Self {
        match &err {
            MembershipError::Validation(_) => Self::validation(err.to_string()),
            MembershipError::WorkspaceNotFound(_) | MembershipError::UserNotFound(_) => {
                Self::not_found(err.to_string())
            }
            MembershipError::NotAdmin(_) => Self::forbidden(err.to_string()),
            MembershipError::AlreadyMember { .. } => Self::conflict(err.to_string()),
            MembershipError::Repository(_) => Self::internal(&err),
        }
    }
}

impl From<ProjectLifecycleError> for ApiError {
    fn from(err: ProjectLifecycleError) -> Self {
        match &err {
            ProjectLifecycleError::Validation(_) => Self::validation(err.to_string()),
            ProjectLifecycleError::WorkspaceNotFound(_)
            | ProjectLifecycleError::ProjectNotFound(_) => Self::not_found(err.to_string()),
            ProjectLifecycleError::PermissionDenied(_) => Self::forbidden(err.to_string()),
            ProjectLifecycleError::Directory(_) | ProjectLifecycleError::Store(_) => {
                Self::internal(&err)
            }
        }
    }
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match &err {
            TaskServiceError::Validation(_)
            | TaskServiceError::MixedProjects
            | TaskServiceError::AssigneeNotMember(_) => Self::validation(err.to_string()),
            TaskServiceError::ProjectNotFound(_)
            | TaskServiceError::TaskNotFound(_)
            | TaskServiceError::NoTasksMatched => Self::not_found(err.to_string()),
            TaskServiceError::NotTeamLead(_) => Self::forbidden(err.to_string()),
            TaskServiceError::Events(_) | TaskServiceError::Store(_) => Self::internal(&err),
        }
    }
}

impl From<CommentServiceError> for ApiError {
    fn from(err: CommentServiceError) -> Self {
        match &err {
            CommentServiceError::Validation(_) => Self::validation(err.to_string()),
            CommentServiceError::TaskNotFound(_) | CommentServiceError::ProjectNotFound(_) => {
                Self::not_found(err.to_string())
            }
            CommentServiceError::NotProjectMember(_) => Self::forbidden(err.to_string()),
            CommentServiceError::Directory(_) | CommentServiceError::Store(_) => {
                Self::internal(&err)
            }
        }
    }
}

impl From<OverviewError> for ApiError {
    fn from(err: OverviewError) -> Self {
        Self::internal(&err)
    }
}

impl From<IdentitySyncError> for ApiError {
    fn from(err: IdentitySyncError) -> Self {
        match &err {
            IdentitySyncError::Validation(_) => Self::validation(err.to_string()),
            IdentitySyncError::Repository(repo) => match repo {
                DirectoryRepositoryError::DuplicateUser(_)
                | DirectoryRepositoryError::DuplicateWorkspace(_)
                | DirectoryRepositoryError::DuplicateMember { .. } => {
                    Self::conflict(err.to_string())
                }
                DirectoryRepositoryError::UserNotFound(_)
                | DirectoryRepositoryError::WorkspaceNotFound(_) => {
                    Self::not_found(err.to_string())
                }
                DirectoryRepositoryError::Persistence(_) => Self::internal(&err),
            },
        }
    }
}
