//! Error types for project domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing project domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// The project name is empty after trimming.
    #[error("project name must not be empty")]
    EmptyProjectName,

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// The comment content is empty after trimming.
    #[error("comment content must not be empty")]
    EmptyCommentContent,

    /// The progress percentage is outside 0..=100.
    #[error("progress {0} is out of range, expected 0..=100")]
    ProgressOutOfRange(i16),

    /// The project status string is unrecognized.
    #[error(transparent)]
    InvalidProjectStatus(#[from] ParseProjectStatusError),

    /// The priority string is unrecognized.
    #[error(transparent)]
    InvalidPriority(#[from] ParsePriorityError),

    /// The task status string is unrecognized.
    #[error(transparent)]
    InvalidTaskStatus(#[from] ParseTaskStatusError),

    /// The task kind string is unrecognized.
    #[error(transparent)]
    InvalidTaskKind(#[from] ParseTaskKindError),
}

/// Error returned while parsing project statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown project status: {0}")]
pub struct ParseProjectStatusError(pub String);

/// Error returned while parsing priorities.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);

/// Error returned while parsing task statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task kinds.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task kind: {0}")]
pub struct ParseTaskKindError(pub String);
