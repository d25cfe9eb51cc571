//! Comments attached to tasks.

use super::{CommentId, ProjectDomainError, TaskId};
use crate::directory::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A comment left on a task by a project member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    id: CommentId,
    task: TaskId,
    author: UserId,
    content: String,
    created_at: DateTime<Utc>,
}

impl Comment {
    /// Creates a new comment.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyCommentContent`] when the
    /// content is blank.
    pub fn new(
        task: TaskId,
        author: UserId,
        content: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, ProjectDomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(ProjectDomainError::EmptyCommentContent);
        }
        Ok(Self {
            id: CommentId::new(),
            task,
            author,
            content,
            created_at: clock.utc(),
        })
    }

    /// Reconstructs a comment from persisted storage.
    #[must_use]
    pub const fn from_persisted(
        id: CommentId,
        task: TaskId,
        author: UserId,
        content: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            task,
            author,
            content,
            created_at,
        }
    }

    /// Returns the comment identifier.
    #[must_use]
    pub const fn id(&self) -> CommentId {
        self.id
    }

    /// Returns the task this comment belongs to.
    #[must_use]
    pub const fn task(&self) -> TaskId {
        self.task
    }

    /// Returns the author's user identifier.
    #[must_use]
    pub const fn author(&self) -> &UserId {
        &self.author
    }

    /// Returns the comment content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
