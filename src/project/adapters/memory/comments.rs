//! In-memory comment repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::project::{
    domain::{Comment, TaskId},
    ports::{CommentRepository, ProjectStoreError, ProjectStoreResult},
};

/// Thread-safe in-memory comment repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCommentRepository {
    state: Arc<RwLock<HashMap<TaskId, Vec<Comment>>>>,
}

impl InMemoryCommentRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(message: String) -> ProjectStoreError {
    ProjectStoreError::persistence(std::io::Error::other(message))
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn insert(&self, comment: &Comment) -> ProjectStoreResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(err.to_string()))?;
        let rows = state.entry(comment.task()).or_default();
        if rows.iter().any(|row| row.id() == comment.id()) {
            return Err(ProjectStoreError::DuplicateComment(comment.id()));
        }
        rows.push(comment.clone());
        Ok(())
    }

    async fn comments_for_task(&self, task: TaskId) -> ProjectStoreResult<Vec<Comment>> {
        let state = self.state.read().map_err(|err| lock_error(err.to_string()))?;
        let mut rows = state.get(&task).cloned().unwrap_or_default();
        rows.sort_by_key(Comment::created_at);
        Ok(rows)
    }
}
