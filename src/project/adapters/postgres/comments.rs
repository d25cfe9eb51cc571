//! `PostgreSQL` repository implementation for comment storage.

use super::{
    ProjectPgPool,
    models::{CommentRow, comment_to_row, row_to_comment},
    schema::comments,
};
use crate::project::{
    domain::{Comment, TaskId},
    ports::{CommentRepository, ProjectStoreError, ProjectStoreResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed comment repository.
#[derive(Debug, Clone)]
pub struct PostgresCommentRepository {
    pool: ProjectPgPool,
}

impl PostgresCommentRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ProjectPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ProjectStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ProjectStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ProjectStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ProjectStoreError::persistence)?
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn insert(&self, comment: &Comment) -> ProjectStoreResult<()> {
        let comment_id = comment.id();
        let row = comment_to_row(comment);
        self.run_blocking(move |connection| {
            diesel::insert_into(comments::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        ProjectStoreError::DuplicateComment(comment_id)
                    }
                    _ => ProjectStoreError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn comments_for_task(&self, task: TaskId) -> ProjectStoreResult<Vec<Comment>> {
        self.run_blocking(move |connection| {
            let rows = comments::table
                .filter(comments::task_id.eq(task.into_inner()))
                .order(comments::created_at.asc())
                .select(CommentRow::as_select())
                .load::<CommentRow>(connection)
                .map_err(ProjectStoreError::persistence)?;
            rows.into_iter().map(row_to_comment).collect()
        })
        .await
    }
}
