//! `PostgreSQL` repository implementation for task storage.

use super::{
    ProjectPgPool,
    models::{TaskRow, row_to_task, task_to_new_row},
    schema::tasks,
};
use crate::project::{
    domain::{ProjectId, Task, TaskId},
    ports::{ProjectStoreError, ProjectStoreResult, TaskRepository},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use uuid::Uuid;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: ProjectPgPool,
}

impl PostgresTaskRepository {
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
impl TaskRepository for PostgresTaskRepository {
    async fn insert(&self, task: &Task) -> ProjectStoreResult<()> {
        let task_id = task.id();
        let new_row = task_to_new_row(task);
        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        ProjectStoreError::DuplicateTask(task_id)
                    }
                    _ => ProjectStoreError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, task: &Task) -> ProjectStoreResult<()> {
        let task_id = task.id();
        let row = task_to_new_row(task);
        self.run_blocking(move |connection| {
            let affected = diesel::update(tasks::table.find(task_id.into_inner()))
                .set((
                    tasks::title.eq(&row.title),
                    tasks::description.eq(&row.description),
                    tasks::kind.eq(&row.kind),
                    tasks::status.eq(&row.status),
                    tasks::priority.eq(&row.priority),
                    tasks::assignee_id.eq(&row.assignee_id),
                    tasks::due_date.eq(row.due_date),
                    tasks::updated_at.eq(row.updated_at),
                ))
                .execute(connection)
                .map_err(ProjectStoreError::persistence)?;
            if affected == 0 {
                return Err(ProjectStoreError::TaskNotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> ProjectStoreResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.into_inner())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(ProjectStoreError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn find_many(&self, ids: &[TaskId]) -> ProjectStoreResult<Vec<Task>> {
        let lookup: Vec<Uuid> = ids.iter().map(|id| id.into_inner()).collect();
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::id.eq_any(&lookup))
                .order(tasks::created_at.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(ProjectStoreError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn delete_many(&self, ids: &[TaskId]) -> ProjectStoreResult<usize> {
        let lookup: Vec<Uuid> = ids.iter().map(|id| id.into_inner()).collect();
        self.run_blocking(move |connection| {
            diesel::delete(tasks::table.filter(tasks::id.eq_any(&lookup)))
                .execute(connection)
                .map_err(ProjectStoreError::persistence)
        })
        .await
    }

    async fn tasks_in_project(&self, project: ProjectId) -> ProjectStoreResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::project_id.eq(project.into_inner()))
                .order(tasks::created_at.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(ProjectStoreError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }
}
