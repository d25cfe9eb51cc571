//! `PostgreSQL` repository implementation for reminder run storage.

use super::{
    models::{NewReminderRunRow, ReminderRunRow},
    schema::reminder_runs,
};
use crate::workflow::{
    domain::{PersistedRunData, ReminderRun, RunId, RunStep},
    ports::{ReminderRunRepository, WorkflowStoreError, WorkflowStoreResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by workflow adapters.
pub type WorkflowPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed reminder run repository.
#[derive(Debug, Clone)]
pub struct PostgresReminderRunRepository {
    pool: WorkflowPgPool,
}

impl PostgresReminderRunRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: WorkflowPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> WorkflowStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> WorkflowStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(WorkflowStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(WorkflowStoreError::persistence)?
    }
}

#[async_trait]
impl ReminderRunRepository for PostgresReminderRunRepository {
    async fn enqueue(&self, run: &ReminderRun) -> WorkflowStoreResult<()> {
        let run_id = run.id();
        let new_row = to_new_row(run)?;
        self.run_blocking(move |connection| {
            diesel::insert_into(reminder_runs::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        WorkflowStoreError::DuplicateRun(run_id)
                    }
                    _ => WorkflowStoreError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, run: &ReminderRun) -> WorkflowStoreResult<()> {
        let run_id = run.id();
        let step = run.step().as_str().to_owned();
        let wake_at = run.wake_at();
        let updated_at = run.updated_at();
        self.run_blocking(move |connection| {
            let affected = diesel::update(reminder_runs::table.find(run_id.into_inner()))
                .set((
                    reminder_runs::step.eq(&step),
                    reminder_runs::wake_at.eq(wake_at),
                    reminder_runs::updated_at.eq(updated_at),
                ))
                .execute(connection)
                .map_err(WorkflowStoreError::persistence)?;
            if affected == 0 {
                return Err(WorkflowStoreError::RunNotFound(run_id));
            }
            Ok(())
        })
        .await
    }

    async fn due(&self, now: DateTime<Utc>) -> WorkflowStoreResult<Vec<ReminderRun>> {
        self.run_blocking(move |connection| {
            let rows = reminder_runs::table
                .filter(reminder_runs::step.ne(RunStep::Completed.as_str()))
                .filter(
                    reminder_runs::wake_at
                        .is_null()
                        .or(reminder_runs::wake_at.le(now)),
                )
                .order(reminder_runs::created_at.asc())
                .select(ReminderRunRow::as_select())
                .load::<ReminderRunRow>(connection)
                .map_err(WorkflowStoreError::persistence)?;
            rows.into_iter().map(row_to_run).collect()
        })
        .await
    }

    async fn find_by_id(&self, id: RunId) -> WorkflowStoreResult<Option<ReminderRun>> {
        self.run_blocking(move |connection| {
            let row = reminder_runs::table
                .find(id.into_inner())
                .select(ReminderRunRow::as_select())
                .first::<ReminderRunRow>(connection)
                .optional()
                .map_err(WorkflowStoreError::persistence)?;
            row.map(row_to_run).transpose()
        })
        .await
    }
}

fn to_new_row(run: &ReminderRun) -> WorkflowStoreResult<NewReminderRunRow> {
    let payload = serde_json::to_value(run.event()).map_err(WorkflowStoreError::persistence)?;
    Ok(NewReminderRunRow {
        id: run.id().into_inner(),
        step: run.step().as_str().to_owned(),
        wake_at: run.wake_at(),
        payload,
        created_at: run.created_at(),
        updated_at: run.updated_at(),
    })
}

fn row_to_run(row: ReminderRunRow) -> WorkflowStoreResult<ReminderRun> {
    let step = RunStep::try_from(row.step.as_str()).map_err(WorkflowStoreError::persistence)?;
    let event = serde_json::from_value(row.payload).map_err(WorkflowStoreError::persistence)?;
    Ok(ReminderRun::from_persisted(PersistedRunData {
        id: RunId::from_uuid(row.id),
        step,
        wake_at: row.wake_at,
        event,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }))
}
