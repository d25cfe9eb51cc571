//! `PostgreSQL` repository implementation for project storage.

use super::{
    ProjectPgPool,
    models::{ProjectMemberRow, ProjectRow, project_to_new_row, row_to_project, row_to_project_member},
    schema::{project_members, projects},
};
use crate::directory::domain::WorkspaceId;
use crate::project::{
    domain::{Project, ProjectId, ProjectMember},
    ports::{ProjectRepository, ProjectStoreError, ProjectStoreResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed project repository.
#[derive(Debug, Clone)]
pub struct PostgresProjectRepository {
    pool: ProjectPgPool,
}

impl PostgresProjectRepository {
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
impl ProjectRepository for PostgresProjectRepository {
    async fn insert(
        &self,
        project: &Project,
        members: &[ProjectMember],
    ) -> ProjectStoreResult<()> {
        let project_id = project.id();
        let new_row = project_to_new_row(project);
        let member_rows: Vec<ProjectMemberRow> = members
            .iter()
            .map(|member| ProjectMemberRow {
                project_id: member.project().into_inner(),
                user_id: member.user().as_str().to_owned(),
            })
            .collect();
        self.run_blocking(move |connection| {
            connection
                .transaction(|txn| {
                    diesel::insert_into(projects::table)
                        .values(&new_row)
                        .execute(txn)?;
                    diesel::insert_into(project_members::table)
                        .values(&member_rows)
                        .execute(txn)?;
                    diesel::result::QueryResult::Ok(())
                })
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        ProjectStoreError::DuplicateProject(project_id)
                    }
                    _ => ProjectStoreError::persistence(err),
                })
        })
        .await
    }

    async fn update(&self, project: &Project) -> ProjectStoreResult<()> {
        let project_id = project.id();
        let row = project_to_new_row(project);
        self.run_blocking(move |connection| {
            let affected = diesel::update(projects::table.find(project_id.into_inner()))
                .set((
                    projects::name.eq(&row.name),
                    projects::description.eq(&row.description),
                    projects::status.eq(&row.status),
                    projects::priority.eq(&row.priority),
                    projects::progress.eq(row.progress),
                    projects::start_date.eq(row.start_date),
                    projects::end_date.eq(row.end_date),
                    projects::updated_at.eq(row.updated_at),
                ))
                .execute(connection)
                .map_err(ProjectStoreError::persistence)?;
            if affected == 0 {
                return Err(ProjectStoreError::ProjectNotFound(project_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: ProjectId) -> ProjectStoreResult<Option<Project>> {
        self.run_blocking(move |connection| {
            let row = projects::table
                .find(id.into_inner())
                .select(ProjectRow::as_select())
                .first::<ProjectRow>(connection)
                .optional()
                .map_err(ProjectStoreError::persistence)?;
            row.map(row_to_project).transpose()
        })
        .await
    }

    async fn members_of(&self, id: ProjectId) -> ProjectStoreResult<Vec<ProjectMember>> {
        self.run_blocking(move |connection| {
            let rows = project_members::table
                .filter(project_members::project_id.eq(id.into_inner()))
                .order(project_members::user_id.asc())
                .select(ProjectMemberRow::as_select())
                .load::<ProjectMemberRow>(connection)
                .map_err(ProjectStoreError::persistence)?;
            rows.into_iter().map(row_to_project_member).collect()
        })
        .await
    }

    async fn projects_in_workspace(
        &self,
        workspace: &WorkspaceId,
    ) -> ProjectStoreResult<Vec<Project>> {
        let workspace_id = workspace.as_str().to_owned();
        self.run_blocking(move |connection| {
            let rows = projects::table
                .filter(projects::workspace_id.eq(&workspace_id))
                .order(projects::created_at.asc())
                .select(ProjectRow::as_select())
                .load::<ProjectRow>(connection)
                .map_err(ProjectStoreError::persistence)?;
            rows.into_iter().map(row_to_project).collect()
        })
        .await
    }
}
