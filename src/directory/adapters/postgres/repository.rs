//! `PostgreSQL` repository implementations for directory storage.

use super::{
    models::{
        NewUserRow, NewWorkspaceMemberRow, NewWorkspaceRow, UserRow, WorkspaceMemberRow,
        WorkspaceRow,
    },
    schema::{users, workspace_members, workspaces},
};
use crate::directory::{
    domain::{
        EmailAddress, User, UserId, Workspace, WorkspaceId, WorkspaceMember, WorkspaceRole,
    },
    ports::{
        DirectoryRepositoryError, DirectoryRepositoryResult, UserRepository, WorkspaceRepository,
    },
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by directory adapters.
pub type DirectoryPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed user repository.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: DirectoryPgPool,
}

impl PostgresUserRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: DirectoryPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> DirectoryRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> DirectoryRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(DirectoryRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(DirectoryRepositoryError::persistence)?
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, user: &User) -> DirectoryRepositoryResult<()> {
        let new_row = user_to_new_row(user);
        let user_id = user.id().clone();
        self.run_blocking(move |connection| {
            diesel::insert_into(users::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        DirectoryRepositoryError::DuplicateUser(user_id.clone())
                    }
                    _ => DirectoryRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, user: &User) -> DirectoryRepositoryResult<()> {
        let user_id = user.id().clone();
        let email = user.email().as_str().to_owned();
        let name = user.name().to_owned();
        let image = user.image().map(ToOwned::to_owned);
        self.run_blocking(move |connection| {
            let affected = diesel::update(users::table.find(user_id.as_str()))
                .set((
                    users::email.eq(&email),
                    users::name.eq(&name),
                    users::image.eq(&image),
                ))
                .execute(connection)
                .map_err(DirectoryRepositoryError::persistence)?;
            if affected == 0 {
                return Err(DirectoryRepositoryError::UserNotFound(user_id.clone()));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: &UserId) -> DirectoryRepositoryResult<()> {
        let user_id = id.clone();
        self.run_blocking(move |connection| {
            let affected = diesel::delete(users::table.find(user_id.as_str()))
                .execute(connection)
                .map_err(DirectoryRepositoryError::persistence)?;
            if affected == 0 {
                return Err(DirectoryRepositoryError::UserNotFound(user_id.clone()));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: &UserId) -> DirectoryRepositoryResult<Option<User>> {
        let user_id = id.clone();
        self.run_blocking(move |connection| {
            let row = users::table
                .find(user_id.as_str())
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(DirectoryRepositoryError::persistence)?;
            row.map(row_to_user).transpose()
        })
        .await
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DirectoryRepositoryResult<Option<User>> {
        let lookup = email.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = users::table
                .filter(users::email.eq(&lookup))
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(DirectoryRepositoryError::persistence)?;
            row.map(row_to_user).transpose()
        })
        .await
    }
}

/// `PostgreSQL`-backed workspace repository.
#[derive(Debug, Clone)]
pub struct PostgresWorkspaceRepository {
    pool: DirectoryPgPool,
}

impl PostgresWorkspaceRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: DirectoryPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> DirectoryRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> DirectoryRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(DirectoryRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(DirectoryRepositoryError::persistence)?
    }
}

#[async_trait]
impl WorkspaceRepository for PostgresWorkspaceRepository {
    async fn insert(&self, workspace: &Workspace) -> DirectoryRepositoryResult<()> {
        let new_row = workspace_to_new_row(workspace);
        let workspace_id = workspace.id().clone();
        self.run_blocking(move |connection| {
            diesel::insert_into(workspaces::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        DirectoryRepositoryError::DuplicateWorkspace(workspace_id.clone())
                    }
                    _ => DirectoryRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, workspace: &Workspace) -> DirectoryRepositoryResult<()> {
        let workspace_id = workspace.id().clone();
        let name = workspace.name().to_owned();
        let slug = workspace.slug().to_owned();
        let image_url = workspace.image_url().map(ToOwned::to_owned);
        self.run_blocking(move |connection| {
            let affected = diesel::update(workspaces::table.find(workspace_id.as_str()))
                .set((
                    workspaces::name.eq(&name),
                    workspaces::slug.eq(&slug),
                    workspaces::image_url.eq(&image_url),
                ))
                .execute(connection)
                .map_err(DirectoryRepositoryError::persistence)?;
            if affected == 0 {
                return Err(DirectoryRepositoryError::WorkspaceNotFound(
                    workspace_id.clone(),
                ));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: &WorkspaceId) -> DirectoryRepositoryResult<()> {
        let workspace_id = id.clone();
        self.run_blocking(move |connection| {
            // Member rows (and the project tree below them) are removed by
            // ON DELETE CASCADE foreign keys.
            let affected = diesel::delete(workspaces::table.find(workspace_id.as_str()))
                .execute(connection)
                .map_err(DirectoryRepositoryError::persistence)?;
            if affected == 0 {
                return Err(DirectoryRepositoryError::WorkspaceNotFound(
                    workspace_id.clone(),
                ));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: &WorkspaceId) -> DirectoryRepositoryResult<Option<Workspace>> {
        let workspace_id = id.clone();
        self.run_blocking(move |connection| {
            let row = workspaces::table
                .find(workspace_id.as_str())
                .select(WorkspaceRow::as_select())
                .first::<WorkspaceRow>(connection)
                .optional()
                .map_err(DirectoryRepositoryError::persistence)?;
            row.map(row_to_workspace).transpose()
        })
        .await
    }

    async fn workspaces_for_user(
        &self,
        user: &UserId,
    ) -> DirectoryRepositoryResult<Vec<Workspace>> {
        let user_id = user.as_str().to_owned();
        self.run_blocking(move |connection| {
            let workspace_ids: Vec<String> = workspace_members::table
                .filter(workspace_members::user_id.eq(&user_id))
                .select(workspace_members::workspace_id)
                .load::<String>(connection)
                .map_err(DirectoryRepositoryError::persistence)?;
            let rows = workspaces::table
                .filter(workspaces::id.eq_any(&workspace_ids))
                .order(workspaces::id.asc())
                .select(WorkspaceRow::as_select())
                .load::<WorkspaceRow>(connection)
                .map_err(DirectoryRepositoryError::persistence)?;
            rows.into_iter().map(row_to_workspace).collect()
        })
        .await
    }

    async fn members_of(
        &self,
        id: &WorkspaceId,
    ) -> DirectoryRepositoryResult<Vec<WorkspaceMember>> {
        let workspace_id = id.as_str().to_owned();
        self.run_blocking(move |connection| {
            let rows = workspace_members::table
                .filter(workspace_members::workspace_id.eq(&workspace_id))
                .order(workspace_members::joined_at.asc())
                .select(WorkspaceMemberRow::as_select())
                .load::<WorkspaceMemberRow>(connection)
                .map_err(DirectoryRepositoryError::persistence)?;
            rows.into_iter().map(row_to_member).collect()
        })
        .await
    }

    async fn add_member(&self, member: &WorkspaceMember) -> DirectoryRepositoryResult<()> {
        let new_row = member_to_new_row(member);
        let workspace_id = member.workspace().clone();
        let user_id = member.user().clone();
        self.run_blocking(move |connection| {
            diesel::insert_into(workspace_members::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        DirectoryRepositoryError::DuplicateMember {
                            workspace: workspace_id.clone(),
                            user: user_id.clone(),
                        }
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                        DirectoryRepositoryError::WorkspaceNotFound(workspace_id.clone())
                    }
                    _ => DirectoryRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }
}

fn user_to_new_row(user: &User) -> NewUserRow {
    NewUserRow {
        id: user.id().as_str().to_owned(),
        email: user.email().as_str().to_owned(),
        name: user.name().to_owned(),
        image: user.image().map(ToOwned::to_owned),
    }
}

fn workspace_to_new_row(workspace: &Workspace) -> NewWorkspaceRow {
    NewWorkspaceRow {
        id: workspace.id().as_str().to_owned(),
        name: workspace.name().to_owned(),
        slug: workspace.slug().to_owned(),
        owner_id: workspace.owner().as_str().to_owned(),
        image_url: workspace.image_url().map(ToOwned::to_owned),
    }
}

fn member_to_new_row(member: &WorkspaceMember) -> NewWorkspaceMemberRow {
    NewWorkspaceMemberRow {
        workspace_id: member.workspace().as_str().to_owned(),
        user_id: member.user().as_str().to_owned(),
        role: member.role().as_str().to_owned(),
        message: member.message().map(ToOwned::to_owned),
        joined_at: member.joined_at(),
    }
}

fn row_to_user(row: UserRow) -> DirectoryRepositoryResult<User> {
    let id = UserId::new(row.id).map_err(DirectoryRepositoryError::persistence)?;
    let email = EmailAddress::new(row.email).map_err(DirectoryRepositoryError::persistence)?;
    Ok(User::new(id, email, row.name, row.image))
}

fn row_to_workspace(row: WorkspaceRow) -> DirectoryRepositoryResult<Workspace> {
    let id = WorkspaceId::new(row.id).map_err(DirectoryRepositoryError::persistence)?;
    let owner = UserId::new(row.owner_id).map_err(DirectoryRepositoryError::persistence)?;
    Ok(Workspace::new(id, row.name, row.slug, owner, row.image_url))
}

fn row_to_member(row: WorkspaceMemberRow) -> DirectoryRepositoryResult<WorkspaceMember> {
    let workspace =
        WorkspaceId::new(row.workspace_id).map_err(DirectoryRepositoryError::persistence)?;
    let user = UserId::new(row.user_id).map_err(DirectoryRepositoryError::persistence)?;
    let role = WorkspaceRole::try_from(row.role.as_str())
        .map_err(DirectoryRepositoryError::persistence)?;
    Ok(WorkspaceMember::from_persisted(
        workspace,
        user,
        role,
        row.message,
        row.joined_at,
    ))
}
