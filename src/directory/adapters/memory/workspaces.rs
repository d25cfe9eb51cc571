//! In-memory workspace and membership repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::directory::{
    domain::{UserId, Workspace, WorkspaceId, WorkspaceMember},
    ports::{DirectoryRepositoryError, DirectoryRepositoryResult, WorkspaceRepository},
};

/// Thread-safe in-memory workspace repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkspaceRepository {
    state: Arc<RwLock<InMemoryWorkspaceState>>,
}

#[derive(Debug, Default)]
struct InMemoryWorkspaceState {
    workspaces: HashMap<WorkspaceId, Workspace>,
    members: HashMap<WorkspaceId, Vec<WorkspaceMember>>,
}

impl InMemoryWorkspaceRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(message: String) -> DirectoryRepositoryError {
    DirectoryRepositoryError::persistence(std::io::Error::other(message))
}

#[async_trait]
impl WorkspaceRepository for InMemoryWorkspaceRepository {
    async fn insert(&self, workspace: &Workspace) -> DirectoryRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(err.to_string()))?;
        if state.workspaces.contains_key(workspace.id()) {
            return Err(DirectoryRepositoryError::DuplicateWorkspace(
                workspace.id().clone(),
            ));
        }
        state
            .workspaces
            .insert(workspace.id().clone(), workspace.clone());
        Ok(())
    }

    async fn update(&self, workspace: &Workspace) -> DirectoryRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(err.to_string()))?;
        let entry = state
            .workspaces
            .get_mut(workspace.id())
            .ok_or_else(|| DirectoryRepositoryError::WorkspaceNotFound(workspace.id().clone()))?;
        *entry = workspace.clone();
        Ok(())
    }

    async fn delete(&self, id: &WorkspaceId) -> DirectoryRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(err.to_string()))?;
        if state.workspaces.remove(id).is_none() {
            return Err(DirectoryRepositoryError::WorkspaceNotFound(id.clone()));
        }
        state.members.remove(id);
        Ok(())
    }

    async fn find_by_id(&self, id: &WorkspaceId) -> DirectoryRepositoryResult<Option<Workspace>> {
        let state = self.state.read().map_err(|err| lock_error(err.to_string()))?;
        Ok(state.workspaces.get(id).cloned())
    }

    async fn workspaces_for_user(
        &self,
        user: &UserId,
    ) -> DirectoryRepositoryResult<Vec<Workspace>> {
        let state = self.state.read().map_err(|err| lock_error(err.to_string()))?;
        let mut result: Vec<Workspace> = state
            .members
            .iter()
            .filter(|(_, members)| members.iter().any(|member| member.user() == user))
            .filter_map(|(id, _)| state.workspaces.get(id).cloned())
            .collect();
        result.sort_by(|a, b| a.id().as_str().cmp(b.id().as_str()));
        Ok(result)
    }

    async fn members_of(
        &self,
        id: &WorkspaceId,
    ) -> DirectoryRepositoryResult<Vec<WorkspaceMember>> {
        let state = self.state.read().map_err(|err| lock_error(err.to_string()))?;
        Ok(state.members.get(id).cloned().unwrap_or_default())
    }

    async fn add_member(&self, member: &WorkspaceMember) -> DirectoryRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(err.to_string()))?;
        if !state.workspaces.contains_key(member.workspace()) {
            return Err(DirectoryRepositoryError::WorkspaceNotFound(
                member.workspace().clone(),
            ));
        }
        let rows = state.members.entry(member.workspace().clone()).or_default();
        if rows.iter().any(|row| row.user() == member.user()) {
            return Err(DirectoryRepositoryError::DuplicateMember {
                workspace: member.workspace().clone(),
                user: member.user().clone(),
            });
        }
        rows.push(member.clone());
        Ok(())
    }
}
