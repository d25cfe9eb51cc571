//! In-memory project repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::directory::domain::WorkspaceId;
use crate::project::{
    domain::{Project, ProjectId, ProjectMember},
    ports::{ProjectRepository, ProjectStoreError, ProjectStoreResult},
};

/// Thread-safe in-memory project repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    state: Arc<RwLock<InMemoryProjectState>>,
}

#[derive(Debug, Default)]
struct InMemoryProjectState {
    projects: HashMap<ProjectId, Project>,
    members: HashMap<ProjectId, Vec<ProjectMember>>,
}

impl InMemoryProjectRepository {
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
impl ProjectRepository for InMemoryProjectRepository {
    async fn insert(
        &self,
        project: &Project,
        members: &[ProjectMember],
    ) -> ProjectStoreResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(err.to_string()))?;
        if state.projects.contains_key(&project.id()) {
            return Err(ProjectStoreError::DuplicateProject(project.id()));
        }
        state.projects.insert(project.id(), project.clone());
        state.members.insert(project.id(), members.to_vec());
        Ok(())
    }

    async fn update(&self, project: &Project) -> ProjectStoreResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(err.to_string()))?;
        let entry = state
            .projects
            .get_mut(&project.id())
            .ok_or(ProjectStoreError::ProjectNotFound(project.id()))?;
        *entry = project.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: ProjectId) -> ProjectStoreResult<Option<Project>> {
        let state = self.state.read().map_err(|err| lock_error(err.to_string()))?;
        Ok(state.projects.get(&id).cloned())
    }

    async fn members_of(&self, id: ProjectId) -> ProjectStoreResult<Vec<ProjectMember>> {
        let state = self.state.read().map_err(|err| lock_error(err.to_string()))?;
        Ok(state.members.get(&id).cloned().unwrap_or_default())
    }

    async fn projects_in_workspace(
        &self,
        workspace: &WorkspaceId,
    ) -> ProjectStoreResult<Vec<Project>> {
        let state = self.state.read().map_err(|err| lock_error(err.to_string()))?;
        let mut result: Vec<Project> = state
            .projects
            .values()
            .filter(|project| project.workspace() == workspace)
            .cloned()
            .collect();
        result.sort_by_key(Project::created_at);
        Ok(result)
    }
}
