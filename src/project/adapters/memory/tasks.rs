//! In-memory task repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::project::{
    domain::{ProjectId, Task, TaskId},
    ports::{ProjectStoreError, ProjectStoreResult, TaskRepository},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskRepository {
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
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, task: &Task) -> ProjectStoreResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(err.to_string()))?;
        if state.contains_key(&task.id()) {
            return Err(ProjectStoreError::DuplicateTask(task.id()));
        }
        state.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> ProjectStoreResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(err.to_string()))?;
        let entry = state
            .get_mut(&task.id())
            .ok_or(ProjectStoreError::TaskNotFound(task.id()))?;
        *entry = task.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> ProjectStoreResult<Option<Task>> {
        let state = self.state.read().map_err(|err| lock_error(err.to_string()))?;
        Ok(state.get(&id).cloned())
    }

    async fn find_many(&self, ids: &[TaskId]) -> ProjectStoreResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| lock_error(err.to_string()))?;
        Ok(ids.iter().filter_map(|id| state.get(id).cloned()).collect())
    }

    async fn delete_many(&self, ids: &[TaskId]) -> ProjectStoreResult<usize> {
        let mut state = self.state.write().map_err(|err| lock_error(err.to_string()))?;
        let mut removed = 0;
        for id in ids {
            if state.remove(id).is_some() {
                removed += 1;
            }
        }
        Ok(removed)
    }

    async fn tasks_in_project(&self, project: ProjectId) -> ProjectStoreResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| lock_error(err.to_string()))?;
        let mut result: Vec<Task> = state
            .values()
            .filter(|task| task.project() == project)
            .cloned()
            .collect();
        result.sort_by_key(Task::created_at);
        Ok(result)
    }
}
