//! In-memory reminder run repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::workflow::{
    domain::{ReminderRun, RunId},
    ports::{ReminderRunRepository, WorkflowStoreError, WorkflowStoreResult},
};

/// Thread-safe in-memory reminder run repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReminderRunRepository {
    state: Arc<RwLock<HashMap<RunId, ReminderRun>>>,
}

impl InMemoryReminderRunRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(message: String) -> WorkflowStoreError {
    WorkflowStoreError::persistence(std::io::Error::other(message))
}

#[async_trait]
impl ReminderRunRepository for InMemoryReminderRunRepository {
    async fn enqueue(&self, run: &ReminderRun) -> WorkflowStoreResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(err.to_string()))?;
        if state.contains_key(&run.id()) {
            return Err(WorkflowStoreError::DuplicateRun(run.id()));
        }
        state.insert(run.id(), run.clone());
        Ok(())
    }

    async fn update(&self, run: &ReminderRun) -> WorkflowStoreResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(err.to_string()))?;
        let entry = state
            .get_mut(&run.id())
            .ok_or(WorkflowStoreError::RunNotFound(run.id()))?;
        *entry = run.clone();
        Ok(())
    }

    async fn due(&self, now: DateTime<Utc>) -> WorkflowStoreResult<Vec<ReminderRun>> {
        let state = self.state.read().map_err(|err| lock_error(err.to_string()))?;
        let mut due: Vec<ReminderRun> = state
            .values()
            .filter(|run| run.is_due(now))
            .cloned()
            .collect();
        due.sort_by_key(ReminderRun::created_at);
        Ok(due)
    }

    async fn find_by_id(&self, id: RunId) -> WorkflowStoreResult<Option<ReminderRun>> {
        let state = self.state.read().map_err(|err| lock_error(err.to_string()))?;
        Ok(state.get(&id).cloned())
    }
}
