//! Repository port for durable reminder run persistence.

use crate::workflow::domain::{ReminderRun, RunId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for workflow store operations.
pub type WorkflowStoreResult<T> = Result<T, WorkflowStoreError>;

/// Reminder run persistence contract.
#[async_trait]
pub trait ReminderRunRepository: Send + Sync {
    /// Stores a freshly enqueued run.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowStoreError::DuplicateRun`] when the run
    /// identifier already exists.
    async fn enqueue(&self, run: &ReminderRun) -> WorkflowStoreResult<()>;

    /// Persists a step transition of an existing run.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowStoreError::RunNotFound`] when the run does not
    /// exist.
    async fn update(&self, run: &ReminderRun) -> WorkflowStoreResult<()>;

    /// Returns every non-completed run whose wake time has passed (or
    /// that has never been suspended), oldest first.
    async fn due(&self, now: DateTime<Utc>) -> WorkflowStoreResult<Vec<ReminderRun>>;

    /// Finds a run by identifier.
    ///
    /// Returns `None` when the run does not exist.
    async fn find_by_id(&self, id: RunId) -> WorkflowStoreResult<Option<ReminderRun>>;
}

/// Errors returned by workflow store implementations.
#[derive(Debug, Clone, Error)]
pub enum WorkflowStoreError {
    /// A run with the same identifier already exists.
    #[error("duplicate run identifier: {0}")]
    DuplicateRun(RunId),

    /// The run was not found.
    #[error("run not found: {0}")]
    RunNotFound(RunId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl WorkflowStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
