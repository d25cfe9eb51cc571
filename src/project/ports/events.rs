//! Outbound event port for task lifecycle notifications.

use crate::project::domain::TaskId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Event published when a task has been created and possibly assigned.
///
/// The `origin` is the requesting client's origin URL, captured so
/// notification emails can link back to the task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskAssignedEvent {
    /// The task that was created.
    pub task: TaskId,
    /// Origin URL of the request that created the task, when known.
    pub origin: Option<String>,
}

/// Publication contract for task events.
///
/// The production implementation enqueues a durable workflow run; tests
/// substitute a recording sink. Passing the sink in as a collaborator
/// (rather than a process-global bus) keeps the domain service free of
/// ambient state.
#[async_trait]
pub trait TaskEvents: Send + Sync {
    /// Publishes a task-assigned event.
    ///
    /// # Errors
    ///
    /// Returns [`TaskEventsError`] when the event could not be recorded
    /// durably.
    async fn task_assigned(&self, event: TaskAssignedEvent) -> Result<(), TaskEventsError>;
}

/// Errors returned by task event sinks.
#[derive(Debug, Clone, Error)]
#[error("failed to publish task event: {0}")]
pub struct TaskEventsError(Arc<dyn std::error::Error + Send + Sync>);

impl TaskEventsError {
    /// Wraps a sink failure.
    pub fn new(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Arc::new(err))
    }
}
