//! Task-event sink that enqueues durable reminder runs.
//!
//! This is the production implementation of the project context's
//! [`TaskEvents`] port: publishing a task-assigned event means persisting
//! a fresh run record for the scheduler to pick up. Durability comes from
//! the run store, not from an in-process queue.

use crate::project::ports::{TaskAssignedEvent, TaskEvents, TaskEventsError};
use crate::workflow::{domain::ReminderRun, ports::ReminderRunRepository};
use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;

/// Event sink backed by the reminder run store.
#[derive(Clone)]
pub struct ReminderEnqueueSink<R, C>
where
    R: ReminderRunRepository,
    C: Clock + Send + Sync,
{
    runs: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> ReminderEnqueueSink<R, C>
where
    R: ReminderRunRepository,
    C: Clock + Send + Sync,
{
    /// Creates a sink that enqueues into the given run store.
    #[must_use]
    pub const fn new(runs: Arc<R>, clock: Arc<C>) -> Self {
        Self { runs, clock }
    }
}

#[async_trait]
impl<R, C> TaskEvents for ReminderEnqueueSink<R, C>
where
    R: ReminderRunRepository,
    C: Clock + Send + Sync,
{
    async fn task_assigned(&self, event: TaskAssignedEvent) -> Result<(), TaskEventsError> {
        let run = ReminderRun::new(event, &*self.clock);
        self.runs
            .enqueue(&run)
            .await
            .map_err(TaskEventsError::new)?;
        tracing::debug!(run = %run.id(), task = %run.event().task, "reminder run enqueued");
        Ok(())
    }
}
