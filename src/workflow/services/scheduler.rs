//! Polling scheduler for durable reminder runs.
//!
//! The scheduler is the resumability half of the workflow: it claims
//! runs whose wake time has passed, executes their current step, and
//! persists the transition. Because claims come from the run store, a
//! restarted process picks up exactly where the previous one stopped.
//! Step failures are logged and left in place, so the next poll retries
//! them (at-least-once, step-level idempotency boundary).

use super::reminder::ReminderWorkflow;
use crate::directory::ports::UserRepository;
use crate::project::ports::{ProjectRepository, TaskRepository};
use crate::workflow::ports::{Mailer, ReminderRunRepository, WorkflowStoreResult};
use mockable::Clock;
use std::sync::Arc;
use std::time::Duration;

/// Polls the run store and drives reminder runs forward.
#[derive(Clone)]
pub struct ReminderScheduler<T, P, U, R, M, C>
where
    T: TaskRepository,
    P: ProjectRepository,
    U: UserRepository,
    R: ReminderRunRepository,
    M: Mailer,
    C: Clock + Send + Sync,
{
    workflow: ReminderWorkflow<T, P, U, M, C>,
    runs: Arc<R>,
    clock: Arc<C>,
    poll_interval: Duration,
}

impl<T, P, U, R, M, C> ReminderScheduler<T, P, U, R, M, C>
where
    T: TaskRepository,
    P: ProjectRepository,
    U: UserRepository,
    R: ReminderRunRepository,
    M: Mailer,
    C: Clock + Send + Sync,
{
    /// Creates a new scheduler.
    #[must_use]
    pub const fn new(
        workflow: ReminderWorkflow<T, P, U, M, C>,
        runs: Arc<R>,
        clock: Arc<C>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            workflow,
            runs,
            clock,
            poll_interval,
        }
    }

    /// Claims and executes every due run once, returning how many runs
    /// advanced.
    ///
    /// A failing step is logged and skipped; its run stays due and is
    /// retried on the next poll.
    ///
    /// # Errors
    ///
    /// Returns a store error only when the due-run query itself fails.
    pub async fn poll_once(&self) -> WorkflowStoreResult<usize> {
        let due = self.runs.due(self.clock.utc()).await?;
        let mut advanced = 0;
        for mut run in due {
            match self.workflow.execute(&mut run).await {
                Ok(()) => match self.runs.update(&run).await {
                    Ok(()) => advanced += 1,
                    Err(err) => {
                        tracing::warn!(run = %run.id(), error = %err, "failed to persist run transition");
                    }
                },
                Err(err) => {
                    tracing::warn!(run = %run.id(), error = %err, "reminder step failed, will retry");
                }
            }
        }
        Ok(advanced)
    }

    /// Runs the polling loop until the surrounding task is dropped.
    pub async fn run(&self) {
        let mut interval = tokio::time::interval(self.poll_interval);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            match self.poll_once().await {
                Ok(0) => {}
                Ok(advanced) => tracing::debug!(advanced, "reminder poll advanced runs"),
                Err(err) => tracing::error!(error = %err, "reminder poll failed"),
            }
        }
    }
}
