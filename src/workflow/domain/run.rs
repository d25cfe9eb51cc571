//! Durable reminder workflow run records.

use super::{ParseRunStepError, RunId};
use crate::project::ports::TaskAssignedEvent;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Current step of a reminder run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStep {
    /// Send the assignment email, then decide whether to wait.
    SendAssignment,
    /// Suspended until the task's due date; the wake time is persisted
    /// on the run row.
    AwaitDueDate,
    /// The run has finished; nothing left to execute.
    Completed,
}

impl RunStep {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SendAssignment => "send_assignment",
            Self::AwaitDueDate => "await_due_date",
            Self::Completed => "completed",
        }
    }
}

impl TryFrom<&str> for RunStep {
    type Error = ParseRunStepError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "send_assignment" => Ok(Self::SendAssignment),
            "await_due_date" => Ok(Self::AwaitDueDate),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseRunStepError(value.to_owned())),
        }
    }
}

/// Parameter object for reconstructing a persisted run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedRunData {
    /// Persisted run identifier.
    pub id: RunId,
    /// Persisted step.
    pub step: RunStep,
    /// Persisted wake time, when the run is suspended.
    pub wake_at: Option<DateTime<Utc>>,
    /// Persisted triggering event.
    pub event: TaskAssignedEvent,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest transition timestamp.
    pub updated_at: DateTime<Utc>,
}

/// A durable reminder workflow run.
///
/// The run record is the workflow's only state: which step comes next,
/// when to wake, and the triggering event payload. Because every
/// transition is persisted, a restarted process resumes exactly where
/// the previous one stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderRun {
    id: RunId,
    step: RunStep,
    wake_at: Option<DateTime<Utc>>,
    event: TaskAssignedEvent,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ReminderRun {
    /// Creates a fresh run for a task-assigned event, due immediately.
    #[must_use]
    pub fn new(event: TaskAssignedEvent, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: RunId::new(),
            step: RunStep::SendAssignment,
            wake_at: None,
            event,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a run from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedRunData) -> Self {
        Self {
            id: data.id,
            step: data.step,
            wake_at: data.wake_at,
            event: data.event,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Suspends the run until `wake_at`.
    pub fn suspend_until(&mut self, wake_at: DateTime<Utc>, clock: &impl Clock) {
        self.step = RunStep::AwaitDueDate;
        self.wake_at = Some(wake_at);
        self.updated_at = clock.utc();
    }

    /// Marks the run as finished.
    pub fn complete(&mut self, clock: &impl Clock) {
        self.step = RunStep::Completed;
        self.wake_at = None;
        self.updated_at = clock.utc();
    }

    /// Returns `true` when the run has work to do at `now`.
    #[must_use]
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.step != RunStep::Completed && self.wake_at.is_none_or(|wake_at| wake_at <= now)
    }

    /// Returns the run identifier.
    #[must_use]
    pub const fn id(&self) -> RunId {
        self.id
    }

    /// Returns the current step.
    #[must_use]
    pub const fn step(&self) -> RunStep {
        self.step
    }

    /// Returns the wake time, when the run is suspended.
    #[must_use]
    pub const fn wake_at(&self) -> Option<DateTime<Utc>> {
        self.wake_at
    }

    /// Returns the triggering event.
    #[must_use]
    pub const fn event(&self) -> &TaskAssignedEvent {
        &self.event
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest transition timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
