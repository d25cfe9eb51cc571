//! Recording event sink for tests.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::project::ports::{TaskAssignedEvent, TaskEvents, TaskEventsError};

/// Event sink that records published events in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingTaskEvents {
    events: Arc<RwLock<Vec<TaskAssignedEvent>>>,
}

impl RecordingTaskEvents {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the events published so far.
    ///
    /// # Errors
    ///
    /// Returns [`TaskEventsError`] when the record lock is poisoned.
    pub fn published(&self) -> Result<Vec<TaskAssignedEvent>, TaskEventsError> {
        self.events
            .read()
            .map(|events| events.clone())
            .map_err(|err| TaskEventsError::new(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl TaskEvents for RecordingTaskEvents {
    async fn task_assigned(&self, event: TaskAssignedEvent) -> Result<(), TaskEventsError> {
        self.events
            .write()
            .map_err(|err| TaskEventsError::new(std::io::Error::other(err.to_string())))?
            .push(event);
        Ok(())
    }
}
