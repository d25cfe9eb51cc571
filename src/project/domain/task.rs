//! Task aggregate root and related task value types.

use super::{
    ParseTaskKindError, ParseTaskStatusError, Priority, ProjectDomainError, ProjectId, TaskId,
};
use crate::directory::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Work has not started.
    Todo,
    /// Work is in progress.
    InProgress,
    /// Work is finished; no reminder is sent for done tasks.
    Done,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::InProgress => "IN_PROGRESS",
            Self::Done => "DONE",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "TODO" => Ok(Self::Todo),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "DONE" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Category of work a task represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskKind {
    /// New functionality.
    Feature,
    /// Defect fix.
    Bug,
    /// Maintenance or housekeeping.
    Chore,
}

impl TaskKind {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Feature => "FEATURE",
            Self::Bug => "BUG",
            Self::Chore => "CHORE",
        }
    }
}

impl TryFrom<&str> for TaskKind {
    type Error = ParseTaskKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "FEATURE" => Ok(Self::Feature),
            "BUG" => Ok(Self::Bug),
            "CHORE" => Ok(Self::Chore),
            _ => Err(ParseTaskKindError(value.to_owned())),
        }
    }
}

/// Parameter object for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Owning project.
    pub project: ProjectId,
    /// Task title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Category of work.
    pub kind: TaskKind,
    /// Initial status.
    pub status: TaskStatus,
    /// Initial priority.
    pub priority: Priority,
    /// Assignee, who must be a member of the owning project.
    pub assignee: Option<UserId>,
    /// Optional due timestamp.
    pub due_date: Option<DateTime<Utc>>,
}

/// Allow-listed partial update of a task.
///
/// Absent fields are left unchanged. The owning project and identifier
/// are deliberately not part of the patch surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New category.
    pub kind: Option<TaskKind>,
    /// New status.
    pub status: Option<TaskStatus>,
    /// New priority.
    pub priority: Option<Priority>,
    /// New assignee; must be a member of the owning project.
    pub assignee: Option<UserId>,
    /// New due timestamp.
    pub due_date: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owning project.
    pub project: ProjectId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: Option<String>,
    /// Persisted category.
    pub kind: TaskKind,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted assignee.
    pub assignee: Option<UserId>,
    /// Persisted due timestamp.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    project: ProjectId,
    title: String,
    description: Option<String>,
    kind: TaskKind,
    status: TaskStatus,
    priority: Priority,
    assignee: Option<UserId>,
    due_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task from a draft.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyTaskTitle`] when the title is
    /// blank.
    pub fn create(draft: TaskDraft, clock: &impl Clock) -> Result<Self, ProjectDomainError> {
        if draft.title.trim().is_empty() {
            return Err(ProjectDomainError::EmptyTaskTitle);
        }
        let timestamp = clock.utc();
        Ok(Self {
            id: TaskId::new(),
            project: draft.project,
            title: draft.title,
            description: draft.description,
            kind: draft.kind,
            status: draft.status,
            priority: draft.priority,
            assignee: draft.assignee,
            due_date: draft.due_date,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            project: data.project,
            title: data.title,
            description: data.description,
            kind: data.kind,
            status: data.status,
            priority: data.priority,
            assignee: data.assignee,
            due_date: data.due_date,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Applies an allow-listed patch, leaving absent fields unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyTaskTitle`] when a new title is
    /// given but blank.
    pub fn apply_patch(
        &mut self,
        patch: TaskPatch,
        clock: &impl Clock,
    ) -> Result<(), ProjectDomainError> {
        if let Some(title) = patch.title {
            if title.trim().is_empty() {
                return Err(ProjectDomainError::EmptyTaskTitle);
            }
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(assignee) = patch.assignee {
            self.assignee = Some(assignee);
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = Some(due_date);
        }
        self.updated_at = clock.utc();
        Ok(())
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning project identifier.
    #[must_use]
    pub const fn project(&self) -> ProjectId {
        self.project
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, when one is set.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the category of work.
    #[must_use]
    pub const fn kind(&self) -> TaskKind {
        self.kind
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns `true` when the task is finished.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the assignee's user identifier, when one is set.
    #[must_use]
    pub const fn assignee(&self) -> Option<&UserId> {
        self.assignee.as_ref()
    }

    /// Returns the due timestamp, when one is set.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
