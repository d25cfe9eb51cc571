//! Project aggregate root, membership rows, and related value types.

use super::{
    ParsePriorityError, ParseProjectStatusError, ProjectDomainError, ProjectId,
};
use crate::directory::domain::{UserId, WorkspaceId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Project lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    /// Scoping and planning, no work started.
    Planning,
    /// Work is in progress.
    Active,
    /// Work is temporarily paused.
    OnHold,
    /// All work is finished.
    Completed,
}

impl ProjectStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planning => "PLANNING",
            Self::Active => "ACTIVE",
            Self::OnHold => "ON_HOLD",
            Self::Completed => "COMPLETED",
        }
    }
}

impl TryFrom<&str> for ProjectStatus {
    type Error = ParseProjectStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "PLANNING" => Ok(Self::Planning),
            "ACTIVE" => Ok(Self::Active),
            "ON_HOLD" => Ok(Self::OnHold),
            "COMPLETED" => Ok(Self::Completed),
            _ => Err(ParseProjectStatusError(value.to_owned())),
        }
    }
}

/// Priority level shared by projects and tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Normal urgency.
    Medium,
    /// Needs attention first.
    High,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "LOW" => Ok(Self::Low),
            "MEDIUM" => Ok(Self::Medium),
            "HIGH" => Ok(Self::High),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

/// Completion percentage clamped to 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Progress(u8);

impl Progress {
    /// Creates a validated progress value.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::ProgressOutOfRange`] when the value
    /// exceeds 100.
    pub const fn new(percent: u8) -> Result<Self, ProjectDomainError> {
        if percent > 100 {
            return Err(ProjectDomainError::ProgressOutOfRange(percent as i16));
        }
        Ok(Self(percent))
    }

    /// Reconstructs a progress value from its persisted form.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::ProgressOutOfRange`] when the stored
    /// value is outside 0..=100.
    pub fn from_persisted(value: i16) -> Result<Self, ProjectDomainError> {
        u8::try_from(value)
            .ok()
            .filter(|percent| *percent <= 100)
            .map(Self)
            .ok_or(ProjectDomainError::ProgressOutOfRange(value))
    }

    /// Returns the percentage as an integer in 0..=100.
    #[must_use]
    pub const fn percent(self) -> u8 {
        self.0
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self(0)
    }
}

/// A user's membership in a project's team.
///
/// Project members are always a subset of the owning workspace's members,
/// chosen explicitly at project creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMember {
    project: ProjectId,
    user: UserId,
}

impl ProjectMember {
    /// Creates a project membership row.
    #[must_use]
    pub const fn new(project: ProjectId, user: UserId) -> Self {
        Self { project, user }
    }

    /// Returns the project this membership belongs to.
    #[must_use]
    pub const fn project(&self) -> ProjectId {
        self.project
    }

    /// Returns the member's user identifier.
    #[must_use]
    pub const fn user(&self) -> &UserId {
        &self.user
    }
}

/// Parameter object for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    /// Owning workspace.
    pub workspace: WorkspaceId,
    /// Project name.
    pub name: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Initial status.
    pub status: ProjectStatus,
    /// Initial priority.
    pub priority: Priority,
    /// Initial completion percentage.
    pub progress: Progress,
    /// Team lead, when one was resolved.
    pub team_lead: Option<UserId>,
    /// Optional start timestamp.
    pub start_date: Option<DateTime<Utc>>,
    /// Optional end timestamp.
    pub end_date: Option<DateTime<Utc>>,
}

/// Full replacement of a project's mutable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectUpdate {
    /// New project name.
    pub name: String,
    /// New description, replacing the old one entirely.
    pub description: Option<String>,
    /// New status.
    pub status: ProjectStatus,
    /// New priority.
    pub priority: Priority,
    /// New completion percentage.
    pub progress: Progress,
    /// New start timestamp, replacing the old one entirely.
    pub start_date: Option<DateTime<Utc>>,
    /// New end timestamp, replacing the old one entirely.
    pub end_date: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted project aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Persisted project identifier.
    pub id: ProjectId,
    /// Persisted owning workspace.
    pub workspace: WorkspaceId,
    /// Persisted name.
    pub name: String,
    /// Persisted description.
    pub description: Option<String>,
    /// Persisted status.
    pub status: ProjectStatus,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted completion percentage.
    pub progress: Progress,
    /// Persisted team lead.
    pub team_lead: Option<UserId>,
    /// Persisted start timestamp.
    pub start_date: Option<DateTime<Utc>>,
    /// Persisted end timestamp.
    pub end_date: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Project aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    workspace: WorkspaceId,
    name: String,
    description: Option<String>,
    status: ProjectStatus,
    priority: Priority,
    progress: Progress,
    team_lead: Option<UserId>,
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new project from a draft.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyProjectName`] when the name is
    /// blank.
    pub fn create(draft: ProjectDraft, clock: &impl Clock) -> Result<Self, ProjectDomainError> {
        if draft.name.trim().is_empty() {
            return Err(ProjectDomainError::EmptyProjectName);
        }
        let timestamp = clock.utc();
        Ok(Self {
            id: ProjectId::new(),
            workspace: draft.workspace,
            name: draft.name,
            description: draft.description,
            status: draft.status,
            priority: draft.priority,
            progress: draft.progress,
            team_lead: draft.team_lead,
            start_date: draft.start_date,
            end_date: draft.end_date,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        Self {
            id: data.id,
            workspace: data.workspace,
            name: data.name,
            description: data.description,
            status: data.status,
            priority: data.priority,
            progress: data.progress,
            team_lead: data.team_lead,
            start_date: data.start_date,
            end_date: data.end_date,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Replaces the mutable fields with the given update.
    ///
    /// The owning workspace, identifier, and team lead are deliberately
    /// not updatable through this path.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyProjectName`] when the new name
    /// is blank.
    pub fn apply_update(
        &mut self,
        update: ProjectUpdate,
        clock: &impl Clock,
    ) -> Result<(), ProjectDomainError> {
        if update.name.trim().is_empty() {
            return Err(ProjectDomainError::EmptyProjectName);
        }
        self.name = update.name;
        self.description = update.description;
        self.status = update.status;
        self.priority = update.priority;
        self.progress = update.progress;
        self.start_date = update.start_date;
        self.end_date = update.end_date;
        self.updated_at = clock.utc();
        Ok(())
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the owning workspace identifier.
    #[must_use]
    pub const fn workspace(&self) -> &WorkspaceId {
        &self.workspace
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description, when one is set.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the completion percentage.
    #[must_use]
    pub const fn progress(&self) -> Progress {
        self.progress
    }

    /// Returns the team lead's user identifier, when one is set.
    #[must_use]
    pub const fn team_lead(&self) -> Option<&UserId> {
        self.team_lead.as_ref()
    }

    /// Returns the start timestamp, when one is set.
    #[must_use]
    pub const fn start_date(&self) -> Option<DateTime<Utc>> {
        self.start_date
    }

    /// Returns the end timestamp, when one is set.
    #[must_use]
    pub const fn end_date(&self) -> Option<DateTime<Utc>> {
        self.end_date
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
