//! Service layer for task creation, patching, and batch deletion.

use crate::directory::domain::UserId;
use crate::project::{
    domain::{
        Project, ProjectDomainError, ProjectId, Task, TaskDraft, TaskId, TaskPatch,
        can_manage_task,
    },
    ports::{
        ProjectRepository, ProjectStoreError, TaskAssignedEvent, TaskEvents, TaskEventsError,
        TaskRepository,
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Validation(#[from] ProjectDomainError),

    /// The target project does not exist.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// The target task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// A batch operation matched no existing tasks.
    #[error("no tasks matched the given identifiers")]
    NoTasksMatched,

    /// A batch operation referenced tasks from more than one project.
    #[error("task identifiers span multiple projects")]
    MixedProjects,

    /// The acting user is not the project's team lead.
    #[error("user {0} does not have team lead privileges for this project")]
    NotTeamLead(UserId),

    /// The requested assignee is not a member of the project's team.
    #[error("assignee {0} is not in the project team")]
    AssigneeNotMember(UserId),

    /// Event publication failed.
    #[error(transparent)]
    Events(#[from] TaskEventsError),

    /// Project store operation failed.
    #[error(transparent)]
    Store(#[from] ProjectStoreError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
pub struct TaskService<P, T, E, C>
where
    P: ProjectRepository,
    T: TaskRepository,
    E: TaskEvents,
    C: Clock + Send + Sync,
{
    projects: Arc<P>,
    tasks: Arc<T>,
    events: Arc<E>,
    clock: Arc<C>,
}

impl<P, T, E, C> Clone for TaskService<P, T, E, C>
where
    P: ProjectRepository,
    T: TaskRepository,
    E: TaskEvents,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            projects: Arc::clone(&self.projects),
            tasks: Arc::clone(&self.tasks),
            events: Arc::clone(&self.events),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<P, T, E, C> TaskService<P, T, E, C>
where
    P: ProjectRepository,
    T: TaskRepository,
    E: TaskEvents,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(projects: Arc<P>, tasks: Arc<T>, events: Arc<E>, clock: Arc<C>) -> Self {
        Self {
            projects,
            tasks,
            events,
            clock,
        }
    }

    /// Creates a task on behalf of `actor` and publishes a task-assigned
    /// event for the workflow engine.
    ///
    /// Only the project's team lead may create tasks; the assignee, when
    /// given, must be a member of the project's team at assignment time.
    /// The response does not wait for notification delivery — the event
    /// sink records the event durably and the reminder workflow picks it
    /// up asynchronously.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when the project is missing, the
    /// actor is not the team lead, the assignee is outside the team,
    /// validation fails, or persistence fails.
    pub async fn create_task(
        &self,
        actor: &UserId,
        draft: TaskDraft,
        origin: Option<String>,
    ) -> TaskServiceResult<Task> {
        let project = self
            .projects
            .find_by_id(draft.project)
            .await?
            .ok_or(TaskServiceError::ProjectNotFound(draft.project))?;
        self.require_team_lead(&project, actor)?;

        if let Some(assignee) = &draft.assignee {
            let members = self.projects.members_of(project.id()).await?;
            if !members.iter().any(|member| member.user() == assignee) {
                return Err(TaskServiceError::AssigneeNotMember(assignee.clone()));
            }
        }

        let task = Task::create(draft, &*self.clock)?;
        self.tasks.insert(&task).await?;
        self.events
            .task_assigned(TaskAssignedEvent {
                task: task.id(),
                origin,
            })
            .await?;
        Ok(task)
    }

    /// Applies an allow-listed patch to a task on behalf of `actor`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when the task or its project is
    /// missing, the actor is not the team lead, a patched assignee is
    /// outside the team, validation fails, or persistence fails.
    pub async fn update_task(
        &self,
        actor: &UserId,
        task_id: TaskId,
        patch: TaskPatch,
    ) -> TaskServiceResult<Task> {
        let mut task = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or(TaskServiceError::TaskNotFound(task_id))?;
        let project = self
            .projects
            .find_by_id(task.project())
            .await?
            .ok_or(TaskServiceError::ProjectNotFound(task.project()))?;
        self.require_team_lead(&project, actor)?;

        if let Some(assignee) = &patch.assignee {
            let members = self.projects.members_of(project.id()).await?;
            if !members.iter().any(|member| member.user() == assignee) {
                return Err(TaskServiceError::AssigneeNotMember(assignee.clone()));
            }
        }

        task.apply_patch(patch, &*self.clock)?;
        self.tasks.update(&task).await?;
        Ok(task)
    }

    /// Deletes a batch of tasks on behalf of `actor`.
    ///
    /// All identifiers must belong to the same project; mixed-project
    /// batches are rejected before any row is touched. An empty batch,
    /// or one matching no existing rows, is reported as not found rather
    /// than silently succeeding.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when no tasks match, the batch spans
    /// projects, the actor is not the team lead, or persistence fails.
    pub async fn delete_tasks(
        &self,
        actor: &UserId,
        task_ids: &[TaskId],
    ) -> TaskServiceResult<usize> {
        if task_ids.is_empty() {
            return Err(TaskServiceError::NoTasksMatched);
        }
        let tasks = self.tasks.find_many(task_ids).await?;
        let Some(first) = tasks.first() else {
            return Err(TaskServiceError::NoTasksMatched);
        };
        let project_id = first.project();
        if tasks.iter().any(|task| task.project() != project_id) {
            return Err(TaskServiceError::MixedProjects);
        }

        let project = self
            .projects
            .find_by_id(project_id)
            .await?
            .ok_or(TaskServiceError::ProjectNotFound(project_id))?;
        self.require_team_lead(&project, actor)?;

        let found: Vec<TaskId> = tasks.iter().map(Task::id).collect();
        Ok(self.tasks.delete_many(&found).await?)
    }

    fn require_team_lead(&self, project: &Project, actor: &UserId) -> TaskServiceResult<()> {
        if can_manage_task(project, actor) {
            Ok(())
        } else {
            Err(TaskServiceError::NotTeamLead(actor.clone()))
        }
    }
}
