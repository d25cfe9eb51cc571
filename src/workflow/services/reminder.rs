//! The durable task-assignment reminder workflow.
//!
//! Step one sends the assignment email and decides whether to suspend;
//! step two fires after the due date, rechecks the task, and sends a
//! reminder unless the task is done or gone. Every step is re-executable
//! from its own start: the scheduler persists the run only after a step
//! succeeds, so a crashed step is simply retried on the next poll.

use super::templates::{EmailTemplates, TaskNotification};
use crate::directory::{
    domain::User,
    ports::{DirectoryRepositoryError, UserRepository},
};
use crate::project::{
    domain::Task,
    ports::{ProjectRepository, ProjectStoreError, TaskRepository},
};
use crate::workflow::{
    domain::{ReminderRun, RunStep},
    ports::{EmailMessage, Mailer, MailerError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while executing a reminder run step.
#[derive(Debug, Error)]
pub enum ReminderError {
    /// Task or project lookup failed.
    #[error(transparent)]
    Store(#[from] ProjectStoreError),

    /// User lookup failed.
    #[error(transparent)]
    Directory(#[from] DirectoryRepositoryError),

    /// Mail delivery failed.
    #[error(transparent)]
    Mail(#[from] MailerError),

    /// Template rendering failed.
    #[error(transparent)]
    Template(#[from] minijinja::Error),
}

/// Result type for reminder workflow execution.
pub type ReminderResult<T> = Result<T, ReminderError>;

/// Executes reminder run steps.
#[derive(Clone)]
pub struct ReminderWorkflow<T, P, U, M, C>
where
    T: TaskRepository,
    P: ProjectRepository,
    U: UserRepository,
    M: Mailer,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    projects: Arc<P>,
    users: Arc<U>,
    mailer: Arc<M>,
    templates: EmailTemplates,
    clock: Arc<C>,
}

impl<T, P, U, M, C> ReminderWorkflow<T, P, U, M, C>
where
    T: TaskRepository,
    P: ProjectRepository,
    U: UserRepository,
    M: Mailer,
    C: Clock + Send + Sync,
{
    /// Creates a new reminder workflow executor.
    #[must_use]
    pub const fn new(
        tasks: Arc<T>,
        projects: Arc<P>,
        users: Arc<U>,
        mailer: Arc<M>,
        templates: EmailTemplates,
        clock: Arc<C>,
    ) -> Self {
        Self {
            tasks,
            projects,
            users,
            mailer,
            templates,
            clock,
        }
    }

    /// Executes the run's current step, mutating the run to its next
    /// state. The caller persists the mutated run.
    ///
    /// A missing task, assignee, or project completes the run silently:
    /// workflow cancellation is not supported, so deletions after
    /// scheduling degrade gracefully instead of erroring.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderError`] when a lookup, render, or send fails;
    /// the run is left unchanged so the step retries on the next poll.
    pub async fn execute(&self, run: &mut ReminderRun) -> ReminderResult<()> {
        match run.step() {
            RunStep::SendAssignment => self.send_assignment(run).await,
            RunStep::AwaitDueDate => self.recheck_and_remind(run).await,
            RunStep::Completed => Ok(()),
        }
    }

    async fn send_assignment(&self, run: &mut ReminderRun) -> ReminderResult<()> {
        let Some(context) = self.load_notification_context(run).await? else {
            run.complete(&*self.clock);
            return Ok(());
        };
        let NotificationContext {
            task,
            assignee,
            project_name,
        } = context;

        let notification = TaskNotification {
            assignee_name: assignee.name(),
            task_title: task.title(),
            project_name: &project_name,
            due_date: task
                .due_date()
                .map(|due| due.format("%Y-%m-%d").to_string()),
            origin: run.event().origin.as_deref(),
        };
        let message = EmailMessage {
            to: assignee.email().clone(),
            subject: EmailTemplates::assignment_subject(&project_name),
            html_body: self.templates.render_assignment(&notification)?,
        };
        self.mailer.send(&message).await?;
        tracing::info!(task = %task.id(), to = %message.to, "assignment email sent");

        // A task due on the day of assignment gets no separate reminder;
        // anything later suspends the run until the due timestamp.
        let today = self.clock.utc().date_naive();
        match task.due_date() {
            Some(due) if due.date_naive() != today => {
                run.suspend_until(due, &*self.clock);
                tracing::debug!(task = %task.id(), wake_at = %due, "run suspended until due date");
            }
            _ => run.complete(&*self.clock),
        }
        Ok(())
    }

    async fn recheck_and_remind(&self, run: &mut ReminderRun) -> ReminderResult<()> {
        let Some(context) = self.load_notification_context(run).await? else {
            run.complete(&*self.clock);
            return Ok(());
        };
        let NotificationContext {
            task,
            assignee,
            project_name,
        } = context;

        if task.is_done() {
            run.complete(&*self.clock);
            return Ok(());
        }

        let notification = TaskNotification {
            assignee_name: assignee.name(),
            task_title: task.title(),
            project_name: &project_name,
            due_date: task
                .due_date()
                .map(|due| due.format("%Y-%m-%d").to_string()),
            origin: run.event().origin.as_deref(),
        };
        let message = EmailMessage {
            to: assignee.email().clone(),
            subject: EmailTemplates::reminder_subject(task.title(), &project_name),
            html_body: self.templates.render_reminder(&notification)?,
        };
        self.mailer.send(&message).await?;
        tracing::info!(task = %task.id(), to = %message.to, "reminder email sent");
        run.complete(&*self.clock);
        Ok(())
    }

    /// Loads the task, assignee, and project name behind a run.
    ///
    /// Returns `None` when any of them no longer exists, which completes
    /// the run without mail.
    async fn load_notification_context(
        &self,
        run: &ReminderRun,
    ) -> ReminderResult<Option<NotificationContext>> {
        let Some(task) = self.tasks.find_by_id(run.event().task).await? else {
            tracing::debug!(run = %run.id(), "task gone, completing run");
            return Ok(None);
        };
        let Some(assignee_id) = task.assignee() else {
            tracing::debug!(task = %task.id(), "task has no assignee, completing run");
            return Ok(None);
        };
        let Some(assignee) = self.users.find_by_id(assignee_id).await? else {
            tracing::warn!(task = %task.id(), "assignee user gone, completing run");
            return Ok(None);
        };
        let Some(project) = self.projects.find_by_id(task.project()).await? else {
            tracing::warn!(task = %task.id(), "owning project gone, completing run");
            return Ok(None);
        };
        let project_name = project.name().to_owned();
        Ok(Some(NotificationContext {
            task,
            assignee,
            project_name,
        }))
    }
}

struct NotificationContext {
    task: Task,
    assignee: User,
    project_name: String,
}
