//! Port contracts for workflow persistence and mail delivery.

mod mailer;
mod repository;

pub use mailer::{EmailMessage, Mailer, MailerError};
pub use repository::{ReminderRunRepository, WorkflowStoreError, WorkflowStoreResult};
