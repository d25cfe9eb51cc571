//! Orchestration services for the workflow engine.

mod identity;
mod reminder;
mod scheduler;
mod templates;

pub use identity::{IdentityService, IdentitySyncError, IdentitySyncResult};
pub use reminder::{ReminderError, ReminderResult, ReminderWorkflow};
pub use scheduler::ReminderScheduler;
pub use templates::{EmailTemplates, TaskNotification};
