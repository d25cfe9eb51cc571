//! In-memory workflow adapters for tests and local development.

mod mailer;
mod runs;

pub use mailer::RecordingMailer;
pub use runs::InMemoryReminderRunRepository;
