//! In-memory project repositories and event sinks for tests and local
//! development.

mod comments;
mod events;
mod projects;
mod tasks;

pub use comments::InMemoryCommentRepository;
pub use events::RecordingTaskEvents;
pub use projects::InMemoryProjectRepository;
pub use tasks::InMemoryTaskRepository;
