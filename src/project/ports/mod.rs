//! Port contracts for project persistence and event publication.

mod events;
mod repository;

pub use events::{TaskAssignedEvent, TaskEvents, TaskEventsError};
pub use repository::{
    CommentRepository, ProjectRepository, ProjectStoreError, ProjectStoreResult, TaskRepository,
};
