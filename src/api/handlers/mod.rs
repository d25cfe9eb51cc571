//! Request handlers, grouped by resource.

pub mod comments;
pub mod events;
pub mod projects;
pub mod tasks;
pub mod workspaces;
