//! Atelier: workspace, project, and task management service.
//!
//! This crate provides the backend for a project-management product:
//! workspaces (organizations) contain projects, projects contain tasks,
//! tasks carry comments, and membership roles gate who may create or
//! modify what. A durable workflow engine reacts to identity-provider
//! lifecycle events and task assignments, sending notification emails and
//! due-date reminders that survive process restarts.
//!
//! # Architecture
//!
//! Atelier follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, mail, etc.)
//!
//! # Modules
//!
//! - [`directory`]: Users, workspaces, and workspace membership
//! - [`project`]: Projects, tasks, comments, and authorization rules
//! - [`workflow`]: Identity synchronization and durable reminder workflows
//! - [`client`]: Normalized client-side state cache
//! - [`api`]: HTTP surface (axum router, DTOs, error mapping)
//! - [`config`]: Environment-derived runtime configuration

pub mod api;
pub mod client;
pub mod config;
pub mod directory;
pub mod project;
pub mod workflow;
