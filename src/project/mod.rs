//! Projects, tasks, comments, and the authorization rules that gate them.
//!
//! A project belongs to exactly one workspace and carries an explicit
//! member subset plus an optional team lead; tasks belong to projects and
//! may be assigned to project members; comments belong to tasks. Mutation
//! rights follow the workspace-admin / team-lead rules in
//! [`domain::authorization`]. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
