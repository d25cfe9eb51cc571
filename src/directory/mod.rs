//! Directory of users, workspaces, and workspace membership.
//!
//! User and workspace records are owned by the external identity provider
//! and reach this context only through lifecycle events applied by the
//! workflow engine; membership rows are managed directly by the
//! [`services::MembershipService`]. The module follows hexagonal
//! architecture:
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
