//! Event-driven workflow engine.
//!
//! Two event classes flow through this context: identity-provider
//! lifecycle events, applied 1:1 to the directory, and task-assigned
//! events, which start a durable three-step reminder workflow (send the
//! assignment email, suspend until the due date, recheck and maybe send a
//! reminder). Suspension state lives in persisted run records, so waits
//! survive process restarts; a polling scheduler claims runs whose wake
//! time has passed. The module follows hexagonal architecture:
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
