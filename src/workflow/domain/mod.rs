//! Domain types for the workflow engine.

mod error;
mod event;
mod ids;
mod run;

pub use error::ParseRunStepError;
pub use event::{
    IdentityEvent, OrganizationCreated, OrganizationUpdated, UserPayload,
};
pub use ids::RunId;
pub use run::{PersistedRunData, ReminderRun, RunStep};
