//! Orchestration services for the directory context.

mod membership;

pub use membership::{AddMemberRequest, MembershipError, MembershipResult, MembershipService};
