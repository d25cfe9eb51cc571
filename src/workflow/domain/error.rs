//! Error types for workflow domain parsing.

use thiserror::Error;

/// Error returned while parsing run steps from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown run step: {0}")]
pub struct ParseRunStepError(pub String);
