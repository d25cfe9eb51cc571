//! Mail channel that logs instead of delivering.
//!
//! Stands in for the deployment's real email channel in development and
//! demo environments.

use crate::workflow::ports::{EmailMessage, Mailer, MailerError};
use async_trait::async_trait;

/// Mailer that records sends to the log and always succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMailer;

impl LogMailer {
    /// Creates a logging mailer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), MailerError> {
        tracing::info!(
            to = %message.to,
            subject = %message.subject,
            bytes = message.html_body.len(),
            "email send (log channel)"
        );
        Ok(())
    }
}
