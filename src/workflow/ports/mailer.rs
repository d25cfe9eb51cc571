//! Outbound email port.

use crate::directory::domain::EmailAddress;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// A rendered email ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// Recipient address.
    pub to: EmailAddress,
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub html_body: String,
}

/// Email delivery contract.
///
/// Delivery is best-effort: the channel reports success or failure and
/// nothing further. The production channel is deployment-specific; tests
/// substitute a recording mailer.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Sends a message.
    ///
    /// # Errors
    ///
    /// Returns [`MailerError`] when the channel rejects the message.
    async fn send(&self, message: &EmailMessage) -> Result<(), MailerError>;
}

/// Errors returned by mail channels.
#[derive(Debug, Clone, Error)]
#[error("failed to send email: {0}")]
pub struct MailerError(Arc<dyn std::error::Error + Send + Sync>);

impl MailerError {
    /// Wraps a channel failure.
    pub fn new(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Arc::new(err))
    }
}
