//! Recording mailer for tests.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::workflow::ports::{EmailMessage, Mailer, MailerError};

/// Mailer that records sent messages in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<RwLock<Vec<EmailMessage>>>,
}

impl RecordingMailer {
    /// Creates an empty recording mailer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the messages sent so far.
    ///
    /// # Errors
    ///
    /// Returns [`MailerError`] when the record lock is poisoned.
    pub fn sent(&self) -> Result<Vec<EmailMessage>, MailerError> {
        self.sent
            .read()
            .map(|sent| sent.clone())
            .map_err(|err| MailerError::new(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), MailerError> {
        self.sent
            .write()
            .map_err(|err| MailerError::new(std::io::Error::other(err.to_string())))?
            .push(message.clone());
        Ok(())
    }
}
