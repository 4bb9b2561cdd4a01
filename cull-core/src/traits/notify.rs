use std::path::Path;

use crate::errors::{MailError, NotifyError};

/// Best-effort push channel. Failures must never abort the run.
pub trait INotifier: Send + Sync {
    fn send(&self, message: &str) -> Result<(), NotifyError>;
}

/// End-of-run summary mailer.
pub trait IMailer: Send + Sync {
    fn send(
        &self,
        subject: &str,
        body: &str,
        attachment: Option<&Path>,
        recipients: &[String],
    ) -> Result<(), MailError>;
}
