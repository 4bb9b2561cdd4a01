/// Push-notification errors. Always non-fatal; the run continues.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("push delivery to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("push endpoint returned HTTP {status}")]
    Status { status: u16 },
}

/// SMTP delivery errors. Always non-fatal; the summary is still reported via
/// whichever channels succeeded.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("cannot connect to mail server {server}: {reason}")]
    Connection { server: String, reason: String },

    #[error("mail server rejected credentials: {reason}")]
    Auth { reason: String },

    #[error("SMTP error: {reason}")]
    Protocol { reason: String },

    #[error("invalid mail address {address}")]
    Address { address: String },

    #[error("mail message could not be assembled: {reason}")]
    Build { reason: String },
}
