/// Disk-usage probe errors. Never fatal: a failed probe fails open to
/// "not under pressure" so it can never itself trigger a deletion.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("no mounted filesystem covers {path}")]
    MountNotFound { path: String },

    #[error("disk statistics unavailable for {path}: {reason}")]
    Unavailable { path: String, reason: String },
}
