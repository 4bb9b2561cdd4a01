/// Configuration errors. Always fatal: the run aborts before any item is
/// evaluated.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("config file {path} is not valid TOML: {reason}")]
    Malformed { path: String, reason: String },

    #[error("invalid setting {setting}: {reason}")]
    Invalid { setting: String, reason: String },
}
