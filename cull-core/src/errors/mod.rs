mod anchor_error;
mod catalog_error;
mod config_error;
mod notify_error;
mod probe_error;

pub use anchor_error::AnchorError;
pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use notify_error::{MailError, NotifyError};
pub use probe_error::ProbeError;

/// Top-level error for the cull workspace.
///
/// Only `Config` is fatal for a run; every other kind is caught at the item
/// or collaborator boundary, logged, and the pass continues.
#[derive(Debug, thiserror::Error)]
pub enum CullError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Probe(#[from] ProbeError),

    #[error(transparent)]
    Anchor(#[from] AnchorError),

    #[error(transparent)]
    Notify(#[from] NotifyError),

    #[error(transparent)]
    Mail(#[from] MailError),
}

pub type CullResult<T> = Result<T, CullError>;
