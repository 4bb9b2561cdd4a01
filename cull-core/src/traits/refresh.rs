use crate::errors::CatalogError;

/// Downstream library-refresh call fired after the pass. A failed trigger is
/// logged and never fails the run.
pub trait IRefreshTrigger: Send + Sync {
    /// Display name for log lines.
    fn name(&self) -> &str;

    fn trigger(&self) -> Result<(), CatalogError>;
}
