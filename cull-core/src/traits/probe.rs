use std::path::Path;

use crate::errors::ProbeError;

/// Disk-utilization probe for the disk-aware variant.
pub trait IDiskProbe: Send + Sync {
    /// Percentage (0-100) of the filesystem holding `path` that is in use.
    fn usage_percent(&self, path: &Path) -> Result<f64, ProbeError>;
}
