use std::path::Path;

use cull_core::errors::ProbeError;
use cull_core::traits::IDiskProbe;
use sysinfo::Disks;

/// Disk probe backed by the mounted-filesystem list.
pub struct SystemDiskProbe;

impl IDiskProbe for SystemDiskProbe {
    fn usage_percent(&self, path: &Path) -> Result<f64, ProbeError> {
        let disks = Disks::new_with_refreshed_list();

        // The mount covering `path` is the one with the longest mount point
        // that prefixes it.
        let covering = disks
            .list()
            .iter()
            .filter(|d| path.starts_with(d.mount_point()))
            .max_by_key(|d| d.mount_point().as_os_str().len())
            .ok_or_else(|| ProbeError::MountNotFound {
                path: path.display().to_string(),
            })?;

        let total = covering.total_space();
        if total == 0 {
            return Err(ProbeError::Unavailable {
                path: path.display().to_string(),
                reason: "filesystem reports zero total space".to_string(),
            });
        }

        let used = total.saturating_sub(covering.available_space());
        Ok(used as f64 / total as f64 * 100.0)
    }
}
