use std::path::Path;

use chrono::{DateTime, Utc};
use cull_core::errors::AnchorError;
use cull_core::traits::IAnchorStore;

/// Anchor store backed by a zero-byte marker file per directory.
///
/// The marker's filesystem modification time IS the persisted timestamp:
/// it survives process restarts without a database and disappears together
/// with the media when the item is pruned.
pub struct MarkerAnchorStore {
    marker_name: String,
}

impl MarkerAnchorStore {
    pub fn new(marker_name: impl Into<String>) -> Self {
        Self {
            marker_name: marker_name.into(),
        }
    }

    fn marker_path(&self, dir: &Path) -> std::path::PathBuf {
        dir.join(&self.marker_name)
    }
}

impl IAnchorStore for MarkerAnchorStore {
    fn get(&self, dir: &Path) -> Result<Option<DateTime<Utc>>, AnchorError> {
        let path = self.marker_path(dir);
        let metadata = match std::fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AnchorError::ReadMarker {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })
            }
        };
        let modified = metadata.modified().map_err(|e| AnchorError::ReadMarker {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Some(DateTime::<Utc>::from(modified)))
    }

    fn mark_now(&self, dir: &Path) -> Result<(), AnchorError> {
        let path = self.marker_path(dir);
        // create_new never touches an existing marker, so an anchor can
        // only ever be written once.
        match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
        {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(AnchorError::CreateMarker {
                path: path.display().to_string(),
                reason: e.to_string(),
            }),
        }
    }
}
