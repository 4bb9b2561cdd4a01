use std::path::Path;

use chrono::{DateTime, Utc};

use crate::errors::AnchorError;

/// Persistence seam for age anchors.
///
/// The production store keeps a zero-byte marker file per directory and reads
/// its modification time back; tests fake this without touching a disk.
pub trait IAnchorStore: Send + Sync {
    /// The anchor recorded for `dir`, if one exists.
    fn get(&self, dir: &Path) -> Result<Option<DateTime<Utc>>, AnchorError>;

    /// Record "first observed now" for `dir`. Must not rewrite an existing
    /// anchor.
    fn mark_now(&self, dir: &Path) -> Result<(), AnchorError>;
}
