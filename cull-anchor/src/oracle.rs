use chrono::{DateTime, Utc};
use cull_core::errors::AnchorError;
use cull_core::library::TrackedItem;
use cull_core::traits::IAnchorStore;

use crate::scan;

/// Result of observing an item's folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    /// When the item became fully available.
    pub anchor: DateTime<Utc>,
    /// True the one time the marker was just created; the caller emits the
    /// NEW/COMPLETE notification on this edge.
    pub first_observation: bool,
}

/// Derives an item's age anchor from its on-disk state.
///
/// For a movie the anchor is the first time a monitored media file was seen
/// in its folder; for a season, the first time every expected episode file
/// was present. `None` means there is nothing to age yet: the item is
/// missing (movie) or incomplete (season) and is re-examined next run.
pub struct TimestampOracle<'a> {
    store: &'a dyn IAnchorStore,
    extensions: &'a [String],
}

impl<'a> TimestampOracle<'a> {
    pub fn new(store: &'a dyn IAnchorStore, extensions: &'a [String]) -> Self {
        Self { store, extensions }
    }

    pub fn observe(&self, item: &TrackedItem) -> Result<Option<Observation>, AnchorError> {
        if !item.is_complete() {
            return Ok(None);
        }

        let dir = item.media_dir();
        if scan::find_media_file(&dir, self.extensions)?.is_none() {
            return Ok(None);
        }

        if let Some(anchor) = self.store.get(&dir)? {
            return Ok(Some(Observation {
                anchor,
                first_observation: false,
            }));
        }

        self.store.mark_now(&dir)?;
        let anchor = self.store.get(&dir)?.ok_or_else(|| AnchorError::ReadMarker {
            path: dir.display().to_string(),
            reason: "marker missing immediately after creation".to_string(),
        })?;

        Ok(Some(Observation {
            anchor,
            first_observation: true,
        }))
    }
}
