use std::path::PathBuf;

use crate::errors::CatalogError;
use crate::library::{Tag, TrackedItem};

/// The media-manager client the retention pass depends on.
///
/// `list_items` failing is fatal for the run; `delete_item` failing is a
/// per-item error the orchestrator logs and skips past.
pub trait ICatalogClient: Send + Sync {
    /// All evaluation items the catalog tracks. Series are flattened into
    /// one item per season.
    fn list_items(&self) -> Result<Vec<TrackedItem>, CatalogError>;

    /// All tags known to the catalog, for resolving configured labels.
    fn list_tags(&self) -> Result<Vec<Tag>, CatalogError>;

    /// Root storage folders, used as the disk-probe target.
    fn root_folders(&self) -> Result<Vec<PathBuf>, CatalogError>;

    /// Hard-delete an item. `add_import_exclusion` blocks re-acquisition of
    /// the title; `delete_files` removes the underlying media.
    fn delete_item(
        &self,
        item: &TrackedItem,
        delete_files: bool,
        add_import_exclusion: bool,
    ) -> Result<(), CatalogError>;
}
