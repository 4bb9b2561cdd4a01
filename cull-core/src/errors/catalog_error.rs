/// Media-manager client errors.
///
/// A failure listing the item set is fatal for the run; a failure deleting a
/// single item is logged and the pass continues.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("catalog returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("catalog payload could not be decoded: {reason}")]
    Decode { reason: String },

    #[error("deleting {label} failed: {reason}")]
    Delete { label: String, reason: String },
}
