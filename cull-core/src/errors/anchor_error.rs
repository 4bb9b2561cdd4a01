/// Marker-file and media-scan errors. The affected item is treated as
/// failed-but-skipped for the pass and retried naturally on the next run.
#[derive(Debug, thiserror::Error)]
pub enum AnchorError {
    #[error("cannot scan {dir}: {reason}")]
    Scan { dir: String, reason: String },

    #[error("cannot create marker {path}: {reason}")]
    CreateMarker { path: String, reason: String },

    #[error("cannot read marker {path}: {reason}")]
    ReadMarker { path: String, reason: String },
}
