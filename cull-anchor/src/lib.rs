//! # cull-anchor
//!
//! Filesystem-facing pieces of the retention pass: the marker files whose
//! modification times are the age anchors (the tool's sole persistence),
//! the media-file scan that establishes an item is actually on disk, and
//! the disk-usage probe for disk-aware runs.

pub mod disk;
pub mod marker;
pub mod oracle;
pub mod scan;

pub use disk::SystemDiskProbe;
pub use marker::MarkerAnchorStore;
pub use oracle::{Observation, TimestampOracle};
