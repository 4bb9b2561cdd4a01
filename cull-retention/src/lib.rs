//! # cull-retention
//!
//! The retention decision engine. Pure logic, no I/O: given an item's age
//! anchor, tag/genre sets, configured thresholds and (in disk-aware runs) a
//! disk sample, decide which retention state applies. Side effects are the
//! dispatcher's job, one crate up.

pub mod blocklist;
pub mod classify;
pub mod engine;
pub mod exclusion;
pub mod gate;

pub use classify::{format_time_left, RetentionContext, RetentionState};
pub use engine::RetentionEngine;
pub use gate::DiskSample;
