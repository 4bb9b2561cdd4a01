//! # cull-core
//!
//! Foundation crate for the cull retention tool.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod library;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CullConfig;
pub use errors::{CullError, CullResult};
pub use library::{ItemKind, RunTally, Tag, TrackedItem};
