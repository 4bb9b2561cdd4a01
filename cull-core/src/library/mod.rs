pub mod item;
pub mod policy;
pub mod tally;

pub use item::{season_dir_name, ItemKind, Tag, TrackedItem};
pub use policy::{ExclusionPolicy, ResolvedExclusions, RetentionThresholds};
pub use tally::RunTally;
