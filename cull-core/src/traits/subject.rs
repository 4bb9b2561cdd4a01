use chrono::{DateTime, Utc};

/// The capability set the retention classifier evaluates: an optional age
/// anchor, a tag set, and (for kinds that have one) a genre set. Movies and
/// series-seasons both present themselves through this trait, which is what
/// lets one classifier replace the per-kind variants.
pub trait IRetentionSubject {
    fn anchor(&self) -> Option<DateTime<Utc>>;

    fn tag_ids(&self) -> &[i64];

    /// `None` for kinds without a genre facet (seasons); `Some` for movies,
    /// even when the list is empty.
    fn genres(&self) -> Option<&[String]>;
}
