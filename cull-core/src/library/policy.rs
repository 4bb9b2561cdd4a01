use std::collections::HashSet;

use crate::library::item::Tag;

/// Per-run retention thresholds. Immutable for the duration of a pass.
#[derive(Debug, Clone, Copy)]
pub struct RetentionThresholds {
    /// Days after the anchor at which an item becomes removable.
    pub retention_days: i64,
    /// Days before removal at which the one-time warning fires.
    pub warn_lead_days: i64,
}

/// Exclusion rules as configured: tag and genre labels, override months.
#[derive(Debug, Clone, Default)]
pub struct ExclusionPolicy {
    /// Items carrying any of these tags are never pruned.
    pub keep_tags: Vec<String>,
    /// Tags that suppress the import exclusion on delete.
    pub override_tags: Vec<String>,
    /// Anchor months (1-12) that suppress the import exclusion on delete.
    pub override_months: Vec<u32>,
    /// Genres that force immediate removal of a movie regardless of age.
    pub unwanted_genres: Vec<String>,
}

impl ExclusionPolicy {
    /// Resolve tag labels against the catalog's tag list. Labels the catalog
    /// does not know are dropped silently, matching how absent tags can never
    /// intersect an item's tag set.
    pub fn resolve(&self, tags: &[Tag]) -> ResolvedExclusions {
        ResolvedExclusions {
            keep_tag_ids: resolve_labels(&self.keep_tags, tags),
            override_tag_ids: resolve_labels(&self.override_tags, tags),
            override_months: self.override_months.iter().copied().collect(),
            unwanted_genres: self.unwanted_genres.iter().cloned().collect(),
        }
    }
}

fn resolve_labels(labels: &[String], tags: &[Tag]) -> HashSet<i64> {
    labels
        .iter()
        .filter_map(|label| tags.iter().find(|t| t.label == *label).map(|t| t.id))
        .collect()
}

/// Exclusion rules with tag labels resolved to catalog ids for set checks.
#[derive(Debug, Clone, Default)]
pub struct ResolvedExclusions {
    pub keep_tag_ids: HashSet<i64>,
    pub override_tag_ids: HashSet<i64>,
    pub override_months: HashSet<u32>,
    pub unwanted_genres: HashSet<String>,
}
