use serde::{Deserialize, Serialize};

use super::defaults;
use crate::library::{ExclusionPolicy, RetentionThresholds};

/// Retention pass configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PruneConfig {
    /// Master switch: when false the run logs and exits before touching the
    /// catalog.
    pub enabled: bool,
    /// Days after the anchor at which an item becomes removable.
    pub retention_days: i64,
    /// Days before removal at which the one-time warning fires.
    pub warn_lead_days: i64,
    /// When set, removals additionally require disk utilization at or above
    /// this percentage (the disk-aware variant).
    pub disk_threshold_percent: Option<f64>,
    /// Classify and log everything, mutate nothing.
    pub dry_run: bool,
    /// Delete the underlying media files along with the catalog entry.
    pub delete_files: bool,
    /// Items carrying any of these tags are never pruned.
    pub keep_tags: Vec<String>,
    /// Tags that suppress the import exclusion on delete.
    pub override_tags: Vec<String>,
    /// Anchor months (1-12) that suppress the import exclusion on delete.
    pub override_months: Vec<u32>,
    /// Genres that force immediate removal of a movie regardless of age.
    pub unwanted_genres: Vec<String>,
    /// File extensions that count as media during the anchor scan.
    pub monitored_extensions: Vec<String>,
    /// Suppress KEEPING/MISSING/ACTIVE/NEW lines; only removals and warnings
    /// are reported.
    pub only_log_removals: bool,
    /// Log run start/summary lines to the diagnostic log as well.
    pub verbose: bool,
    /// Delay between item evaluations, smoothing load on the catalog API.
    pub pacing_ms: u64,
}

impl Default for PruneConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            retention_days: defaults::DEFAULT_RETENTION_DAYS,
            warn_lead_days: defaults::DEFAULT_WARN_LEAD_DAYS,
            disk_threshold_percent: None,
            dry_run: false,
            delete_files: true,
            keep_tags: vec![],
            override_tags: vec![],
            override_months: vec![],
            unwanted_genres: vec![],
            monitored_extensions: defaults::default_monitored_extensions(),
            only_log_removals: false,
            verbose: false,
            pacing_ms: defaults::DEFAULT_PACING_MS,
        }
    }
}

impl PruneConfig {
    pub fn thresholds(&self) -> RetentionThresholds {
        RetentionThresholds {
            retention_days: self.retention_days,
            warn_lead_days: self.warn_lead_days,
        }
    }

    pub fn exclusion_policy(&self) -> ExclusionPolicy {
        ExclusionPolicy {
            keep_tags: self.keep_tags.clone(),
            override_tags: self.override_tags.clone(),
            override_months: self.override_months.clone(),
            unwanted_genres: self.unwanted_genres.clone(),
        }
    }
}
