use chrono::{DateTime, Duration, Utc};
use cull_core::library::RetentionThresholds;

use crate::gate::DiskSample;

/// Inputs shared by every classification in a pass.
#[derive(Debug, Clone, Copy)]
pub struct RetentionContext {
    pub now: DateTime<Utc>,
    /// Present in disk-aware runs; `None` disables the gate entirely.
    pub disk: Option<DiskSample>,
}

impl RetentionContext {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now, disk: None }
    }

    pub fn with_disk(now: DateTime<Utc>, disk: DiskSample) -> Self {
        Self {
            now,
            disk: Some(disk),
        }
    }
}

/// Terminal classification of one item for one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetentionState {
    /// No media on disk yet (movie) or season not yet complete. Never
    /// eligible for removal or warning; re-evaluated next run.
    Missing,
    /// Exempt through an always-keep tag.
    Keep,
    /// Unwanted genre: delete immediately, independent of age.
    ForceRemove,
    /// Inside the one-day warning window before scheduled removal.
    WarnPending { time_left: Duration },
    /// Past the retention window (and past the disk gate, where one applies).
    Removed,
    /// Tracked and aging normally.
    Active,
}

/// The retention state machine.
///
/// The warn window is deliberately one day wide: `time_to_removal` must be
/// within `warn_lead_days` but still above `warn_lead_days - 1`. Across
/// daily runs the value crosses that interval exactly once, which is what
/// makes the warning fire exactly once per item; the strict/inclusive mix
/// of the comparisons is what defines that property.
pub fn classify(
    anchor: Option<DateTime<Utc>>,
    exempt: bool,
    unwanted_genre: bool,
    thresholds: &RetentionThresholds,
    ctx: &RetentionContext,
) -> RetentionState {
    let Some(anchor) = anchor else {
        return RetentionState::Missing;
    };

    if exempt {
        return RetentionState::Keep;
    }

    if unwanted_genre {
        return RetentionState::ForceRemove;
    }

    let retention = Duration::days(thresholds.retention_days);
    let warn_lead = Duration::days(thresholds.warn_lead_days);
    let age = ctx.now - anchor;
    let time_to_removal = anchor + retention - ctx.now;

    if age < retention
        && time_to_removal <= warn_lead
        && time_to_removal > warn_lead - Duration::days(1)
    {
        return RetentionState::WarnPending {
            time_left: time_to_removal,
        };
    }

    if age >= retention {
        // The disk gate only blocks the removal itself; an aged item on an
        // idle disk stays active until pressure builds.
        return match ctx.disk {
            Some(sample) if !sample.is_full() => RetentionState::Active,
            _ => RetentionState::Removed,
        };
    }

    RetentionState::Active
}

/// Compact "26h15" rendering of the time left before removal, for warning
/// messages.
pub fn format_time_left(time_left: Duration) -> String {
    let minutes = time_left.num_minutes().max(0);
    format!("{}h{:02}", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_left_renders_hours_and_minutes() {
        assert_eq!(format_time_left(Duration::minutes(26 * 60 + 15)), "26h15");
        assert_eq!(format_time_left(Duration::minutes(45)), "0h45");
    }

    #[test]
    fn negative_time_left_clamps_to_zero() {
        assert_eq!(format_time_left(Duration::minutes(-30)), "0h00");
    }
}
