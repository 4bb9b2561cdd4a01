use chrono::{DateTime, Duration, TimeZone, Utc};
use cull_core::library::{ResolvedExclusions, RetentionThresholds};
use cull_core::traits::IRetentionSubject;
use cull_retention::{DiskSample, RetentionContext, RetentionEngine, RetentionState};

struct Subject {
    anchor: Option<DateTime<Utc>>,
    tag_ids: Vec<i64>,
    genres: Option<Vec<String>>,
}

impl Subject {
    fn aged(days: i64) -> Self {
        Self {
            anchor: Some(now() - Duration::days(days)),
            tag_ids: vec![],
            genres: Some(vec![]),
        }
    }
}

impl IRetentionSubject for Subject {
    fn anchor(&self) -> Option<DateTime<Utc>> {
        self.anchor
    }

    fn tag_ids(&self) -> &[i64] {
        &self.tag_ids
    }

    fn genres(&self) -> Option<&[String]> {
        self.genres.as_deref()
    }
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 10, 4, 30, 0).unwrap()
}

fn thresholds(retention_days: i64, warn_lead_days: i64) -> RetentionThresholds {
    RetentionThresholds {
        retention_days,
        warn_lead_days,
    }
}

fn engine(retention_days: i64, warn_lead_days: i64) -> RetentionEngine {
    engine_with(retention_days, warn_lead_days, ResolvedExclusions::default())
}

fn engine_with(
    retention_days: i64,
    warn_lead_days: i64,
    exclusions: ResolvedExclusions,
) -> RetentionEngine {
    RetentionEngine::new(thresholds(retention_days, warn_lead_days), exclusions)
}

fn keep_exclusions() -> ResolvedExclusions {
    ResolvedExclusions {
        keep_tag_ids: [7].into(),
        unwanted_genres: ["Horror".to_string()].into(),
        ..Default::default()
    }
}

// ── Missing: no anchor is terminal, regardless of thresholds ─────────────

#[test]
fn no_anchor_is_missing_for_any_thresholds() {
    let subject = Subject {
        anchor: None,
        tag_ids: vec![],
        genres: Some(vec![]),
    };
    let ctx = RetentionContext::new(now());

    for (retention, lead) in [(1, 1), (30, 3), (365, 14)] {
        let state = engine(retention, lead).evaluate(&subject, &ctx);
        assert_eq!(
            state,
            RetentionState::Missing,
            "retention={retention} lead={lead}"
        );
    }
}

// ── Keep: exemption beats age, genre, and disk pressure ──────────────────

#[test]
fn keep_tag_wins_over_everything() {
    let subject = Subject {
        anchor: Some(now() - Duration::days(400)),
        tag_ids: vec![7],
        genres: Some(vec!["Horror".to_string()]),
    };
    let full_disk = DiskSample {
        percent_used: 99.0,
        threshold: 90.0,
    };
    let ctx = RetentionContext::with_disk(now(), full_disk);

    let state = engine_with(30, 3, keep_exclusions()).evaluate(&subject, &ctx);
    assert_eq!(state, RetentionState::Keep);
}

// ── Forced removal on unwanted genre ─────────────────────────────────────

#[test]
fn unwanted_genre_forces_removal_regardless_of_age() {
    let subject = Subject {
        anchor: Some(now() - Duration::days(2)),
        tag_ids: vec![],
        genres: Some(vec!["Horror".to_string()]),
    };
    let ctx = RetentionContext::new(now());

    let state = engine_with(30, 3, keep_exclusions()).evaluate(&subject, &ctx);
    assert_eq!(state, RetentionState::ForceRemove);
}

#[test]
fn kinds_without_genres_are_never_force_removed() {
    let subject = Subject {
        anchor: Some(now() - Duration::days(2)),
        tag_ids: vec![],
        genres: None,
    };
    let ctx = RetentionContext::new(now());

    let state = engine_with(30, 3, keep_exclusions()).evaluate(&subject, &ctx);
    assert_eq!(state, RetentionState::Active);
}

// ── Warn window: fires once across a daily cadence ───────────────────────

#[test]
fn warn_fires_on_the_single_matching_day() {
    let engine = engine(30, 3);

    // 27 days old: exactly 3 days to removal, inside the window.
    let state = engine.evaluate(&Subject::aged(27), &RetentionContext::new(now()));
    assert_eq!(
        state,
        RetentionState::WarnPending {
            time_left: Duration::days(3)
        }
    );

    // Next day (28 days old): 2 days left, outside the one-day window.
    let state = engine.evaluate(&Subject::aged(28), &RetentionContext::new(now()));
    assert_eq!(state, RetentionState::Active, "warning must not repeat");

    // The day before (26 days old): not yet inside the window.
    let state = engine.evaluate(&Subject::aged(26), &RetentionContext::new(now()));
    assert_eq!(state, RetentionState::Active);
}

// ── Removal boundary ─────────────────────────────────────────────────────

#[test]
fn removal_is_inclusive_at_exact_age() {
    let engine = engine(30, 1);
    let ctx = RetentionContext::new(now());

    let state = engine.evaluate(&Subject::aged(30), &ctx);
    assert_eq!(state, RetentionState::Removed);
}

#[test]
fn one_tick_short_of_retention_is_not_removed() {
    let engine = engine(30, 1);
    let subject = Subject {
        anchor: Some(now() - Duration::days(30) + Duration::seconds(1)),
        tag_ids: vec![],
        genres: Some(vec![]),
    };

    let state = engine.evaluate(&subject, &RetentionContext::new(now()));
    assert_ne!(state, RetentionState::Removed);
    // One second before removal is still inside the final warning day.
    assert!(matches!(state, RetentionState::WarnPending { .. }));
}

// ── Disk gate ────────────────────────────────────────────────────────────

#[test]
fn aged_item_stays_active_on_idle_disk() {
    let engine = engine(30, 1);
    let idle = DiskSample {
        percent_used: 40.0,
        threshold: 90.0,
    };

    let state = engine.evaluate(&Subject::aged(45), &RetentionContext::with_disk(now(), idle));
    assert_eq!(state, RetentionState::Active);
}

#[test]
fn aged_item_is_removed_under_disk_pressure() {
    let engine = engine(30, 1);
    let full = DiskSample {
        percent_used: 92.5,
        threshold: 90.0,
    };

    let state = engine.evaluate(&Subject::aged(45), &RetentionContext::with_disk(now(), full));
    assert_eq!(state, RetentionState::Removed);
}

#[test]
fn no_disk_sample_means_no_gate() {
    let state = engine(30, 1).evaluate(&Subject::aged(45), &RetentionContext::new(now()));
    assert_eq!(state, RetentionState::Removed);
}

// ── Young items are active ───────────────────────────────────────────────

#[test]
fn young_item_is_active() {
    let state = engine(30, 3).evaluate(&Subject::aged(5), &RetentionContext::new(now()));
    assert_eq!(state, RetentionState::Active);
}

// ── Re-acquisition override at delete time ───────────────────────────────

#[test]
fn exclusion_flag_blocks_by_default() {
    let engine = engine_with(30, 1, ResolvedExclusions::default());
    assert!(engine.exclusion_flag(&Subject::aged(31)));
}

#[test]
fn exclusion_flag_suppressed_by_override_month() {
    let exclusions = ResolvedExclusions {
        override_months: [3].into(),
        ..Default::default()
    };
    let engine = engine_with(30, 1, exclusions);

    // Anchor lands in March (the fixed `now` minus 5 days).
    let subject = Subject::aged(5);
    assert!(!engine.exclusion_flag(&subject));
}

#[test]
fn exclusion_flag_suppressed_by_override_tag() {
    let exclusions = ResolvedExclusions {
        override_tag_ids: [4].into(),
        ..Default::default()
    };
    let engine = engine_with(30, 1, exclusions);

    let subject = Subject {
        anchor: Some(now() - Duration::days(31)),
        tag_ids: vec![4],
        genres: Some(vec![]),
    };
    assert!(!engine.exclusion_flag(&subject));
}
