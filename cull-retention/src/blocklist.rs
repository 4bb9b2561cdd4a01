use chrono::{DateTime, Datelike, Utc};
use cull_core::library::ResolvedExclusions;

/// Decide, at hard-delete time, whether the catalog should also register an
/// import exclusion blocking re-acquisition of the title.
///
/// Registration is suppressed (re-acquisition stays possible) when the
/// anchor's calendar month is an override month, or the item carries an
/// override tag. Independent of, and computed after, the removal decision.
pub fn should_block_reacquisition(
    anchor: DateTime<Utc>,
    tag_ids: &[i64],
    exclusions: &ResolvedExclusions,
) -> bool {
    let month_override = exclusions.override_months.contains(&anchor.month());
    let tag_override = tag_ids
        .iter()
        .any(|t| exclusions.override_tag_ids.contains(t));
    !(month_override || tag_override)
}
