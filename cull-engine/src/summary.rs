use cull_core::config::CatalogKind;
use cull_core::library::RunTally;
use cull_retention::DiskSample;

/// The one-line end-of-run summary, shared verbatim by the push channel,
/// the run log, and the mail subject line's source data.
pub fn run_summary(kind: CatalogKind, tally: &RunTally, warn_lead_days: i64) -> String {
    format!(
        "Prune - There were {} {} removed and {} planned for removal within {} days.",
        tally.removed,
        noun(kind),
        tally.warned,
        warn_lead_days
    )
}

/// Disk line reported alongside the summary in disk-aware runs.
pub fn disk_summary(sample: &DiskSample) -> String {
    format!(
        "Disk usage: {:.1}% (threshold: {:.1}%)",
        sample.percent_used, sample.threshold
    )
}

/// Subject line for the summary mail.
pub fn mail_subject(kind: CatalogKind, tally: &RunTally) -> String {
    format!(
        "Prune - {} {} removed, {} planned for removal",
        tally.removed,
        noun(kind),
        tally.warned
    )
}

fn noun(kind: CatalogKind) -> &'static str {
    match kind {
        CatalogKind::Movies => "movies",
        CatalogKind::Series => "seasons",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_and_noun() {
        let tally = RunTally {
            removed: 2,
            warned: 1,
        };
        let line = run_summary(CatalogKind::Movies, &tally, 3);
        assert_eq!(
            line,
            "Prune - There were 2 movies removed and 1 planned for removal within 3 days."
        );

        let line = run_summary(CatalogKind::Series, &RunTally::default(), 1);
        assert!(line.contains("0 seasons removed"));
    }

    #[test]
    fn disk_summary_formats_percentages() {
        let line = disk_summary(&DiskSample {
            percent_used: 91.25,
            threshold: 90.0,
        });
        assert_eq!(line, "Disk usage: 91.2% (threshold: 90.0%)");
    }
}
