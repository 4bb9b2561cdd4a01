use chrono::{DateTime, Utc};

use cull_core::library::{ItemKind, RunTally, TrackedItem};
use cull_core::traits::{ICatalogClient, INotifier};
use cull_notify::RunLog;
use cull_retention::{format_time_left, RetentionState};

/// Executes the effects of one classification, in a fixed order: catalog
/// delete (or no-op), push notification, run-log line, tally counter. All
/// channels report the same classification; a dry run skips only the
/// catalog mutation.
pub struct Dispatcher<'a> {
    catalog: &'a dyn ICatalogClient,
    notifier: Option<&'a dyn INotifier>,
    runlog: &'a RunLog,
    dry_run: bool,
    delete_files: bool,
    only_log_removals: bool,
}

impl<'a> Dispatcher<'a> {
    pub fn new(
        catalog: &'a dyn ICatalogClient,
        notifier: Option<&'a dyn INotifier>,
        runlog: &'a RunLog,
        dry_run: bool,
        delete_files: bool,
        only_log_removals: bool,
    ) -> Self {
        Self {
            catalog,
            notifier,
            runlog,
            dry_run,
            delete_files,
            only_log_removals,
        }
    }

    /// One-time NEW/COMPLETE announcement when an anchor is first written.
    pub fn announce_first_observation(&self, item: &TrackedItem) {
        if self.only_log_removals {
            return;
        }
        let line = match item.kind {
            ItemKind::Movie => format!("Prune - NEW - {} is new.", item.label()),
            ItemKind::Season { .. } => format!("Prune - COMPLETE - {}", item.label()),
        };
        self.log(&line);
    }

    /// Execute the classification's effects and update the tally.
    pub fn dispatch(
        &self,
        item: &TrackedItem,
        state: &RetentionState,
        anchor: Option<DateTime<Utc>>,
        block_reacquisition: bool,
        tally: &mut RunTally,
    ) {
        match state {
            RetentionState::Missing => {
                if !self.only_log_removals {
                    let why = match item.kind {
                        ItemKind::Movie => "is not downloaded yet",
                        ItemKind::Season { .. } => "is not complete yet",
                    };
                    self.log(&format!(
                        "Prune - MISSING - {} {}. Skipping.",
                        item.label(),
                        why
                    ));
                }
            }

            RetentionState::Keep => {
                if !self.only_log_removals {
                    self.log(&format!("Prune - KEEPING - {}. Skipping.", item.label()));
                }
            }

            RetentionState::Active => {
                if !self.only_log_removals {
                    self.log(&format!(
                        "Prune - ACTIVE - {} - first seen {}.",
                        item.label(),
                        stamp(anchor)
                    ));
                }
            }

            RetentionState::WarnPending { time_left } => {
                let line = format!(
                    "Prune - WILL BE REMOVED - {} in {} - first seen {}.",
                    item.label(),
                    format_time_left(*time_left),
                    stamp(anchor)
                );
                self.push(&line);
                self.log(&line);
                tally.record_warned();
            }

            RetentionState::ForceRemove => {
                self.remove(item, "UNWANTED", anchor, block_reacquisition, tally);
            }

            RetentionState::Removed => {
                self.remove(item, "REMOVED", anchor, block_reacquisition, tally);
            }
        }
    }

    fn remove(
        &self,
        item: &TrackedItem,
        verb: &str,
        anchor: Option<DateTime<Utc>>,
        block_reacquisition: bool,
        tally: &mut RunTally,
    ) {
        if !self.dry_run {
            if let Err(e) =
                self.catalog
                    .delete_item(item, self.delete_files, block_reacquisition)
            {
                // Failed-but-skipped: no notification or count may claim a
                // removal that did not happen.
                tracing::error!(
                    item = %item.label(),
                    path = %item.path.display(),
                    error = %e,
                    "delete failed, item skipped this pass"
                );
                self.runlog.append(&format!(
                    "Prune - ERROR - {} at {}: {}",
                    item.label(),
                    item.path.display(),
                    e
                ));
                return;
            }
        }

        let files_note = if self.delete_files {
            ", files deleted."
        } else {
            ", files preserved."
        };
        let line = format!(
            "Prune - {} - {}{} - first seen {}.",
            verb,
            item.label(),
            files_note,
            stamp(anchor)
        );
        self.push(&line);
        self.log(&line);
        tally.record_removed();
    }

    fn push(&self, message: &str) {
        if let Some(notifier) = self.notifier {
            if let Err(e) = notifier.send(message) {
                tracing::warn!(error = %e, "push notification failed");
            }
        }
    }

    fn log(&self, line: &str) {
        tracing::info!("{line}");
        self.runlog.append(line);
    }
}

fn stamp(anchor: Option<DateTime<Utc>>) -> String {
    match anchor {
        Some(ts) => ts.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => "-".to_string(),
    }
}
