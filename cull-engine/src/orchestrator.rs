use std::time::Duration;

use chrono::Utc;

use cull_anchor::TimestampOracle;
use cull_core::config::CullConfig;
use cull_core::errors::CullResult;
use cull_core::library::{RunTally, TrackedItem};
use cull_core::traits::{
    IAnchorStore, ICatalogClient, IDiskProbe, IMailer, INotifier, IRefreshTrigger,
};
use cull_notify::RunLog;
use cull_retention::{DiskSample, RetentionContext, RetentionEngine, RetentionState};

use crate::dispatcher::Dispatcher;
use crate::subject::ItemSubject;
use crate::summary;

/// Everything the orchestrator talks to, as trait objects. `probe` is only
/// consulted in disk-aware runs; `notifier` and `mailer` are absent when
/// their channel is disabled.
pub struct Collaborators<'a> {
    pub catalog: &'a dyn ICatalogClient,
    pub anchors: &'a dyn IAnchorStore,
    pub probe: Option<&'a dyn IDiskProbe>,
    pub notifier: Option<&'a dyn INotifier>,
    pub mailer: Option<&'a dyn IMailer>,
    pub refreshers: &'a [&'a dyn IRefreshTrigger],
}

/// One synchronous evaluation pass over the full item set.
pub struct Orchestrator<'a> {
    config: &'a CullConfig,
    collab: Collaborators<'a>,
    runlog: &'a RunLog,
}

impl<'a> Orchestrator<'a> {
    pub fn new(config: &'a CullConfig, collab: Collaborators<'a>, runlog: &'a RunLog) -> Self {
        Self {
            config,
            collab,
            runlog,
        }
    }

    /// Run the pass. Fatal errors (config has already been validated, so in
    /// practice: listing the catalog) abort; per-item failures are logged
    /// and skipped.
    pub fn run(&self) -> CullResult<RunTally> {
        let prune = &self.config.prune;

        if !prune.enabled {
            tracing::info!("library purge disabled");
            self.runlog.begin("Prune - Library purge disabled.");
            return Ok(RunTally::default());
        }

        self.runlog.begin("Prune - Run started.");
        if prune.verbose {
            tracing::info!("prune run started");
        }
        if prune.dry_run {
            tracing::info!("DRY RUN - nothing will be deleted or removed");
            self.runlog.append("Prune - Dry run.");
        }

        // Listing failures are fatal: without the item set there is no pass.
        let mut items = self.collab.catalog.list_items()?;
        let tags = self.collab.catalog.list_tags()?;

        let exclusions = prune.exclusion_policy().resolve(&tags);
        let engine = RetentionEngine::new(prune.thresholds(), exclusions);

        let disk = prune.disk_threshold_percent.map(|t| self.sample_disk(t));
        let ctx = match disk {
            Some(sample) => RetentionContext::with_disk(Utc::now(), sample),
            None => RetentionContext::new(Utc::now()),
        };
        if let Some(sample) = &disk {
            let line = summary::disk_summary(sample);
            tracing::info!("{line}");
            self.runlog.append(&line);
        }

        let dispatcher = Dispatcher::new(
            self.collab.catalog,
            self.collab.notifier,
            self.runlog,
            prune.dry_run,
            prune.delete_files,
            prune.only_log_removals,
        );

        let mut tally = RunTally::default();

        // Disk-aware runs skip the whole pass while utilization is below the
        // threshold; there is nothing a classifier could remove.
        let skip_pass = matches!(&disk, Some(sample) if !sample.is_full());
        if skip_pass {
            tracing::info!("disk below threshold, nothing to prune this pass");
            self.runlog
                .append("Prune - Disk below threshold, nothing to prune this pass.");
        } else {
            // Sorted by title so runs are deterministic and the log reads
            // like the library.
            items.sort_by(|a, b| a.sort_title.cmp(&b.sort_title));

            let oracle = TimestampOracle::new(self.collab.anchors, &prune.monitored_extensions);
            let pacing = Duration::from_millis(prune.pacing_ms);
            for (i, item) in items.iter().enumerate() {
                self.evaluate_item(&engine, &oracle, &dispatcher, item, &ctx, &mut tally);
                if pacing > Duration::ZERO && i + 1 < items.len() {
                    std::thread::sleep(pacing);
                }
            }
        }

        self.report(&tally, disk.as_ref());
        self.fire_refreshers();

        Ok(tally)
    }

    fn evaluate_item(
        &self,
        engine: &RetentionEngine,
        oracle: &TimestampOracle<'_>,
        dispatcher: &Dispatcher<'_>,
        item: &TrackedItem,
        ctx: &RetentionContext,
        tally: &mut RunTally,
    ) {
        let observation = match oracle.observe(item) {
            Ok(observation) => observation,
            Err(e) => {
                tracing::error!(
                    item = %item.label(),
                    path = %item.path.display(),
                    error = %e,
                    "anchor observation failed, item skipped this pass"
                );
                self.runlog.append(&format!(
                    "Prune - ERROR - {} at {}: {}",
                    item.label(),
                    item.path.display(),
                    e
                ));
                return;
            }
        };

        if observation.is_some_and(|o| o.first_observation) {
            dispatcher.announce_first_observation(item);
        }

        let anchor = observation.map(|o| o.anchor);
        let subject = ItemSubject::new(item, anchor);
        let state = engine.evaluate(&subject, ctx);

        let block_reacquisition = match state {
            RetentionState::Removed | RetentionState::ForceRemove => engine.exclusion_flag(&subject),
            _ => true,
        };

        dispatcher.dispatch(item, &state, anchor, block_reacquisition, tally);
    }

    /// One disk sample per run. Fails open: a probe or root-folder failure
    /// reads as "not under pressure" and is logged.
    fn sample_disk(&self, threshold: f64) -> DiskSample {
        let Some(probe) = self.collab.probe else {
            return DiskSample::fail_open(threshold);
        };

        let root = match self.collab.catalog.root_folders() {
            Ok(folders) => folders.into_iter().next(),
            Err(e) => {
                tracing::error!(error = %e, "cannot determine root folder, failing open");
                None
            }
        };
        let Some(root) = root else {
            return DiskSample::fail_open(threshold);
        };

        match probe.usage_percent(&root) {
            Ok(percent_used) => DiskSample {
                percent_used,
                threshold,
            },
            Err(e) => {
                tracing::error!(path = %root.display(), error = %e, "disk probe failed, failing open");
                DiskSample::fail_open(threshold)
            }
        }
    }

    fn report(&self, tally: &RunTally, disk: Option<&DiskSample>) {
        let prune = &self.config.prune;
        let line = summary::run_summary(self.config.catalog.kind, tally, prune.warn_lead_days);

        if let Some(notifier) = self.collab.notifier {
            if let Err(e) = notifier.send(&line) {
                tracing::warn!(error = %e, "summary push failed");
            }
        }

        if prune.verbose {
            tracing::info!("{line}");
        }
        self.runlog.append(&line);
        if let Some(sample) = disk {
            self.runlog.append(&summary::disk_summary(sample));
        }

        if let Some(mailer) = self.collab.mailer {
            let wanted = !self.config.mail.only_when_removed
                || tally.removed > 0
                || tally.warned > 0;
            if wanted {
                let subject = summary::mail_subject(self.config.catalog.kind, tally);
                let body = format!(
                    "Hi,\n\nAttached is the prune log of this run.\n\n{}\nHave a nice day.\n",
                    self.runlog.read()
                );
                if let Err(e) = mailer.send(
                    &subject,
                    &body,
                    Some(self.runlog.path()),
                    &self.config.mail.recipients,
                ) {
                    tracing::error!(error = %e, "summary mail failed");
                } else {
                    self.runlog
                        .append(&format!("Prune - Mail sent to {}.", self.config.mail.recipients.join(", ")));
                }
            }
        }
    }

    fn fire_refreshers(&self) {
        for refresher in self.collab.refreshers {
            match refresher.trigger() {
                Ok(()) => tracing::info!(service = refresher.name(), "library refresh triggered"),
                Err(e) => tracing::error!(
                    service = refresher.name(),
                    error = %e,
                    "library refresh failed"
                ),
            }
        }
    }
}
