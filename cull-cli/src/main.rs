//! `cull` — scheduled media-library retention.
//!
//! One invocation is one pass: load and validate the config, connect the
//! collaborators, evaluate every tracked item once, report, exit.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use cull_anchor::{MarkerAnchorStore, SystemDiskProbe};
use cull_catalog::{ArrClient, MediaServerRefresh};
use cull_core::config::{CatalogKind, CullConfig};
use cull_core::constants::{FIRST_COMPLETE_MARKER, FIRST_SEEN_MARKER};
use cull_core::traits::{IDiskProbe, IMailer, INotifier, IRefreshTrigger};
use cull_engine::{Collaborators, Orchestrator};
use cull_notify::{PushoverNotifier, RunLog, SmtpMailer};

#[derive(Parser)]
#[command(name = "cull", version, about = "Prune aged items from a media library")]
struct Cli {
    /// Path to the TOML config file.
    #[arg(short, long, default_value = "cull.toml")]
    config: PathBuf,

    /// Classify and log everything, mutate nothing. Overrides the config.
    #[arg(long)]
    dry_run: bool,

    /// Run log written during the pass and attached to the summary mail.
    #[arg(long, default_value = "cull.log")]
    log_file: PathBuf,
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = CullConfig::load(&cli.config)?;
    if cli.dry_run {
        config.prune.dry_run = true;
    }
    config.validate()?;

    if !config.catalog.enabled {
        tracing::info!("catalog disabled in config, exiting");
        return Ok(());
    }

    let catalog = ArrClient::new(&config.catalog);
    let marker = match config.catalog.kind {
        CatalogKind::Movies => FIRST_SEEN_MARKER,
        CatalogKind::Series => FIRST_COMPLETE_MARKER,
    };
    let anchors = MarkerAnchorStore::new(marker);
    let probe = SystemDiskProbe;

    let notifier = config
        .push
        .enabled
        .then(|| PushoverNotifier::new(&config.push));
    let mailer = config.mail.enabled.then(|| SmtpMailer::new(&config.mail));

    let media_servers: Vec<MediaServerRefresh> =
        config.refresh.iter().map(MediaServerRefresh::new).collect();
    let mut refreshers: Vec<&dyn IRefreshTrigger> = vec![&catalog];
    refreshers.extend(media_servers.iter().map(|r| r as &dyn IRefreshTrigger));

    let runlog = RunLog::new(&cli.log_file);

    let collab = Collaborators {
        catalog: &catalog,
        anchors: &anchors,
        probe: config
            .prune
            .disk_threshold_percent
            .map(|_| &probe as &dyn IDiskProbe),
        notifier: notifier.as_ref().map(|n| n as &dyn INotifier),
        mailer: mailer.as_ref().map(|m| m as &dyn IMailer),
        refreshers: &refreshers,
    };

    let tally = Orchestrator::new(&config, collab, &runlog).run()?;
    tracing::info!(
        removed = tally.removed,
        warned = tally.warned,
        "run complete"
    );
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
