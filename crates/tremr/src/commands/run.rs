use chrono::Local;
use std::path::Path;
use tokio::sync::mpsc;

use tremr_monitor::{MonitorEvent, MonitorSession, MonitorState, NotifierSet};
use tremr_store::{Paths, SeenStore};

use crate::lock::InstanceLock;

/// Monitor until Ctrl-C, printing a status line per loop event
pub async fn run(paths: &Paths, mock: Option<&Path>) -> anyhow::Result<()> {
    let config = super::load_config(paths)?;
    let _lock = InstanceLock::acquire(&paths.lock_file())?;
    let feed = super::build_feed(&config, mock)?;

    let notifier = NotifierSet::desktop(config.sound_enabled);
    tracing::info!(sinks = ?notifier.names(), "notification sinks ready");

    let (tx, mut rx) = mpsc::unbounded_channel();
    let session = MonitorSession::new(
        config,
        SeenStore::new(paths.seen_file()),
        feed,
        Box::new(notifier),
    )
    .with_events(tx);

    let stop = session.stop_handle();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("stop requested, finishing current cycle");
                stop.stop();
            }
            Err(e) => tracing::error!(error = %e, "cannot listen for Ctrl-C"),
        }
    });

    let monitor = tokio::spawn(session.run());

    // Channel closes when the session is dropped at the end of `run`
    while let Some(event) = rx.recv().await {
        if let Some(line) = status_line(&event) {
            println!("{line}");
        }
    }

    let summary = monitor.await?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn status_line(event: &MonitorEvent) -> Option<String> {
    match event {
        MonitorEvent::StateChanged(MonitorState::Stopped) => Some("Status: stopped".to_string()),
        MonitorEvent::StateChanged(_) => None,
        MonitorEvent::CycleStarted { at } => Some(format!(
            "[{}] Checking for earthquakes...",
            at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S")
        )),
        MonitorEvent::FeedUnavailable { reason } => Some(format!("Feed unavailable: {reason}")),
        MonitorEvent::Alerted(alert) => Some(format!("{}\n{}", alert.title, alert.body)),
        MonitorEvent::MalformedRecord { identity, reason } => {
            Some(format!("Skipped malformed record {identity}: {reason}"))
        }
        MonitorEvent::Persisted { .. } => None,
        MonitorEvent::PersistFailed { reason } => {
            Some(format!("Could not save seen events: {reason}"))
        }
        MonitorEvent::CycleFinished(report) if report.feed_error.is_none() => Some(format!(
            "Checked {} events ({} new), {} alerts",
            report.fetched, report.evaluated, report.alerted
        )),
        MonitorEvent::CycleFinished(_) => None,
        MonitorEvent::Stopped(summary) => Some(format!(
            "Monitoring stopped after {} cycles, {} alerts",
            summary.cycles, summary.alerts
        )),
    }
}
