use std::path::Path;

use tremr_monitor::{MonitorSession, NotifierSet};
use tremr_store::{Paths, SeenStore};

use crate::lock::InstanceLock;

/// One cycle against the configured feed, then exit
pub async fn run(paths: &Paths, mock: Option<&Path>) -> anyhow::Result<()> {
    let config = super::load_config(paths)?;
    let _lock = InstanceLock::acquire(&paths.lock_file())?;
    let feed = super::build_feed(&config, mock)?;
    let notifier = NotifierSet::desktop(config.sound_enabled);

    let mut session = MonitorSession::new(
        config,
        SeenStore::new(paths.seen_file()),
        feed,
        Box::new(notifier),
    );
    let report = session.run_cycle().await;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
