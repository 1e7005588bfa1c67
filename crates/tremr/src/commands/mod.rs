pub mod check;
pub mod connection;
pub mod init;
pub mod run;
pub mod status;
pub mod version;

use anyhow::Context;
use std::path::Path;

use tremr_core::ObserverConfig;
use tremr_feed::{FeedSource, FileFeed, PhivolcsFeed};
use tremr_store::{load_or_create_config, Paths};

/// Load the config file, creating defaults if absent. Invalid content halts.
pub fn load_config(paths: &Paths) -> anyhow::Result<ObserverConfig> {
    let path = paths.config_file();
    load_or_create_config(&path)
        .with_context(|| format!("cannot start with config {}", path.display()))
}

/// Live feed, or a JSON file when `mock` is given
pub fn build_feed(
    config: &ObserverConfig,
    mock: Option<&Path>,
) -> anyhow::Result<Box<dyn FeedSource>> {
    match mock {
        Some(path) => {
            tracing::info!(path = %path.display(), "using mock feed");
            Ok(Box::new(FileFeed::new(path)))
        }
        None => {
            let feed = PhivolcsFeed::new(config.feed_url.clone(), config.accept_invalid_certs)?;
            Ok(Box::new(feed))
        }
    }
}
