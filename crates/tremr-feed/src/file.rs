//! JSON file feed for mock runs

use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tremr_core::RawEvent;

use crate::error::FeedError;
use crate::source::{FeedOutcome, FeedSource};

#[derive(Debug, Deserialize)]
struct FeedDocument {
    #[serde(default)]
    earthquakes: Vec<RawEvent>,
}

/// Reads `{"earthquakes": [...]}` from disk on every fetch
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<Vec<RawEvent>, FeedError> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| FeedError::Io {
                path: self.path.clone(),
                source,
            })?;
        let document: FeedDocument = serde_json::from_str(&contents)?;
        Ok(document.earthquakes)
    }
}

#[async_trait]
impl FeedSource for FileFeed {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch(&self) -> FeedOutcome {
        match self.read().await {
            Ok(events) => {
                tracing::info!(path = %self.path.display(), count = events.len(), "loaded mock data");
                FeedOutcome::Batch(events)
            }
            Err(e) => {
                tracing::error!(error = %e, "error loading mock data");
                FeedOutcome::no_data(e.reason())
            }
        }
    }
}
