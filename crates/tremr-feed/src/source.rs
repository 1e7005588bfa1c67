//! The feed seam consumed by the monitoring loop

use async_trait::async_trait;
use serde::Serialize;
use tremr_core::RawEvent;

/// Result of one fetch. Unreachable sites are `NoData`, never an error.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedOutcome {
    Batch(Vec<RawEvent>),
    NoData { reason: String },
}

impl FeedOutcome {
    pub fn no_data(reason: impl Into<String>) -> Self {
        FeedOutcome::NoData {
            reason: reason.into(),
        }
    }
}

/// A source of raw earthquake records
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Source name for logs
    fn name(&self) -> &str;

    /// Fetch the current batch
    async fn fetch(&self) -> FeedOutcome;
}

/// Connectivity as shown to the user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectionStatus {
    pub connected: bool,
    pub message: String,
}

/// Probe a feed once and report whether it yields data
pub async fn check_connection(feed: &dyn FeedSource) -> ConnectionStatus {
    match feed.fetch().await {
        FeedOutcome::Batch(events) if !events.is_empty() => ConnectionStatus {
            connected: true,
            message: "Connected".to_string(),
        },
        FeedOutcome::Batch(_) => ConnectionStatus {
            connected: false,
            message: "No earthquake data available".to_string(),
        },
        FeedOutcome::NoData { reason } => ConnectionStatus {
            connected: false,
            message: reason,
        },
    }
}
