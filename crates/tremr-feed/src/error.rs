use std::path::PathBuf;
use thiserror::Error;

/// Internal fetch failures. Feeds fold these into `FeedOutcome::NoData`.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid feed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected page layout: {0}")]
    Layout(String),
}

impl FeedError {
    /// Short reason suitable for a connectivity indicator
    pub fn reason(&self) -> String {
        match self {
            FeedError::Http(e) if e.is_timeout() => "Connection timeout".to_string(),
            FeedError::Http(e) if e.is_connect() => "Cannot connect to server".to_string(),
            FeedError::Http(e) => match e.status() {
                Some(status) => format!("HTTP Error: {}", status.as_u16()),
                None => format!("Error: {}", e),
            },
            other => format!("Error: {}", other),
        }
    }
}
