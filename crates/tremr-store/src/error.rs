use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize seen-event set: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("seen-event store {path} is corrupt: {reason}")]
    Corrupt { path: PathBuf, reason: String },
}
