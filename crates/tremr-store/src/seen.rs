//! Seen-event set and its durable store

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tremr_core::EventIdentity;

use crate::error::StoreError;
use crate::io::atomic_write;

/// Identities of every event already evaluated. Grows, never shrinks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeenEventSet {
    ids: HashSet<EventIdentity>,
}

impl SeenEventSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, identity: &EventIdentity) -> bool {
        self.ids.contains(identity)
    }

    /// Add in memory only. Returns `true` if the identity was new.
    pub fn add(&mut self, identity: EventIdentity) -> bool {
        self.ids.insert(identity)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EventIdentity> {
        self.ids.iter()
    }

    /// Identities in lexical order, for stable on-disk output
    pub fn sorted(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.ids.iter().map(|id| id.as_str()).collect();
        ids.sort_unstable();
        ids
    }
}

impl FromIterator<EventIdentity> for SeenEventSet {
    fn from_iter<I: IntoIterator<Item = EventIdentity>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// Flat JSON array of identity strings on disk
#[derive(Debug, Clone)]
pub struct SeenStore {
    path: PathBuf,
}

impl SeenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load prior state, failing open.
    ///
    /// A missing file is a first run. An unreadable or corrupt file is logged
    /// and treated as empty: re-alerting beats missing an alert.
    pub fn load(&self) -> SeenEventSet {
        match self.try_load() {
            Ok(Some(set)) => {
                tracing::info!(
                    path = %self.path.display(),
                    count = set.len(),
                    "loaded previously seen earthquakes"
                );
                set
            }
            Ok(None) => {
                tracing::info!(path = %self.path.display(), "no seen-event store yet, starting empty");
                SeenEventSet::new()
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "seen-event store unusable, starting empty; earlier events may alert again"
                );
                SeenEventSet::new()
            }
        }
    }

    /// Strict load used by diagnostics. `Ok(None)` means no store exists.
    pub fn try_load(&self) -> Result<Option<SeenEventSet>, StoreError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let ids: Vec<String> =
            serde_json::from_str(&contents).map_err(|e| StoreError::Corrupt {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        Ok(Some(ids.into_iter().map(EventIdentity::from).collect()))
    }

    /// Overwrite the store with the full set
    pub fn persist(&self, set: &SeenEventSet) -> Result<(), StoreError> {
        let json = serde_json::to_string(&set.sorted())?;
        atomic_write(&self.path, json.as_bytes()).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        tracing::info!(
            path = %self.path.display(),
            count = set.len(),
            "persisted seen-event store"
        );
        Ok(())
    }
}
