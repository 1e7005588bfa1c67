//! Deduplication keys for feed records

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::record::RawEvent;

/// Stable key for one reported earthquake.
///
/// Built from the date, time and coordinate text exactly as the feed first
/// reported them. Magnitude, depth and location revisions do not change it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventIdentity(String);

impl EventIdentity {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EventIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for EventIdentity {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Derive the identity of a raw record. Missing fields contribute empty
/// components, so this never fails.
pub fn identity_of(raw: &RawEvent) -> EventIdentity {
    let part = |field: &Option<String>| field.as_deref().unwrap_or("").to_string();
    EventIdentity(format!(
        "{}_{}_{}_{}",
        part(&raw.date),
        part(&raw.time),
        part(&raw.latitude),
        part(&raw.longitude),
    ))
}
