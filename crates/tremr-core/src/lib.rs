//! Core earthquake relevance and deduplication logic

mod alert;
mod config;
mod distance;
mod error;
mod identity;
mod record;
mod relevance;

pub use alert::Alert;
pub use config::{ObserverConfig, DEFAULT_FEED_URL, MIN_POLL_INTERVAL_SECS};
pub use distance::{distance_km, parse_coordinate, EARTH_RADIUS_KM};
pub use error::{ConfigError, CoreError, MalformedRecord};
pub use identity::{identity_of, EventIdentity};
pub use record::{parse_magnitude, EventRecord, RawEvent};
pub use relevance::{assess, is_relevant, Assessment};
