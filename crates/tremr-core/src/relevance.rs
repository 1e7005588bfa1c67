//! Radius and magnitude relevance policy

use crate::config::ObserverConfig;
use crate::distance::distance_km;
use crate::error::{CoreError, MalformedRecord};
use crate::identity::identity_of;
use crate::record::{EventRecord, RawEvent};

/// Outcome of running one raw record through the filter
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub record: EventRecord,
    pub distance_km: f64,
    pub relevant: bool,
}

/// Relevant iff the event lies within `radius_km` of the observer and its
/// magnitude is at least `min_magnitude`. Both bounds are inclusive.
pub fn is_relevant(record: &EventRecord, config: &ObserverConfig) -> Result<bool, CoreError> {
    let distance = distance_from_observer(record, config)?;
    Ok(passes(distance, record.magnitude, config))
}

/// Parse, measure and classify a raw record
pub fn assess(raw: &RawEvent, config: &ObserverConfig) -> Result<Assessment, MalformedRecord> {
    let record = EventRecord::parse(raw)?;
    let distance = distance_from_observer(&record, config).map_err(|reason| MalformedRecord {
        identity: identity_of(raw),
        reason,
    })?;
    let relevant = passes(distance, record.magnitude, config);

    Ok(Assessment {
        record,
        distance_km: distance,
        relevant,
    })
}

fn distance_from_observer(record: &EventRecord, config: &ObserverConfig) -> Result<f64, CoreError> {
    distance_km(
        config.latitude,
        config.longitude,
        record.latitude,
        record.longitude,
    )
}

fn passes(distance: f64, magnitude: f64, config: &ObserverConfig) -> bool {
    distance <= config.radius_km && magnitude >= config.min_magnitude
}
