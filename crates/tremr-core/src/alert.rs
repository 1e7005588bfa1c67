//! Alert text handed to notification sinks

use serde::{Deserialize, Serialize};

use crate::identity::EventIdentity;
use crate::relevance::Assessment;

/// What a notification sink receives for one relevant event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub identity: EventIdentity,
    pub title: String,
    pub body: String,
    pub distance_km: f64,
    pub magnitude: f64,
}

impl Alert {
    pub fn new(identity: EventIdentity, assessment: &Assessment) -> Self {
        let record = &assessment.record;
        let title = format!("EARTHQUAKE ALERT - Magnitude {}", record.magnitude_text);
        let body = format!(
            "Location: {}\nDistance: {:.1} km away\nDepth: {}\nTime: {}",
            record.location.as_deref().unwrap_or("Unknown location"),
            assessment.distance_km,
            record.depth.as_deref().unwrap_or("Unknown"),
            record.occurred_at(),
        );

        Self {
            identity,
            title,
            body,
            distance_km: assessment.distance_km,
            magnitude: record.magnitude,
        }
    }
}
