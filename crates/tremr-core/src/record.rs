//! Raw feed records and the typed record produced by parsing them

use serde::{Deserialize, Deserializer, Serialize};

use crate::distance::parse_coordinate;
use crate::error::{CoreError, MalformedRecord};
use crate::identity::identity_of;

/// One earthquake row as reported by the feed, before any coercion.
///
/// Every field is optional text. JSON input may carry numbers in place of
/// strings; they are kept in their textual form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawEvent {
    #[serde(
        default,
        alias = "occurred_date",
        deserialize_with = "text_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<String>,

    #[serde(
        default,
        alias = "occurred_time",
        deserialize_with = "text_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub time: Option<String>,

    #[serde(
        default,
        deserialize_with = "text_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub latitude: Option<String>,

    #[serde(
        default,
        deserialize_with = "text_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub longitude: Option<String>,

    #[serde(
        default,
        deserialize_with = "text_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub depth: Option<String>,

    #[serde(
        default,
        deserialize_with = "text_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub magnitude: Option<String>,

    #[serde(
        default,
        alias = "location_description",
        deserialize_with = "text_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<String>,
}

impl RawEvent {
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        latitude: impl Into<String>,
        longitude: impl Into<String>,
    ) -> Self {
        Self {
            date: Some(date.into()),
            time: Some(time.into()),
            latitude: Some(latitude.into()),
            longitude: Some(longitude.into()),
            ..Self::default()
        }
    }

    pub fn with_magnitude(mut self, magnitude: impl Into<String>) -> Self {
        self.magnitude = Some(magnitude.into());
        self
    }

    pub fn with_depth(mut self, depth: impl Into<String>) -> Self {
        self.depth = Some(depth.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

fn text_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// A feed row whose numeric fields have been coerced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub date: String,
    pub time: String,
    pub latitude: f64,
    pub longitude: f64,
    pub depth: Option<String>,
    pub magnitude: f64,
    /// Magnitude text as the feed reported it, for display
    pub magnitude_text: String,
    pub location: Option<String>,
}

impl EventRecord {
    /// Coerce a raw row. Coordinates and magnitude are required and must be
    /// finite numbers; date and time default to empty text.
    pub fn parse(raw: &RawEvent) -> Result<Self, MalformedRecord> {
        let malformed = |reason: CoreError| MalformedRecord {
            identity: identity_of(raw),
            reason,
        };

        let latitude = parse_coordinate(raw.latitude.as_deref().unwrap_or("")).map_err(malformed)?;
        let longitude =
            parse_coordinate(raw.longitude.as_deref().unwrap_or("")).map_err(malformed)?;
        let magnitude_text = raw.magnitude.as_deref().unwrap_or("").trim();
        let magnitude = parse_magnitude(magnitude_text).map_err(malformed)?;

        Ok(Self {
            date: raw.date.clone().unwrap_or_default(),
            time: raw.time.clone().unwrap_or_default(),
            latitude,
            longitude,
            depth: raw.depth.clone(),
            magnitude,
            magnitude_text: magnitude_text.to_string(),
            location: raw.location.clone(),
        })
    }

    /// Date and time joined for display
    pub fn occurred_at(&self) -> String {
        format!("{} {}", self.date, self.time).trim().to_string()
    }
}

/// Coerce feed text into a magnitude value
pub fn parse_magnitude(text: &str) -> Result<f64, CoreError> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CoreError::InvalidMagnitude(text.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed() {
        let raw = RawEvent::new("29 October 2025", "08:26 AM", "14.60", "120.98")
            .with_magnitude("4.5")
            .with_depth("010 kilometers");
        let record = EventRecord::parse(&raw).unwrap();
        assert_eq!(record.latitude, 14.60);
        assert_eq!(record.longitude, 120.98);
        assert_eq!(record.magnitude, 4.5);
        assert_eq!(record.depth.as_deref(), Some("010 kilometers"));
        assert_eq!(record.occurred_at(), "29 October 2025 08:26 AM");
    }

    #[test]
    fn test_parse_rejects_bad_latitude() {
        let raw = RawEvent::new("d", "t", "fourteen", "120.98").with_magnitude("4.5");
        let err = EventRecord::parse(&raw).unwrap_err();
        assert_eq!(err.identity, identity_of(&raw));
        assert!(matches!(err.reason, CoreError::InvalidCoordinate(_)));
    }

    #[test]
    fn test_parse_rejects_missing_magnitude() {
        let raw = RawEvent::new("d", "t", "14.60", "120.98");
        let err = EventRecord::parse(&raw).unwrap_err();
        assert!(matches!(err.reason, CoreError::InvalidMagnitude(_)));
    }

    #[test]
    fn test_deserialize_mixed_text_and_numbers() {
        let json = r#"{
            "date": "2025-10-29",
            "time": "08:26:00",
            "latitude": 14.6,
            "longitude": "120.98",
            "magnitude": 4.5,
            "depth": "010 kilometers",
            "location": "Makati City"
        }"#;
        let raw: RawEvent = serde_json::from_str(json).unwrap();
        assert_eq!(raw.latitude.as_deref(), Some("14.6"));
        assert_eq!(raw.longitude.as_deref(), Some("120.98"));
        assert_eq!(raw.magnitude.as_deref(), Some("4.5"));
    }

    #[test]
    fn test_deserialize_long_field_names() {
        let json = r#"{
            "occurred_date": "2025-10-29",
            "occurred_time": "08:26:00",
            "location_description": "Batangas",
            "latitude": null
        }"#;
        let raw: RawEvent = serde_json::from_str(json).unwrap();
        assert_eq!(raw.date.as_deref(), Some("2025-10-29"));
        assert_eq!(raw.time.as_deref(), Some("08:26:00"));
        assert_eq!(raw.location.as_deref(), Some("Batangas"));
        assert_eq!(raw.latitude, None);
        assert_eq!(raw.magnitude, None);
    }
}
