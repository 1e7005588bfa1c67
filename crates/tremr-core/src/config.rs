//! Observer configuration

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Agency page the default feed scrapes
pub const DEFAULT_FEED_URL: &str = "https://earthquake.phivolcs.dost.gov.ph/";

/// Shortest poll interval accepted at startup
pub const MIN_POLL_INTERVAL_SECS: u64 = 10;

/// Observer location and alert thresholds for one monitoring session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    /// Alert-center latitude (decimal degrees)
    pub latitude: f64,

    /// Alert-center longitude (decimal degrees)
    pub longitude: f64,

    /// Alert catchment radius
    pub radius_km: f64,

    /// Minimum magnitude that triggers an alert
    pub min_magnitude: f64,

    /// Seconds to wait after each cycle
    #[serde(alias = "check_interval_seconds")]
    pub poll_interval_seconds: u64,

    /// Human-readable place name, advisory only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Page scraped for recent events
    pub feed_url: String,

    /// The agency site has served broken certificate chains
    pub accept_invalid_certs: bool,

    /// Play a warning sound with each alert
    pub sound_enabled: bool,
}

impl ObserverConfig {
    pub fn new() -> Self {
        Self {
            latitude: 14.5995,
            longitude: 120.9842,
            radius_km: 100.0,
            min_magnitude: 3.0,
            poll_interval_seconds: 60,
            address: None,
            feed_url: DEFAULT_FEED_URL.to_string(),
            accept_invalid_certs: true,
            sound_enabled: true,
        }
    }

    /// Parse and validate a JSON config document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ConfigError::Invalid(format!(
                "latitude {} is outside [-90, 90]",
                self.latitude
            )));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ConfigError::Invalid(format!(
                "longitude {} is outside [-180, 180]",
                self.longitude
            )));
        }
        if !self.radius_km.is_finite() || self.radius_km <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "radius_km must be positive, got {}",
                self.radius_km
            )));
        }
        if !self.min_magnitude.is_finite() || self.min_magnitude <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "min_magnitude must be positive, got {}",
                self.min_magnitude
            )));
        }
        if self.poll_interval_seconds < MIN_POLL_INTERVAL_SECS {
            return Err(ConfigError::Invalid(format!(
                "poll_interval_seconds must be at least {}, got {}",
                MIN_POLL_INTERVAL_SECS, self.poll_interval_seconds
            )));
        }
        if self.feed_url.trim().is_empty() {
            return Err(ConfigError::Invalid("feed_url is empty".to_string()));
        }
        Ok(())
    }
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self::new()
    }
}
