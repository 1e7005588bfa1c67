//! Great-circle distance between the observer and an event

use crate::error::CoreError;

/// Mean Earth radius used by the haversine formula
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance in kilometers.
///
/// Inputs are decimal degrees. Fails with `InvalidCoordinate` when any input
/// is not finite or lies outside the valid latitude/longitude range.
pub fn distance_km(
    observer_lat: f64,
    observer_lon: f64,
    event_lat: f64,
    event_lon: f64,
) -> Result<f64, CoreError> {
    check_latitude(observer_lat)?;
    check_longitude(observer_lon)?;
    check_latitude(event_lat)?;
    check_longitude(event_lon)?;

    let d_lat = (event_lat - observer_lat).to_radians();
    let d_lon = (event_lon - observer_lon).to_radians();
    let lat1 = observer_lat.to_radians();
    let lat2 = event_lat.to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair above 1.0 for antipodal points
    let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();
    Ok(EARTH_RADIUS_KM * c)
}

/// Coerce feed text into a coordinate value
pub fn parse_coordinate(text: &str) -> Result<f64, CoreError> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CoreError::InvalidCoordinate(text.to_string())),
    }
}

fn check_latitude(lat: f64) -> Result<(), CoreError> {
    if lat.is_finite() && (-90.0..=90.0).contains(&lat) {
        Ok(())
    } else {
        Err(CoreError::InvalidCoordinate(lat.to_string()))
    }
}

fn check_longitude(lon: f64) -> Result<(), CoreError> {
    if lon.is_finite() && (-180.0..=180.0).contains(&lon) {
        Ok(())
    } else {
        Err(CoreError::InvalidCoordinate(lon.to_string()))
    }
}
