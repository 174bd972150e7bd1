//! Validation and coercion of raw latitude/longitude values.

use geofilter_core::error::{GeoFilterError, Result};
use geofilter_core::models::point::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
pub use geofilter_core::models::point::{is_valid_latitude, is_valid_longitude};
use geofilter_core::models::{GeoPoint, ValidationMode};

const LONGITUDE_PERIOD: f64 = 360.0;

/// Turn raw coordinates into a [`GeoPoint`] according to `mode`.
///
/// `Strict` and `IgnoreMalformed` both reject out-of-range values here; it is
/// up to the caller scanning candidates to drop a point instead of failing
/// when it runs under `IgnoreMalformed`.
pub fn normalize(lat: f64, lon: f64, mode: ValidationMode) -> Result<GeoPoint> {
    match mode {
        ValidationMode::Strict | ValidationMode::IgnoreMalformed => GeoPoint::new(lat, lon),
        ValidationMode::Coerce => GeoPoint::new(coerce_latitude(lat)?, coerce_longitude(lon)?),
    }
}

/// Clamp a latitude into [-90, 90]. Latitude has no periodic meaning, so it is never wrapped.
pub fn coerce_latitude(lat: f64) -> Result<f64> {
    if !lat.is_finite() {
        return Err(GeoFilterError::OutOfRangeLatitude { value: lat });
    }
    Ok(lat.clamp(MIN_LATITUDE, MAX_LATITUDE))
}

/// Wrap a longitude into [-180, 180).
///
/// The antimeridian is always reported as -180, so `180` and `540` coerce to
/// the same value. Other in-range values are returned untouched.
pub fn coerce_longitude(lon: f64) -> Result<f64> {
    if !lon.is_finite() {
        return Err(GeoFilterError::OutOfRangeLongitude { value: lon });
    }
    if (MIN_LONGITUDE..MAX_LONGITUDE).contains(&lon) {
        return Ok(lon);
    }
    Ok(wrap_longitude(lon))
}

/// `((lon + 180) mod 360 + 360) mod 360 - 180`
pub fn wrap_longitude(lon: f64) -> f64 {
    let wrapped = (lon - MIN_LONGITUDE).rem_euclid(LONGITUDE_PERIOD) + MIN_LONGITUDE;
    // rem_euclid can round up to the divisor for tiny negative inputs
    if wrapped >= MAX_LONGITUDE {
        MIN_LONGITUDE
    } else {
        wrapped
    }
}

/// Whether a box with raw longitudes `left..right` asks for every longitude,
/// e.g. corners written as `0..360` or `-180..180`.
pub fn spans_complete_longitude_range(left: f64, right: f64) -> bool {
    right > left && (right - left) % LONGITUDE_PERIOD == 0.0
}
