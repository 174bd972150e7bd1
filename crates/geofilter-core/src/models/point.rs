//! Geographic point and coordinate validation mode.

use crate::error::{GeoFilterError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// A point on the sphere in decimal degrees.
///
/// A `GeoPoint` can only be built from in-range coordinates, so every value
/// of this type satisfies `lat ∈ [-90, 90]` and `lon ∈ [-180, 180]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoint", into = "RawPoint")]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

#[derive(Serialize, Deserialize)]
struct RawPoint {
    lat: f64,
    lon: f64,
}

impl TryFrom<RawPoint> for GeoPoint {
    type Error = GeoFilterError;

    fn try_from(raw: RawPoint) -> Result<Self> {
        GeoPoint::new(raw.lat, raw.lon)
    }
}

impl From<GeoPoint> for RawPoint {
    fn from(point: GeoPoint) -> Self {
        RawPoint { lat: point.lat, lon: point.lon }
    }
}

impl GeoPoint {
    /// Create a point, rejecting out-of-range or non-finite coordinates
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !is_valid_latitude(lat) {
            return Err(GeoFilterError::OutOfRangeLatitude { value: lat });
        }
        if !is_valid_longitude(lon) {
            return Err(GeoFilterError::OutOfRangeLongitude { value: lon });
        }
        Ok(Self { lat, lon })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

impl From<GeoPoint> for geo::Point<f64> {
    fn from(point: GeoPoint) -> Self {
        geo::Point::new(point.lon, point.lat)
    }
}

/// Whether `lat` is a finite value in [-90, 90]
pub fn is_valid_latitude(lat: f64) -> bool {
    lat.is_finite() && (MIN_LATITUDE..=MAX_LATITUDE).contains(&lat)
}

/// Whether `lon` is a finite value in [-180, 180]
pub fn is_valid_longitude(lon: f64) -> bool {
    lon.is_finite() && (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&lon)
}

/// How raw coordinates are treated before they reach a predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Reject out-of-range coordinates
    #[default]
    Strict,
    /// Clamp latitude and wrap longitude into range
    Coerce,
    /// Drop out-of-range candidate points instead of failing
    IgnoreMalformed,
}

impl ValidationMode {
    pub const ALL: [ValidationMode; 3] =
        [ValidationMode::Strict, ValidationMode::Coerce, ValidationMode::IgnoreMalformed];

    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationMode::Strict => "strict",
            ValidationMode::Coerce => "coerce",
            ValidationMode::IgnoreMalformed => "ignore_malformed",
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationMode {
    type Err = GeoFilterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "strict" => Ok(ValidationMode::Strict),
            "coerce" => Ok(ValidationMode::Coerce),
            "ignore_malformed" => Ok(ValidationMode::IgnoreMalformed),
            _ => Err(GeoFilterError::ConfigInvalid {
                key: "validation_mode".to_string(),
                reason: format!(
                    "Invalid validation mode: {}. Use strict, coerce, or ignore_malformed",
                    s
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_accepts_boundaries() {
        assert!(GeoPoint::new(90.0, 180.0).is_ok());
        assert!(GeoPoint::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_point_rejects_out_of_range() {
        assert!(matches!(
            GeoPoint::new(90.5, 0.0),
            Err(GeoFilterError::OutOfRangeLatitude { .. })
        ));
        assert!(matches!(
            GeoPoint::new(0.0, -180.1),
            Err(GeoFilterError::OutOfRangeLongitude { .. })
        ));
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_point_serialization() {
        let point = GeoPoint::new(40.7143528, -74.0059731).unwrap();
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(json, r#"{"lat":40.7143528,"lon":-74.0059731}"#);

        let parsed: GeoPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(point, parsed);

        let invalid: std::result::Result<GeoPoint, _> =
            serde_json::from_str(r#"{"lat":100.0,"lon":0.0}"#);
        assert!(invalid.is_err());
    }

    #[test]
    fn test_point_to_geo() {
        let point = GeoPoint::new(59.3, 18.0).unwrap();
        let geo_point: geo::Point<f64> = point.into();
        assert_eq!(geo_point.x(), 18.0);
        assert_eq!(geo_point.y(), 59.3);
    }

    #[test]
    fn test_parse_validation_mode() {
        assert_eq!("strict".parse::<ValidationMode>().unwrap(), ValidationMode::Strict);
        assert_eq!("COERCE".parse::<ValidationMode>().unwrap(), ValidationMode::Coerce);
        assert_eq!(
            "ignore-malformed".parse::<ValidationMode>().unwrap(),
            ValidationMode::IgnoreMalformed
        );
        assert!("lenient".parse::<ValidationMode>().is_err());
    }

    #[test]
    fn test_validation_mode_serde_names() {
        let json = serde_json::to_string(&ValidationMode::IgnoreMalformed).unwrap();
        assert_eq!(json, "\"ignore_malformed\"");
        for mode in ValidationMode::ALL {
            assert_eq!(mode.as_str().parse::<ValidationMode>().unwrap(), mode);
        }
    }
}
