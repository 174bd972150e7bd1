//! Error types for geofilter

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeoFilterError {
    // Coordinate errors
    #[error("Latitude {value} is out of range, expected a value in [-90, 90]")]
    OutOfRangeLatitude { value: f64 },

    #[error("Longitude {value} is out of range, expected a value in [-180, 180]")]
    OutOfRangeLongitude { value: f64 },

    // Shape errors
    #[error("Top latitude {top} is below bottom latitude {bottom}")]
    InvalidCornerOrder { top: f64, bottom: f64 },

    #[error("Unknown distance unit: {unit}")]
    UnknownDistanceUnit { unit: String },

    #[error("Distance radius must be a finite, non-negative number, got {value}")]
    NegativeRadius { value: f64 },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },
}

impl GeoFilterError {
    /// Whether the error rejects a caller-supplied query shape
    /// (as opposed to configuration or IO failures).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            GeoFilterError::OutOfRangeLatitude { .. }
                | GeoFilterError::OutOfRangeLongitude { .. }
                | GeoFilterError::InvalidCornerOrder { .. }
                | GeoFilterError::UnknownDistanceUnit { .. }
                | GeoFilterError::NegativeRadius { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GeoFilterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_classified() {
        assert!(GeoFilterError::OutOfRangeLatitude { value: 91.0 }.is_validation());
        assert!(GeoFilterError::InvalidCornerOrder { top: 1.0, bottom: 2.0 }.is_validation());
        let config_err =
            GeoFilterError::ConfigInvalid { key: "file".to_string(), reason: "bad".to_string() };
        assert!(!config_err.is_validation());
    }

    #[test]
    fn test_error_messages() {
        let err = GeoFilterError::UnknownDistanceUnit { unit: "parsecs".to_string() };
        assert_eq!(err.to_string(), "Unknown distance unit: parsecs");

        let err = GeoFilterError::InvalidCornerOrder { top: 10.0, bottom: 20.0 };
        assert!(err.to_string().contains("below bottom latitude 20"));
    }
}
