//! Distance queries: a center point and a radius canonicalized to meters.

use crate::normalize::normalize;
use geo::{Distance as _, Haversine};
use geofilter_core::error::{GeoFilterError, Result};
use geofilter_core::models::{Distance, GeoPoint, UnitTable, ValidationMode};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceQuery {
    center: GeoPoint,
    radius_meters: f64,
    original_value: f64,
    original_unit: String,
}

impl DistanceQuery {
    /// Build a query from a center and a radius in one of the built-in units
    pub fn new(center: GeoPoint, radius: Distance) -> Result<Self> {
        Self::build(
            center,
            radius.value,
            radius.unit.symbol().to_string(),
            radius.unit.meters_per_unit(),
        )
    }

    /// Build a query whose unit is looked up by name in `units`
    pub fn with_unit_name(
        center: GeoPoint,
        value: f64,
        unit: &str,
        units: &UnitTable,
    ) -> Result<Self> {
        let entry = units.resolve(unit)?;
        Self::build(center, value, entry.name.clone(), entry.meters_per_unit)
    }

    /// Build a query from a raw center, normalized with `mode`
    pub fn from_raw(lat: f64, lon: f64, radius: Distance, mode: ValidationMode) -> Result<Self> {
        Self::new(normalize(lat, lon, mode)?, radius)
    }

    fn build(
        center: GeoPoint,
        value: f64,
        unit: String,
        meters_per_unit: f64,
    ) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(GeoFilterError::NegativeRadius { value });
        }

        let radius_meters = value * meters_per_unit;

        tracing::debug!(
            center = %center,
            radius = value,
            unit = %unit,
            radius_meters,
            "Built distance query"
        );

        Ok(Self { center, radius_meters, original_value: value, original_unit: unit })
    }

    /// Great-circle distance from the center to `point`, in meters
    pub fn distance_to(&self, point: &GeoPoint) -> f64 {
        Haversine.distance(geo::Point::from(self.center), geo::Point::from(*point))
    }

    /// Whether `point` is at most `radius_meters` away from the center
    pub fn within_distance(&self, point: &GeoPoint) -> bool {
        self.distance_to(point) <= self.radius_meters
    }

    pub fn center(&self) -> GeoPoint {
        self.center
    }

    pub fn radius_meters(&self) -> f64 {
        self.radius_meters
    }

    pub fn original_value(&self) -> f64 {
        self.original_value
    }

    pub fn original_unit(&self) -> &str {
        &self.original_unit
    }
}

impl fmt::Display for DistanceQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "within {}{} ({} m) of {}",
            self.original_value, self.original_unit, self.radius_meters, self.center
        )
    }
}
