//! Query shapes and the filter that binds one to a candidate policy.

use crate::bbox::BoundingBox;
use crate::distance::DistanceQuery;
use crate::normalize::normalize;
use geofilter_core::models::{GeoPoint, ValidationMode};
use serde::Serialize;

/// The query shapes a point can be tested against
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeoShape {
    BoundingBox(BoundingBox),
    Distance(DistanceQuery),
}

impl GeoShape {
    /// Evaluate the shape against a normalized point
    pub fn matches(&self, point: &GeoPoint) -> bool {
        match self {
            GeoShape::BoundingBox(bbox) => contains(bbox, point),
            GeoShape::Distance(query) => within_distance(query, point),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            GeoShape::BoundingBox(_) => "bounding_box",
            GeoShape::Distance(_) => "distance",
        }
    }
}

impl From<BoundingBox> for GeoShape {
    fn from(bbox: BoundingBox) -> Self {
        GeoShape::BoundingBox(bbox)
    }
}

impl From<DistanceQuery> for GeoShape {
    fn from(query: DistanceQuery) -> Self {
        GeoShape::Distance(query)
    }
}

/// Check if the point lies inside the bounding box (edges included)
pub fn contains(bbox: &BoundingBox, point: &GeoPoint) -> bool {
    bbox.contains(point)
}

/// Check if the point is within the query radius of its center (boundary included)
pub fn within_distance(query: &DistanceQuery, point: &GeoPoint) -> bool {
    query.within_distance(point)
}

/// Evaluate a shape against a normalized point
pub fn evaluate(shape: &GeoShape, point: &GeoPoint) -> bool {
    shape.matches(point)
}

/// A geo shape bound to the policy used for raw candidate coordinates.
///
/// This is the leaf a filter composition layer holds on to: it answers a
/// plain yes/no per candidate and can be combined with any other predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoFilter {
    shape: GeoShape,
    candidate_mode: ValidationMode,
}

impl GeoFilter {
    /// Create a filter that drops malformed candidates
    pub fn new(shape: impl Into<GeoShape>) -> Self {
        Self { shape: shape.into(), candidate_mode: ValidationMode::IgnoreMalformed }
    }

    /// Set how raw candidate coordinates are normalized
    pub fn with_candidate_mode(mut self, mode: ValidationMode) -> Self {
        self.candidate_mode = mode;
        self
    }

    pub fn shape(&self) -> &GeoShape {
        &self.shape
    }

    pub fn candidate_mode(&self) -> ValidationMode {
        self.candidate_mode
    }

    /// Evaluate against an already normalized point
    pub fn matches(&self, point: &GeoPoint) -> bool {
        self.shape.matches(point)
    }

    /// Normalize a raw candidate with the filter's candidate mode.
    /// Returns `None` for a candidate that has to be excluded.
    pub fn normalize_candidate(&self, lat: f64, lon: f64) -> Option<GeoPoint> {
        match normalize(lat, lon, self.candidate_mode) {
            Ok(point) => Some(point),
            Err(e) => {
                tracing::trace!(lat, lon, error = %e, "Excluding malformed candidate point");
                None
            }
        }
    }

    /// Normalize a raw candidate, then evaluate.
    /// A candidate that cannot be normalized never matches.
    pub fn matches_raw(&self, lat: f64, lon: f64) -> bool {
        self.normalize_candidate(lat, lon).is_some_and(|point| self.shape.matches(&point))
    }
}

/// Filter a collection of points by a shape, returning the indices that match
pub fn filter_points(points: &[(GeoPoint, usize)], shape: &GeoShape) -> Vec<usize> {
    points
        .iter()
        .filter_map(|(point, idx)| if shape.matches(point) { Some(*idx) } else { None })
        .collect()
}

/// Count how many points satisfy a shape
pub fn count_matches(points: &[GeoPoint], shape: &GeoShape) -> usize {
    points.iter().filter(|point| shape.matches(point)).count()
}
