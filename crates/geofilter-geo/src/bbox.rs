//! Geodetic bounding boxes.
//!
//! A box is described by its `top`/`bottom` latitudes and `left`/`right`
//! longitudes. When `left > right` the box wraps across the antimeridian and
//! covers `[left, 180] ∪ [-180, right]`. Boxes where `top == bottom` or
//! `left == right` are legal and describe a latitude line, a meridian segment
//! or a single point. Every edge is inclusive.

use crate::normalize::{coerce_latitude, coerce_longitude, spans_complete_longitude_range};
use geofilter_core::error::{GeoFilterError, Result};
use geofilter_core::models::point::{MAX_LONGITUDE, MIN_LONGITUDE};
use geofilter_core::models::{GeoPoint, ValidationMode};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    top: f64,
    bottom: f64,
    left: f64,
    right: f64,
    crosses_antimeridian: bool,
}

impl BoundingBox {
    /// Build a box from raw corner values, in `top, left, bottom, right` order.
    ///
    /// Under `Coerce`, latitudes are clamped and longitudes wrapped into
    /// `[-180, 180)`; raw longitudes that span a whole multiple of 360 degrees
    /// become the full `[-180, 180]` range. Under `Strict` and `IgnoreMalformed`,
    /// out-of-range corners are rejected. `top < bottom` is rejected in every mode.
    pub fn new(top: f64, left: f64, bottom: f64, right: f64, mode: ValidationMode) -> Result<Self> {
        let (top, left, bottom, right) = match mode {
            ValidationMode::Coerce => {
                let top = coerce_latitude(top)?;
                let bottom = coerce_latitude(bottom)?;
                if spans_complete_longitude_range(left, right) {
                    (top, MIN_LONGITUDE, bottom, MAX_LONGITUDE)
                } else {
                    (top, coerce_longitude(left)?, bottom, coerce_longitude(right)?)
                }
            }
            ValidationMode::Strict | ValidationMode::IgnoreMalformed => {
                let top_left = GeoPoint::new(top, left)?;
                let bottom_right = GeoPoint::new(bottom, right)?;
                (top_left.lat(), top_left.lon(), bottom_right.lat(), bottom_right.lon())
            }
        };

        if top < bottom {
            return Err(GeoFilterError::InvalidCornerOrder { top, bottom });
        }

        let bbox = Self { top, bottom, left, right, crosses_antimeridian: left > right };

        tracing::debug!(
            top,
            left,
            bottom,
            right,
            mode = %mode,
            crosses_antimeridian = bbox.crosses_antimeridian,
            "Built bounding box"
        );

        Ok(bbox)
    }

    /// Build a box from its top-left and bottom-right corners
    pub fn from_corners(top_left: GeoPoint, bottom_right: GeoPoint) -> Result<Self> {
        Self::new(
            top_left.lat(),
            top_left.lon(),
            bottom_right.lat(),
            bottom_right.lon(),
            ValidationMode::Strict,
        )
    }

    /// Whether the point lies inside the box or on its boundary
    pub fn contains(&self, point: &GeoPoint) -> bool {
        let lat = point.lat();
        if lat < self.bottom || lat > self.top {
            return false;
        }

        let lon = point.lon();
        if self.crosses_antimeridian {
            lon >= self.left || lon <= self.right
        } else {
            lon >= self.left && lon <= self.right
        }
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn crosses_antimeridian(&self) -> bool {
        self.crosses_antimeridian
    }

    /// Zero height or zero width
    pub fn is_degenerate(&self) -> bool {
        self.top == self.bottom || self.left == self.right
    }

    /// Longitudinal extent in degrees, measured eastwards from `left` to `right`
    pub fn width_degrees(&self) -> f64 {
        if self.crosses_antimeridian {
            (MAX_LONGITUDE - self.left) + (self.right - MIN_LONGITUDE)
        } else {
            self.right - self.left
        }
    }

    /// Latitudinal extent in degrees
    pub fn height_degrees(&self) -> f64 {
        self.top - self.bottom
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[top={}, left={}, bottom={}, right={}]",
            self.top, self.left, self.bottom, self.right
        )
    }
}
